pub mod branches;
pub mod commit;
pub mod config;
pub mod decorate;
pub mod uri;

pub use branches::*;
pub use commit::*;
pub use config::*;
pub use decorate::*;
pub use uri::*;

use crate::core::{
    error::{DecoratorError, Result},
    git::GitRepo,
};
use std::env;

/// Open the repository containing the working directory
pub(crate) fn open_current_repo() -> Result<GitRepo> {
    let current_dir = env::current_dir()?;
    GitRepo::open(&current_dir).map_err(|_| DecoratorError::NotInGitRepo)
}
