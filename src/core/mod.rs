//! Core functionality for git-decorator.
//!
//! This module provides the classifiers, the virtual resource codec, the resolver
//! that ties them to a repository data provider, and the supporting pieces
//! (configuration, errors, invalidation, terminal output).

pub mod branch_sync;
pub mod colors;
pub mod config;
pub mod decoration;
pub mod dirs;
pub mod error;
pub mod file_status;
pub mod git;
pub mod git_status;
pub mod invalidation;
pub mod output;
pub mod provider;
pub mod resource;
pub mod router;
pub mod state;

// === Error handling ===
pub use error::{DecoratorError, Result};

// === Records and decorations ===
pub use colors::ColorToken;
pub use decoration::{Decoration, Glyphs};
pub use git_status::FileStatus;
pub use state::{BranchState, FileStatusRecord, Remote};

// === Classifiers ===
pub use branch_sync::BranchSync;

// === Virtual resources ===
pub use resource::{ResourceKind, VirtualResourceRef, DEFAULT_SCHEME};

// === Resolution ===
// Resolver, its data provider seam and the invalidation channel hosts subscribe to
pub use config::DecoratorConfig;
pub use git::{GitProvider, GitRepo};
pub use invalidation::{Invalidation, InvalidationChannel, InvalidationReceiver, Subscription};
pub use provider::{BranchPredicate, MemoryProvider, RepositoryProvider};
pub use router::DecorationResolver;

// === Output formatting ===
pub use output::{format_decorated, print_error, print_info, print_section_header};
