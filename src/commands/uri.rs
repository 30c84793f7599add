use crate::commands::open_current_repo;
use crate::core::{
    config::DecoratorConfig,
    error::{DecoratorError, Result},
    git_status::FileStatus,
    resource::VirtualResourceRef,
    state::FileStatusRecord,
};

/// Print the identifier of a local branch of the current repository
pub fn execute_uri_branch(config: &DecoratorConfig, name: &str) -> Result<()> {
    let git_repo = open_current_repo()?;
    let resource =
        VirtualResourceRef::branch(&config.scheme, &git_repo.get_repo_path_string()?, name)?;
    println!("{resource}");
    Ok(())
}

/// Print the identifier of a file as changed by `rev`
pub fn execute_uri_commit_file(
    config: &DecoratorConfig,
    file_name: &str,
    status: &str,
    rev: &str,
) -> Result<()> {
    let status = parse_status_code(status)?;
    let git_repo = open_current_repo()?;
    let sha = git_repo.resolve_commit_id(rev)?;

    let file = FileStatusRecord::new(status, file_name);
    let resource = VirtualResourceRef::commit_file(
        &config.scheme,
        &git_repo.get_repo_path_string()?,
        &sha,
        &file,
    )?;
    println!("{resource}");
    Ok(())
}

fn parse_status_code(input: &str) -> Result<FileStatus> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Ok(FileStatus::from_code(code)),
        _ => Err(DecoratorError::invalid_status_code(input)),
    }
}
