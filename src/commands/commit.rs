use crate::commands::open_current_repo;
use crate::core::{
    config::DecoratorConfig, error::Result, format_decorated, git::GitProvider, print_info,
    print_section_header, resource::VirtualResourceRef, router::DecorationResolver,
};
use colored::*;
use tokio_util::sync::CancellationToken;

pub async fn execute_commit(config: &DecoratorConfig, rev: &str) -> Result<()> {
    let (repo_path, (sha, files)) = {
        let git_repo = open_current_repo()?;
        (git_repo.get_repo_path_string()?, git_repo.commit_files(rev)?)
    };

    let short_sha = sha.get(..7).unwrap_or(&sha);
    if files.is_empty() {
        print_info(&format!("No files changed in commit {short_sha}"));
        return Ok(());
    }

    let resolver = DecorationResolver::new(GitProvider, config.clone());
    let cancel = CancellationToken::new();

    print_section_header(&format!("Commit {short_sha}"));

    for file in &files {
        let resource = VirtualResourceRef::commit_file(&config.scheme, &repo_path, &sha, file)?;
        let decoration = resolver.resolve_resource(&resource, &cancel).await;

        let label = match &file.original_file_name {
            Some(original) => format!("{original} → {}", file.file_name),
            None => file.file_name.clone(),
        };
        println!("{}", format_decorated(&label.normal(), decoration.as_ref()));
    }

    println!();
    Ok(())
}
