use crate::commands::open_current_repo;
use crate::core::{
    config::DecoratorConfig, error::Result, format_decorated, git::GitProvider, print_info,
    print_section_header, resource::VirtualResourceRef, router::DecorationResolver,
};
use colored::*;
use tokio_util::sync::CancellationToken;

pub async fn execute_branches(config: &DecoratorConfig) -> Result<()> {
    let (repo_path, branches) = {
        let git_repo = open_current_repo()?;
        (git_repo.get_repo_path_string()?, git_repo.local_branches()?)
    };

    if branches.is_empty() {
        print_info("No branches found. Make your first commit to create one.");
        return Ok(());
    }

    let resolver = DecorationResolver::new(GitProvider, config.clone());
    let cancel = CancellationToken::new();

    print_section_header("Local Branches");

    for branch in &branches {
        let resource = VirtualResourceRef::branch(&config.scheme, &repo_path, &branch.name)?;
        let decoration = resolver.resolve_resource(&resource, &cancel).await;

        let label = if branch.current {
            branch.name.blue().bold()
        } else {
            branch.name.blue()
        };
        println!("{}", format_decorated(&label, decoration.as_ref()));
    }

    println!();
    Ok(())
}
