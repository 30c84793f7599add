//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use git_decorator::core::error::Result;

/// An upstream repository and a clone whose `main` has diverged from it:
/// one local-only commit and one upstream-only commit.
pub fn create_diverged_clone() -> Result<(TestRepo, TestRepo)> {
    let upstream = setup_test_repo_with_initial_commit()?;
    let clone = clone_repo(&upstream)?;

    commit_file(&clone.path, "local.txt", "local work\n")?;
    commit_file(&upstream.path, "remote.txt", "remote work\n")?;
    git(&clone.path, &["fetch", "origin"])?;

    Ok((upstream, clone))
}

/// A repository with a commit that adds, modifies, deletes and renames files
pub fn create_mixed_commit_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "keep.txt", "keep\n")?;
    create_file(&repo.path, "remove.txt", "remove\n")?;
    create_file(
        &repo.path,
        "old_name.txt",
        "this file is going to be renamed\nwith enough content\nto be detected\n",
    )?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;
    git(&repo.path, &["branch", "-M", "main"])?;

    create_file(&repo.path, "keep.txt", "keep, but changed\n")?;
    create_file(&repo.path, "new.txt", "new\n")?;
    git(&repo.path, &["rm", "-q", "remove.txt"])?;
    git(&repo.path, &["mv", "old_name.txt", "new_name.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Mixed changes")?;

    Ok(repo)
}
