//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories and running git in them.

#![allow(dead_code)]

use git_decorator::core::error::{DecoratorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Repository path the way resource payloads carry it
    pub fn repo_path_string(&self) -> Result<String> {
        git_decorator::GitRepo::open(&self.path)?.get_repo_path_string()
    }
}

/// Runs git in `dir`, failing the test when git reports an error
pub fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(DecoratorError::Io)?;

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

fn configure_user(dir: &Path) -> Result<()> {
    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "user.email", "test@example.com"])
}

/// Sets up a fresh git repository without commits
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(DecoratorError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    configure_user(&repo_path)?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository whose `main` branch holds one commit with "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;
    git(&repo.path, &["branch", "-M", "main"])?;

    Ok(repo)
}

/// Clones `upstream` into a new temporary directory, checked out on its current branch
pub fn clone_repo(upstream: &TestRepo) -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(DecoratorError::Io)?;
    let clone_path = temp_dir.path().join("clone");

    let source = upstream.path.to_string_lossy().to_string();
    let target = clone_path.to_string_lossy().to_string();
    git(temp_dir.path(), &["clone", &source, &target])?;
    configure_user(&clone_path)?;

    Ok(TestRepo {
        temp_dir,
        path: clone_path,
    })
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(DecoratorError::Io)
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

/// Creates a file and commits it in one step
pub fn commit_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git_add(repo_path, filename)?;
    git_commit(repo_path, &format!("Update {filename}"))
}

/// The git-decorator binary, run inside `repo` with an isolated config directory
/// and colors disabled so output can be matched literally.
pub fn decorator(repo: &TestRepo) -> assert_cmd::Command {
    let mut cmd = decorator_in(&repo.path);
    cmd.env("XDG_CONFIG_HOME", repo.temp_dir.path().join(".config"));
    cmd
}

/// The git-decorator binary run from an arbitrary directory
pub fn decorator_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("git-decorator").expect("binary is built");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

/// Captured stdout of a successful git-decorator run, trimmed
pub fn decorator_stdout(repo: &TestRepo, args: &[&str]) -> String {
    let output = decorator(repo).args(args).output().expect("binary runs");
    assert!(
        output.status.success(),
        "git-decorator {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
