//! Repository data provider seam.
//!
//! The resolver never reads repositories itself. It asks a [`RepositoryProvider`] for the
//! branch it is decorating and for the repository's remotes. [`crate::core::git::GitProvider`]
//! answers from disk through git2; [`MemoryProvider`] answers from records a host already
//! holds.

use crate::core::{
    error::Result,
    state::{BranchState, Remote},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Filter applied to a repository's local branches
pub type BranchPredicate = Box<dyn Fn(&BranchState) -> bool + Send + Sync>;

#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    /// First local branch of `repo_path` matching `predicate`
    async fn find_branch(
        &self,
        repo_path: &str,
        predicate: BranchPredicate,
    ) -> Result<Option<BranchState>>;

    /// Configured remotes of `repo_path`, in configuration order
    async fn list_remotes(&self, repo_path: &str) -> Result<Vec<Remote>>;
}

#[async_trait]
impl<P: RepositoryProvider + ?Sized> RepositoryProvider for Arc<P> {
    async fn find_branch(
        &self,
        repo_path: &str,
        predicate: BranchPredicate,
    ) -> Result<Option<BranchState>> {
        (**self).find_branch(repo_path, predicate).await
    }

    async fn list_remotes(&self, repo_path: &str) -> Result<Vec<Remote>> {
        (**self).list_remotes(repo_path).await
    }
}

#[derive(Debug, Clone, Default)]
struct RepositoryRecords {
    branches: Vec<BranchState>,
    remotes: Vec<Remote>,
}

/// Provider backed by records registered up front. Unknown repositories have no
/// branches and no remotes.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    repositories: Arc<RwLock<HashMap<String, RepositoryRecords>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything known about `repo_path`
    pub fn insert_repository(
        &self,
        repo_path: impl Into<String>,
        branches: Vec<BranchState>,
        remotes: Vec<Remote>,
    ) {
        let mut repositories = self
            .repositories
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        repositories.insert(repo_path.into(), RepositoryRecords { branches, remotes });
    }

    pub fn remove_repository(&self, repo_path: &str) {
        let mut repositories = self
            .repositories
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        repositories.remove(repo_path);
    }

    fn with_records<T>(
        &self,
        repo_path: &str,
        f: impl FnOnce(&RepositoryRecords) -> T,
    ) -> Option<T> {
        let repositories = self
            .repositories
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        repositories.get(repo_path).map(f)
    }
}

#[async_trait]
impl RepositoryProvider for MemoryProvider {
    async fn find_branch(
        &self,
        repo_path: &str,
        predicate: BranchPredicate,
    ) -> Result<Option<BranchState>> {
        Ok(self
            .with_records(repo_path, |records| {
                records.branches.iter().find(|b| predicate(*b)).cloned()
            })
            .flatten())
    }

    async fn list_remotes(&self, repo_path: &str) -> Result<Vec<Remote>> {
        Ok(self
            .with_records(repo_path, |records| records.remotes.clone())
            .unwrap_or_default())
    }
}
