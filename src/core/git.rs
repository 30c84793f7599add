//! Git repository access and the git2-backed data provider.
//!
//! [`GitRepo`] wraps a `git2::Repository` and turns what it finds into the typed records
//! the classifiers consume: local branches with their upstream divergence, remotes, and
//! the files changed by a commit. [`GitProvider`] exposes the same lookups through the
//! async [`RepositoryProvider`] seam, running git2 on the blocking thread pool.
//!
//! # Public API
//! - [`GitRepo`]: Synchronous repository reader
//! - [`GitProvider`]: [`RepositoryProvider`] implementation over git2

use crate::core::{
    error::{DecoratorError, Result},
    git_status::FileStatus,
    provider::{BranchPredicate, RepositoryProvider},
    state::{BranchState, FileStatusRecord, Remote},
};
use async_trait::async_trait;
use git2::{Branch, BranchType, DiffFindOptions, Repository};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Working directory, or the git directory for bare repositories
    pub fn get_repo_path(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }

    /// Repository path as carried in resource payloads
    pub fn get_repo_path_string(&self) -> Result<String> {
        let path = self.get_repo_path();
        let path = path.to_str().ok_or(DecoratorError::InvalidUtf8Path)?;
        Ok(path.trim_end_matches(['/', '\\']).to_string())
    }

    /// Local branches sorted by name
    pub fn local_branches(&self) -> Result<Vec<BranchState>> {
        let mut branches = Vec::new();

        for (mut state, branch, upstream) in self.branch_candidates()? {
            if let Some(upstream) = upstream {
                self.fill_divergence(&mut state, &branch, &upstream);
            }
            branches.push(state);
        }

        Ok(branches)
    }

    /// First local branch, in name order, matching `predicate`. The predicate sees the
    /// name, current flag and upstream; ahead/behind is computed for the match only.
    pub fn find_branch<F>(&self, predicate: F) -> Result<Option<BranchState>>
    where
        F: Fn(&BranchState) -> bool,
    {
        let found = self
            .branch_candidates()?
            .into_iter()
            .find(|(state, _, _)| predicate(state));

        Ok(found.map(|(mut state, branch, upstream)| {
            if let Some(upstream) = upstream {
                self.fill_divergence(&mut state, &branch, &upstream);
            }
            state
        }))
    }

    /// Local branches with their upstream, without divergence
    fn branch_candidates(&self) -> Result<Vec<(BranchState, Branch<'_>, Option<Branch<'_>>)>> {
        let mut candidates = Vec::new();

        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            let state = match Self::shallow_state(&branch) {
                Ok(Some(state)) => state,
                Ok(None) => {
                    log::debug!("Skipping branch with a non UTF-8 name");
                    continue;
                }
                Err(e) => {
                    log::warn!("Failed to read branch: {e}");
                    continue;
                }
            };

            // A configured upstream whose ref is gone counts as untracked
            let upstream = branch.upstream().ok();
            let tracking = upstream
                .as_ref()
                .and_then(|upstream| upstream.name().ok().flatten())
                .map(str::to_string);

            candidates.push((BranchState { tracking, ..state }, branch, upstream));
        }

        candidates.sort_by(|a, b| a.0.name.cmp(&b.0.name));
        Ok(candidates)
    }

    fn shallow_state(branch: &Branch<'_>) -> Result<Option<BranchState>> {
        Ok(branch
            .name()?
            .map(|name| BranchState::local(name, branch.is_head())))
    }

    fn fill_divergence(
        &self,
        state: &mut BranchState,
        branch: &Branch<'_>,
        upstream: &Branch<'_>,
    ) {
        let (Some(local_oid), Some(upstream_oid)) =
            (branch.get().target(), upstream.get().target())
        else {
            return;
        };

        match self.repo.graph_ahead_behind(local_oid, upstream_oid) {
            Ok((ahead, behind)) => {
                state.ahead = ahead;
                state.behind = behind;
            }
            Err(e) => log::debug!("No ahead/behind for '{}': {e}", state.name),
        }
    }

    pub fn remotes(&self) -> Result<Vec<Remote>> {
        let names = self.repo.remotes()?;
        let mut remotes = Vec::new();

        for name in names.iter().flatten() {
            let url = self
                .repo
                .find_remote(name)
                .ok()
                .and_then(|remote| remote.url().map(str::to_string));
            remotes.push(Remote {
                name: name.to_string(),
                url,
            });
        }

        Ok(remotes)
    }

    /// Full id of the commit `rev` points at
    pub fn resolve_commit_id(&self, rev: &str) -> Result<String> {
        let commit = self.repo.revparse_single(rev)?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    /// Files changed by `rev` against its first parent, with the full commit id
    pub fn commit_files(&self, rev: &str) -> Result<(String, Vec<FileStatusRecord>)> {
        let commit = self.repo.revparse_single(rev)?.peel_to_commit()?;
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;
        let mut find = DiffFindOptions::new();
        find.renames(true).copies(true);
        diff.find_similar(Some(&mut find))?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            let status = FileStatus::from_git2_delta(delta.status());
            let new_path = delta.new_file().path();
            let old_path = delta.old_file().path();

            let file_name = new_path
                .or(old_path)
                .and_then(Path::to_str)
                .ok_or(DecoratorError::InvalidUtf8Path)?;

            let original_file_name = match status {
                FileStatus::Renamed | FileStatus::Copied => {
                    old_path.and_then(Path::to_str).map(str::to_string)
                }
                _ => None,
            };

            files.push(FileStatusRecord {
                status,
                file_name: file_name.to_string(),
                original_file_name,
            });
        }

        Ok((commit.id().to_string(), files))
    }
}

/// Data provider reading repositories from disk. Branch lookups compute ahead/behind
/// only for the matching branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitProvider;

#[async_trait]
impl RepositoryProvider for GitProvider {
    async fn find_branch(
        &self,
        repo_path: &str,
        predicate: BranchPredicate,
    ) -> Result<Option<BranchState>> {
        let repo_path = repo_path.to_string();
        tokio::task::spawn_blocking(move || -> Result<Option<BranchState>> {
            GitRepo::open(&repo_path)?.find_branch(|b| predicate(b))
        })
        .await?
    }

    async fn list_remotes(&self, repo_path: &str) -> Result<Vec<Remote>> {
        let repo_path = repo_path.to_string();
        tokio::task::spawn_blocking(move || -> Result<Vec<Remote>> {
            GitRepo::open(&repo_path)?.remotes()
        })
        .await?
    }
}
