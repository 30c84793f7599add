//! Decoration resolution for virtual resources.
//!
//! [`DecorationResolver`] is the boundary the host talks to. It decodes an identifier,
//! fetches what the classifier needs from the [`RepositoryProvider`] and returns the
//! classifier's answer untouched. Nothing fails past this boundary: malformed
//! identifiers, lookup misses, provider errors and cancellation all come back as
//! `None`, logged at debug level.

use crate::core::{
    branch_sync,
    config::DecoratorConfig,
    decoration::Decoration,
    error::{DecoratorError, Result},
    file_status,
    invalidation::{Invalidation, InvalidationChannel, InvalidationReceiver, Subscription},
    provider::RepositoryProvider,
    resource::{BranchPayload, CommitFilePayload, ResourceKind, VirtualResourceRef},
    state::BranchState,
};
use std::fmt;
use std::future::Future;
use tokio_util::sync::CancellationToken;

pub struct DecorationResolver<P> {
    provider: P,
    config: DecoratorConfig,
    invalidations: InvalidationChannel,
}

impl<P: RepositoryProvider> DecorationResolver<P> {
    pub fn new(provider: P, config: DecoratorConfig) -> Self {
        Self::with_channel(provider, config, InvalidationChannel::new())
    }

    /// Resolver whose subscribers listen on an existing channel, typically one the
    /// data provider already publishes to
    pub fn with_channel(
        provider: P,
        config: DecoratorConfig,
        invalidations: InvalidationChannel,
    ) -> Self {
        Self {
            provider,
            config,
            invalidations,
        }
    }

    pub fn config(&self) -> &DecoratorConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Channel publishers use to announce stale decorations
    pub fn invalidations(&self) -> &InvalidationChannel {
        &self.invalidations
    }

    pub fn on_invalidate<F>(&self, handler: F) -> Result<Subscription>
    where
        F: Fn(Invalidation) + Send + 'static,
    {
        self.invalidations.on_invalidate(handler)
    }

    pub fn subscribe(&self) -> InvalidationReceiver {
        self.invalidations.subscribe()
    }

    /// Decoration for an encoded identifier
    pub async fn resolve(&self, uri: &str, cancel: &CancellationToken) -> Option<Decoration> {
        let work = async {
            let resource = VirtualResourceRef::parse(uri)?;
            self.try_resolve(&resource).await
        };
        settle(&uri, work, cancel).await
    }

    /// Decoration for an already decoded identifier
    pub async fn resolve_resource(
        &self,
        resource: &VirtualResourceRef,
        cancel: &CancellationToken,
    ) -> Option<Decoration> {
        settle(resource, self.try_resolve(resource), cancel).await
    }

    async fn try_resolve(&self, resource: &VirtualResourceRef) -> Result<Option<Decoration>> {
        // Url::parse lowercases schemes
        if !resource.scheme.eq_ignore_ascii_case(&self.config.scheme) {
            return Err(DecoratorError::unsupported_scheme(&resource.scheme));
        }

        match &resource.kind {
            ResourceKind::CommitFile => {
                let payload: CommitFilePayload = resource.payload()?;
                Ok(file_status::classify(payload.file.status))
            }
            ResourceKind::Branch => self.resolve_branch(resource).await,
            ResourceKind::Other(authority) => {
                log::trace!("No decorations for '{authority}' resources");
                Ok(None)
            }
        }
    }

    async fn resolve_branch(&self, resource: &VirtualResourceRef) -> Result<Option<Decoration>> {
        let payload: BranchPayload = resource.payload()?;
        let repo_path = payload
            .repo_path
            .filter(|path| !path.is_empty())
            .ok_or(DecoratorError::MissingRepositoryPath)?;

        let name = resource.path.clone();
        let (branch, remotes) = tokio::join!(
            self.provider.find_branch(
                &repo_path,
                Box::new(move |branch: &BranchState| branch.name == name)
            ),
            self.provider.list_remotes(&repo_path),
        );

        let Some(branch) = branch? else {
            log::debug!("Branch '{}' not found in {repo_path}", resource.path);
            return Ok(None);
        };
        let remotes = remotes?;

        Ok(branch_sync::classify(&branch, &remotes, &self.config.glyphs))
    }
}

/// `uri` is only formatted when debug logging is enabled
async fn settle<F>(
    uri: &dyn fmt::Display,
    work: F,
    cancel: &CancellationToken,
) -> Option<Decoration>
where
    F: Future<Output = Result<Option<Decoration>>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            log::debug!("Resolution of {uri} cancelled");
            None
        }
        result = work => match result {
            Ok(decoration) => decoration,
            Err(e) => {
                log::debug!("No decoration for {uri}: {e}");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        colors::ColorToken,
        git_status::FileStatus,
        provider::{BranchPredicate, MemoryProvider},
        resource::DEFAULT_SCHEME,
        state::{FileStatusRecord, Remote},
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn origin() -> Remote {
        Remote {
            name: "origin".to_string(),
            url: Some("git@example.com:repo.git".to_string()),
        }
    }

    fn resolver() -> DecorationResolver<MemoryProvider> {
        let provider = MemoryProvider::new();
        provider.insert_repository(
            "/repo",
            vec![
                BranchState::tracking("main", true, "origin/main", 2, 0),
                BranchState::tracking("release", false, "origin/release", 1, 4),
                BranchState::local("feature", false),
            ],
            vec![origin()],
        );
        provider.insert_repository(
            "/solo",
            vec![
                BranchState::local("main", true),
                BranchState::local("scratch", false),
            ],
            Vec::new(),
        );
        DecorationResolver::new(provider, DecoratorConfig::default())
    }

    fn branch_uri(repo: &str, name: &str) -> String {
        VirtualResourceRef::branch(DEFAULT_SCHEME, repo, name)
            .unwrap()
            .to_uri()
    }

    async fn resolve(resolver: &DecorationResolver<MemoryProvider>, uri: &str) -> Option<Decoration> {
        resolver.resolve(uri, &CancellationToken::new()).await
    }

    #[tokio::test]
    async fn test_commit_file() {
        let resolver = resolver();
        let file = FileStatusRecord::new(FileStatus::Deleted, "old.txt");
        let uri = VirtualResourceRef::commit_file(DEFAULT_SCHEME, "/repo", "abc", &file)
            .unwrap()
            .to_uri();

        let decoration = resolve(&resolver, &uri).await.unwrap();
        assert_eq!(decoration.badge, "D");
        assert_eq!(decoration.color, Some(ColorToken::Deleted));
    }

    #[tokio::test]
    async fn test_commit_file_with_raw_query() {
        let resolver = resolver();
        let uri = r#"gitlens-view://commit-file/abc/a.txt?{"repoPath":"/repo","file":{"status":"M","fileName":"a.txt"}}"#;
        let decoration = resolve(&resolver, uri).await.unwrap();
        assert_eq!(decoration, Decoration::new("M"));
    }

    #[tokio::test]
    async fn test_commit_file_unknown_status() {
        let resolver = resolver();
        let uri = r#"gitlens-view://commit-file/abc/a.txt?{"repoPath":"/repo","file":{"status":"T"}}"#;
        assert_eq!(resolve(&resolver, uri).await, None);
    }

    #[tokio::test]
    async fn test_branch_outcomes() {
        let resolver = resolver();

        let main = resolve(&resolver, &branch_uri("/repo", "main")).await.unwrap();
        assert_eq!(main.badge, "✔↑");
        assert_eq!(main.tooltip.as_deref(), Some("Ahead"));

        let release = resolve(&resolver, &branch_uri("/repo", "release")).await.unwrap();
        assert_eq!(release.badge, "⇵");
        assert_eq!(release.tooltip.as_deref(), Some("Ahead & Behind"));

        let feature = resolve(&resolver, &branch_uri("/repo", "feature")).await.unwrap();
        assert_eq!(feature.badge, "↑");
        assert_eq!(feature.tooltip.as_deref(), Some("Unpublished"));

        let solo = resolve(&resolver, &branch_uri("/solo", "main")).await.unwrap();
        assert_eq!(solo.badge, "✔");
        assert_eq!(solo.tooltip.as_deref(), Some("Current Branch"));

        assert_eq!(resolve(&resolver, &branch_uri("/solo", "scratch")).await, None);
    }

    #[tokio::test]
    async fn test_malformed_identifiers_resolve_to_nothing() {
        let resolver = resolver();
        let cases = [
            "",
            "not a uri",
            "file:///repo/main",
            r#"other-view://branch/main?{"repoPath":"/repo"}"#,
            "gitlens-view://branch/main",
            "gitlens-view://branch/main?{garbage",
            r#"gitlens-view://branch/main?{"repoPath":""}"#,
            r#"gitlens-view://branch/main?{"somethingElse":1}"#,
            r#"gitlens-view://branch/main?[1,2,3]"#,
            r#"gitlens-view://commit-file/abc/a.txt?{"repoPath":"/repo"}"#,
            r#"gitlens-view://stash/0?{"repoPath":"/repo"}"#,
        ];

        for uri in cases {
            assert_eq!(resolve(&resolver, uri).await, None, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_branch_resolves_to_nothing() {
        let resolver = resolver();
        assert_eq!(resolve(&resolver, &branch_uri("/repo", "missing")).await, None);
    }

    #[tokio::test]
    async fn test_custom_scheme() {
        let config = DecoratorConfig {
            scheme: "my-view".to_string(),
            ..DecoratorConfig::default()
        };
        let resolver = DecorationResolver::new(resolver().provider().clone(), config);

        let mine = VirtualResourceRef::branch("my-view", "/repo", "main").unwrap();
        assert!(resolver
            .resolve(&mine.to_uri(), &CancellationToken::new())
            .await
            .is_some());
        assert_eq!(
            resolver
                .resolve(&branch_uri("/repo", "main"), &CancellationToken::new())
                .await,
            None
        );
    }

    #[tokio::test]
    async fn test_mixed_case_scheme() {
        let config = DecoratorConfig {
            scheme: "My-View".to_string(),
            ..DecoratorConfig::default()
        };
        let resolver = DecorationResolver::new(resolver().provider().clone(), config);

        let resource = VirtualResourceRef::branch("My-View", "/repo", "feature").unwrap();
        let decoration = resolver
            .resolve(&resource.to_uri(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(decoration.tooltip.as_deref(), Some("Unpublished"));

        let decoration = resolver
            .resolve_resource(&resource, &CancellationToken::new())
            .await;
        assert!(decoration.is_some());
    }

    #[tokio::test]
    async fn test_resolve_resource() {
        let resolver = resolver();
        let resource = VirtualResourceRef::branch(DEFAULT_SCHEME, "/repo", "main").unwrap();
        let decoration = resolver
            .resolve_resource(&resource, &CancellationToken::new())
            .await;
        assert_eq!(decoration.map(|d| d.badge).as_deref(), Some("✔↑"));
    }

    /// Records lookups and optionally fails or stalls them
    #[derive(Default)]
    struct ScriptedProvider {
        branch: Option<BranchState>,
        fail_remotes: bool,
        stall: bool,
        branch_lookups: AtomicUsize,
        remote_lookups: AtomicUsize,
    }

    #[async_trait]
    impl RepositoryProvider for ScriptedProvider {
        async fn find_branch(
            &self,
            _repo_path: &str,
            predicate: BranchPredicate,
        ) -> Result<Option<BranchState>> {
            self.branch_lookups.fetch_add(1, Ordering::SeqCst);
            if self.stall {
                std::future::pending::<()>().await;
            }
            Ok(self.branch.clone().filter(|b| predicate(b)))
        }

        async fn list_remotes(&self, _repo_path: &str) -> Result<Vec<Remote>> {
            self.remote_lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail_remotes {
                return Err(DecoratorError::NotInGitRepo);
            }
            Ok(vec![origin()])
        }
    }

    #[tokio::test]
    async fn test_branch_miss_still_performs_both_lookups() {
        let provider = Arc::new(ScriptedProvider::default());
        let resolver = DecorationResolver::new(provider.clone(), DecoratorConfig::default());

        let decoration = resolver
            .resolve(&branch_uri("/repo", "main"), &CancellationToken::new())
            .await;

        assert_eq!(decoration, None);
        assert_eq!(provider.branch_lookups.load(Ordering::SeqCst), 1);
        assert_eq!(provider.remote_lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_remote_lookup_resolves_to_nothing() {
        let provider = ScriptedProvider {
            branch: Some(BranchState::local("main", true)),
            fail_remotes: true,
            ..ScriptedProvider::default()
        };
        let resolver = DecorationResolver::new(provider, DecoratorConfig::default());

        let decoration = resolver
            .resolve(&branch_uri("/repo", "main"), &CancellationToken::new())
            .await;
        assert_eq!(decoration, None);
    }

    #[tokio::test]
    async fn test_cancelled_resolution_resolves_to_nothing() {
        let provider = ScriptedProvider {
            branch: Some(BranchState::local("main", true)),
            stall: true,
            ..ScriptedProvider::default()
        };
        let resolver = DecorationResolver::new(provider, DecoratorConfig::default());
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let decoration = resolver.resolve(&branch_uri("/repo", "main"), &cancel).await;
        assert_eq!(decoration, None);
    }

    #[tokio::test]
    async fn test_already_cancelled_token() {
        let resolver = resolver();
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(
            resolver.resolve(&branch_uri("/repo", "main"), &cancel).await,
            None
        );
    }

    #[tokio::test]
    async fn test_resolve_resource_with_cancelled_token() {
        let resolver = resolver();
        let resource = VirtualResourceRef::branch(DEFAULT_SCHEME, "/repo", "main").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(resolver.resolve_resource(&resource, &cancel).await, None);
    }

    #[test]
    fn test_on_invalidate_outside_runtime() {
        let resolver = resolver();
        assert!(matches!(
            resolver.on_invalidate(|_| {}),
            Err(DecoratorError::NoRuntime(_))
        ));
    }

    #[tokio::test]
    async fn test_on_invalidate_inside_runtime() {
        let resolver = resolver();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let _subscription = resolver
            .on_invalidate(move |invalidation| {
                let _ = tx.send(invalidation);
            })
            .unwrap();

        resolver.invalidations().publish(Invalidation::All);
        assert_eq!(rx.recv().await, Some(Invalidation::All));
    }

    #[tokio::test]
    async fn test_subscribers_hear_provider_invalidations() {
        let resolver = resolver();
        let mut receiver = resolver.subscribe();

        let publisher = resolver.invalidations().clone();
        publisher.publish(Invalidation::Resource(branch_uri("/repo", "main")));

        let invalidation = receiver.recv().await.unwrap();
        assert!(invalidation.affects(&branch_uri("/repo", "main")));
    }
}
