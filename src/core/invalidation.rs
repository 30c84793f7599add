//! Decoration invalidation channel.
//!
//! Whatever mutates repository state (new commits, moved branches) publishes an
//! [`Invalidation`] so hosts know which previously issued decorations to request again.
//! The channel is a broadcast: any number of publishers, every subscriber sees every
//! message. Subscriptions end when their handle is dropped.

use crate::core::error::Result;
use tokio::runtime::Handle;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Every decoration may be stale
    All,
    Resource(String),
    Resources(Vec<String>),
}

impl Invalidation {
    /// Whether a decoration issued for `uri` is stale after this invalidation
    pub fn affects(&self, uri: &str) -> bool {
        match self {
            Invalidation::All => true,
            Invalidation::Resource(resource) => resource == uri,
            Invalidation::Resources(resources) => resources.iter().any(|r| r == uri),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InvalidationChannel {
    sender: broadcast::Sender<Invalidation>,
}

impl Default for InvalidationChannel {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl InvalidationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Broadcast an invalidation, returning how many subscribers it reached
    pub fn publish(&self, invalidation: Invalidation) -> usize {
        match self.sender.send(invalidation) {
            Ok(reached) => reached,
            Err(broadcast::error::SendError(invalidation)) => {
                log::trace!("Dropping {invalidation:?}: no subscribers");
                0
            }
        }
    }

    pub fn subscribe(&self) -> InvalidationReceiver {
        InvalidationReceiver {
            inner: self.sender.subscribe(),
        }
    }

    /// Run `handler` for every invalidation until the returned [`Subscription`] is dropped.
    /// Fails outside a tokio runtime; such hosts poll [`Self::subscribe`] instead.
    pub fn on_invalidate<F>(&self, handler: F) -> Result<Subscription>
    where
        F: Fn(Invalidation) + Send + 'static,
    {
        let runtime = Handle::try_current()?;
        let mut receiver = self.subscribe();
        let task = runtime.spawn(async move {
            while let Some(invalidation) = receiver.recv().await {
                handler(invalidation);
            }
        });
        Ok(Subscription { task })
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

pub struct InvalidationReceiver {
    inner: broadcast::Receiver<Invalidation>,
}

impl InvalidationReceiver {
    /// Next invalidation, `None` once every publisher is gone. A receiver that fell
    /// behind gets [`Invalidation::All`] in place of the messages it missed.
    pub async fn recv(&mut self) -> Option<Invalidation> {
        match self.inner.recv().await {
            Ok(invalidation) => Some(invalidation),
            Err(RecvError::Lagged(missed)) => {
                log::warn!("Invalidation subscriber lagged by {missed} messages, invalidating all");
                Some(Invalidation::All)
            }
            Err(RecvError::Closed) => None,
        }
    }
}

/// Handle for a handler registered with [`InvalidationChannel::on_invalidate`]
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
