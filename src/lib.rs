//! Git Decorator - version-control decorations for virtual resources.
//!
//! Views that list commit files or branches address them with synthetic URI-shaped
//! identifiers. This library turns such an identifier into a decoration: a short badge,
//! a semantic color token and a tooltip describing the item's version-control state.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`DecorationResolver`]: decode, look up and classify a resource
//! - [`core::file_status::classify`] and [`core::branch_sync::classify`]: the pure classifiers
//! - [`VirtualResourceRef`]: identifier codec
//! - [`RepositoryProvider`], [`GitProvider`], [`MemoryProvider`]: data provider seam
//! - [`InvalidationChannel`]: broadcast of stale decorations

pub mod commands;
pub mod core;

pub use core::{
    BranchState,
    BranchSync,
    ColorToken,
    Decoration,
    DecorationResolver,
    DecoratorConfig,
    // Error handling
    DecoratorError,
    FileStatus,
    FileStatusRecord,
    GitProvider,
    GitRepo,
    Glyphs,
    Invalidation,
    InvalidationChannel,
    MemoryProvider,
    Remote,
    RepositoryProvider,
    ResourceKind,
    Result,
    Subscription,
    VirtualResourceRef,
    DEFAULT_SCHEME,
};
