//! Data-driven battle content and loaders.
//!
//! This crate houses the static content of the game and provides loaders for
//! RON/TOML data files:
//! - Player profile and enemy roster (RON)
//! - Item catalog (RON)
//! - Battle tuning (TOML)
//!
//! A default copy of every file is embedded at build time, so a binary works
//! without a data directory. All loaders deserialize battle-core types
//! directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, Content, ContentFactory, ItemCatalog, ItemLoader, LoadResult, Roster,
    RosterLoader,
};
