//! Static shop content and data-file loaders.
//!
//! This crate houses the builtin item catalog and a RON loader so the
//! catalog can also be supplied as a data file. Content is consumed by the
//! client at startup and never appears in match state; the engine only
//! ever sees an immutable [`duel_core::Catalog`].

pub mod builtin;
pub mod loaders;

pub use builtin::builtin_catalog;
pub use loaders::CatalogLoader;
