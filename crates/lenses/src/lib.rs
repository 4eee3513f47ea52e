//! Concord lens registry.
//!
//! A "lens" is a navigable feature area of the Concord workspace, identified
//! by a stable id and route. This crate holds the compiled-in lens table, the
//! five core-lens workspace configs, and pure queries over both: sidebar and
//! command-palette views, category grouping, and the core-lens absorption
//! model (which lenses are presented as sub-tabs of which workspace).
//!
//! The tables are immutable `'static` data; the global registry is built on
//! first access, validates every table invariant, and after that every query
//! is a side-effect-free read. Lookup misses are `Option`, never panics.
//!
//! # Modules
//!
//! - [`LensDef`]/[`CoreLensDef`] and the closed [`LensCategory`]/[`CoreLensId`]
//!   enums describe the tables.
//! - [`LENSES`]/[`CORE_LENSES`] are the builtin tables, declared via [`lens!`].
//! - [`LensRegistry`] validates a table pair and answers queries; module-level
//!   functions ([`sidebar_lenses`], [`find_lens`], …) cover the builtin
//!   registry.

mod builtins;
mod def;
mod error;
#[doc(hidden)]
mod macros;
mod registry;
mod search;

#[cfg(test)]
mod tests;

pub use builtins::{CORE_LENSES, LENSES};
pub use def::{CoreLensDef, CoreLensId, LensCategory, LensDef, NAV_LENS_IDS};
pub use error::RegistryError;
pub use registry::{
	LensRegistry, absorbed_lenses, all_lens_ids, command_palette_lenses, core_lens_config,
	core_lenses, extension_lenses, find_lens, is_core_lens, lenses_by_category, parent_core_lens,
	registry, sidebar_lenses,
};
pub use search::{search_lenses, suggest_lens_id};
