//! Lens table validation errors.
//!
//! These surface only while constructing a [`LensRegistry`](crate::LensRegistry)
//! from a table; lookups over a built registry never fail, they return `Option`.

use crate::def::CoreLensId;

/// Fatal lens table errors, detected at registry construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two entries share the same `id`.
	#[error("duplicate lens id {id:?}")]
	DuplicateId { id: &'static str },

	/// Two entries share the same `path`.
	#[error("duplicate lens path {path:?} (ids {first:?} and {second:?})")]
	DuplicatePath {
		path: &'static str,
		first: &'static str,
		second: &'static str,
	},

	/// The core table has no config for a core lens id.
	#[error("core lens table has no config for {core}")]
	MissingCoreConfig { core: CoreLensId },

	/// The core table configures the same core lens twice.
	#[error("core lens table configures {core} more than once")]
	DuplicateCoreConfig { core: CoreLensId },

	/// A core config absorbs a lens id that is not in the lens table.
	#[error("core lens {core} absorbs unknown lens {id:?}")]
	UnknownAbsorbedLens { core: CoreLensId, id: &'static str },

	/// A lens id appears in two core configs' absorbed lists.
	#[error("lens {id:?} is absorbed by both {first} and {second}")]
	DuplicateAbsorption {
		id: &'static str,
		first: CoreLensId,
		second: CoreLensId,
	},

	/// An entry whose id is itself a core lens id carries `core_lens`.
	#[error("core lens entry {id:?} cannot itself be absorbed")]
	CoreLensAbsorbed { id: &'static str },

	/// An entry marks `core_lens` but the core config does not list it.
	#[error("lens {id:?} marks core lens {core} but {core} does not absorb it")]
	AbsorptionNotListed { id: &'static str, core: CoreLensId },

	/// A core config lists an entry whose `core_lens` field disagrees.
	#[error("core lens {core} absorbs {id:?} but that entry does not mark {core}")]
	AbsorptionNotMarked { id: &'static str, core: CoreLensId },
}
