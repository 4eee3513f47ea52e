//! Pure queries over the immutable lens tables.
//!
//! A [`LensRegistry`] is built once from a lens table and its core-lens
//! configs; construction validates every table invariant and computes the
//! derived indices (id index, absorption map). After that, every query is a
//! side-effect-free read over `'static` data, safe from any thread.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::builtins;
use crate::def::{CoreLensDef, CoreLensId, LensCategory, LensDef, NAV_LENS_IDS};
use crate::error::RegistryError;

/// Immutable registry over a lens table and its core-lens configs.
#[derive(Debug)]
pub struct LensRegistry {
	lenses: &'static [LensDef],
	by_id: FxHashMap<&'static str, usize>,
	/// Absorption map: lens id to the core lens presenting it as a sub-tab.
	parent: FxHashMap<&'static str, CoreLensId>,
	/// Core table index, one slot per [`CoreLensId`] variant.
	core_configs: [&'static CoreLensDef; CoreLensId::ALL.len()],
}

impl LensRegistry {
	/// Builds a registry, validating the tables.
	///
	/// Errors describe the first invariant violation found: duplicate ids or
	/// paths, incomplete or duplicated core configs, and absorption lists
	/// that disagree with the entries' `core_lens` fields in either
	/// direction. A lens id absorbed by two core lenses is an error rather
	/// than last-write-wins, so the absorption map never depends on core
	/// table declaration order.
	pub fn new(
		lenses: &'static [LensDef],
		core_lenses: &'static [CoreLensDef],
	) -> Result<Self, RegistryError> {
		let mut by_id = FxHashMap::with_capacity_and_hasher(lenses.len(), Default::default());
		let mut by_path: FxHashMap<&'static str, &'static str> =
			FxHashMap::with_capacity_and_hasher(lenses.len(), Default::default());
		for (idx, lens) in lenses.iter().enumerate() {
			if by_id.insert(lens.id, idx).is_some() {
				return Err(RegistryError::DuplicateId { id: lens.id });
			}
			if let Some(first) = by_path.insert(lens.path, lens.id) {
				return Err(RegistryError::DuplicatePath {
					path: lens.path,
					first,
					second: lens.id,
				});
			}
		}

		let mut slots: [Option<&'static CoreLensDef>; CoreLensId::ALL.len()] =
			[None; CoreLensId::ALL.len()];
		for config in core_lenses {
			let slot = &mut slots[config.id as usize];
			if slot.is_some() {
				return Err(RegistryError::DuplicateCoreConfig { core: config.id });
			}
			*slot = Some(config);
		}
		let [Some(chat), Some(board), Some(graph), Some(code), Some(studio)] = slots else {
			let core = CoreLensId::ALL
				.into_iter()
				.find(|core| slots[*core as usize].is_none())
				.unwrap_or(CoreLensId::Chat);
			return Err(RegistryError::MissingCoreConfig { core });
		};
		let core_configs = [chat, board, graph, code, studio];

		for lens in lenses {
			if lens.core_lens.is_some() && CoreLensId::from_id(lens.id).is_some() {
				return Err(RegistryError::CoreLensAbsorbed { id: lens.id });
			}
		}

		// Inverse index of the absorbed lists, checked against the entries'
		// own `core_lens` fields in both directions.
		let mut parent: FxHashMap<&'static str, CoreLensId> = FxHashMap::default();
		for config in &core_configs {
			for &id in config.absorbed_lens_ids {
				let Some(&idx) = by_id.get(id) else {
					return Err(RegistryError::UnknownAbsorbedLens { core: config.id, id });
				};
				if let Some(first) = parent.insert(id, config.id) {
					return Err(RegistryError::DuplicateAbsorption {
						id,
						first,
						second: config.id,
					});
				}
				if lenses[idx].core_lens != Some(config.id) {
					return Err(RegistryError::AbsorptionNotMarked { id, core: config.id });
				}
			}
		}
		for lens in lenses {
			if let Some(core) = lens.core_lens
				&& parent.get(lens.id) != Some(&core)
			{
				return Err(RegistryError::AbsorptionNotListed { id: lens.id, core });
			}
		}

		tracing::debug!(
			lenses = lenses.len(),
			core_lenses = core_lenses.len(),
			absorbed = parent.len(),
			"lens registry built"
		);

		Ok(Self {
			lenses,
			by_id,
			parent,
			core_configs,
		})
	}

	/// The full lens table, in declaration order.
	pub fn lenses(&self) -> &'static [LensDef] {
		self.lenses
	}

	/// Entries shown in the sidebar, sorted by `order` (stable on ties).
	pub fn sidebar_lenses(&self) -> Vec<&'static LensDef> {
		sorted(self.lenses.iter().filter(|l| l.show_in_sidebar).collect())
	}

	/// Entries discoverable in the command palette, sorted by `order`.
	pub fn command_palette_lenses(&self) -> Vec<&'static LensDef> {
		sorted(
			self.lenses
				.iter()
				.filter(|l| l.show_in_command_palette)
				.collect(),
		)
	}

	/// Every lens id, in table order.
	///
	/// Build tooling walks this to assert each filesystem route has a
	/// registry entry.
	pub fn all_lens_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.lenses.iter().map(|l| l.id)
	}

	/// Looks up a lens by id. A miss is a value, not a panic: stale
	/// bookmarks and external links hit this constantly.
	pub fn find_lens(&self, id: &str) -> Option<&'static LensDef> {
		self.by_id.get(id).map(|&idx| &self.lenses[idx])
	}

	/// Groups entries by category, sorted by `order` within each group.
	///
	/// Total over [`LensCategory::ALL`] in declaration order: a category with
	/// no entries is present with an empty group.
	pub fn lenses_by_category(&self) -> Vec<(LensCategory, Vec<&'static LensDef>)> {
		LensCategory::ALL
			.into_iter()
			.map(|category| {
				let group =
					sorted(self.lenses.iter().filter(|l| l.category == category).collect());
				(category, group)
			})
			.collect()
	}

	/// Entries whose id is one of the five core ids, sorted by `order`.
	pub fn core_lenses(&self) -> Vec<&'static LensDef> {
		sorted(
			self.lenses
				.iter()
				.filter(|l| CoreLensId::from_id(l.id).is_some())
				.collect(),
		)
	}

	/// Entries absorbed into `core`, sorted by `order`; empty if none.
	pub fn absorbed_lenses(&self, core: CoreLensId) -> Vec<&'static LensDef> {
		sorted(
			self.lenses
				.iter()
				.filter(|l| l.core_lens == Some(core))
				.collect(),
		)
	}

	/// Entries that are neither core, nor absorbed, nor navigation-only,
	/// sorted by `order`.
	pub fn extension_lenses(&self) -> Vec<&'static LensDef> {
		sorted(
			self.lenses
				.iter()
				.filter(|l| {
					l.core_lens.is_none()
						&& CoreLensId::from_id(l.id).is_none()
						&& !NAV_LENS_IDS.contains(&l.id)
				})
				.collect(),
		)
	}

	/// Whether `id` is one of the five core lens ids.
	pub fn is_core_lens(&self, id: &str) -> bool {
		CoreLensId::from_id(id).is_some()
	}

	/// The core lens presenting `id` as a sub-tab, if any.
	pub fn parent_core_lens(&self, id: &str) -> Option<CoreLensId> {
		self.parent.get(id).copied()
	}

	/// The workspace config for a core lens. Infallible: construction
	/// guarantees the core table covers every [`CoreLensId`] exactly once.
	pub fn core_lens_config(&self, core: CoreLensId) -> &'static CoreLensDef {
		self.core_configs[core as usize]
	}
}

/// Stable ascending sort by `order`; equal keys keep table order.
fn sorted(mut lenses: Vec<&'static LensDef>) -> Vec<&'static LensDef> {
	lenses.sort_by_key(|l| l.order);
	lenses
}

static REGISTRY: LazyLock<LensRegistry> = LazyLock::new(|| {
	match LensRegistry::new(builtins::LENSES, builtins::CORE_LENSES) {
		Ok(registry) => registry,
		// Unreachable with a valid builtin table; covered by the consistency tests.
		Err(err) => panic!("builtin lens table invalid: {err}"),
	}
});

/// The registry over the builtin tables.
pub fn registry() -> &'static LensRegistry {
	&REGISTRY
}

/// See [`LensRegistry::sidebar_lenses`].
pub fn sidebar_lenses() -> Vec<&'static LensDef> {
	registry().sidebar_lenses()
}

/// See [`LensRegistry::command_palette_lenses`].
pub fn command_palette_lenses() -> Vec<&'static LensDef> {
	registry().command_palette_lenses()
}

/// See [`LensRegistry::all_lens_ids`].
pub fn all_lens_ids() -> impl Iterator<Item = &'static str> {
	registry().all_lens_ids()
}

/// See [`LensRegistry::find_lens`].
pub fn find_lens(id: &str) -> Option<&'static LensDef> {
	registry().find_lens(id)
}

/// See [`LensRegistry::lenses_by_category`].
pub fn lenses_by_category() -> Vec<(LensCategory, Vec<&'static LensDef>)> {
	registry().lenses_by_category()
}

/// See [`LensRegistry::core_lenses`].
pub fn core_lenses() -> Vec<&'static LensDef> {
	registry().core_lenses()
}

/// See [`LensRegistry::absorbed_lenses`].
pub fn absorbed_lenses(core: CoreLensId) -> Vec<&'static LensDef> {
	registry().absorbed_lenses(core)
}

/// See [`LensRegistry::extension_lenses`].
pub fn extension_lenses() -> Vec<&'static LensDef> {
	registry().extension_lenses()
}

/// See [`LensRegistry::is_core_lens`].
pub fn is_core_lens(id: &str) -> bool {
	registry().is_core_lens(id)
}

/// See [`LensRegistry::parent_core_lens`].
pub fn parent_core_lens(id: &str) -> Option<CoreLensId> {
	registry().parent_core_lens(id)
}

/// See [`LensRegistry::core_lens_config`].
pub fn core_lens_config(core: CoreLensId) -> &'static CoreLensDef {
	registry().core_lens_config(core)
}
