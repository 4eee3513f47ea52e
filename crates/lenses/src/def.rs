//! Lens type definitions.

use serde::Serialize;

/// One of the five primary workspace lenses.
///
/// Closed set: every other lens either belongs to one of these as a sub-tab
/// or stands alone as an extension lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoreLensId {
	/// Conversations and realtime collaboration.
	Chat,
	/// Planning surfaces: tasks, calendars, boards.
	Board,
	/// Knowledge graph and relational views.
	Graph,
	/// Repositories and execution environments.
	Code,
	/// Authoring and composition tools.
	Studio,
}

impl CoreLensId {
	/// All core lens ids, in workspace order.
	pub const ALL: [CoreLensId; 5] = [
		Self::Chat,
		Self::Board,
		Self::Graph,
		Self::Code,
		Self::Studio,
	];

	/// The lens id slug for this core lens.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Chat => "chat",
			Self::Board => "board",
			Self::Graph => "graph",
			Self::Code => "code",
			Self::Studio => "studio",
		}
	}

	/// Parses a lens id slug into a core lens id.
	///
	/// Returns `None` for anything outside the five-element core set; this is
	/// the membership test behind [`is_core_lens`](crate::is_core_lens).
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|core| core.as_str() == id)
	}
}

impl core::fmt::Display for CoreLensId {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Grouping bucket for lens entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LensCategory {
	/// Primary workspaces and navigation surfaces.
	Core,
	/// Reading, writing, and reference material.
	Knowledge,
	/// Measurement, analysis, and research.
	Science,
	/// Making things.
	Creative,
	/// Decisions, rules, and coordination.
	Governance,
	/// Assistants and automation.
	Ai,
	/// Workspace configuration and internals.
	System,
	/// Narrow single-purpose tools.
	Specialized,
	/// Cross-cutting composite views.
	Superlens,
}

impl LensCategory {
	/// All categories, in declaration order.
	///
	/// [`lenses_by_category`](crate::lenses_by_category) iterates this so its
	/// result is total over the enum even when a category has no entries.
	pub const ALL: [LensCategory; 9] = [
		Self::Core,
		Self::Knowledge,
		Self::Science,
		Self::Creative,
		Self::Governance,
		Self::Ai,
		Self::System,
		Self::Specialized,
		Self::Superlens,
	];

	/// The category slug.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Core => "core",
			Self::Knowledge => "knowledge",
			Self::Science => "science",
			Self::Creative => "creative",
			Self::Governance => "governance",
			Self::Ai => "ai",
			Self::System => "system",
			Self::Specialized => "specialized",
			Self::Superlens => "superlens",
		}
	}
}

impl core::fmt::Display for LensCategory {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Static definition of one navigable lens.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LensDef {
	/// Unique slug, stable across releases; matches the route segment.
	pub id: &'static str,
	/// Display name.
	pub name: &'static str,
	/// One-line description for tooltips and the command palette.
	pub description: &'static str,
	/// Opaque glyph identifier; rendering is the frontend's concern.
	pub icon: &'static str,
	/// Grouping bucket.
	pub category: LensCategory,
	/// Whether the lens appears in the sidebar by default.
	pub show_in_sidebar: bool,
	/// Whether the lens is discoverable in the command palette.
	pub show_in_command_palette: bool,
	/// Route, unique per entry.
	pub path: &'static str,
	/// Sort key within a grouping; ties keep table order.
	pub order: i16,
	/// Search synonyms for the command palette.
	pub keywords: &'static [&'static str],
	/// Set when this lens is absorbed into a core lens as a sub-tab.
	pub core_lens: Option<CoreLensId>,
	/// Label used when rendered as a sub-tab of its core lens.
	pub tab_label: Option<&'static str>,
}

/// Static configuration of one core lens workspace.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoreLensDef {
	/// Which core lens this configures.
	pub id: CoreLensId,
	/// Display name.
	pub name: &'static str,
	/// Longer description for the workspace switcher.
	pub description: &'static str,
	/// Short marketing line shown under the name.
	pub tagline: &'static str,
	/// Route of the workspace itself.
	pub path: &'static str,
	/// Accent color token.
	pub color: &'static str,
	/// Lens ids presented as sub-tabs, in tab order.
	pub absorbed_lens_ids: &'static [&'static str],
}

/// Navigation-only entries: routable and palette-visible, but outside the
/// core/absorbed/extension partition.
pub const NAV_LENS_IDS: &[&str] = &["hub", "global"];
