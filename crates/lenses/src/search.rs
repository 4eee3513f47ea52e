//! Command palette search and id suggestions.

use crate::def::LensDef;
use crate::registry::{LensRegistry, registry};

/// Match quality, best first. Id and name hits outrank keyword hits, and
/// prefix hits outrank plain substring hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
	NamePrefix,
	NameSubstring,
	Keyword,
}

fn rank(lens: &LensDef, needle: &str) -> Option<Rank> {
	let id = lens.id.to_ascii_lowercase();
	let name = lens.name.to_ascii_lowercase();
	if id.starts_with(needle) || name.starts_with(needle) {
		return Some(Rank::NamePrefix);
	}
	if id.contains(needle) || name.contains(needle) {
		return Some(Rank::NameSubstring);
	}
	if lens
		.keywords
		.iter()
		.any(|kw| kw.to_ascii_lowercase().contains(needle))
	{
		return Some(Rank::Keyword);
	}
	None
}

impl LensRegistry {
	/// Case-insensitive search over palette-visible lenses.
	///
	/// Matches against id, name, and keywords; results come back ranked
	/// ([`Rank`] order), then by `order`, ties keeping table order. An empty
	/// or whitespace query matches nothing.
	pub fn search_lenses(&self, query: &str) -> Vec<&'static LensDef> {
		let needle = query.trim().to_ascii_lowercase();
		if needle.is_empty() {
			return Vec::new();
		}
		let mut hits: Vec<(Rank, &'static LensDef)> = self
			.lenses()
			.iter()
			.filter(|l| l.show_in_command_palette)
			.filter_map(|l| rank(l, &needle).map(|r| (r, l)))
			.collect();
		hits.sort_by_key(|(rank, lens)| (*rank, lens.order));
		hits.into_iter().map(|(_, lens)| lens).collect()
	}

	/// Suggests the nearest known lens id for a failed lookup.
	///
	/// Useful when a stale bookmark or external link carries an id that no
	/// longer exists. Only ids within Levenshtein distance 3 qualify.
	pub fn suggest_lens_id(&self, id: &str) -> Option<&'static str> {
		self.lenses()
			.iter()
			.map(|l| l.id)
			.min_by_key(|known| strsim::levenshtein(id, known))
			.filter(|known| strsim::levenshtein(id, known) <= 3)
	}
}

/// See [`LensRegistry::search_lenses`].
pub fn search_lenses(query: &str) -> Vec<&'static LensDef> {
	registry().search_lenses(query)
}

/// See [`LensRegistry::suggest_lens_id`].
pub fn suggest_lens_id(id: &str) -> Option<&'static str> {
	registry().suggest_lens_id(id)
}
