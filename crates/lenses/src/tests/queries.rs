//! Query behavior over synthetic tables, including every construction error.

use crate::{CoreLensDef, CoreLensId, LensDef, LensRegistry, RegistryError, lens};

/// Bare core config for synthetic tables.
const fn core(id: CoreLensId, absorbed_lens_ids: &'static [&'static str]) -> CoreLensDef {
	CoreLensDef {
		id,
		name: "",
		description: "",
		tagline: "",
		path: "",
		color: "",
		absorbed_lens_ids,
	}
}

/// Full core table with only Chat absorbing anything.
const fn chat_core_table(chat_absorbs: &'static [&'static str]) -> [CoreLensDef; 5] {
	[
		core(CoreLensId::Chat, chat_absorbs),
		core(CoreLensId::Board, &[]),
		core(CoreLensId::Graph, &[]),
		core(CoreLensId::Code, &[]),
		core(CoreLensId::Studio, &[]),
	]
}

static SCENARIO_LENSES: &[LensDef] = &[
	lens!(forum, {
		name: "Forum",
		description: "Threads.",
		icon: "message-square",
		category: Knowledge,
		order: 11,
		core_lens: Chat,
		tab_label: "Forum",
	}),
	lens!(daily, {
		name: "Daily",
		description: "Log.",
		icon: "sunrise",
		category: Knowledge,
		order: 12,
		core_lens: Chat,
		tab_label: "Daily",
	}),
];
static SCENARIO_CORE: [CoreLensDef; 5] = chat_core_table(&["forum", "daily"]);

#[test]
fn absorption_scenario() {
	let registry = LensRegistry::new(SCENARIO_LENSES, &SCENARIO_CORE).expect("valid tables");

	let absorbed: Vec<&str> = registry
		.absorbed_lenses(CoreLensId::Chat)
		.iter()
		.map(|l| l.id)
		.collect();
	assert_eq!(absorbed, ["forum", "daily"]);
	assert!(registry.absorbed_lenses(CoreLensId::Board).is_empty());

	assert_eq!(registry.parent_core_lens("forum"), Some(CoreLensId::Chat));
	assert_eq!(registry.parent_core_lens("chat"), None);
	assert!(!registry.is_core_lens("forum"));
	assert!(registry.is_core_lens("chat"));
}

#[test]
fn lookup_miss_is_none() {
	let registry = LensRegistry::new(SCENARIO_LENSES, &SCENARIO_CORE).expect("valid tables");
	assert!(registry.find_lens("nonexistent-id").is_none());
	assert!(crate::find_lens("nonexistent-id").is_none());
}

// Declared [beacon, anchor]; both order 5. Equal keys must keep table order,
// not fall back to anything alphabetical.
static TIE_LENSES: &[LensDef] = &[
	lens!(beacon, {
		name: "Beacon",
		description: "B.",
		icon: "zap",
		category: System,
		order: 5,
	}),
	lens!(anchor, {
		name: "Anchor",
		description: "A.",
		icon: "anchor",
		category: System,
		order: 5,
	}),
	lens!(early, {
		name: "Early",
		description: "E.",
		icon: "clock",
		category: System,
		order: 1,
	}),
];
static TIE_CORE: [CoreLensDef; 5] = chat_core_table(&[]);

#[test]
fn equal_order_keeps_table_order() {
	let registry = LensRegistry::new(TIE_LENSES, &TIE_CORE).expect("valid tables");
	let sidebar: Vec<&str> = registry.sidebar_lenses().iter().map(|l| l.id).collect();
	assert_eq!(sidebar, ["early", "beacon", "anchor"]);
	let extensions: Vec<&str> = registry.extension_lenses().iter().map(|l| l.id).collect();
	assert_eq!(extensions, ["early", "beacon", "anchor"]);
}

#[test]
fn empty_categories_still_present() {
	let registry = LensRegistry::new(TIE_LENSES, &TIE_CORE).expect("valid tables");
	let groups = registry.lenses_by_category();
	assert_eq!(groups.len(), crate::LensCategory::ALL.len());
	for (category, lenses) in groups {
		if category == crate::LensCategory::System {
			assert_eq!(lenses.len(), 3);
		} else {
			assert!(lenses.is_empty(), "unexpected entries under {category}");
		}
	}
}

static DUP_ID_LENSES: &[LensDef] = &[
	lens!(echo, {
		name: "Echo",
		description: "One.",
		icon: "volume-2",
		category: System,
		order: 1,
		path: "/lenses/echo",
	}),
	lens!(echo, {
		name: "Echo Again",
		description: "Two.",
		icon: "volume-2",
		category: System,
		order: 2,
		path: "/lenses/echo-again",
	}),
];

#[test]
fn duplicate_id_rejected() {
	let err = LensRegistry::new(DUP_ID_LENSES, &TIE_CORE).unwrap_err();
	assert_eq!(err, RegistryError::DuplicateId { id: "echo" });
}

static DUP_PATH_LENSES: &[LensDef] = &[
	lens!(first, {
		name: "First",
		description: "One.",
		icon: "flag",
		category: System,
		order: 1,
		path: "/lenses/shared",
	}),
	lens!(second, {
		name: "Second",
		description: "Two.",
		icon: "flag",
		category: System,
		order: 2,
		path: "/lenses/shared",
	}),
];

#[test]
fn duplicate_path_rejected() {
	let err = LensRegistry::new(DUP_PATH_LENSES, &TIE_CORE).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicatePath {
			path: "/lenses/shared",
			first: "first",
			second: "second",
		}
	);
}

static MISSING_STUDIO_CORE: [CoreLensDef; 4] = [
	core(CoreLensId::Chat, &[]),
	core(CoreLensId::Board, &[]),
	core(CoreLensId::Graph, &[]),
	core(CoreLensId::Code, &[]),
];

#[test]
fn missing_core_config_rejected() {
	let err = LensRegistry::new(&[], &MISSING_STUDIO_CORE).unwrap_err();
	assert_eq!(
		err,
		RegistryError::MissingCoreConfig {
			core: CoreLensId::Studio
		}
	);
}

static DOUBLED_CHAT_CORE: [CoreLensDef; 6] = [
	core(CoreLensId::Chat, &[]),
	core(CoreLensId::Board, &[]),
	core(CoreLensId::Graph, &[]),
	core(CoreLensId::Code, &[]),
	core(CoreLensId::Studio, &[]),
	core(CoreLensId::Chat, &[]),
];

#[test]
fn duplicate_core_config_rejected() {
	let err = LensRegistry::new(&[], &DOUBLED_CHAT_CORE).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateCoreConfig {
			core: CoreLensId::Chat
		}
	);
}

static GHOST_CORE: [CoreLensDef; 5] = chat_core_table(&["ghost"]);

#[test]
fn unknown_absorbed_lens_rejected() {
	let err = LensRegistry::new(&[], &GHOST_CORE).unwrap_err();
	assert_eq!(
		err,
		RegistryError::UnknownAbsorbedLens {
			core: CoreLensId::Chat,
			id: "ghost",
		}
	);
}

static CONTESTED_CORE: [CoreLensDef; 5] = [
	core(CoreLensId::Chat, &["forum"]),
	core(CoreLensId::Board, &["forum"]),
	core(CoreLensId::Graph, &[]),
	core(CoreLensId::Code, &[]),
	core(CoreLensId::Studio, &[]),
];
static CONTESTED_LENSES: &[LensDef] = &[lens!(forum, {
	name: "Forum",
	description: "Threads.",
	icon: "message-square",
	category: Knowledge,
	order: 11,
	core_lens: Chat,
	tab_label: "Forum",
})];

#[test]
fn duplicate_absorption_rejected() {
	let err = LensRegistry::new(CONTESTED_LENSES, &CONTESTED_CORE).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateAbsorption {
			id: "forum",
			first: CoreLensId::Chat,
			second: CoreLensId::Board,
		}
	);
}

static SELF_ABSORBED_LENSES: &[LensDef] = &[lens!(chat, {
	name: "Chat",
	description: "Core entry.",
	icon: "message-circle",
	category: Core,
	order: 10,
	core_lens: Board,
	tab_label: "Chat",
})];

#[test]
fn core_entry_cannot_be_absorbed() {
	let err = LensRegistry::new(SELF_ABSORBED_LENSES, &TIE_CORE).unwrap_err();
	assert_eq!(err, RegistryError::CoreLensAbsorbed { id: "chat" });
}

static UNMARKED_LENSES: &[LensDef] = &[lens!(forum, {
	name: "Forum",
	description: "Threads.",
	icon: "message-square",
	category: Knowledge,
	order: 11,
})];
static UNMARKED_CORE: [CoreLensDef; 5] = chat_core_table(&["forum"]);

#[test]
fn absorbed_entry_must_mark_its_core() {
	let err = LensRegistry::new(UNMARKED_LENSES, &UNMARKED_CORE).unwrap_err();
	assert_eq!(
		err,
		RegistryError::AbsorptionNotMarked {
			id: "forum",
			core: CoreLensId::Chat,
		}
	);
}

static UNLISTED_LENSES: &[LensDef] = &[lens!(forum, {
	name: "Forum",
	description: "Threads.",
	icon: "message-square",
	category: Knowledge,
	order: 11,
	core_lens: Chat,
	tab_label: "Forum",
})];

#[test]
fn marked_entry_must_be_listed() {
	let err = LensRegistry::new(UNLISTED_LENSES, &TIE_CORE).unwrap_err();
	assert_eq!(
		err,
		RegistryError::AbsorptionNotListed {
			id: "forum",
			core: CoreLensId::Chat,
		}
	);
}

#[test]
fn core_config_lookup_is_total() {
	let registry = LensRegistry::new(SCENARIO_LENSES, &SCENARIO_CORE).expect("valid tables");
	for core in CoreLensId::ALL {
		assert_eq!(registry.core_lens_config(core).id, core);
	}
	assert_eq!(CoreLensId::from_id("chat"), Some(CoreLensId::Chat));
	assert_eq!(CoreLensId::from_id("settings"), None);
}
