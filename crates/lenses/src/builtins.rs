//! The compiled-in Concord lens table.
//!
//! Declaration order matters: sorts over `order` are stable, so entries that
//! share an `order` keep the order they have here. Edit accordingly.

use crate::def::{CoreLensDef, CoreLensId, LensDef};
use crate::lens;

/// Core lens workspace configurations, in workspace order.
pub static CORE_LENSES: &[CoreLensDef] = &[
	CoreLensDef {
		id: CoreLensId::Chat,
		name: "Chat",
		description: "Conversations, threads, and the daily log in one place.",
		tagline: "Talk it through",
		path: "/lenses/chat",
		color: "#4f9cf9",
		absorbed_lens_ids: &["forum", "daily", "voice"],
	},
	CoreLensDef {
		id: CoreLensId::Board,
		name: "Board",
		description: "Tasks, schedules, and planning surfaces.",
		tagline: "Plan the work",
		path: "/lenses/board",
		color: "#f9a94f",
		absorbed_lens_ids: &["tasks", "calendar"],
	},
	CoreLensDef {
		id: CoreLensId::Graph,
		name: "Graph",
		description: "The knowledge graph and every relational view over it.",
		tagline: "See the connections",
		path: "/lenses/graph",
		color: "#7a4ff9",
		absorbed_lens_ids: &["resonance", "atlas"],
	},
	CoreLensDef {
		id: CoreLensId::Code,
		name: "Code",
		description: "Repositories, diffs, and execution sandboxes.",
		tagline: "Ship it",
		path: "/lenses/code",
		color: "#4ff9a9",
		absorbed_lens_ids: &["repos", "sandbox"],
	},
	CoreLensDef {
		id: CoreLensId::Studio,
		name: "Studio",
		description: "Authoring tools for long-form and visual work.",
		tagline: "Make something",
		path: "/lenses/studio",
		color: "#f94f7a",
		absorbed_lens_ids: &["canvas", "compose"],
	},
];

/// Every navigable lens, in declaration order.
pub static LENSES: &[LensDef] = &[
	// Navigation-only entries, outside the core/absorbed/extension partition.
	lens!(hub, {
		name: "Hub",
		description: "Workspace home and jumping-off point.",
		icon: "home",
		category: Core,
		order: 0,
		path: "/",
		keywords: ["home", "start"],
	}),
	lens!(global, {
		name: "Global",
		description: "Cross-workspace search and navigation.",
		icon: "globe",
		category: Core,
		order: 1,
		keywords: ["search", "everywhere"],
		sidebar: false,
	}),
	// The five core workspaces.
	lens!(chat, {
		name: "Chat",
		description: "Conversations and realtime collaboration.",
		icon: "message-circle",
		category: Core,
		order: 10,
		keywords: ["messages", "talk", "dm"],
	}),
	lens!(board, {
		name: "Board",
		description: "Tasks, schedules, and planning surfaces.",
		icon: "layout",
		category: Core,
		order: 20,
		keywords: ["plan", "kanban"],
	}),
	lens!(graph, {
		name: "Graph",
		description: "The knowledge graph and relational views.",
		icon: "share-2",
		category: Core,
		order: 30,
		keywords: ["network", "connections"],
	}),
	lens!(code, {
		name: "Code",
		description: "Repositories and execution environments.",
		icon: "terminal",
		category: Core,
		order: 40,
		keywords: ["git", "dev"],
	}),
	lens!(studio, {
		name: "Studio",
		description: "Authoring and composition tools.",
		icon: "pen-tool",
		category: Core,
		order: 50,
		keywords: ["write", "create"],
	}),
	// Absorbed into Chat.
	lens!(forum, {
		name: "Forum",
		description: "Threaded long-form discussion.",
		icon: "message-square",
		category: Knowledge,
		order: 11,
		keywords: ["threads", "discussions"],
		sidebar: false,
		core_lens: Chat,
		tab_label: "Forum",
	}),
	lens!(daily, {
		name: "Daily",
		description: "The running daily log.",
		icon: "sunrise",
		category: Knowledge,
		order: 12,
		keywords: ["journal", "log", "standup"],
		sidebar: false,
		core_lens: Chat,
		tab_label: "Daily",
	}),
	lens!(voice, {
		name: "Voice",
		description: "Audio rooms and transcripts.",
		icon: "mic",
		category: Specialized,
		order: 13,
		keywords: ["audio", "call"],
		sidebar: false,
		core_lens: Chat,
		tab_label: "Voice",
	}),
	// Absorbed into Board.
	lens!(tasks, {
		name: "Tasks",
		description: "Actionable items and their owners.",
		icon: "check-square",
		category: Governance,
		order: 21,
		keywords: ["todo", "assignments"],
		sidebar: false,
		core_lens: Board,
		tab_label: "Tasks",
	}),
	lens!(calendar, {
		name: "Calendar",
		description: "Dates, deadlines, and recurring rhythms.",
		icon: "calendar",
		category: Governance,
		order: 22,
		keywords: ["schedule", "events"],
		sidebar: false,
		core_lens: Board,
		tab_label: "Calendar",
	}),
	// Absorbed into Graph.
	lens!(resonance, {
		name: "Resonance",
		description: "Similarity clusters across the thought graph.",
		icon: "activity",
		category: Science,
		order: 31,
		keywords: ["clusters", "similarity", "embedding"],
		sidebar: false,
		core_lens: Graph,
		tab_label: "Resonance",
	}),
	lens!(atlas, {
		name: "Atlas",
		description: "Spatial map of linked records.",
		icon: "map",
		category: Science,
		order: 32,
		keywords: ["map", "territory"],
		sidebar: false,
		core_lens: Graph,
		tab_label: "Atlas",
	}),
	// Absorbed into Code.
	lens!(repos, {
		name: "Repos",
		description: "Connected repositories and their activity.",
		icon: "git-branch",
		category: System,
		order: 41,
		keywords: ["git", "commits", "pull requests"],
		sidebar: false,
		core_lens: Code,
		tab_label: "Repos",
	}),
	lens!(sandbox, {
		name: "Sandbox",
		description: "Scratch execution environments.",
		icon: "box",
		category: System,
		order: 42,
		keywords: ["run", "scratch", "repl"],
		sidebar: false,
		core_lens: Code,
		tab_label: "Sandbox",
	}),
	// Absorbed into Studio.
	lens!(canvas, {
		name: "Canvas",
		description: "Freeform visual workspace.",
		icon: "edit-3",
		category: Creative,
		order: 51,
		keywords: ["draw", "whiteboard"],
		sidebar: false,
		core_lens: Studio,
		tab_label: "Canvas",
	}),
	lens!(compose, {
		name: "Compose",
		description: "Long-form document editor.",
		icon: "file-text",
		category: Creative,
		order: 52,
		keywords: ["write", "document", "draft"],
		sidebar: false,
		core_lens: Studio,
		tab_label: "Compose",
	}),
	// Extension lenses: discoverable via the palette, hidden from the sidebar.
	lens!(paper, {
		name: "Paper",
		description: "Reading queue and annotation workspace.",
		icon: "book-open",
		category: Knowledge,
		order: 110,
		keywords: ["reading", "annotations", "pdf"],
		sidebar: false,
	}),
	lens!(library, {
		name: "Library",
		description: "Curated reference shelf.",
		icon: "book",
		category: Knowledge,
		order: 111,
		keywords: ["references", "shelf"],
		sidebar: false,
	}),
	lens!(citations, {
		name: "Citations",
		description: "Source tracking and bibliography export.",
		icon: "bookmark",
		category: Knowledge,
		order: 112,
		keywords: ["sources", "bibliography"],
		sidebar: false,
	}),
	lens!(lab, {
		name: "Lab",
		description: "Experiment tracking and notebooks.",
		icon: "thermometer",
		category: Science,
		order: 120,
		keywords: ["experiments", "notebooks"],
		sidebar: false,
	}),
	lens!(metrics, {
		name: "Metrics",
		description: "Workspace activity measurements.",
		icon: "bar-chart-2",
		category: Science,
		order: 121,
		keywords: ["charts", "numbers"],
		sidebar: false,
	}),
	lens!(cri, {
		name: "CRI",
		description: "Composite relevance index over recent activity.",
		icon: "trending-up",
		category: Science,
		order: 122,
		keywords: ["relevance", "ranking", "index"],
		sidebar: false,
	}),
	lens!(gallery, {
		name: "Gallery",
		description: "Visual artifacts in one grid.",
		icon: "image",
		category: Creative,
		order: 130,
		keywords: ["images", "art"],
		sidebar: false,
	}),
	lens!(muse, {
		name: "Muse",
		description: "Prompted creative exercises.",
		icon: "feather",
		category: Creative,
		order: 131,
		keywords: ["inspiration", "prompts"],
		sidebar: false,
	}),
	lens!(votes, {
		name: "Votes",
		description: "Proposals and their ballots.",
		icon: "check-circle",
		category: Governance,
		order: 140,
		keywords: ["proposals", "polls", "ballots"],
		sidebar: false,
	}),
	lens!(charter, {
		name: "Charter",
		description: "Workspace rules and amendments.",
		icon: "shield",
		category: Governance,
		order: 141,
		keywords: ["rules", "constitution"],
		sidebar: false,
	}),
	lens!(assistant, {
		name: "Assistant",
		description: "Conversational helper over the workspace.",
		icon: "cpu",
		category: Ai,
		order: 150,
		keywords: ["helper", "copilot"],
		sidebar: false,
	}),
	lens!(agents, {
		name: "Agents",
		description: "Long-running automated workers.",
		icon: "users",
		category: Ai,
		order: 151,
		keywords: ["automation", "workers"],
		sidebar: false,
	}),
	lens!(prompts, {
		name: "Prompts",
		description: "Saved prompt templates.",
		icon: "command",
		category: Ai,
		order: 152,
		keywords: ["templates", "snippets"],
		sidebar: false,
	}),
	lens!(settings, {
		name: "Settings",
		description: "Workspace configuration.",
		icon: "settings",
		category: System,
		order: 160,
		keywords: ["preferences", "config"],
	}),
	lens!(audit, {
		name: "Audit",
		description: "Change history across the workspace.",
		icon: "list",
		category: System,
		order: 161,
		keywords: ["history", "log"],
		sidebar: false,
		palette: false,
	}),
	lens!(crypto, {
		name: "Crypto",
		description: "Portfolio and market watchlists.",
		icon: "dollar-sign",
		category: Specialized,
		order: 170,
		keywords: ["markets", "portfolio", "coins"],
		sidebar: false,
	}),
	lens!(observatory, {
		name: "Observatory",
		description: "External feeds worth watching.",
		icon: "eye",
		category: Specialized,
		order: 171,
		keywords: ["feeds", "monitoring"],
		sidebar: false,
	}),
	lens!(omni, {
		name: "Omni",
		description: "Everything view: one timeline across all lenses.",
		icon: "layers",
		category: Superlens,
		order: 180,
		keywords: ["everything", "unified"],
		sidebar: false,
	}),
	lens!(chronicle, {
		name: "Chronicle",
		description: "Workspace history told as a narrative.",
		icon: "clock",
		category: Superlens,
		order: 181,
		keywords: ["timeline", "story"],
		sidebar: false,
	}),
];
