//! Catalogue core - the selectable-catalogue-with-live-preview pattern
//!
//! Every demo page repeats the same interaction: a set of example cards, a
//! side panel documenting the highlighted example, and a copy button for its
//! snippet. This module holds that pattern as plain state machines and pure
//! functions so the TUI only has to render them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  select(id)  ┌───────────────────┐
//! │  Selector    │─────────────▶│  SnippetRegistry  │──▶ Lookup (Found | Missing)
//! └──────────────┘              └───────────────────┘
//!                                        │ snippet text
//!                                        ▼
//!                               ┌───────────────────┐  write_text  ┌───────────────┐
//!                               │  CopyController   │─────────────▶│ ClipboardSink │
//!                               │  Idle ⇄ Copied    │              └───────────────┘
//!                               └───────────────────┘
//! ```
//!
//! The remaining pieces (`table`, `pagination`, `dark_mode`) are the small
//! bits of local state a few pages carry on top of the pattern.

pub mod copy;
pub mod dark_mode;
pub mod pagination;
pub mod registry;
pub mod selector;
pub mod table;

pub use copy::{ClipboardSink, CopyController, CopyOutcome, CopyState, ReversionTimer};
pub use dark_mode::DarkMode;
pub use pagination::Pager;
pub use registry::{Lookup, PropDoc, SnippetRegistry, NO_EXAMPLE};
pub use selector::CatalogueSelector;
pub use table::{TableRecord, TableView, SAMPLE_RECORDS};
