//! # Core Application Logic
//!
//! This module contains Glass Notes' business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NoteStore (notes)    │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │  • view::render()       │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Storage   │
//!             │  Adapter   │          │ (FileStore)│
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`note`]: The `Note` entity and its persisted schema
//! - [`storage`]: The `KeyValueStore` trait and its file/memory backends
//! - [`store`]: `NoteStore`, the authoritative collection
//! - [`view`]: Newest-first view model for the list
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod note;
pub mod state;
pub mod storage;
pub mod store;
pub mod view;
