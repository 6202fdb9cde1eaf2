//! # Stockroom Architecture
//!
//! Stockroom keeps a small product catalog in a CSV file and lets one person
//! list, inspect, add and remove products from a terminal menu. The crate is a
//! library with a thin interactive binary on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, screen clearing, price formatting    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One StockApi per session, owns store + catalog           │
//! │  - Normalizes inputs (handle text → Handle)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, list, view, add, remove, save, doctor              │
//! │  - Returns CmdResult: messages plus affected/listed items   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs, index.rs) and Storage (store/)        │
//! │  - Products + handle registry, mutated together             │
//! │  - CatalogStore trait: CsvStore, InMemoryStore              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Handles
//!
//! Products carry a permanent id that is written to the CSV file. The menu
//! never shows it; users pick products by a short numeric handle that only
//! exists for the current session. See [`index`] for the allocation rules.
//!
//! ## Session lifecycle
//!
//! A session loads the whole catalog once, mutates it in memory, and writes it
//! back once when the user saves. Quitting any other way discards changes.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`commands`]: One module per operation
//! - [`catalog`]: Products and handles held together
//! - [`index`]: Handles and the handle registry
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Product` and `ProductId`
//! - [`config`]: Configuration, including currency formatting
//! - [`logging`]: Tracing setup
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
