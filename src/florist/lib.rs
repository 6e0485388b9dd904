//! # Florist Architecture
//!
//! Florist is the stock and order book of a small flower shop, driven from a
//! numbered console menu. The library holds every rule; the binary only asks
//! questions and prints tables.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts with re-prompting, table rendering    │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per menu action                               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns domain refusals into user-facing messages          │
//! │  - Enforces delete protection across catalog and orders     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (catalog.rs, orders.rs, model.rs, validate.rs)      │
//! │  Storage (store/): DataStore trait, FileStore, InMemoryStore │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Rules
//!
//! - Flower ids are unique regardless of case.
//! - A flower referenced by any order line cannot be deleted.
//! - Order line costs are frozen when the order is taken.
//! - The catalog and the order book track unsaved changes separately.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`catalog`]: The flower catalog
//! - [`orders`]: The order book, queries and sorting
//! - [`store`]: Storage abstraction and the record stream format
//! - [`model`]: Core data types (`Flower`, `Order`, `OrderLine`)
//! - [`validate`]: Parsing of operator input
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod orders;
pub mod store;
pub mod validate;
