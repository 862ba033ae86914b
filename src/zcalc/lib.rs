//! # zcalc Architecture
//!
//! zcalc is a **UI-agnostic storage-calculator library** with a CLI
//! client. It converts a drive/pool configuration into capacity and cost
//! figures, and keeps an ordered, durable list of saved "comparisons"
//! that can be exported to and re-imported from JSON.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Model (calc.rs)            │
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! types, and never writes to stdout/stderr or exits the process. Import
//! failures, persistence warnings, and guidance messages all travel as
//! structured `CmdMessage`s that the CLI renders.
//!
//! ## Module overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`calc`]: The pure capacity/cost model
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Configuration`, `PoolType`, `Comparison`)
//! - [`config`]: Calculator settings (currency symbol)
//! - [`error`]: Error types

pub mod api;
pub mod calc;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
