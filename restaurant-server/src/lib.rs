//! Restaurant POS backend.
//!
//! CRUD over six related entities (menus, foods, dining tables, orders,
//! order items, invoices) backed by an embedded SurrealDB store, plus the
//! order aggregation and pricing component that joins order items, foods
//! and tables into a priced order summary and invoice view.
//!
//! # Module structure
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # Config, server, state
//! ├── utils/         # Error types, logger, validation helpers
//! ├── db/            # Database service, models, repositories
//! ├── billing/       # Order aggregation & pricing
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod billing;
pub mod core;
pub mod db;
pub mod utils;

pub use billing::{BillingError, BillingService, InvoiceView, OrderSummary};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
