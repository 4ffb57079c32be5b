//! API route modules
//!
//! One router per entity, merged by the server:
//!
//! - [`health`] - liveness check
//! - [`menus`] - menu management
//! - [`foods`] - food management
//! - [`tables`] - dining table management
//! - [`orders`] - order management
//! - [`order_items`] - order item management and order summaries
//! - [`invoices`] - invoice management and the invoice view

pub mod foods;
pub mod health;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppResult, validate_payload};
