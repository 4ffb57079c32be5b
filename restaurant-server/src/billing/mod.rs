//! Order Aggregation & Pricing
//!
//! The computational core of the backend:
//! - line totals from a food's unit price and an ordered quantity
//!   ([`money`]),
//! - the order summary join over order items, foods and the order's dining
//!   table, and the invoice view merging payment metadata with that summary
//!   ([`summary`]).

pub mod money;
pub mod summary;

#[cfg(test)]
mod tests;

pub use summary::{BillingError, BillingService, InvoiceView, OrderSummary, SummaryLine};
