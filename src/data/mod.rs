//! Row data for the demo table and loaders for user-supplied files.
//!
//! Rows never depend on column order; columns read them through accessors.

pub mod loader;
pub mod payment;

pub use loader::load_payments;
pub use payment::{payment_columns, sample_payments, Payment, PaymentStatus};
