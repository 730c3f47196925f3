//! Presentational components bound to the shared state contexts.

pub mod header;
pub mod health_gate;
pub mod notifications_table;
pub mod preferences_dialog;
