//! Routed pages.

pub mod login;
pub mod notifications;
