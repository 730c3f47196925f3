//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `health`, `prefs`) so individual
//! components can depend on small focused models. Each module is plain
//! synchronous data; the `RwSignal` wrappers live in `app.rs` contexts.

pub mod health;
pub mod prefs;
pub mod session;
