//! Network layer: wire types, the typed API client, the query cache, and
//! the health poll loop.

pub mod api;
pub mod poller;
pub mod query;
pub mod types;
