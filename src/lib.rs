//! catalogd - a small in-memory product catalog REST API
//!
//! CRUD over a single in-memory collection of product records, with
//! filtering, search, pagination, and aggregate statistics. Intended as a
//! reference/starter API: state lives for the process lifetime only.

pub mod cli;
pub mod http_server;
pub mod store;
