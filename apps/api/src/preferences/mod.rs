//! Per-user email preference collections: tones, audiences, templates,
//! saved emails and signatures.
//!
//! Layering: `handlers` (HTTP edge) -> `service` (persistence orchestration)
//! -> `ops` (pure collection rules) -> `store` (Postgres rows). The rules in
//! `ops` never touch the database, which is where the bulk of the tests live.

pub mod defaults;
pub mod handlers;
pub mod models;
pub mod ops;
pub mod service;
pub mod store;
