//! Member Search API Library
//!
//! Dynamic, type-safe member searches over PostgreSQL: optional filters are
//! composed into a single predicate, executed with `sqlx::QueryBuilder`, and
//! served unpaged or paged over HTTP.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
