//! linkshort - a small URL shortener service
//!
//! `POST /api/shorten` turns a long URL into a short code, persisting the
//! mapping in SQLite, MySQL or PostgreSQL; `GET /health` reports whether the
//! database is reachable.
//!
//! # Architecture
//! - `services`: code generation and the shortening workflow
//! - `storage`: the `MappingStore` seam and its SeaORM backend
//! - `api`: HTTP handlers and middleware
//! - `config`: static configuration (TOML + environment)
//! - `runtime`: startup, server mode, shutdown
//! - `system`: logging setup

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
