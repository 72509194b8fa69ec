//! HTTP surface: route handlers and middleware

pub mod middleware;
pub mod services;
