//! # Presentation Layer
//!
//! HTTP routing, request handlers, and middleware.

pub mod http;
pub mod middleware;
