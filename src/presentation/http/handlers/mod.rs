//! HTTP Request Handlers

pub mod domain;
pub mod health;
