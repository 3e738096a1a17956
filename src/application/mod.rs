//! # Application Layer
//!
//! Business services, the facade boundary, DTOs, and the explicit mapping
//! functions between wire shapes and domain entities.

pub mod dto;
pub mod facade;
pub mod mapper;
pub mod services;
