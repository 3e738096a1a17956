//! REST API endpoint tests.

mod domain_tests;
mod health_tests;
