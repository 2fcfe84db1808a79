//! Integration tests driving the public API against a fake REST backend

pub mod api_client_tests;
pub mod editor_flow_tests;
