//! Integration tests for postboard
//!
//! These tests drive the assembled application against a real in-memory
//! SQLite database without mocking.

pub mod comment_api_tests;
pub mod database_tests;
pub mod post_api_tests;
pub mod todo_api_tests;
