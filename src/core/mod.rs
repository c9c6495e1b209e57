//! Core functionality for the board service
//!
//! This module contains the domain records and the request validators.

pub mod models;
pub mod validation;
