//! Utility functions for request handling and storage error classification.
//!
//! - [`extract_user_id`] - Caller id extraction from HTTP headers
//! - [`db_error`] - Unique-constraint detection on SQLx errors

pub mod db_error;
pub mod extract_user_id;
