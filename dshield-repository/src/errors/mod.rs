//! Error types for the D-Shield repository.
//!
//! This module provides a unified error type for all fixture store operations.

mod mock_data_error;

pub use mock_data_error::MockDataError;
