//! This module defines the core data structures used across the mock API.
//! Each submodule covers one demo product.

pub mod entity;
pub mod graph;
pub mod job;
pub mod post;
pub mod solution;
