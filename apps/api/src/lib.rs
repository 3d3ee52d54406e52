//! Squad Shuffle API Library
//!
//! This library provides the core functionality for the Squad Shuffle API:
//! the player roster, the team balancer that splits sixteen players into two
//! balanced sides, and the HTTP and storage adapters around them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
