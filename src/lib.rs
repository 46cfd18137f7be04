//! LearnFi Content Registry API
//!
//! A Rust-based microservice for registering educational content, tracking
//! creator ownership and engagement, following Clean/Hexagonal Architecture
//! principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
