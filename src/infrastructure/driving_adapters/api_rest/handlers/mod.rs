//! HTTP Handlers

pub mod contents;
pub mod creators;
pub mod networks;
