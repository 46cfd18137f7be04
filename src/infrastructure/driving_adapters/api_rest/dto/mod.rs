//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod content;
pub mod network;

pub use content::{ContentCountDto, ContentResponseDto, CreateContentDto, EngageContentDto};
pub use network::{ExplorerUrlsDto, NetworkResponseDto};
