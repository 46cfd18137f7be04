//! Content Use Cases
//!
//! Business logic for the content registry.

mod create_content;
mod engage_with_content;
mod get_content_by_id;
mod get_content_count;
mod get_creator_content;

pub use create_content::CreateContentUseCase;
pub use engage_with_content::EngageWithContentUseCase;
pub use get_content_by_id::GetContentByIdUseCase;
pub use get_content_count::GetContentCountUseCase;
pub use get_creator_content::GetCreatorContentUseCase;
