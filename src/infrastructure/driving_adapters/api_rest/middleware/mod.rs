//! API Middleware
//!
//! Authentication, request correlation and other middleware for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::{AuthenticatedAccount, JwtAuth};
pub use request_id::{request_id_middleware, RequestId};
