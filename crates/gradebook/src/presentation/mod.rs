//! Presentation layer - HTTP surface

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use router::{api_router, ApiState};
