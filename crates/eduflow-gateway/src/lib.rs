//! Eduflow Gateway - HTTP surface and wiring for the agent engines

pub mod error;
pub mod providers;
pub mod server;

pub use error::ApiError;
pub use providers::{build_curriculum, build_generator, build_registry};
pub use server::{router, start_gateway, AppState};
