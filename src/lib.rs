pub mod brush;
pub mod buffer;
mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod notification;
pub mod session;
pub use error::{AppError, AppResult};
