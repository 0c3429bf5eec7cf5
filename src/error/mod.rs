use crate::buffer::BufferError;
use crate::display::MapError;
use crate::engine::{EraseError, SprayError};
use crate::session::SessionError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Spray(#[from] SprayError),

    #[error(transparent)]
    Erase(#[from] EraseError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
