use crate::roster::error::RosterError;
use crate::slip::error::SlipError;
use crate::view::error::ViewError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred while working with the roster.")]
    Roster(#[from] RosterError),
    #[error("An error has occurred while generating a slip.")]
    Slip(#[from] SlipError),
    #[error("The roster view is unavailable.")]
    View(#[from] ViewError),
}
