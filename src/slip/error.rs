use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SlipError {
    #[error("The logo can't be downloaded.")]
    LogoUnreachable,
    #[error("The logo has been refused by its host [status: {0}].")]
    LogoRefused(u16),
    #[error("The logo can't be decoded: {0}")]
    LogoUndecodable(String),
    #[error("The logo decoding task has been aborted.")]
    DecodingAborted,
    #[error("The slip document can't be composed: {0}")]
    CantComposeDocument(String),
}
