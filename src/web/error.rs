use thiserror::Error;

/// Ways a call to a remote server (roster API, logo host) can go wrong.
#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("The HTTP client can't be built.")]
    CantCreateClient,
    #[error("The remote server can't be reached.")]
    ConnectionFailed,
    #[error("The remote server answered with status {0}.")]
    UnexpectedStatus(u16),
    #[error("The body sent by the remote server can't be read.")]
    CantReadPageContent,
}
