use crate::web::error::WebError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("The roster search failed.")]
    SearchFailed(#[source] WebError),
    #[error("The mobile number of record `{record_id}` couldn't be updated.")]
    UpdateFailed {
        record_id: String,
        #[source]
        source: WebError,
    },
}
