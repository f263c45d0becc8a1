use crate::slip::Slip;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rocket::http::{Header, Status};
use rocket::response::Redirect;

/// Characters allowed unencoded in an extended header value (RFC 5987 `attr-char`).
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// A slip sent as an attachment.
#[derive(Responder)]
#[response(content_type = "pdf")]
pub struct SlipDownload {
    content: Vec<u8>,
    disposition: Header<'static>,
}

impl From<Slip> for SlipDownload {
    fn from(slip: Slip) -> Self {
        let disposition = Header::new("Content-Disposition", content_disposition(slip.file_name()));
        Self {
            content: slip.into_content(),
            disposition,
        }
    }
}

/// Why no slip is sent back.
#[derive(Debug, Responder)]
pub enum SlipFailure {
    /// The operator is sent back to the roster, where a notice tells them what happened.
    Notified(Redirect),
    Unavailable(Status),
}

/// `attachment` disposition with an ASCII fallback name and the exact UTF-8 one.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| match c {
            ' '..='~' if c != '"' && c != '\\' => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(file_name, ATTR_CHAR)
    )
}
