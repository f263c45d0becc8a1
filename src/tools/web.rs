use crate::tools::log_message_and_return;
use crate::web::error::WebError;
use crate::web::error::WebError::CantCreateClient;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;

/// Characters that can't appear as is in a path segment or a fragment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn build_client() -> Result<Client, WebError> {
    reqwest::ClientBuilder::new()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}

/// Percent-encode `segment` so that it stays a single path segment (or fragment) of a URL.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::parameterized;

    #[test]
    fn should_build_client() {
        assert!(build_client().is_ok());
    }

    #[parameterized(
        segment = {"5", "672b3c0d9e", "5 a", "../admin/5", "Zoë#1"},
        expected = {"5", "672b3c0d9e", "5%20a", "..%2Fadmin%2F5", "Zo%C3%AB%231"}
    )]
    fn should_encode_path_segment(segment: &str, expected: &str) {
        assert_eq!(expected, encode_path_segment(segment));
    }
}
