use crate::slip::error::SlipError;
use crate::slip::error::SlipError::{DecodingAborted, LogoRefused, LogoUndecodable, LogoUnreachable};
use crate::tools::log_message_and_return;
use image::DynamicImage;
use reqwest::Client;
use rocket::tokio::task::spawn_blocking;

pub async fn fetch_logo(client: &Client, url: &str) -> Result<Vec<u8>, SlipError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(log_message_and_return("Can't download logo", LogoUnreachable))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Logo download has been refused [status: {status}, url: {url}]");
        return Err(LogoRefused(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(log_message_and_return("Can't read logo content", LogoUnreachable))?;
    Ok(bytes.to_vec())
}

/// Decode the logo on the blocking pool. The returned future resolves once decoding is over.
pub async fn decode_logo(bytes: Vec<u8>) -> Result<DynamicImage, SlipError> {
    spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(log_message_and_return(
            "Logo decoding task has not completed",
            DecodingAborted,
        ))?
        .map_err(|error| {
            warn!("Can't decode logo: {error}");
            LogoUndecodable(error.to_string())
        })
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn logo_png() -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 20, Rgb([200, 30, 30])));
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    /// Serve a small PNG logo from `/logo.png`.
    pub async fn setup_logo(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/logo.png"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(logo_png(), "image/png"))
            .mount(mock_server)
            .await;
    }

    #[async_test]
    async fn should_fetch_logo() {
        let mock_server = MockServer::start().await;
        setup_logo(&mock_server).await;

        let bytes = fetch_logo(&Client::new(), &format!("{}/logo.png", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(logo_png(), bytes);
    }

    #[async_test]
    async fn should_fail_to_fetch_logo_when_refused() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logo.png"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let error = fetch_logo(&Client::new(), &format!("{}/logo.png", mock_server.uri()))
            .await
            .unwrap_err();

        assert_eq!(LogoRefused(403), error);
    }

    #[async_test]
    async fn should_fail_to_fetch_logo_when_unreachable() {
        let error = fetch_logo(&Client::new(), "http://127.0.0.1:9/logo.png")
            .await
            .unwrap_err();

        assert_eq!(LogoUnreachable, error);
    }

    #[async_test]
    async fn should_decode_logo() {
        let logo = decode_logo(logo_png()).await.unwrap();

        assert_eq!(64, logo.width());
        assert_eq!(20, logo.height());
    }

    #[async_test]
    async fn should_fail_to_decode_logo_when_not_an_image() {
        let error = decode_logo(b"<html>Not found</html>".to_vec())
            .await
            .unwrap_err();

        assert!(matches!(error, LogoUndecodable(_)));
    }
}
