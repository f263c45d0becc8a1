use crate::roster::config::RosterConfig;
use crate::slip::document::compose_slip;
use crate::slip::error::SlipError;
use crate::slip::logo::{decode_logo, fetch_logo};
use derive_getters::Getters;
use dto::record::Record;
use reqwest::Client;

pub mod document;
pub mod error;
pub mod logo;
pub mod text_wrap;

/// A printable slip, ready to be downloaded.
#[derive(Debug, Getters)]
pub struct Slip {
    file_name: String,
    content: Vec<u8>,
}

impl Slip {
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

/// Produce the identity slip of a record, topped with the configured logo.
pub async fn export_slip(
    client: &Client,
    config: &RosterConfig,
    record: &Record,
) -> Result<Slip, SlipError> {
    let logo_bytes = fetch_logo(client, config.logo_asset_url()).await?;
    let logo = decode_logo(logo_bytes).await?;
    let content = compose_slip(record, &logo)?;
    trace!("Slip has been generated [record_id: {}]", record.id());

    Ok(Slip {
        file_name: slip_file_name(record),
        content,
    })
}

pub fn slip_file_name(record: &Record) -> String {
    format!("{}_Details.pdf", record.full_name())
}
