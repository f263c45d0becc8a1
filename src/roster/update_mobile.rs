use crate::roster::config::RosterConfig;
use crate::roster::error::RosterError;
use crate::roster::error::RosterError::UpdateFailed;
use crate::tools::log_message_and_return;
use crate::web::error::WebError;
use crate::web::error::WebError::{CantReadPageContent, ConnectionFailed, UnexpectedStatus};
use dto::mobile_number_update::MobileNumberUpdate;
use dto::record::Record;
use reqwest::Client;

/// Attach `mobile_number` to the record, replacing the previous one if any.
/// Return the record as updated by the roster API.
pub async fn attach_mobile_number(
    client: &Client,
    config: &RosterConfig,
    record_id: &str,
    mobile_number: &str,
) -> Result<Record, RosterError> {
    let update_failed = |source: WebError| UpdateFailed {
        record_id: record_id.to_owned(),
        source,
    };

    let response = client
        .put(config.add_mobile_url(record_id))
        .json(&MobileNumberUpdate::new(mobile_number.to_owned()))
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach roster update endpoint",
            update_failed(ConnectionFailed),
        ))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Mobile number update has been refused [status: {status}, record_id: {record_id}]");
        return Err(update_failed(UnexpectedStatus(status.as_u16())));
    }

    let record = response
        .json::<Record>()
        .await
        .map_err(log_message_and_return(
            "Can't read record sent by roster update endpoint",
            update_failed(CantReadPageContent),
        ))?;
    trace!("Mobile number has been attached [record_id: {record_id}]");

    Ok(record)
}
