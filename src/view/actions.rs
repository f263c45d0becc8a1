use crate::error::Result;
use crate::roster::config::RosterConfig;
use crate::roster::search::search_records;
use crate::roster::search_query::SearchQuery;
use crate::roster::update_mobile::attach_mobile_number;
use crate::slip::{Slip, export_slip};
use crate::tools::log_message_and_return;
use crate::view::error::ViewError::{StorageUnavailable, UnknownRecord};
use crate::view::roster_view::RosterView;
use crate::view::view_storage::ViewStorage;
use reqwest::Client;
use std::sync::Mutex;

/// Run `function` on the view with the given id.
/// The storage is locked for the duration of `function` only, which must not wait on anything.
pub fn with_view<T>(
    storage: &Mutex<ViewStorage>,
    view_id: &str,
    function: impl FnOnce(&mut RosterView) -> T,
) -> Result<T> {
    let mut storage = storage.lock().map_err(log_message_and_return(
        "Can't lock view storage",
        StorageUnavailable,
    ))?;
    Ok(function(storage.get_or_create(view_id)))
}

/// Search the roster for `term` and store the outcome in the view.
/// Searching failures end up as a notice in the view, not as an error.
pub async fn execute_search(
    storage: &Mutex<ViewStorage>,
    view_id: &str,
    client: &Client,
    config: &RosterConfig,
    term: &str,
) -> Result<()> {
    let ticket = with_view(storage, view_id, |view| view.begin_search(term))?;

    let query = SearchQuery::new(term, config.booth_filter());
    let outcome = search_records(client, config, &query).await;

    with_view(storage, view_id, |view| {
        view.complete_search(ticket, outcome, config.booth_filter())
    })?;
    Ok(())
}

/// Attach `mobile_number` to a record among the current results and store the outcome in the view.
/// Update failures end up as a notice in the view, not as an error.
/// Records out of the results are never sent to the roster API.
pub async fn update_mobile(
    storage: &Mutex<ViewStorage>,
    view_id: &str,
    client: &Client,
    config: &RosterConfig,
    record_id: &str,
    mobile_number: &str,
) -> Result<()> {
    let ticket = with_view(storage, view_id, |view| {
        view.find_record(record_id)
            .is_some()
            .then(|| view.begin_update(record_id, mobile_number))
    })?
    .ok_or_else(|| UnknownRecord(record_id.to_owned()))?;

    let outcome = attach_mobile_number(client, config, record_id, mobile_number).await;

    with_view(storage, view_id, |view| {
        view.complete_update(record_id, ticket, outcome)
    })?;
    Ok(())
}

/// Generate the slip of a record among the current results.
/// On failure, the view is told so that the operator gets notified.
pub async fn export_record_slip(
    storage: &Mutex<ViewStorage>,
    view_id: &str,
    client: &Client,
    config: &RosterConfig,
    record_id: &str,
) -> Result<Slip> {
    let record = with_view(storage, view_id, |view| view.find_record(record_id).cloned())?
        .ok_or_else(|| UnknownRecord(record_id.to_owned()))?;

    match export_slip(client, config, &record).await {
        Ok(slip) => Ok(slip),
        Err(error) => {
            error!("Slip export failed [record_id: {record_id}]: {error:?}");
            with_view(storage, view_id, RosterView::report_export_failure)?;
            Err(error.into())
        }
    }
}
