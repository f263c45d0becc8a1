use crate::error::ApplicationError;
use crate::roster::config::RosterConfig;
use crate::tools::log_message_and_return;
use crate::tools::web::encode_path_segment;
use crate::view::actions::{execute_search, export_record_slip, update_mobile, with_view};
use crate::view::error::ViewError::UnknownRecord;
use crate::view::roster_view::RosterView;
use crate::view::view_storage::ViewStorage;
use crate::web::frontend::roster_page::RosterPage;
use crate::web::frontend::slip_download::{SlipDownload, SlipFailure};
use crate::web::view_id::ViewId;
use reqwest::Client;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};
use std::sync::Mutex;

#[derive(FromForm)]
pub struct SearchForm {
    term: String,
}

#[derive(FromForm)]
pub struct MobileNumberForm {
    mobile_number: String,
}

#[get("/")]
pub async fn index(
    view_id: ViewId,
    config: &State<RosterConfig>,
    storage: &State<Mutex<ViewStorage>>,
) -> Result<Template, Status> {
    let page = with_view(storage, view_id.as_str(), |view| {
        RosterPage::new(view, config.booth_filter())
    })
    .map_err(log_message_and_return(
        "Can't render roster view",
        Status::InternalServerError,
    ))?;

    Ok(Template::render(
        "roster",
        context! {
            title: "Booth roster",
            page
        },
    ))
}

#[post("/search", data = "<form>")]
pub async fn search(
    view_id: ViewId,
    config: &State<RosterConfig>,
    client: &State<Client>,
    storage: &State<Mutex<ViewStorage>>,
    form: Form<SearchForm>,
) -> Result<Redirect, Status> {
    if form.term.is_empty() {
        debug!("Empty search term, nothing to search");
        return Ok(Redirect::to(uri!(index)));
    }

    execute_search(storage, view_id.as_str(), client, config, &form.term)
        .await
        .map_err(log_message_and_return(
            "Can't search the roster",
            Status::InternalServerError,
        ))?;
    Ok(Redirect::to(uri!(index)))
}

#[post("/records/<record_id>/mobile", data = "<form>")]
pub async fn update_mobile_number(
    record_id: &str,
    view_id: ViewId,
    config: &State<RosterConfig>,
    client: &State<Client>,
    storage: &State<Mutex<ViewStorage>>,
    form: Form<MobileNumberForm>,
) -> Result<Redirect, Status> {
    let outcome = update_mobile(
        storage,
        view_id.as_str(),
        client,
        config,
        record_id,
        &form.mobile_number,
    )
    .await;

    match outcome {
        Ok(()) => Ok(Redirect::to(format!(
            "/#record-{}",
            encode_path_segment(record_id)
        ))),
        Err(ApplicationError::View(UnknownRecord(record_id))) => {
            debug!("No update for a record out of the results [record_id: {record_id}]");
            Err(Status::NotFound)
        }
        Err(error) => {
            error!("Can't update mobile number\n{error:#?}");
            Err(Status::InternalServerError)
        }
    }
}

/// Send the slip of a record among the current results.
/// On a generation failure, the operator goes back to the roster, where the failure is noticed.
#[get("/records/<record_id>/slip")]
pub async fn download_slip(
    record_id: &str,
    view_id: ViewId,
    config: &State<RosterConfig>,
    client: &State<Client>,
    storage: &State<Mutex<ViewStorage>>,
) -> Result<SlipDownload, SlipFailure> {
    match export_record_slip(storage, view_id.as_str(), client, config, record_id).await {
        Ok(slip) => Ok(slip.into()),
        Err(ApplicationError::View(UnknownRecord(record_id))) => {
            debug!("No slip for a record out of the results [record_id: {record_id}]");
            Err(SlipFailure::Unavailable(Status::NotFound))
        }
        Err(ApplicationError::Slip(_)) => Err(SlipFailure::Notified(Redirect::to(uri!(index)))),
        Err(error) => {
            error!("{error:#?}");
            Err(SlipFailure::Unavailable(Status::InternalServerError))
        }
    }
}

#[post("/notice/dismiss")]
pub async fn dismiss_notice(
    view_id: ViewId,
    storage: &State<Mutex<ViewStorage>>,
) -> Result<Redirect, Status> {
    with_view(storage, view_id.as_str(), RosterView::dismiss_notice).map_err(
        log_message_and_return("Can't dismiss notice", Status::InternalServerError),
    )?;
    Ok(Redirect::to(uri!(index)))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: "Page not found",
            uri: req.uri()
        },
    )
}
