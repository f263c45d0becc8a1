use rocket::http::{Cookie, SameSite};
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use std::convert::Infallible;
use uuid::Uuid;

pub const VIEW_COOKIE: &str = "Roster-View";

/// Identifies the roster view of the operator behind a request.
///
/// The id travels in a private `Roster-View` cookie.
/// A first-time visitor is given a new id, so this guard never fails.
#[derive(Debug)]
pub struct ViewId(String);

impl ViewId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ViewId {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let cookies = req.cookies();
        if let Some(cookie) = cookies.get_private(VIEW_COOKIE) {
            return Outcome::Success(ViewId(cookie.value().to_owned()));
        }

        let view_id = Uuid::new_v4().to_string();
        trace!("New roster view [view_id: {view_id}]");
        let cookie = Cookie::build((VIEW_COOKIE, view_id.clone()))
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        cookies.add_private(cookie);
        Outcome::Success(ViewId(view_id))
    }
}
