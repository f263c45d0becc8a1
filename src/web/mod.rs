use crate::roster::config::RosterConfig;
use crate::web::server::build_server;
use rocket::{Build, Rocket};

pub mod error;
mod frontend;
mod server;
mod view_id;

pub fn start_servers() -> Rocket<Build> {
    build_server(RosterConfig::from_args())
}
