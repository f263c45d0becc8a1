use crate::roster::config::RosterConfig;
use crate::tools::web::build_client;
use crate::view::view_storage::ViewStorage;
use crate::web::frontend::frontend_controller;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use std::sync::Mutex;

pub fn configure_frontend(rocket_build: Rocket<Build>, config: RosterConfig) -> Rocket<Build> {
    let client = match build_client() {
        Ok(client) => client,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    };

    rocket_build
        .manage(config)
        .manage(client)
        .manage(Mutex::new(ViewStorage::default()))
        .mount(
            "/",
            routes![
                frontend_controller::index,
                frontend_controller::search,
                frontend_controller::update_mobile_number,
                frontend_controller::download_slip,
                frontend_controller::dismiss_notice,
            ],
        )
        .mount("/", FileServer::from("./public/static"))
        .register("/", catchers![frontend_controller::not_found])
        .attach(Template::fairing())
}
