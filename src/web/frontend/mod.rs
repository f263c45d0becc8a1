mod frontend_controller;
mod roster_page;
pub mod server;
mod slip_download;
