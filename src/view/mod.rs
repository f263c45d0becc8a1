pub mod actions;
pub mod error;
pub mod notice;
pub mod roster_view;
pub mod view_storage;
