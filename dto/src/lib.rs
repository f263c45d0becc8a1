pub mod mobile_number_update;
pub mod record;
