pub mod env_args;
pub mod web;

use std::fmt::Debug;

/// Log `message` and the error it receives, then hand back `value_to_return` in its place.
/// Meant to be used with `map_err`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

#[cfg(test)]
mod tests {
    use crate::tools::log_message_and_return;
    use rocket::http::Status;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_message_and_return_value() {
        init();

        let result: Result<(), Status> = Err("Connection refused").map_err(
            log_message_and_return("Can't reach roster API", Status::BadGateway),
        );

        assert_eq!(Err(Status::BadGateway), result);
    }
}
