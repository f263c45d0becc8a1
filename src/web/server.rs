use rocket::{Build, Rocket};

use crate::roster::config::RosterConfig;
use crate::tools::env_args::retrieve_arg_value;
use crate::web::frontend::server::configure_frontend;

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

pub fn build_server(config: RosterConfig) -> Rocket<Build> {
    let port = get_port();
    info!(
        "Serving roster of booth \"{}\" [endpoint: {}, port: {port}]",
        config.booth_filter(),
        config.endpoint_base()
    );
    let rocket_build =
        rocket::build().configure(rocket::Config::figment().merge(("port", port)));

    configure_frontend(rocket_build, config)
}

fn get_port() -> u16 {
    retrieve_arg_value(PORT_ENV_ARG)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use crate::tools::env_args::with_env_args;
    use crate::web::server::get_port;

    const PORT_ENV_ARG: &str = "--port";
    const DEFAULT_PORT: u16 = 8000;

    #[test]
    fn should_get_custom_port() {
        let expected_port = 10;
        let port = with_env_args(vec![format!("{PORT_ENV_ARG}={expected_port}")], get_port);

        assert_eq!(expected_port, port);
    }

    #[test]
    fn should_get_default_port_when_wrong_type() {
        let port = with_env_args(vec![format!("{PORT_ENV_ARG}=doe")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_out_of_range() {
        let port = with_env_args(vec![format!("{PORT_ENV_ARG}=70000")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_no_arg() {
        let port = with_env_args(vec![], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }
}
