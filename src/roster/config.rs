use crate::tools::env_args::retrieve_arg_value_or;
use crate::tools::web::encode_path_segment;
use derive_getters::Getters;

const ENDPOINT_BASE_ARG: &str = "--endpoint-base";
const BOOTH_FILTER_ARG: &str = "--booth";
const LOGO_ASSET_URL_ARG: &str = "--logo-url";

pub const DEFAULT_BOOTH_FILTER: &str = "264 Z. P. School,, Room No. 1, Khochivada";

/// Deployment-time settings of the roster lookup.
/// Built once at start-up, then shared by every request.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct RosterConfig {
    /// Base URL of the roster API, without trailing slash.
    endpoint_base: String,
    /// Only records from this booth are ever shown.
    booth_filter: String,
    /// Image printed at the top of every slip.
    logo_asset_url: String,
}

impl RosterConfig {
    pub fn new(endpoint_base: String, booth_filter: String, logo_asset_url: String) -> Self {
        let endpoint_base = endpoint_base.trim_end_matches('/').to_owned();
        Self {
            endpoint_base,
            booth_filter,
            logo_asset_url,
        }
    }

    /// Build the configuration from the args passed to the app, such as `--booth=<label>`.
    pub fn from_args() -> Self {
        Self::new(
            retrieve_arg_value_or(ENDPOINT_BASE_ARG, &get_default_endpoint_base()),
            retrieve_arg_value_or(BOOTH_FILTER_ARG, DEFAULT_BOOTH_FILTER),
            retrieve_arg_value_or(LOGO_ASSET_URL_ARG, &get_default_logo_asset_url()),
        )
    }

    pub fn search_url(&self) -> String {
        format!("{}/users/search", self.endpoint_base)
    }

    pub fn add_mobile_url(&self, record_id: &str) -> String {
        format!(
            "{}/users/{}/add-mobile",
            self.endpoint_base,
            encode_path_segment(record_id)
        )
    }
}

#[cfg(not(feature = "demo"))]
fn get_default_endpoint_base() -> String {
    "https://webprrism.in/api".to_owned()
}

#[cfg(not(feature = "demo"))]
fn get_default_logo_asset_url() -> String {
    "https://res.cloudinary.com/dlya5fr9x/image/upload/v1731044970/qdv3o65lyye7ozbjtoqg.png"
        .to_owned()
}

#[cfg(feature = "demo")]
fn get_default_endpoint_base() -> String {
    format!("{}/api", crate::demo_mock_server::demo_mock_server_uri())
}

#[cfg(feature = "demo")]
fn get_default_logo_asset_url() -> String {
    format!("{}/logo.png", crate::demo_mock_server::demo_mock_server_uri())
}
