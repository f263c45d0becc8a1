use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of the request attaching a mobile number to a record.
#[derive(Getters, Debug, Serialize, Deserialize, PartialEq)]
pub struct MobileNumberUpdate {
    #[serde(rename = "MobileNumber")]
    mobile_number: String,
}

impl MobileNumberUpdate {
    pub fn new(mobile_number: String) -> Self {
        Self { mobile_number }
    }
}
