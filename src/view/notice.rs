use serde::Serialize;

pub const SEARCH_FAILED_MESSAGE: &str = "Error fetching user details. Please try again.";
pub const UPDATE_FAILED_MESSAGE: &str = "Error updating mobile number. Please try again.";
pub const EXPORT_FAILED_MESSAGE: &str = "The slip could not be generated. Please try again.";

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message shown above the results until the next operation or its dismissal.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Notice {
    level: NoticeLevel,
    text: String,
}

impl Notice {
    pub fn no_records(booth: &str) -> Self {
        Self::info(format!(
            r#"No users found in the boot "{booth}" with the given search criteria."#
        ))
    }

    pub fn search_failed() -> Self {
        Self::error(SEARCH_FAILED_MESSAGE.to_owned())
    }

    pub fn update_failed() -> Self {
        Self::error(UPDATE_FAILED_MESSAGE.to_owned())
    }

    pub fn export_failed() -> Self {
        Self::error(EXPORT_FAILED_MESSAGE.to_owned())
    }

    fn info(text: String) -> Self {
        Self {
            level: NoticeLevel::Info,
            text,
        }
    }

    fn error(text: String) -> Self {
        Self {
            level: NoticeLevel::Error,
            text,
        }
    }
}
