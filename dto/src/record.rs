use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A voter/candidate entry of the roster, as returned by the remote API.
/// Only `MobileNumber` may be modified, through the dedicated endpoint.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Record {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "FullName")]
    full_name: String,
    srno: SerialNumber,
    #[serde(rename = "Age")]
    age: u16,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "CardNo")]
    card_no: String,
    #[serde(rename = "Boot")]
    boot: String,
    #[serde(
        rename = "MobileNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    mobile_number: Option<String>,
}

impl Record {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        full_name: String,
        srno: SerialNumber,
        age: u16,
        sex: String,
        card_no: String,
        boot: String,
        mobile_number: Option<String>,
    ) -> Self {
        Self {
            id,
            full_name,
            srno,
            age,
            sex,
            card_no,
            boot,
            mobile_number,
        }
    }

    /// The mobile number, unless the remote API sent none or an empty one.
    pub fn mobile_number_on_file(&self) -> Option<&str> {
        self.mobile_number
            .as_deref()
            .filter(|mobile_number| !mobile_number.is_empty())
    }

    pub fn with_mobile_number(mut self, mobile_number: &str) -> Self {
        self.mobile_number = Some(mobile_number.to_owned());
        self
    }

    /// Whether this record has the given card number, ignoring case.
    pub fn has_card_no(&self, card_no: &str) -> bool {
        self.card_no.to_uppercase() == card_no.to_uppercase()
    }
}

/// The remote API sends serial numbers either as JSON numbers or as strings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum SerialNumber {
    Number(u64),
    Text(String),
}

impl Display for SerialNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SerialNumber::Number(number) => write!(f, "{number}"),
            SerialNumber::Text(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub const BOOTH: &str = "264 Z. P. School,, Room No. 1, Khochivada";
    pub const OTHER_BOOTH: &str = "12 Municipal Hall, Room No. 3, Dahanu";

    pub fn jane_doe() -> Record {
        Record::new(
            "5".to_owned(),
            "Jane Doe".to_owned(),
            SerialNumber::Number(42),
            34,
            "F".to_owned(),
            "ABC123".to_owned(),
            BOOTH.to_owned(),
            None,
        )
    }

    pub fn john_doe() -> Record {
        Record::new(
            "6".to_owned(),
            "John Doe".to_owned(),
            SerialNumber::Text("43".to_owned()),
            51,
            "M".to_owned(),
            "XYZ987".to_owned(),
            BOOTH.to_owned(),
            Some("9123456780".to_owned()),
        )
    }

    pub fn jane_doe_elsewhere() -> Record {
        Record::new(
            "7".to_owned(),
            "Jane Doe".to_owned(),
            SerialNumber::Number(7),
            29,
            "F".to_owned(),
            "DEF456".to_owned(),
            OTHER_BOOTH.to_owned(),
            None,
        )
    }

    impl Record {
        pub fn with_id(mut self, id: &str) -> Self {
            self.id = id.to_owned();
            self
        }

        pub fn with_card_no(mut self, card_no: &str) -> Self {
            self.card_no = card_no.to_owned();
            self
        }

        pub fn with_boot(mut self, boot: &str) -> Self {
            self.boot = boot.to_owned();
            self
        }
    }

    #[test]
    fn should_deserialize_record_from_remote_json() {
        let json = r#"{
            "_id": "5",
            "FullName": "Jane Doe",
            "srno": 42,
            "Age": 34,
            "Sex": "F",
            "CardNo": "ABC123",
            "Boot": "264 Z. P. School,, Room No. 1, Khochivada",
            "__v": 0
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(jane_doe(), record);
    }

    #[test]
    fn should_deserialize_textual_serial_number_and_mobile_number() {
        let json = r#"{
            "_id": "6",
            "FullName": "John Doe",
            "srno": "43",
            "Age": 51,
            "Sex": "M",
            "CardNo": "XYZ987",
            "Boot": "264 Z. P. School,, Room No. 1, Khochivada",
            "MobileNumber": "9123456780"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(john_doe(), record);
    }

    #[test]
    fn should_not_serialize_missing_mobile_number() {
        let json = serde_json::to_value(jane_doe()).unwrap();

        assert!(json.get("MobileNumber").is_none());
        assert_eq!("5", json.get("_id").unwrap());
    }

    #[parameterized(
        mobile_number = {None, Some(""), Some("9123456780")},
        expected = {None, None, Some("9123456780")}
    )]
    fn should_get_mobile_number_on_file(mobile_number: Option<&str>, expected: Option<&str>) {
        let mut record = jane_doe();
        if let Some(mobile_number) = mobile_number {
            record = record.with_mobile_number(mobile_number);
        }

        assert_eq!(expected, record.mobile_number_on_file());
    }

    #[parameterized(
        card_no = {"ABC123", "abc123", "AbC123", "ABC12", "ABC1234"},
        expected = {true, true, true, false, false}
    )]
    fn should_compare_card_no_ignoring_case(card_no: &str, expected: bool) {
        assert_eq!(expected, jane_doe().has_card_no(card_no));
    }

    #[test]
    fn should_display_serial_number() {
        assert_eq!("42", SerialNumber::Number(42).to_string());
        assert_eq!("A-17", SerialNumber::Text("A-17".to_owned()).to_string());
    }
}
