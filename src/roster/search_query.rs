use dto::record::Record;
use regex::Regex;
use std::sync::LazyLock;

const BOOTH_PARAM: &str = "bootNo";
const CARD_NO_PARAM: &str = "cardNo";
const NAME_PARAM: &str = "name";

static CARD_NO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9]+$").expect("card number pattern is valid"));

/// What the operator is looking for.
#[derive(Debug, PartialEq, Clone)]
pub enum SearchCriterion {
    /// Uppercased card number.
    CardNo(String),
    /// Name, as typed.
    Name(String),
}

impl SearchCriterion {
    /// A single alphanumeric word is a card number, anything else is a name.
    pub fn classify(term: &str) -> Self {
        if CARD_NO_REGEX.is_match(term) {
            SearchCriterion::CardNo(term.to_uppercase())
        } else {
            SearchCriterion::Name(term.to_owned())
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct SearchQuery {
    booth: String,
    criterion: SearchCriterion,
}

impl SearchQuery {
    pub fn new(term: &str, booth: &str) -> Self {
        Self {
            booth: booth.to_owned(),
            criterion: SearchCriterion::classify(term),
        }
    }

    /// Query parameters expected by the search endpoint.
    pub fn params(&self) -> [(&'static str, &str); 2] {
        let criterion_param = match &self.criterion {
            SearchCriterion::CardNo(card_no) => (CARD_NO_PARAM, card_no.as_str()),
            SearchCriterion::Name(name) => (NAME_PARAM, name.as_str()),
        };
        [(BOOTH_PARAM, self.booth.as_str()), criterion_param]
    }

    /// Whether a record sent back by the remote API may be shown.
    /// The remote filtering is not trusted: booth and card number are checked again.
    pub fn accepts(&self, record: &Record) -> bool {
        if *record.boot() != self.booth {
            return false;
        }

        match &self.criterion {
            SearchCriterion::CardNo(card_no) => record.has_card_no(card_no),
            SearchCriterion::Name(_) => true,
        }
    }
}
