use crate::view::notice::Notice;
use crate::view::roster_view::RosterView;
use dto::record::Record;
use serde::Serialize;

/// What the roster template needs to render a view.
#[derive(Debug, Serialize, PartialEq)]
pub struct RosterPage {
    booth: String,
    search_term: String,
    searching: bool,
    notice: Option<Notice>,
    records: Option<Vec<RecordCard>>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RecordCard {
    id: String,
    full_name: String,
    serial_number: String,
    age: u16,
    sex: String,
    card_no: String,
    boot: String,
    mobile_number: Option<String>,
    mobile_draft: String,
    updating: bool,
}

impl RosterPage {
    pub fn new(view: &RosterView, booth: &str) -> Self {
        let records = view.records().map(|records| {
            records
                .iter()
                .map(|record| RecordCard::new(view, record))
                .collect()
        });

        Self {
            booth: booth.to_owned(),
            search_term: view.search_term().to_owned(),
            searching: view.is_searching(),
            notice: view.notice().cloned(),
            records,
        }
    }
}

impl RecordCard {
    fn new(view: &RosterView, record: &Record) -> Self {
        Self {
            id: record.id().to_owned(),
            full_name: record.full_name().to_owned(),
            serial_number: record.srno().to_string(),
            age: *record.age(),
            sex: record.sex().to_owned(),
            card_no: record.card_no().to_owned(),
            boot: record.boot().to_owned(),
            mobile_number: record.mobile_number_on_file().map(str::to_owned),
            mobile_draft: view.mobile_draft(record.id()).to_owned(),
            updating: view.is_updating(record.id()),
        }
    }
}
