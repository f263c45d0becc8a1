use crate::roster::error::RosterError;
use crate::view::notice::Notice;
use dto::record::Record;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one search or update invocation.
/// Tickets are unique across all views, so that a view created after another
/// one's eviction never mistakes a predecessor's answer for its own.
pub type Ticket = u64;

static LAST_TICKET: AtomicU64 = AtomicU64::new(0);

fn take_ticket() -> Ticket {
    LAST_TICKET.fetch_add(1, Ordering::Relaxed) + 1
}

/// State of the lookup screen of one operator.
///
/// Operations are split in two halves: `begin_*` is called before the remote request
/// and returns a [Ticket], `complete_*` is called with that ticket once the request is over.
/// A completion is only applied if no newer invocation of the same kind has begun since;
/// otherwise it is discarded and the view is left untouched.
#[derive(Debug, Default)]
pub struct RosterView {
    search_term: String,
    records: Option<Vec<Record>>,
    notice: Option<Notice>,
    latest_search: Option<Ticket>,
    searching: bool,
    /// Latest update ticket of each record having an update in flight.
    pending_updates: HashMap<String, Ticket>,
    /// Mobile numbers typed by the operator and not yet accepted by the roster API.
    mobile_drafts: HashMap<String, String>,
}

impl RosterView {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn records(&self) -> Option<&[Record]> {
        self.records.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn is_updating(&self, record_id: &str) -> bool {
        self.pending_updates.contains_key(record_id)
    }

    pub fn mobile_draft(&self, record_id: &str) -> &str {
        self.mobile_drafts
            .get(record_id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn find_record(&self, record_id: &str) -> Option<&Record> {
        self.records
            .as_ref()?
            .iter()
            .find(|record| record.id() == record_id)
    }

    // region Search
    /// Forget previous results and notice, then flag the view as searching.
    pub fn begin_search(&mut self, term: &str) -> Ticket {
        let ticket = take_ticket();
        self.latest_search = Some(ticket);
        self.searching = true;
        self.search_term = term.to_owned();
        self.records = None;
        self.notice = None;
        self.mobile_drafts.clear();
        ticket
    }

    /// Apply the outcome of a search, unless a newer search has begun.
    /// Return whether the outcome has been applied.
    pub fn complete_search(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<Record>, RosterError>,
        booth: &str,
    ) -> bool {
        if self.latest_search != Some(ticket) {
            debug!("Discarding stale search outcome [ticket: {ticket}]");
            return false;
        }

        self.searching = false;
        match outcome {
            Ok(records) if records.is_empty() => {
                debug!(
                    "No record found [term: {}, booth: {booth}]",
                    self.search_term
                );
                self.notice = Some(Notice::no_records(booth));
            }
            Ok(records) => self.records = Some(records),
            Err(_) => self.notice = Some(Notice::search_failed()),
        }
        true
    }
    // endregion

    // region Mobile number update
    /// Flag the record as updating and remember the typed number.
    pub fn begin_update(&mut self, record_id: &str, mobile_number: &str) -> Ticket {
        let ticket = take_ticket();
        self.pending_updates.insert(record_id.to_owned(), ticket);
        self.mobile_drafts
            .insert(record_id.to_owned(), mobile_number.to_owned());
        self.notice = None;
        ticket
    }

    /// Apply the outcome of an update, unless a newer update of the same record has begun.
    /// On success, the record with the same id is replaced in place and its draft is cleared.
    /// Return whether the outcome has been applied.
    pub fn complete_update(
        &mut self,
        record_id: &str,
        ticket: Ticket,
        outcome: Result<Record, RosterError>,
    ) -> bool {
        if self.pending_updates.get(record_id) != Some(&ticket) {
            debug!("Discarding stale update outcome [record_id: {record_id}, ticket: {ticket}]");
            return false;
        }

        self.pending_updates.remove(record_id);
        match outcome {
            Ok(updated_record) => {
                if let Some(record) = self
                    .records
                    .as_mut()
                    .and_then(|records| records.iter_mut().find(|record| record.id() == record_id))
                {
                    *record = updated_record;
                }
                self.mobile_drafts.remove(record_id);
            }
            Err(_) => self.notice = Some(Notice::update_failed()),
        }
        true
    }
    // endregion

    pub fn report_export_failure(&mut self) {
        self.notice = Some(Notice::export_failed());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
