use crate::view::roster_view::RosterView;
use cached::{Cached, TimedSizedCache};

const CACHE_SIZE: usize = 100;
const VIEW_LIFESPAN_IN_SECONDS: u64 = 60 * 60 * 12;

/// A container for the views of all operators. Only 100 views can be stored at a time,
/// and they expire after twelve hours.
#[derive(Debug)]
pub struct ViewStorage {
    views: TimedSizedCache<String, RosterView>,
}

impl ViewStorage {
    /// Get the view with the given id, creating an empty one if it doesn't exist (anymore).
    pub fn get_or_create(&mut self, id: &str) -> &mut RosterView {
        self.views
            .cache_get_or_set_with(id.to_owned(), RosterView::default)
    }
}

impl Default for ViewStorage {
    fn default() -> Self {
        let views = TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, VIEW_LIFESPAN_IN_SECONDS);
        Self { views }
    }
}
