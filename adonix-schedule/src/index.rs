use log::warn;

use crate::labels::{time_label, weekday_label};
use crate::source::EventSource;
use crate::state::ToggleSet;
use crate::structs::{DisplayRow, Event};

/// Day-, favorite-, and search-bucketed views over one fetched event list.
///
/// The index distinguishes an absent schedule (fetch failed or never ran)
/// from a present-but-empty one: queries against an absent schedule return
/// `None`, queries against an empty schedule return an empty `Some`.
#[derive(Debug, Default)]
pub struct ScheduleIndex {
    events: Option<Vec<Event>>,
}

impl ScheduleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection, sorted ascending by start time. Wire order is
    /// otherwise preserved; no secondary sort is applied.
    pub fn load(&mut self, mut events: Vec<Event>) {
        events.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        self.events = Some(events);
    }

    /// Drop back to the absent state.
    pub fn mark_unavailable(&mut self) {
        self.events = None;
    }

    pub fn is_available(&self) -> bool {
        self.events.is_some()
    }

    pub fn events(&self) -> Option<&[Event]> {
        self.events.as_deref()
    }

    /// Fetch through `source`, then either load the result or mark the
    /// schedule unavailable. Dropping the returned future mid-flight leaves
    /// the index exactly as it was.
    pub async fn refresh(&mut self, source: &EventSource) {
        match source.fetch_events().await {
            Ok(events) => self.load(events),
            Err(err) => {
                warn!("schedule refresh failed: {err}");
                self.mark_unavailable();
            }
        }
    }

    /// Events whose start instant falls on the named weekday on the venue's
    /// calendar. Events without a representable start instant never appear
    /// in a day view.
    pub fn list_for_day(&self, day: &str, favorites: &ToggleSet) -> Option<Vec<DisplayRow>> {
        self.rows(favorites, |event| {
            weekday_label(event.start_time).is_some_and(|weekday| weekday == day)
        })
    }

    /// Events currently marked as favorites.
    pub fn list_favorites(&self, favorites: &ToggleSet) -> Option<Vec<DisplayRow>> {
        self.rows(favorites, |event| favorites.contains(&event.id))
    }

    /// Case-insensitive substring match against event names. The empty query
    /// matches every event.
    pub fn search(&self, query: &str, favorites: &ToggleSet) -> Option<Vec<DisplayRow>> {
        let needle = query.to_lowercase();
        self.rows(favorites, |event| {
            event.name.to_lowercase().contains(&needle)
        })
    }

    fn rows<F>(&self, favorites: &ToggleSet, mut keep: F) -> Option<Vec<DisplayRow>>
    where
        F: FnMut(&Event) -> bool,
    {
        let events = self.events.as_ref()?;

        Some(
            events
                .iter()
                .filter(|event| keep(event))
                .map(|event| DisplayRow {
                    key: event.id.clone(),
                    name: event.name.clone(),
                    time_label: time_label(event.start_time, event.end_time)
                        .unwrap_or_default(),
                    description: event.description.clone(),
                    is_favorite: favorites.contains(&event.id),
                })
                .collect(),
        )
    }
}
