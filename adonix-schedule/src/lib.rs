mod index;
mod labels;
mod source;
mod state;
mod structs;

#[cfg(feature = "ics")]
mod export;

pub use index::ScheduleIndex;
pub use labels::{time_label, weekday_label};
pub use source::{EventSource, FetchError, SCHEDULE_ENDPOINT};
pub use state::{ExpandedSet, FavoriteSet, ToggleSet};
pub use structs::{DisplayRow, Event, Schedule};

#[cfg(feature = "ics")]
pub use export::to_ics;
