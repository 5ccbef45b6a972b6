use ics::properties::{Description, DtEnd, DtStart, RRule, Summary, TzID, TzName};
use ics::{Daylight, ICalendar, Standard, TimeZone};

use crate::labels::venue_time;
use crate::structs::Event;

const VENUE_TZID: &str = "America/Chicago";

/// Build an iCalendar document for a batch of events, venue-local times
/// throughout.
#[must_use]
pub fn to_ics(events: &[Event]) -> ICalendar<'_> {
    let mut cst_standard = Standard::new("19701101T020000", "-0500", "-0600");
    cst_standard.push(TzName::new("CST"));
    cst_standard.push(RRule::new("FREQ=YEARLY;BYMONTH=11;BYDAY=1SU"));

    let mut cdt_daylight = Daylight::new("19700308T020000", "-0600", "-0500");
    cdt_daylight.push(TzName::new("CDT"));
    cdt_daylight.push(RRule::new("FREQ=YEARLY;BYMONTH=3;BYDAY=2SU"));

    let mut timezone = TimeZone::daylight(VENUE_TZID, cdt_daylight);
    timezone.add_standard(cst_standard);

    let mut icalendar = ICalendar::new("2.0", "adonix-schedule");
    icalendar.add_timezone(timezone);

    for event in events {
        if let Some(ics_event) = event.to_ics() {
            icalendar.add_event(ics_event);
        }
    }

    icalendar
}

impl Event {
    /// `None` when either instant cannot be represented.
    #[must_use]
    pub fn to_ics(&self) -> Option<ics::Event<'_>> {
        let start = venue_time(self.start_time)?
            .format("%Y%m%dT%H%M%S")
            .to_string();
        let end = venue_time(self.end_time)?
            .format("%Y%m%dT%H%M%S")
            .to_string();

        let mut ics_event = ics::Event::new(self.id.clone(), start.clone());

        ics_event.push(TzID::new(VENUE_TZID));
        ics_event.push(DtStart::new(start));
        ics_event.push(DtEnd::new(end));
        ics_event.push(Summary::new(&self.name));

        if !self.description.is_empty() {
            ics_event.push(Description::new(&self.description));
        }

        Some(ics_event)
    }
}
