use serde::Deserialize;

/// Envelope returned by the schedule endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Schedule {
    pub events: Vec<Event>,
}

/// One scheduled session, exactly as the endpoint reports it.
///
/// `start_time` and `end_time` are Unix epoch seconds, fractional values
/// allowed. Nothing is validated on decode: duplicate ids and inverted time
/// windows pass through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "eventId")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_time: f64,
    pub end_time: f64,
}

/// One row handed to the presentation layer.
///
/// `key` is the event id and stays valid across refreshes; `time_label` is
/// empty when the event's instants cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub key: String,
    pub name: String,
    pub time_label: String,
    pub description: String,
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_shape() {
        let body = r#"{
            "events": [
                {
                    "eventId": "64f8b1c2a7",
                    "name": "Keynote",
                    "description": "Opening remarks",
                    "startTime": 1726840800,
                    "endTime": 1726846200
                }
            ]
        }"#;

        let schedule: Schedule = serde_json::from_str(body).unwrap();
        assert_eq!(schedule.events.len(), 1);

        let event = &schedule.events[0];
        assert_eq!(event.id, "64f8b1c2a7");
        assert_eq!(event.name, "Keynote");
        assert_eq!(event.description, "Opening remarks");
        assert_eq!(event.start_time, 1726840800.0);
        assert_eq!(event.end_time, 1726846200.0);
    }

    #[test]
    fn decodes_fractional_timestamps() {
        let body = r#"{"events":[{"eventId":"a","name":"n","description":"","startTime":1726840800.25,"endTime":1726846200.75}]}"#;
        let schedule: Schedule = serde_json::from_str(body).unwrap();
        assert_eq!(schedule.events[0].start_time, 1726840800.25);
    }

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"events":[{"eventId":"a","name":"n","description":"","startTime":0,"endTime":0,"locations":[],"points":50}]}"#;
        let schedule: Schedule = serde_json::from_str(body).unwrap();
        assert_eq!(schedule.events.len(), 1);
    }

    #[test]
    fn rejects_mistyped_timestamp() {
        let body = r#"{"events":[{"eventId":"a","name":"n","description":"","startTime":"soon","endTime":0}]}"#;
        assert!(serde_json::from_str::<Schedule>(body).is_err());
    }

    #[test]
    fn rejects_missing_envelope() {
        let body = r#"[{"eventId":"a","name":"n","description":"","startTime":0,"endTime":0}]"#;
        assert!(serde_json::from_str::<Schedule>(body).is_err());
    }
}
