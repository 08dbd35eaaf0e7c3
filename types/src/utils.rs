use crate::{Event, EventsResponse, Location};

/// Lowercases a location name and replaces spaces with underscores.
///
/// This is the prefix of every event id generated for the location, e.g.
/// `"Las Vegas"` becomes `"las_vegas"`.
#[must_use]
pub fn location_slug(location: &str) -> String {
    location.to_lowercase().replace(' ', "_")
}

impl EventsResponse {
    #[must_use]
    pub fn new(location: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            location: Location {
                name: location.into(),
            },
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinates;

    #[test]
    fn test_location_slug() {
        assert_eq!(location_slug("Las Vegas"), "las_vegas");
        assert_eq!(location_slug("NEW YORK"), "new_york");
        assert_eq!(location_slug("paris"), "paris");
    }

    #[test]
    fn test_event_without_coordinates_omits_field() {
        let event = Event {
            id: "paris_0_1789".to_string(),
            date: "1789".to_string(),
            title: "Storming of the Bastille".to_string(),
            description: "Revolutionaries seize the Bastille.".to_string(),
            category: Some("political".to_string()),
            coordinates: None,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("coordinates").is_none());
        assert_eq!(value["category"], "political");
    }

    #[test]
    fn test_events_response_shape() {
        let response = EventsResponse::new(
            "Paris",
            vec![Event {
                id: "paris_0_1889".to_string(),
                date: "1889".to_string(),
                title: "Eiffel Tower".to_string(),
                description: "The tower opens.".to_string(),
                category: None,
                coordinates: Some(Coordinates {
                    lat: 48.8566,
                    lng: 2.3522,
                }),
            }],
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["location"]["name"], "Paris");
        assert_eq!(value["events"][0]["coordinates"]["lat"], 48.8566);
        assert_eq!(value["events"][0]["coordinates"]["lng"], 2.3522);
    }
}
