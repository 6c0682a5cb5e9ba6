use chrono::DateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::VenueCoordinates;

/// A scheduled event on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_event_window))]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    #[validate(custom(function = super::instant))]
    pub start_time: String,
    #[validate(custom(function = super::instant))]
    pub end_time: String,
    pub group_id: String,
    pub zone_id: String,
    #[validate(nested)]
    pub venue_coordinates: VenueCoordinates,
    pub ticket_price: f64,
    #[validate(url)]
    pub recording_url: Option<String>,
}

/// An event must end after it starts.
fn validate_event_window(event: &Event) -> Result<(), ValidationError> {
    let start = DateTime::parse_from_rfc3339(&event.start_time);
    let end = DateTime::parse_from_rfc3339(&event.end_time);

    match (start, end) {
        (Ok(start), Ok(end)) if start >= end => Err(ValidationError::new("event_window")),
        // Unparseable instants are already rejected by the field validators
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    /// The stage plays through the spatial audio system inside the venue
    Spatial,
    /// The stage embeds a stream from an external platform
    External,
}

/// A stage inside an event's venue.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: String,
    pub name: String,
    pub venue_module_id: String,
    pub zone_id: String,
    pub stream_type: StreamType,
    /// Only meaningful when `stream_type` is [`StreamType::External`]
    #[validate(url)]
    pub external_stream_url: Option<String>,
    pub deep_link: String,
    #[validate(nested)]
    pub venue_coordinates: VenueCoordinates,
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamPlatform {
    Kick,
    Twitch,
    YouTube,
}

/// A single external stream that can be embedded on a stage.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub platform: StreamPlatform,
    pub channel_id: String,
    #[validate(url)]
    pub embed_url: String,
    pub priority: i64,
}

/// The ordered set of streams available to an event, with a pointer to the
/// one that is currently on air.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StreamQueue {
    pub event_id: String,
    pub active_stream_index: i64,
    #[validate(nested)]
    pub streams: Vec<Stream>,
}

impl StreamQueue {
    /// Resolves the stream the active index points at. An empty queue or an
    /// index outside the queue is a representable state, not an error.
    pub fn active_stream(&self) -> Option<&Stream> {
        usize::try_from(self.active_stream_index)
            .ok()
            .and_then(|index| self.streams.get(index))
    }
}
