use serde::{Deserialize, Serialize};
use validator::Validate;

/// The lifecycle phase stamped on a ticket by the upstream system.
///
/// This is issued state, not derived state. Presentation always re-derives
/// from the ticket's instants and the current wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Upcoming,
    Live,
    Past,
    Stub,
}

/// A ticket held by a user for an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub event_id: String,
    pub event_name: String,
    pub venue_name: String,
    pub host_name: String,
    pub zone_id: String,
    pub venue_module_id: String,
    #[validate(custom(function = super::instant))]
    pub start_time: String,
    #[validate(custom(function = super::instant))]
    pub end_time: String,
    /// When the join window opens. Falls back to `start_time` in the
    /// lifecycle engine, never here.
    #[validate(custom(function = super::instant))]
    pub can_join_at: Option<String>,
    #[validate(custom(function = super::instant))]
    pub issued_at: String,
    pub ticket_number: String,
    pub status: TicketStatus,
    pub deep_link: String,
    pub stub_id: Option<String>,
    /// Set when the holder is currently inside the event
    pub is_current: Option<bool>,
}

/// Someone who hosted a stubbed event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StubHost {
    pub id: String,
    pub name: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}

/// A guest recorded on a stub, with optional attendance details.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StubGuest {
    pub id: String,
    pub name: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub duration_minutes: Option<u32>,
    pub attendee_number: Option<u32>,
}

/// The durable record of a past event. Once the event has ended, a stub
/// supersedes the ticket's live affordances.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Stub {
    pub id: String,
    pub ticket_id: String,
    pub ticket_number: String,
    pub event_name: String,
    pub description: String,
    pub venue_name: String,
    #[validate(url)]
    pub venue_image_url: Option<String>,
    pub host_name: String,
    #[validate(custom(function = super::instant))]
    pub start_time: String,
    #[validate(custom(function = super::instant))]
    pub end_time: String,
    pub zone_id: String,
    pub venue_module_id: String,
    #[validate(url)]
    pub replay_url: Option<String>,
    #[validate(nested)]
    pub hosted_by: Vec<StubHost>,
    #[validate(nested)]
    pub guests: Vec<StubGuest>,
    pub guest_count: u32,
    pub stub_code: String,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::{decode, SchemaError, Stub, Ticket, TicketStatus};

    fn ticket_payload() -> serde_json::Value {
        json!({
            "id": "tkt-0091",
            "eventId": "evt-aurora-01",
            "eventName": "Aurora Nights",
            "venueName": "The Aurora Dome",
            "hostName": "Midnight Circuit",
            "zoneId": "zone-neon-7",
            "venueModuleId": "module-atrium",
            "startTime": "2026-09-18T19:00:00Z",
            "endTime": "2026-09-18T22:00:00Z",
            "canJoinAt": "2026-09-18T18:45:00Z",
            "issuedAt": "2026-08-01T10:12:00Z",
            "ticketNumber": "A-0091",
            "status": "upcoming",
            "deepLink": "https://app.hubzz.com/join?zone=zone-neon-7&venue=module-atrium&x=12.5&y=0&z=-4.25",
        })
    }

    #[test]
    fn test_valid_ticket() {
        let ticket: Ticket = decode(ticket_payload()).expect("decodes");

        assert_eq!(ticket.status, TicketStatus::Upcoming);
        assert_eq!(ticket.stub_id, None);
        assert_eq!(ticket.is_current, None);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let mut payload = ticket_payload();
        payload["status"] = json!("cancelled");

        assert!(matches!(
            decode::<Ticket>(payload),
            Err(SchemaError::Shape(_))
        ));
    }

    #[test]
    fn test_malformed_can_join_at_is_rejected() {
        let mut payload = ticket_payload();
        payload["canJoinAt"] = json!("08/15/2026");

        assert!(matches!(
            decode::<Ticket>(payload),
            Err(SchemaError::Invalid(_))
        ));
    }

    #[test]
    fn test_one_bad_guest_rejects_the_stub() {
        let payload = json!({
            "id": "stub-001",
            "ticketId": "tkt-0090",
            "ticketNumber": "A-0090",
            "eventName": "Velvet Frequencies",
            "description": "A night of downtempo in the velvet hall.",
            "venueName": "Velvet Hall",
            "hostName": "Midnight Circuit",
            "startTime": "2026-06-02T20:00:00Z",
            "endTime": "2026-06-02T23:00:00Z",
            "zoneId": "zone-neon-7",
            "venueModuleId": "module-velvet",
            "hostedBy": [
                { "id": "usr-ava", "name": "Ava Linden", "role": "Resident DJ" },
            ],
            "guests": [
                { "id": "usr-kai", "name": "Kai Moreno", "avatarUrl": "definitely-not-a-url" },
            ],
            "guestCount": 412,
            "stubCode": "VELVET-7F3K",
        });

        assert!(matches!(
            decode::<Stub>(payload),
            Err(SchemaError::Invalid(_))
        ));
    }
}
