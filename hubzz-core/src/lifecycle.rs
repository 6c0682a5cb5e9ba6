use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::time;

use crate::{parse_instant, Countdown, SchemaError, Ticket, TicketStatus};

/// What the ticket's action button should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    ViewStub,
    OpensSoon,
    Leave,
    JoinEvent,
}

impl CallToAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewStub => "View stub",
            Self::OpensSoon => "Opens soon",
            Self::Leave => "Leave",
            Self::JoinEvent => "Join event",
        }
    }
}

impl Display for CallToAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a click on the ticket should take the holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketTarget {
    /// The stub page for a past event
    Stub(String),
    /// The deep link into the client
    DeepLink(String),
}

/// Presentation state derived from a ticket and a single instant.
///
/// Nothing here is stored anywhere. Live views re-derive it every second,
/// because the current instant is the only input that changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketPresentation {
    pub is_live: bool,
    pub is_past: bool,
    pub join_open: bool,
    pub is_stub: bool,
    pub countdown: Countdown,
    pub call_to_action: CallToAction,
    pub disabled: bool,
}

/// Derives the full presentation state of a ticket at the given instant.
pub fn presentation(ticket: &Ticket, now: DateTime<Utc>) -> Result<TicketPresentation, SchemaError> {
    let start = parse_instant(&ticket.start_time)?;
    let end = parse_instant(&ticket.end_time)?;

    let join_opens_at = match &ticket.can_join_at {
        Some(instant) => parse_instant(instant)?,
        None => start,
    };

    let is_live = now >= start && now < end;
    let is_past = now >= end;
    let join_open = now >= join_opens_at;
    let is_stub = ticket.status == TicketStatus::Stub || ticket.stub_id.is_some();

    let call_to_action = if is_past && is_stub {
        CallToAction::ViewStub
    } else if !join_open && !is_live {
        CallToAction::OpensSoon
    } else if is_live {
        if ticket.is_current.unwrap_or(false) {
            CallToAction::Leave
        } else {
            CallToAction::JoinEvent
        }
    } else {
        CallToAction::JoinEvent
    };

    // Stub tickets always stay actionable, they lead to the stub page
    let disabled = if is_stub {
        false
    } else {
        !join_open && !is_live
    };

    Ok(TicketPresentation {
        is_live,
        is_past,
        join_open,
        is_stub,
        countdown: Countdown::until(join_opens_at, now),
        call_to_action,
        disabled,
    })
}

/// Resolves what a click on the ticket should do at the given instant.
///
/// Returns `None` when the click should do nothing. The join-window check is
/// repeated here even though a closed ticket renders disabled.
pub fn click_target(
    ticket: &Ticket,
    now: DateTime<Utc>,
    stub_href: Option<&str>,
) -> Result<Option<TicketTarget>, SchemaError> {
    let state = presentation(ticket, now)?;

    if state.is_stub {
        if let Some(href) = stub_href {
            return Ok(Some(TicketTarget::Stub(href.to_string())));
        }
    }

    if ticket.deep_link.is_empty() {
        return Ok(None);
    }

    if !state.join_open && !state.is_live {
        return Ok(None);
    }

    Ok(Some(TicketTarget::DeepLink(ticket.deep_link.clone())))
}

/// Re-derives a ticket's presentation once per second and publishes it on a
/// watch channel.
///
/// The task stops on its own once every receiver is gone, so tearing down
/// the consuming view is the only cancellation a caller needs to perform.
/// Publishing past teardown is a no-op by construction.
pub fn spawn_presentation_feed(
    ticket: Ticket,
) -> Result<watch::Receiver<TicketPresentation>, SchemaError> {
    let initial = presentation(&ticket, Utc::now())?;
    let (sender, receiver) = watch::channel(initial);

    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(1));
        interval.tick().await;

        loop {
            interval.tick().await;

            let Ok(state) = presentation(&ticket, Utc::now()) else {
                break;
            };

            if sender.send(state).is_err() {
                break;
            }
        }
    });

    Ok(receiver)
}

#[cfg(test)]
mod test {
    use chrono::{DateTime, Utc};

    use super::{click_target, presentation, spawn_presentation_feed, CallToAction, TicketTarget};
    use crate::{Ticket, TicketStatus};

    fn instant(value: &str) -> DateTime<Utc> {
        crate::parse_instant(value).expect("test instant parses")
    }

    fn ticket() -> Ticket {
        Ticket {
            id: "tkt-0091".to_string(),
            event_id: "evt-aurora-01".to_string(),
            event_name: "Aurora Nights".to_string(),
            venue_name: "The Aurora Dome".to_string(),
            host_name: "Midnight Circuit".to_string(),
            zone_id: "zone-neon-7".to_string(),
            venue_module_id: "module-atrium".to_string(),
            start_time: "2026-09-18T19:00:00Z".to_string(),
            end_time: "2026-09-18T22:00:00Z".to_string(),
            can_join_at: Some("2026-09-18T18:45:00Z".to_string()),
            issued_at: "2026-08-01T10:12:00Z".to_string(),
            ticket_number: "A-0091".to_string(),
            status: TicketStatus::Upcoming,
            deep_link: "https://app.hubzz.com/join?zone=zone-neon-7&venue=module-atrium&x=12.5&y=0&z=-4.25".to_string(),
            stub_id: None,
            is_current: None,
        }
    }

    #[test]
    fn test_before_join_window() {
        let state = presentation(&ticket(), instant("2026-09-18T12:00:00Z")).unwrap();

        assert!(!state.join_open);
        assert!(!state.is_live);
        assert_eq!(state.call_to_action, CallToAction::OpensSoon);
        assert!(state.disabled);
        assert_eq!(state.countdown.hours, 6);
        assert_eq!(state.countdown.minutes, 45);
    }

    #[test]
    fn test_join_window_without_can_join_at_opens_at_start() {
        let mut ticket = ticket();
        ticket.can_join_at = None;

        let state = presentation(&ticket, instant("2026-09-18T18:50:00Z")).unwrap();
        assert!(!state.join_open);
        assert_eq!(state.call_to_action, CallToAction::OpensSoon);
        assert!(state.disabled);

        let state = presentation(&ticket, instant("2026-09-18T19:00:00Z")).unwrap();
        assert!(state.join_open);
    }

    #[test]
    fn test_live_ticket_for_current_occupant() {
        let mut ticket = ticket();
        ticket.status = TicketStatus::Live;
        ticket.is_current = Some(true);

        let state = presentation(&ticket, instant("2026-09-18T20:30:00Z")).unwrap();

        assert!(state.is_live);
        assert_eq!(state.call_to_action, CallToAction::Leave);
        assert!(!state.disabled);
    }

    #[test]
    fn test_live_ticket_for_everyone_else() {
        let state = presentation(&ticket(), instant("2026-09-18T20:30:00Z")).unwrap();

        assert!(state.is_live);
        assert_eq!(state.call_to_action, CallToAction::JoinEvent);
        assert!(!state.disabled);
        assert!(state.countdown.is_zero());
    }

    #[test]
    fn test_ended_stub_ticket() {
        let mut ticket = ticket();
        ticket.status = TicketStatus::Stub;
        ticket.stub_id = Some("stub-001".to_string());

        let now = instant("2026-09-19T09:00:00Z");
        let state = presentation(&ticket, now).unwrap();

        assert!(state.is_past);
        assert!(state.is_stub);
        assert_eq!(state.call_to_action, CallToAction::ViewStub);
        assert!(!state.disabled);

        let target = click_target(&ticket, now, Some("/stubs/stub-001")).unwrap();
        assert_eq!(target, Some(TicketTarget::Stub("/stubs/stub-001".to_string())));
    }

    #[test]
    fn test_click_does_nothing_before_join_window() {
        let target = click_target(&ticket(), instant("2026-09-18T12:00:00Z"), None).unwrap();
        assert_eq!(target, None);
    }

    #[test]
    fn test_click_does_nothing_without_deep_link() {
        let mut ticket = ticket();
        ticket.deep_link = String::new();

        let target = click_target(&ticket, instant("2026-09-18T20:30:00Z"), None).unwrap();
        assert_eq!(target, None);
    }

    #[test]
    fn test_click_opens_deep_link_while_live() {
        let ticket = ticket();
        let target = click_target(&ticket, instant("2026-09-18T20:30:00Z"), None).unwrap();

        assert_eq!(target, Some(TicketTarget::DeepLink(ticket.deep_link)));
    }

    #[tokio::test]
    async fn test_feed_stops_when_receiver_is_dropped() {
        let mut receiver = spawn_presentation_feed(ticket()).unwrap();

        receiver.changed().await.expect("first tick arrives");

        let state = receiver.borrow().clone();
        assert_eq!(state.disabled, !state.join_open && !state.is_live);

        drop(receiver);
        // Nothing to assert directly, the task exits on the failed send.
        // The drop above must not panic or hang the runtime.
    }
}
