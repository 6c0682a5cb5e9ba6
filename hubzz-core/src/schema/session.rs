use serde::{Deserialize, Serialize};
use validator::Validate;

/// Someone present in a drop-in room.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DropInParticipant {
    pub id: String,
    pub name: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub role: Option<String>,
    pub is_host: Option<bool>,
    pub is_muted: Option<bool>,
    pub is_speaking: Option<bool>,
}

/// An ambient audio/video room running alongside the main stage stream.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DropInSession {
    pub id: String,
    pub location_label: Option<String>,
    pub room_name: Option<String>,
    #[validate(nested)]
    pub participants: Vec<DropInParticipant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Event,
    FriendRequest,
    FriendAccepted,
    System,
}

/// A notification shown in the user's feed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
    #[validate(custom(function = super::instant))]
    pub created_at: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
}
