use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    Owner,
    Admin,
    Member,
}

/// A member of a group.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: String,
    pub username: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub role: GroupRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupEventStatus {
    Upcoming,
    Live,
    Ended,
}

/// An event as listed on a group's profile page.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupEvent {
    pub id: String,
    pub name: String,
    #[validate(custom(function = super::instant))]
    pub start_time: String,
    #[validate(custom(function = super::instant))]
    pub end_time: String,
    pub host_name: String,
    pub status: GroupEventStatus,
    #[validate(url)]
    pub image_url: Option<String>,
    pub attendee_count: Option<u32>,
    pub capacity: Option<u32>,
    pub is_free: Option<bool>,
    pub rsvp_label: Option<String>,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
}

/// Merchandise sold or unlocked through a group.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupMerch {
    pub id: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub price_hbc: f64,
    pub stub_cost: Option<u32>,
    pub required_stubs: Option<u32>,
    pub owned_stubs: Option<u32>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub supply_label: Option<String>,
    pub unlock_note: Option<String>,
}

/// A group's public profile, with its events, merch, and member list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GroupProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    #[validate(url)]
    pub cover_image_url: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub follower_label: Option<String>,
    pub is_followed: Option<bool>,
    pub stub_count: Option<u32>,
    pub badge_label: Option<String>,
    #[validate(nested)]
    pub events: Vec<GroupEvent>,
    #[validate(nested)]
    pub merch: Vec<GroupMerch>,
    #[validate(nested)]
    pub members: Vec<GroupMember>,
}
