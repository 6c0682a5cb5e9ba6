use hubzz_core::{
    decode, decode_many, DropInSession, Event, GroupMember, GroupProfile, Notification,
    SchemaError, Stage, StreamQueue, Stub, Ticket,
};
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::{mock, ApiConfig, SourceMode};

/// The header remote reads authenticate with, server-side only.
pub const API_KEY_HEADER: &str = "x-hubzz-api-key";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{resource} was not found")]
    NotFound { resource: &'static str },

    #[error("Missing required {0}")]
    BadRequest(&'static str),

    #[error("Upstream responded with status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Upstream payload failed validation: {0}")]
    Validation(String),

    #[error("Failed to reach upstream: {0}")]
    Fetch(String),
}

impl From<SchemaError> for ApiError {
    fn from(error: SchemaError) -> Self {
        Self::Validation(error.to_string())
    }
}

/// The typed domain client.
///
/// One read per domain entity. Every payload, mock or remote, goes through
/// the schema gate before a caller sees it, and there is no caching and no
/// retrying: a failure is terminal for the originating request.
pub struct HubzzApi {
    http: Client,
    config: ApiConfig,
}

impl HubzzApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// The client app base that generated deep links should point at.
    pub fn client_base(&self) -> &str {
        &self.config.client_base_url
    }

    pub async fn event_by_id(&self, mode: SourceMode, event_id: &str) -> Result<Event, ApiError> {
        let event_id = require_id("event id", event_id)?;

        let payload = match mode {
            SourceMode::Mock => mock::event(),
            SourceMode::Remote => self.fetch(&format!("/events/{}", event_id), "event").await?,
        };

        Ok(decode(payload)?)
    }

    pub async fn stages_for_event(
        &self,
        mode: SourceMode,
        event_id: &str,
    ) -> Result<Vec<Stage>, ApiError> {
        let event_id = require_id("event id", event_id)?;

        let payload = match mode {
            SourceMode::Mock => mock::stages(),
            SourceMode::Remote => {
                self.fetch(&format!("/events/{}/stages", event_id), "event")
                    .await?
            }
        };

        Ok(decode_many(payload)?)
    }

    pub async fn stream_queue_for_event(
        &self,
        mode: SourceMode,
        event_id: &str,
    ) -> Result<StreamQueue, ApiError> {
        let event_id = require_id("event id", event_id)?;

        let payload = match mode {
            SourceMode::Mock => mock::stream_queue(),
            SourceMode::Remote => {
                self.fetch(&format!("/events/{}/stream-queue", event_id), "event")
                    .await?
            }
        };

        Ok(decode(payload)?)
    }

    pub async fn drop_in_for_event(
        &self,
        mode: SourceMode,
        event_id: &str,
    ) -> Result<DropInSession, ApiError> {
        let event_id = require_id("event id", event_id)?;

        let payload = match mode {
            SourceMode::Mock => mock::drop_in_session(),
            SourceMode::Remote => {
                self.fetch(&format!("/events/{}/drop-in", event_id), "event")
                    .await?
            }
        };

        Ok(decode(payload)?)
    }

    pub async fn group_profile_by_id(
        &self,
        mode: SourceMode,
        group_id: &str,
    ) -> Result<GroupProfile, ApiError> {
        let group_id = require_id("group id", group_id)?;

        let payload = match mode {
            SourceMode::Mock => {
                let profile = mock::group_profile();

                // The profile fixture is keyed by a single id, so any other
                // id is a miss rather than a shapeshifted response
                if profile.get("id").and_then(Value::as_str) != Some(group_id) {
                    return Err(ApiError::NotFound { resource: "group" });
                }

                profile
            }
            SourceMode::Remote => self.fetch(&format!("/groups/{}", group_id), "group").await?,
        };

        Ok(decode(payload)?)
    }

    pub async fn members_for_group(
        &self,
        mode: SourceMode,
        group_id: &str,
    ) -> Result<Vec<GroupMember>, ApiError> {
        let group_id = require_id("group id", group_id)?;

        let payload = match mode {
            SourceMode::Mock => mock::group_members(),
            SourceMode::Remote => {
                self.fetch(&format!("/groups/{}/members", group_id), "group")
                    .await?
            }
        };

        Ok(decode_many(payload)?)
    }

    pub async fn tickets_for_user(
        &self,
        mode: SourceMode,
        user_id: &str,
    ) -> Result<Vec<Ticket>, ApiError> {
        let user_id = require_id("user id", user_id)?;

        let payload = match mode {
            SourceMode::Mock => mock::tickets(),
            SourceMode::Remote => {
                self.fetch(&format!("/users/{}/tickets", user_id), "user")
                    .await?
            }
        };

        Ok(decode_many(payload)?)
    }

    pub async fn notifications_for_user(
        &self,
        mode: SourceMode,
        user_id: &str,
    ) -> Result<Vec<Notification>, ApiError> {
        let user_id = require_id("user id", user_id)?;

        let payload = match mode {
            SourceMode::Mock => mock::notifications(),
            SourceMode::Remote => {
                self.fetch(&format!("/users/{}/notifications", user_id), "user")
                    .await?
            }
        };

        Ok(decode_many(payload)?)
    }

    pub async fn stub_by_id(&self, mode: SourceMode, stub_id: &str) -> Result<Stub, ApiError> {
        let stub_id = require_id("stub id", stub_id)?;

        let payload = match mode {
            SourceMode::Mock => {
                mock::stub(stub_id).ok_or(ApiError::NotFound { resource: "stub" })?
            }
            SourceMode::Remote => self.fetch(&format!("/stubs/{}", stub_id), "stub").await?,
        };

        Ok(decode(payload)?)
    }

    /// Issues a remote read and returns the raw JSON payload.
    ///
    /// Classification happens as early as possible: transport failures,
    /// non-2xx statuses, and unparseable bodies each get their own error
    /// before the schema gate ever runs.
    async fn fetch(&self, path: &str, resource: &'static str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        debug!("GET {}", url);

        let mut request = self.http.get(url);

        if self.config.send_api_key {
            if let Some(key) = &self.config.api_key {
                request = request.header(API_KEY_HEADER, key);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, resource));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))
    }
}

fn classify_status(status: StatusCode, resource: &'static str) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound { resource };
    }

    ApiError::UpstreamStatus {
        status: status.as_u16(),
    }
}

fn require_id<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ApiError::BadRequest(name));
    }

    Ok(trimmed)
}
