use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use hubzz_core::{generate_deep_link, DropInSession, Event, Stage, StreamQueue};
use serde::Serialize;

use crate::{
    context::ServerContext,
    errors::{ServerError, ServerResult},
    schemas::ModeQuery,
};

async fn event(
    State(context): State<ServerContext>,
    Path(event_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<Event>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let event = context.api.event_by_id(mode, &event_id).await?;

    Ok(Json(event))
}

async fn stages(
    State(context): State<ServerContext>,
    Path(event_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<Vec<Stage>>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let stages = context.api.stages_for_event(mode, &event_id).await?;

    Ok(Json(stages))
}

async fn stream_queue(
    State(context): State<ServerContext>,
    Path(event_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<StreamQueue>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let queue = context.api.stream_queue_for_event(mode, &event_id).await?;

    Ok(Json(queue))
}

/// A stage paired with a freshly generated deep link, for the stage page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StageJoin {
    stage: Stage,
    deep_link: String,
}

async fn stage_join(
    State(context): State<ServerContext>,
    Path((event_id, stage_id)): Path<(String, String)>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<StageJoin>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let stages = context.api.stages_for_event(mode, &event_id).await?;

    let stage = stages
        .into_iter()
        .find(|stage| stage.id == stage_id)
        .ok_or(ServerError::NotFound { resource: "stage" })?;

    let deep_link = generate_deep_link(&stage, context.api.client_base(), None)?;

    Ok(Json(StageJoin { stage, deep_link }))
}

async fn drop_in(
    State(context): State<ServerContext>,
    Path(event_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<DropInSession>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let session = context.api.drop_in_for_event(mode, &event_id).await?;

    Ok(Json(session))
}

pub fn router() -> Router<ServerContext> {
    Router::new()
        .route("/events/:event_id", get(event))
        .route("/events/:event_id/stages", get(stages))
        .route("/events/:event_id/stages/:stage_id", get(stage_join))
        .route("/events/:event_id/stream-queue", get(stream_queue))
        .route("/events/:event_id/drop-in", get(drop_in))
}
