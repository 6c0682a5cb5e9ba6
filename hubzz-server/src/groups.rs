use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use hubzz_core::{GroupMember, GroupProfile};

use crate::{context::ServerContext, errors::ServerResult, schemas::ModeQuery};

async fn profile(
    State(context): State<ServerContext>,
    Path(group_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<GroupProfile>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let profile = context.api.group_profile_by_id(mode, &group_id).await?;

    Ok(Json(profile))
}

async fn members(
    State(context): State<ServerContext>,
    Path(group_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<Vec<GroupMember>>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let members = context.api.members_for_group(mode, &group_id).await?;

    Ok(Json(members))
}

pub fn router() -> Router<ServerContext> {
    Router::new()
        .route("/groups/:group_id", get(profile))
        .route("/groups/:group_id/members", get(members))
}
