use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use hubzz_core::{Notification, Ticket};

use crate::{context::ServerContext, errors::ServerResult, schemas::ModeQuery};

async fn tickets(
    State(context): State<ServerContext>,
    Path(user_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<Vec<Ticket>>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let tickets = context.api.tickets_for_user(mode, &user_id).await?;

    Ok(Json(tickets))
}

async fn notifications(
    State(context): State<ServerContext>,
    Path(user_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<Vec<Notification>>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let notifications = context.api.notifications_for_user(mode, &user_id).await?;

    Ok(Json(notifications))
}

pub fn router() -> Router<ServerContext> {
    Router::new()
        .route("/users/:user_id/tickets", get(tickets))
        .route("/users/:user_id/notifications", get(notifications))
}
