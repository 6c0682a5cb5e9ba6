use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use hubzz_core::Stub;

use crate::{context::ServerContext, errors::ServerResult, schemas::ModeQuery};

async fn stub(
    State(context): State<ServerContext>,
    Path(stub_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> ServerResult<Json<Stub>> {
    let mode = context.resolve_mode(query.mock.as_deref());
    let stub = context.api.stub_by_id(mode, &stub_id).await?;

    Ok(Json(stub))
}

pub fn router() -> Router<ServerContext> {
    Router::new().route("/stubs/:stub_id", get(stub))
}
