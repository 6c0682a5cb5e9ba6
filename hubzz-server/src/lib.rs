mod context;
mod errors;
mod events;
mod groups;
pub mod logging;
mod schemas;
mod stubs;
mod users;

pub use context::ServerContext;
pub use errors::{ServerError, ServerResult};

use std::{
    env,
    net::{Ipv6Addr, SocketAddr},
};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// The default port the server will listen on.
pub const DEFAULT_PORT: u16 = 9600;

/// Starts the hubzz preview server
pub async fn run_server(context: ServerContext) {
    let port = env::var("HUBZZ_SERVER_PORT")
        .map(|x| x.parse::<u16>().expect("Port must be a number"))
        .unwrap_or(DEFAULT_PORT);

    let addr: SocketAddr = (Ipv6Addr::UNSPECIFIED, port).into();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .merge(events::router())
        .merge(groups::router())
        .merge(users::router())
        .merge(stubs::router())
        .layer(cors)
        .with_state(context);

    let listener = TcpListener::bind(&addr).await.expect("listens on address");

    log::info!("Listening on port {}", port);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap()
}
