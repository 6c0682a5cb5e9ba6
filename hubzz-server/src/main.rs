use hubzz_client::{ApiConfig, HubzzApi, MockPreference};
use hubzz_server::{logging, run_server, ServerContext};
use log::info;

#[tokio::main]
async fn main() {
    logging::init_logger();

    // The environment is read exactly once, here. Everything below works
    // off the values it is handed.
    let config = ApiConfig::from_env();
    let preference = MockPreference::from_env();

    info!("Upstream API base: {}", config.base_url);

    let context = ServerContext::new(HubzzApi::new(config), preference);

    run_server(context).await
}
