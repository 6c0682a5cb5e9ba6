use std::sync::Arc;

use hubzz_client::{resolve_source, HubzzApi, MockPreference, SourceMode};

#[derive(Clone)]
pub struct ServerContext {
    pub api: Arc<HubzzApi>,
    mock_preference: MockPreference,
}

impl ServerContext {
    pub fn new(api: HubzzApi, mock_preference: MockPreference) -> Self {
        Self {
            api: Arc::new(api),
            mock_preference,
        }
    }

    /// Resolves the data source for one request, given its `mock` flag.
    pub fn resolve_mode(&self, request_flag: Option<&str>) -> SourceMode {
        resolve_source(request_flag, &self.mock_preference)
    }
}
