use serde::Deserialize;

/// Query parameters accepted by every preview endpoint.
#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    /// Tri-state mock flag: `"false"`/`"0"` force a remote read, any other
    /// present value forces mock, absence falls through to the environment
    pub mock: Option<String>,
}
