//! Runtime configuration shared by the server and the browser bundle.
//!
//! The backend builds a [`RuntimeConfig`] from its environment and serves it
//! at `GET /api/config`; the frontend fetches it once on startup. Credentials
//! therefore never appear in the compiled bundle.

use serde::{Deserialize, Serialize};

/// Path the frontend fetches its configuration from.
pub const CONFIG_ENDPOINT: &str = "/api/config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Base URL of the PostgREST data API, without a trailing resource path.
    pub api_base_url: String,
    /// Bearer token sent with every data API request.
    pub jwt_token: String,
    /// Owner attached to every row this client writes.
    pub username: String,
}
