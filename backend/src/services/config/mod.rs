//! # Runtime Configuration Service
//!
//! Serves the data API connection settings to the browser so the frontend
//! bundle never embeds credentials.
//!
//! ## Sub-modules:
//! - `get`: Returns the `RuntimeConfig` held in application data.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for backend API endpoints.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the configuration routes.
///
/// # Registered Routes:
///
/// *   **`GET /config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns `{ api_base_url, jwt_token, username }` as JSON.
///       Expects a `web::Data<RuntimeConfig>` registered on the app.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(get::process))
}
