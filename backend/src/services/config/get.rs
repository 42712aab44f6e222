//! Handler for `GET /api/config`.

use actix_web::{web, HttpResponse, Responder};
use common::config::RuntimeConfig;
use log::debug;

/// Returns the runtime configuration as JSON.
pub async fn process(config: web::Data<RuntimeConfig>) -> impl Responder {
    debug!("Serving runtime configuration for {}", config.username);
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::config::{RuntimeConfig, CONFIG_ENDPOINT};

    use crate::services::config::configure_routes;

    fn runtime() -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: "https://api.example.test".to_string(),
            jwt_token: "secret".to_string(),
            username: "s1234567".to_string(),
        }
    }

    #[actix_web::test]
    async fn config_endpoint_returns_runtime_config() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(runtime()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri(CONFIG_ENDPOINT).to_request();
        let body: RuntimeConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, runtime());
    }

    #[actix_web::test]
    async fn config_endpoint_only_answers_get() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(runtime()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri(CONFIG_ENDPOINT).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn serialized_field_names_match_frontend() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(runtime()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri(CONFIG_ENDPOINT).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["api_base_url"], "https://api.example.test");
        assert_eq!(body["jwt_token"], "secret");
        assert_eq!(body["username"], "s1234567");
    }
}
