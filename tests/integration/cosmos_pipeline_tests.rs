//! Full pipeline against mocked resource API and Cosmos DB endpoints

#[cfg(test)]
mod tests {
    use crate::common::{MockGraph, NotificationFactory, TEST_STORE_KEY, TestService};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use inbox_ingest::config::{Config, StoreBackend};
    use inbox_ingest::core::events::MemorySink;
    use inbox_ingest::server::{AppState, HttpServer};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cosmos_config(graph: &MockGraph, cosmos: &MockServer) -> Config {
        let mut config = TestService::config(graph, |_| {});
        config.ingest.store.backend = StoreBackend::Cosmos;
        config.ingest.credentials.endpoint = format!("{}/", cosmos.uri());
        config.ingest.credentials.auth_key = TEST_STORE_KEY.to_string();
        config
    }

    async fn post(state: AppState, body: serde_json::Value) -> StatusCode {
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;
        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(&body)
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_message_is_written_to_cosmos() {
        let graph = MockGraph::start().await;
        graph.mount_message("Users/u/Messages/1", "Hi", "Hello").await;

        let cosmos = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/dbs/mailstore/colls/emails/docs"))
            .and(header("x-ms-documentdb-partitionkey", r#"["Hi"]"#))
            .and(header_exists("authorization"))
            .and(body_partial_json(json!({"Subject": "Hi", "EmailBody": "Hello"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&cosmos)
            .await;

        let events = Arc::new(MemorySink::new());
        let state = AppState::from_config_with_events(cosmos_config(&graph, &cosmos), events.clone())
            .await
            .unwrap();

        let batch =
            NotificationFactory::batch(&[NotificationFactory::created("s1", "Users/u/Messages/1")]);
        assert_eq!(post(state, batch).await, StatusCode::NO_CONTENT);
        assert_eq!(events.failure_count(), 0);
    }

    #[actix_web::test]
    async fn test_store_rejection_is_isolated() {
        let graph = MockGraph::start().await;
        graph.mount_message("Users/u/Messages/1", "Rejected", "x").await;
        graph.mount_message("Users/u/Messages/2", "Accepted", "y").await;

        let cosmos = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-ms-documentdb-partitionkey", r#"["Rejected"]"#))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "code": "ServiceUnavailable",
                "message": "Request rate is large"
            })))
            .mount(&cosmos)
            .await;
        Mock::given(method("POST"))
            .and(header("x-ms-documentdb-partitionkey", r#"["Accepted"]"#))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&cosmos)
            .await;

        let events = Arc::new(MemorySink::new());
        let state = AppState::from_config_with_events(cosmos_config(&graph, &cosmos), events.clone())
            .await
            .unwrap();

        let batch = NotificationFactory::batch(&[
            NotificationFactory::created("s-rejected", "Users/u/Messages/1"),
            NotificationFactory::created("s-accepted", "Users/u/Messages/2"),
        ]);
        assert_eq!(post(state, batch).await, StatusCode::NO_CONTENT);
        assert_eq!(events.failed_subscriptions(), vec!["s-rejected".to_string()]);
    }

    #[actix_web::test]
    async fn test_provisioning_runs_at_startup() {
        let graph = MockGraph::start().await;
        let cosmos = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/dbs"))
            .and(body_partial_json(json!({"id": "mailstore"})))
            .respond_with(ResponseTemplate::new(409))
            .expect(1)
            .mount(&cosmos)
            .await;
        Mock::given(method("POST"))
            .and(path("/dbs/mailstore/colls"))
            .and(body_partial_json(json!({
                "id": "emails",
                "partitionKey": {"paths": ["/Subject"]}
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&cosmos)
            .await;

        let mut config = cosmos_config(&graph, &cosmos);
        config.ingest.store.provision = true;

        assert!(AppState::from_config(config).await.is_ok());
    }

    #[actix_web::test]
    async fn test_failed_provisioning_prevents_startup() {
        let graph = MockGraph::start().await;
        let cosmos = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "Unauthorized",
                "message": "The input authorization token can't serve the request."
            })))
            .mount(&cosmos)
            .await;

        let mut config = cosmos_config(&graph, &cosmos);
        config.ingest.store.provision = true;

        assert!(AppState::from_config(config).await.is_err());
    }
}
