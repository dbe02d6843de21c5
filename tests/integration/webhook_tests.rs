//! Webhook end-to-end tests
//!
//! Requests go through the full actix application; messages come from a
//! mocked resource API and land in an in-memory store.

#[cfg(test)]
mod tests {
    use crate::common::{MessageFactory, MockGraph, NotificationFactory, TestService};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use inbox_ingest::server::HttpServer;
    use inbox_ingest::server::middleware::REQUEST_ID_HEADER;
    use inbox_ingest::utils::error::ErrorResponse;
    use serde_json::json;

    // ==================== Validation handshake ====================

    #[actix_web::test]
    async fn test_validation_token_is_echoed_as_plain_text() {
        let graph = MockGraph::start().await;
        let service = TestService::new(&graph);
        let app = test::init_service(HttpServer::create_app(service.data())).await;

        let req = test::TestRequest::post()
            .uri("/api/notifications?validationToken=abc%2B123%3D")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "abc+123=");
        assert_eq!(graph.request_count().await, 0);
        assert!(service.events.events().is_empty());
    }

    #[actix_web::test]
    async fn test_validation_works_over_get() {
        let graph = MockGraph::start().await;
        let service = TestService::new(&graph);
        let app = test::init_service(HttpServer::create_app(service.data())).await;

        let req = test::TestRequest::get()
            .uri("/api/notifications?validationToken=token")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // ==================== Batch responses ====================

    /// `{"value":[]}` is accepted without touching the store
    #[actix_web::test]
    async fn test_empty_batch() {
        let graph = MockGraph::start().await;
        let service = TestService::new(&graph);

        let status = service.post_batch(&json!({"value": []})).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(service.store.is_empty());
        assert_eq!(graph.request_count().await, 0);
    }

    /// A 404 from the resource API is logged and the batch still succeeds
    #[actix_web::test]
    async fn test_single_fetch_failure() {
        let graph = MockGraph::start().await;
        graph
            .mount_json("Users/u/Messages/gone", 404, MessageFactory::not_found())
            .await;
        let service = TestService::new(&graph);

        let batch =
            NotificationFactory::batch(&[NotificationFactory::created("sub-404", "Users/u/Messages/gone")]);
        let status = service.post_batch(&batch).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(service.store.is_empty());
        assert_eq!(service.events.failed_subscriptions(), vec!["sub-404".to_string()]);
    }

    /// A fetched message is stored verbatim under its subject
    #[actix_web::test]
    async fn test_single_message_is_stored() {
        let graph = MockGraph::start().await;
        graph
            .mount_json(
                "Users/u/Messages/1",
                200,
                json!({"subject": "Hi", "body": {"content": "Hello"}}),
            )
            .await;
        let service = TestService::new(&graph);

        let batch =
            NotificationFactory::batch(&[NotificationFactory::created("sub-1", "Users/u/Messages/1")]);
        let status = service.post_batch(&batch).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        let stored = service.store.partition("Hi");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].subject, "Hi");
        assert_eq!(stored[0].body, "Hello");
        assert_eq!(service.events.failure_count(), 0);
    }

    /// One success and one failure: exactly one record, one failure naming the subscription
    #[actix_web::test]
    async fn test_mixed_batch() {
        let graph = MockGraph::start().await;
        graph.mount_message("Users/u/Messages/ok", "Quarterly report", "<p>numbers</p>").await;
        graph
            .mount_json("Users/u/Messages/bad", 404, MessageFactory::not_found())
            .await;
        let service = TestService::new(&graph);

        let batch = NotificationFactory::batch(&[
            NotificationFactory::created("sub-ok", "Users/u/Messages/ok"),
            NotificationFactory::created("sub-bad", "Users/u/Messages/bad"),
        ]);
        let status = service.post_batch(&batch).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(service.stored_subjects(), vec!["Quarterly report".to_string()]);
        assert_eq!(service.events.failed_subscriptions(), vec!["sub-bad".to_string()]);
    }

    // ==================== Rejected bodies ====================

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let graph = MockGraph::start().await;
        let service = TestService::new(&graph);
        let app = test::init_service(HttpServer::create_app(service.data())).await;

        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .set_payload(r#"{"value": [ {"subscriptionId": "s1""#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "INVALID_NOTIFICATION_BATCH");
        assert_eq!(graph.request_count().await, 0);
    }

    #[actix_web::test]
    async fn test_missing_envelope_is_bad_request() {
        let graph = MockGraph::start().await;
        let service = TestService::new(&graph);

        assert_eq!(
            service.post_raw(r#"{"items": []}"#).await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(service.post_raw("").await, StatusCode::BAD_REQUEST);
        assert_eq!(service.post_raw("null").await, StatusCode::BAD_REQUEST);
        assert!(service.store.is_empty());
    }

    /// A lifecycle event without a resource fails alone; its siblings are stored
    #[actix_web::test]
    async fn test_notification_without_resource_is_skipped() {
        let graph = MockGraph::start().await;
        graph.mount_message("Users/u/Messages/1", "Kept", "body").await;
        let service = TestService::new(&graph);

        let status = service
            .post_batch(&json!({"value": [
                {"subscriptionId": "good", "resource": "Users/u/Messages/1"},
                {"subscriptionId": "life", "lifecycleEvent": "reauthorizationRequired"}
            ]}))
            .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(service.stored_subjects(), vec!["Kept".to_string()]);
        assert_eq!(service.events.failed_subscriptions(), vec!["life".to_string()]);
        assert_eq!(graph.request_count().await, 1);
    }

    #[actix_web::test]
    async fn test_array_body_is_bad_request() {
        let graph = MockGraph::start().await;
        let service = TestService::new(&graph);

        let status = service
            .post_raw(r#"[[{"subscriptionId": "s", "resource": "Users/u/Messages/1"}]]"#)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(graph.request_count().await, 0);
    }

    // ==================== Routing ====================

    #[actix_web::test]
    async fn test_custom_webhook_path() {
        let graph = MockGraph::start().await;
        let mut service = TestService::new(&graph);
        let mut config = (*service.state.config).clone();
        config.ingest.server.webhook_path = "/api/ReadInbox".to_string();
        service.state.config = std::sync::Arc::new(config);

        assert_eq!(
            service.post_batch(&json!({"value": []})).await,
            StatusCode::NO_CONTENT
        );

        let app = test::init_service(HttpServer::create_app(service.data())).await;
        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .set_payload(r#"{"value": []}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
