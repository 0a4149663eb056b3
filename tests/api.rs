#[macro_use]
mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use common::{FakeBackend, sample_backend};
use user_admin_console::backend::errors::BackendError;
use user_admin_console::forms::users::INVALID_EMAIL_MESSAGE;

#[actix_web::test]
async fn api_lists_users_as_json() {
    let backend = sample_backend();
    let app = console_app!(backend);

    let req = test::TestRequest::get()
        .uri("/api/v1/users?username=neo")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["page_no"], 1);
    assert_eq!(body["page_size"], 10);
    assert_eq!(body["items"][0]["key"], "neo");
    assert_eq!(body["items"][0]["id"], 1);
    assert_eq!(body["items"][0]["is_frozen"], false);
}

#[actix_web::test]
async fn api_rejects_malformed_email() {
    let backend = sample_backend();
    let app = console_app!(backend);

    let req = test::TestRequest::get()
        .uri("/api/v1/users?email=bad")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], INVALID_EMAIL_MESSAGE);
    assert!(backend.searches().is_empty());
}

#[actix_web::test]
async fn api_reports_backend_failure_as_bad_gateway() {
    let backend = Arc::new(FakeBackend::failing(BackendError::Rejected {
        status: 500,
        message: Some("数据库异常".into()),
    }));
    let app = console_app!(backend);

    let req = test::TestRequest::get().uri("/api/v1/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "数据库异常");
}

#[actix_web::test]
async fn api_freeze_marks_user_frozen() {
    let backend = sample_backend();
    let app = console_app!(backend);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/1/freeze")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "冻结成功");
    assert!(backend.is_frozen("neo"));
    assert!(backend.searches().is_empty());
}

#[actix_web::test]
async fn api_freeze_of_unknown_user_surfaces_server_message() {
    let backend = sample_backend();
    let app = console_app!(backend);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/99/freeze")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "用户不存在");
}

#[actix_web::test]
async fn api_freeze_rejects_non_positive_id() {
    let backend = sample_backend();
    let app = console_app!(backend);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/0/freeze")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(backend.freeze_count(), 0);
}
