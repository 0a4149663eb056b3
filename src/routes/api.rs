use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::backend::UserBackend;
use crate::console::FREEZE_SUCCESS_MESSAGE;
use crate::dto::users::{MessageResponse, UsersResponse};
use crate::forms::users::SearchUserForm;
use crate::models::config::ServerConfig;
use crate::routes::users::parse_state;
use crate::services::{ServiceError, users as users_service};

fn message(text: impl Into<String>) -> MessageResponse {
    MessageResponse {
        message: text.into(),
    }
}

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(text) => HttpResponse::UnprocessableEntity().json(message(text)),
        ServiceError::TypeConstraint(text) => HttpResponse::BadRequest().json(message(text)),
        ServiceError::Backend(text) => HttpResponse::BadGateway().json(message(text)),
        ServiceError::Unexpected(text) => {
            log::error!("Unexpected API failure: {text}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/users")]
pub async fn api_v1_users(
    req: HttpRequest,
    backend: web::Data<dyn UserBackend>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form = parse_state(req.query_string().as_bytes());

    match users_service::search_users(backend.get_ref(), form, server_config.default_page_size())
        .await
    {
        Ok(data) => HttpResponse::Ok().json(UsersResponse::from(data)),
        Err(err) => error_response(err),
    }
}

#[post("/v1/users/{user_id}/freeze")]
pub async fn api_v1_freeze_user(
    user_id: web::Path<i64>,
    backend: web::Data<dyn UserBackend>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match users_service::freeze_user(
        backend.get_ref(),
        user_id.into_inner(),
        &SearchUserForm::default(),
        server_config.default_page_size(),
    )
    .await
    {
        Ok(_) => HttpResponse::Ok().json(message(FREEZE_SUCCESS_MESSAGE)),
        Err(err) => error_response(err),
    }
}
