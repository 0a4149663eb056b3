//! Routes of the user management page.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::UserBackend;
use crate::backend::errors::FALLBACK_MESSAGE;
use crate::console::FREEZE_SUCCESS_MESSAGE;
use crate::domain::user::SearchFilter;
use crate::dto::users::console_url;
use crate::forms::users::SearchUserForm;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, users as users_service};

/// Parses console state from a query string or form body. Malformed input
/// yields the default state.
pub(crate) fn parse_state(raw: &[u8]) -> SearchUserForm {
    serde_html_form::from_bytes(raw).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed console state: {err}");
        SearchUserForm::default()
    })
}

#[get("/user_manage")]
pub async fn show_user_manage(
    req: HttpRequest,
    backend: web::Data<dyn UserBackend>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = parse_state(req.query_string().as_bytes());

    match users_service::load_user_manage_page(backend.get_ref(), form, &server_config).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &data.notices, "user_manage");
            context.insert("filter", &data.filter);
            context.insert("page", &data.page);
            context.insert("table", &data.table);
            context.insert("pager", &data.pager);
            context.insert("email_error", &data.email_error);
            context.insert("confirm_freeze", &server_config.confirm_freeze);
            context.insert(
                "reset_url",
                &console_url(&SearchFilter::default(), data.page),
            );

            render_template(&tera, "users/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the user management page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/user_manage/freeze/{user_id}")]
pub async fn freeze_user(
    user_id: web::Path<i64>,
    backend: web::Data<dyn UserBackend>,
    server_config: web::Data<ServerConfig>,
    form: web::Bytes,
) -> impl Responder {
    let state = parse_state(&form);
    let default_size = server_config.default_page_size();
    let current = console_url(&state.filter_unchecked(), state.page_state(default_size));

    match users_service::freeze_user(backend.get_ref(), user_id.into_inner(), &state, default_size)
        .await
    {
        Ok(refetch) => {
            FlashMessage::success(FREEZE_SUCCESS_MESSAGE).send();
            redirect(&console_url(&refetch.filter, refetch.page))
        }
        Err(ServiceError::Backend(message)) => {
            FlashMessage::error(message).send();
            redirect(&current)
        }
        Err(err) => {
            log::error!("Failed to freeze the user: {err}");
            FlashMessage::error(FALLBACK_MESSAGE).send();
            redirect(&current)
        }
    }
}
