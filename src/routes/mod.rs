//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::console::{Notice, NoticeLevel};

pub mod api;
pub mod main;
pub mod users;

/// Maps flash message levels to the CSS classes used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

fn notice_level_to_str(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "success",
        NoticeLevel::Error => "danger",
    }
}

/// A toast shown at the top of the page.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub level: &'static str,
}

/// Builds the context every page starts from: pending flash messages,
/// notices produced while handling this request and the active menu entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    notices: &[Notice],
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| Alert {
            message: f.content().to_string(),
            level: alert_level_to_str(&f.level()),
        })
        .chain(notices.iter().map(|notice| Alert {
            message: notice.message.clone(),
            level: notice_level_to_str(notice.level),
        }))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
