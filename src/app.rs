//! Server bootstrap: route table and the HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::backend::UserBackend;
use crate::backend::http::HttpUserBackend;
use crate::models::config::ServerConfig;
use crate::routes::api::{api_v1_freeze_user, api_v1_users};
use crate::routes::main::index;
use crate::routes::users::{freeze_user, show_user_manage};

/// Registers every console route. Shared by [`run`] and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(Files::new("/assets", "./assets"))
        .service(index)
        .service(show_user_manage)
        .service(freeze_user)
        .service(
            web::scope("/api")
                .service(api_v1_users)
                .service(api_v1_freeze_user),
        );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let backend = HttpUserBackend::from_config(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;
    let backend: Arc<dyn UserBackend> = Arc::new(backend);
    let backend = web::Data::from(backend);

    // Key for the flash message cookies.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting user console on {}:{} against {}",
        bind_address.0,
        bind_address.1,
        server_config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .app_data(backend.clone())
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
