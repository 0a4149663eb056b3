use std::env;

use config::Config;
use dotenvy::dotenv;

use user_admin_console::models::config::ServerConfig;
use user_admin_console::run;

/// Minimum length of the cookie signing secret, in bytes.
const MIN_SECRET_LEN: usize = 64;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    if server_config.secret.len() < MIN_SECRET_LEN {
        log::error!("APP_SECRET must be at least {MIN_SECRET_LEN} bytes long");
        std::process::exit(1);
    }

    run(server_config).await
}
