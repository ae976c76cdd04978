use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod mail;
pub mod upload;

use api::{AppState, MailState};
use mail::smtp::SmtpMailer;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formrelay_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Formrelay server...");

    // Missing mail configuration does not keep the server from starting;
    // the submission endpoints answer 500 until it is fixed.
    let mail_state = match config::MailConfig::load() {
        Ok(cfg) => match SmtpMailer::from_config(&cfg) {
            Ok(mailer) => {
                tracing::info!(
                    "SMTP transport configured for {}:{}",
                    cfg.smtp_host,
                    cfg.smtp_port
                );
                MailState::Ready(Arc::new(mailer))
            }
            Err(e) => {
                tracing::error!("Failed to build SMTP transport: {}", e);
                MailState::Unavailable("Invalid mail configuration".to_string())
            }
        },
        Err(e) => {
            tracing::error!("Mail configuration error: {}", e);
            MailState::Unavailable(e.to_string())
        }
    };

    let app = api::create_router(AppState::new(mail_state));

    let addr = std::env::var("FORMRELAY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
