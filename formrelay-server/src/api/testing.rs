//! Test support: a recording mailer and a real listener for round trips.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{AppState, MailState, create_router};
use crate::mail::{MailError, Mailer, OutboundMessage};

/// Mailer that records every message instead of talking SMTP. Optionally
/// fails once `fail_after` messages have gone through, to exercise the
/// partial-send path.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    fail_after: Option<usize>,
}

impl RecordingMailer {
    pub fn failing_after(count: usize) -> Self {
        Self {
            sent: Arc::default(),
            fail_after: Some(count),
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let mut sent = self.sent.lock().unwrap();
        if let Some(limit) = self.fail_after {
            if sent.len() >= limit {
                return Err(MailError::Send("connection refused".to_string()));
            }
        }
        sent.push(message.clone());
        Ok(())
    }
}

/// Serve the router on an ephemeral local port.
pub async fn spawn_app_with(mail: MailState) -> SocketAddr {
    let app = create_router(AppState::new(mail));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Serve with a recording mailer, returning it for assertions.
pub async fn spawn_app(fail_after: Option<usize>) -> (SocketAddr, RecordingMailer) {
    let mailer = match fail_after {
        Some(count) => RecordingMailer::failing_after(count),
        None => RecordingMailer::default(),
    };
    let addr = spawn_app_with(MailState::Ready(Arc::new(mailer.clone()))).await;
    (addr, mailer)
}
