#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Router, body::Bytes, http::HeaderMap};
use tokio::net::TcpListener;

pub async fn spawn_router(
    router: Router,
) -> Result<(String, tokio::task::JoinHandle<()>), std::io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("test server stopped: {err}");
        }
    });
    Ok((format!("http://{}", addr), handle))
}

/// Last request seen by a mock handler, for post-hoc assertions.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Option<CapturedRequest>>>);

pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Captured {
    pub fn record(&self, headers: HeaderMap, body: Bytes) {
        *self.0.lock().unwrap() = Some(CapturedRequest { headers, body });
    }

    pub fn take(&self) -> Option<CapturedRequest> {
        self.0.lock().unwrap().take()
    }
}
