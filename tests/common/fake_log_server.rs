//! Fake HTTP server that serves access logs for URL source tests.
//!
//! Spins up a minimal `axum` server on a random TCP port bound to 127.0.0.1,
//! on its own thread with a current-thread `tokio` runtime. The listener is
//! bound before `start` returns, so requests made right away queue up instead
//! of being refused. Serves:
//! - `GET /access.log`: the configured body
//! - `GET /empty.log`: an empty body
//! - anything else: 404
//!
//! URL sources use a blocking HTTP client, which must not run inside a tokio
//! runtime. Keeping the server on a separate thread lets plain `#[test]`
//! functions call it directly.
//!
//! # Example
//!
//! ```rust,no_run
//! use common::fake_log_server::FakeLogServer;
//!
//! let server = FakeLogServer::start(NGINX_SAMPLE.join("\n")).unwrap();
//! let url = server.url("/access.log");
//! ```

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Handle to the running fake log server. Dropping it stops the server.
pub struct FakeLogServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeLogServer {
    /// Start serving `body` at `/access.log`.
    pub fn start(body: impl Into<String>) -> std::io::Result<Self> {
        let body = body.into();
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("fake log server runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("fake log server listener");
                let app = Router::new()
                    .route(
                        "/access.log",
                        get(move || {
                            let body = body.clone();
                            async move { body }
                        }),
                    )
                    .route("/empty.log", get(|| async { "" }));
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = rx.await;
                    })
                    .await
                    .expect("fake log server");
            });
        });

        Ok(Self {
            addr,
            shutdown: Some(tx),
        })
    }

    /// Full URL for `path` (e.g. `http://127.0.0.1:PORT/access.log`).
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for FakeLogServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
