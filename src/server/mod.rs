//! Local HTTP server for the dashboard.
//!
//! One background thread accepts requests with `tiny_http` and dispatches
//! them through [`routes::handle`]. Each browser page opens its own session
//! so viewers never see each other's selections.
//!
//! ## Routes
//!
//! - `GET /`: page shell
//! - `GET /api/layout`: declarative layout
//! - `POST /api/sessions`: new session with initial figures
//! - `GET /api/sessions/{id}`: current controls and figures
//! - `POST /api/sessions/{id}/controls/{region|year}?value=..`: publish a change
//! - `DELETE /api/sessions/{id}`: drop a session

mod page;
mod routes;
mod sessions;

pub use page::render_page;
pub use routes::{ApiResponse, AppState, Route, handle, query_param};
pub use sessions::SessionStore;

use crate::constants::{SERVER_POLL_MS, SERVER_STARTUP_TIMEOUT_SECS};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use tiny_http::{Header, Response, Server, StatusCode};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("Server did not start within {0} seconds")]
    StartupTimeout(u64),
}

/// Helper to create HTTP headers, returning None if the bytes are invalid
fn create_header(name: &[u8], value: &[u8]) -> Option<Header> {
    Header::from_bytes(name, value).ok()
}

/// A running dashboard server; stops when dropped
pub struct DashboardServer {
    addr: SocketAddr,
    shutdown_flag: Arc<AtomicBool>,
    server_thread: Option<JoinHandle<()>>,
}

impl DashboardServer {
    /// Bind `addr` and start serving on a background thread.
    ///
    /// Port 0 picks a free port; [`DashboardServer::addr`] reports the real one.
    pub fn start(state: Arc<AppState>, addr: &str) -> Result<Self, ServerError> {
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let shutdown_flag_clone = shutdown_flag.clone();
        let bind_addr = addr.to_string();

        // Channel for server startup synchronization
        let (tx, rx) = mpsc::channel();

        let server_thread = thread::spawn(move || {
            let server = match Server::http(&bind_addr) {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!("Failed to start dashboard server on {}: {}", bind_addr, e);
                    let _ = tx.send(Err(e.to_string()));
                    return;
                }
            };
            match server.server_addr().to_ip() {
                Some(bound) => {
                    let _ = tx.send(Ok(bound));
                }
                None => {
                    let _ = tx.send(Err("not an IP listener".to_string()));
                    return;
                }
            }

            loop {
                if shutdown_flag_clone.load(Ordering::Relaxed) {
                    break;
                }

                match server.recv_timeout(Duration::from_millis(SERVER_POLL_MS)) {
                    Ok(Some(request)) => {
                        let api = handle(&state, request.method(), request.url());
                        let status = api.status;
                        let mut response =
                            Response::from_string(api.body).with_status_code(StatusCode(status));
                        if let Some(header) =
                            create_header(&b"Content-Type"[..], api.content_type.as_bytes())
                        {
                            response = response.with_header(header);
                        }
                        if let Err(e) = request.respond(response) {
                            tracing::debug!("Client went away before response ({}): {}", status, e);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        tracing::error!("Dashboard server stopped: {}", e);
                        break;
                    }
                }
            }
            tracing::debug!("Dashboard server thread exiting");
        });

        // Wait for server to start with timeout
        let addr = match rx.recv_timeout(Duration::from_secs(SERVER_STARTUP_TIMEOUT_SECS)) {
            Ok(Ok(bound)) => bound,
            Ok(Err(message)) => {
                let _ = server_thread.join();
                return Err(ServerError::Bind {
                    addr: addr.to_string(),
                    message,
                });
            }
            Err(_) => {
                shutdown_flag.store(true, Ordering::SeqCst);
                return Err(ServerError::StartupTimeout(SERVER_STARTUP_TIMEOUT_SECS));
            }
        };

        tracing::info!("Dashboard serving at http://{}/", addr);

        Ok(Self {
            addr,
            shutdown_flag,
            server_thread: Some(server_thread),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Block until the server thread exits
    pub fn wait(mut self) {
        if let Some(handle) = self.server_thread.take() {
            let _ = handle.join();
        }
    }

    /// Ask the server thread to stop and wait for it
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.server_thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for DashboardServer {
    fn drop(&mut self) {
        self.stop();
    }
}
