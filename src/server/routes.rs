//! Request routing and handlers.
//!
//! Handlers are plain functions from (method, url) to an [`ApiResponse`], so
//! they can be exercised without a listening socket.

use crate::controls::ControlId;
use crate::dashboard::Dashboard;
use crate::reactive::{ControlChange, OutputId, SessionView};
use crate::server::page::render_page;
use crate::server::sessions::SessionStore;
use serde::Serialize;
use tiny_http::Method;
use uuid::Uuid;

/// Shared state of a running server
pub struct AppState {
    pub dashboard: Dashboard,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(dashboard: Dashboard, max_sessions: usize) -> Self {
        Self {
            dashboard,
            sessions: SessionStore::new(max_sessions),
        }
    }
}

/// A recognised request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Page,
    Layout,
    CreateSession,
    GetSession(Uuid),
    DeleteSession(Uuid),
    UpdateControl {
        session: Uuid,
        control: ControlId,
        value: Option<String>,
    },
    NotFound,
}

impl Route {
    /// Match a method and raw request URL (path plus optional query)
    pub fn parse(method: &Method, url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match (method, segments.as_slice()) {
            (Method::Get, []) | (Method::Get, ["index.html"]) => Route::Page,
            (Method::Get, ["api", "layout"]) => Route::Layout,
            (Method::Post, ["api", "sessions"]) => Route::CreateSession,
            (Method::Get, ["api", "sessions", id]) => {
                parse_uuid(id).map_or(Route::NotFound, Route::GetSession)
            }
            (Method::Delete, ["api", "sessions", id]) => {
                parse_uuid(id).map_or(Route::NotFound, Route::DeleteSession)
            }
            (Method::Post, ["api", "sessions", id, "controls", control]) => {
                match (parse_uuid(id), ControlId::parse(control)) {
                    (Some(session), Some(control)) => Route::UpdateControl {
                        session,
                        control,
                        value: query_param(query, "value"),
                    },
                    _ => Route::NotFound,
                }
            }
            _ => Route::NotFound,
        }
    }
}

fn parse_uuid(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Percent-decoded value of `key` in a query string (`+` means space)
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if k != key {
            return None;
        }
        let v = v.replace('+', " ");
        urlencoding::decode(&v).ok().map(|s| s.into_owned())
    })
}

/// A response ready to be written to the socket
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: "application/json",
                body,
            },
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                Self::error(500, "serialization failed")
            }
        }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        let body = serde_json::json!({ "error": message.into() }).to_string();
        Self {
            status,
            content_type: "application/json",
            body,
        }
    }

    fn no_content() -> Self {
        Self {
            status: 204,
            content_type: "application/json",
            body: String::new(),
        }
    }
}

/// Body of every session response
#[derive(Debug, Serialize)]
struct SessionResponse {
    session: Uuid,
    #[serde(flatten)]
    view: SessionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Vec<OutputId>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    out_of_domain: bool,
}

/// Dispatch one request
pub fn handle(state: &AppState, method: &Method, url: &str) -> ApiResponse {
    let route = Route::parse(method, url);
    tracing::debug!(%method, url, ?route, "Request");

    match route {
        Route::Page => ApiResponse::html(render_page()),
        Route::Layout => ApiResponse::json(200, &state.dashboard.layout()),
        Route::CreateSession => {
            let session = state.dashboard.new_session();
            let view = session.view();
            let id = state.sessions.insert(session);
            tracing::info!(session = %id, "Session created");
            ApiResponse::json(
                201,
                &SessionResponse {
                    session: id,
                    view,
                    updated: None,
                    out_of_domain: false,
                },
            )
        }
        Route::GetSession(id) => match state.sessions.with_session(&id, |s| s.view()) {
            Some(view) => ApiResponse::json(
                200,
                &SessionResponse {
                    session: id,
                    view,
                    updated: None,
                    out_of_domain: false,
                },
            ),
            None => unknown_session(&id),
        },
        Route::DeleteSession(id) => {
            if state.sessions.remove(&id) {
                ApiResponse::no_content()
            } else {
                unknown_session(&id)
            }
        }
        Route::UpdateControl {
            session,
            control,
            value,
        } => {
            let Some(raw) = value else {
                return ApiResponse::error(400, "missing 'value' query parameter");
            };
            let change = match ControlChange::parse(control, &raw) {
                Ok(change) => change,
                Err(e) => {
                    tracing::warn!("{}", e);
                    return ApiResponse::error(400, e.to_string());
                }
            };
            let result = state.sessions.with_session(&session, |s| {
                let update = s.publish(change);
                let view = s.view_of(&update.updated);
                (update, view)
            });
            match result {
                Some((update, view)) => ApiResponse::json(
                    200,
                    &SessionResponse {
                        session,
                        view,
                        updated: Some(update.updated),
                        out_of_domain: update.out_of_domain,
                    },
                ),
                None => unknown_session(&session),
            }
        }
        Route::NotFound => ApiResponse::error(404, "not found"),
    }
}

fn unknown_session(id: &Uuid) -> ApiResponse {
    ApiResponse::error(404, format!("unknown session {id}"))
}
