// ABOUTME: GET-only HTTP adapter dispatching registered routes (spec §4.8, §6.4)

use crate::env::Scope;
use crate::error::ExoError;
use crate::exec::run_program;
use crate::interpreter::Interpreter;
use crate::value::Value;
use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

type SharedInterpreter = Arc<Mutex<Interpreter>>;

const DEFAULT_BODY: &str = "<html><body></body></html>";

/// Binds `0.0.0.0:<port>` and serves every registered route with GET
/// (spec §6.4). Blocks the calling thread until the process is signaled to
/// stop.
pub async fn serve(interp: Interpreter, port: u16) -> std::io::Result<()> {
    let shared: SharedInterpreter = Arc::new(Mutex::new(interp));
    let app = Router::new().fallback(get(handle_request)).with_state(shared);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn handle_request(
    State(interp): State<SharedInterpreter>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let path = uri.path().to_string();
    let query = uri.query().unwrap_or("").to_string();

    // Every request serializes through one lock — spec §5's "global mutex
    // around the whole evaluator" default.
    let mut interp = interp.lock().expect("interpreter mutex poisoned");

    let body_lines = match interp.routes.get(&path) {
        Some(lines) => lines.clone(),
        None => return not_found(&interp),
    };

    let request_record = Value::map(vec![
        (Value::str("path"), Value::str(path.clone())),
        (Value::str("method"), Value::str("GET")),
        (Value::str("query"), Value::str(query)),
    ]);

    let scope = Scope::with_parent(interp.global.clone(), format!("route {}", path));
    scope.declare("request", request_record);

    match run_program(&body_lines, &scope, &mut interp) {
        Ok(Value::Null) => html_response(StatusCode::OK, DEFAULT_BODY.to_string()),
        Ok(value) => html_response(StatusCode::OK, value.to_string()),
        Err(err) => server_error(&err),
    }
}

fn not_found(interp: &Interpreter) -> Response {
    let mut body = String::from("<html><body><h1>404 Not Found</h1><ul>");
    for path in interp.routes.paths() {
        body.push_str(&format!("<li>{}</li>", path));
    }
    body.push_str("</ul></body></html>");
    html_response(StatusCode::NOT_FOUND, body)
}

fn server_error(err: &ExoError) -> Response {
    let body = format!("<html><body><pre>{}</pre></body></html>", err);
    html_response(StatusCode::INTERNAL_SERVER_ERROR, body)
}

fn html_response(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}
