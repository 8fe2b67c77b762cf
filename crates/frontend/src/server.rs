//! HTTP surface: every request goes through one fallback handler that asks the
//! `App` to render the path.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse as _, Response};
use log::{error, info};
use tokio::net::TcpListener;

use crate::app::{App, RouteError};
use crate::config::ServerConfig;

/// Build the router serving `app`.
pub fn router(app: Arc<App>) -> Router {
    Router::new().fallback(handle).with_state(app)
}

async fn handle(State(app): State<Arc<App>>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
            "method not allowed",
        )
            .into_response();
    }

    match app.render(uri.path(), uri.query()).await {
        Ok(document) => {
            info!("{method} {uri} -> 200");
            Html(document.to_html()).into_response()
        }
        Err(err @ RouteError::NotFound { .. }) => {
            info!("{method} {uri} -> 404");
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Err(err @ RouteError::BadRequest(_)) => {
            info!("{method} {uri} -> 400");
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
    }
}

/// Bind `listener` and serve `app` until the process is stopped.
///
/// # Errors
/// Returns an error if the server fails while accepting connections.
pub async fn serve_on(listener: TcpListener, app: App) -> Result<()> {
    let local = listener.local_addr()?;
    info!(
        "serving {:?} on http://{local}",
        app.routes().collect::<Vec<_>>()
    );
    let router = router(Arc::new(app));
    axum::serve(listener, router).await.inspect_err(|err| {
        error!("server stopped: {err}");
    })?;
    Ok(())
}

/// Bind the configured address and serve `app`.
///
/// # Errors
/// Returns an error if the address is invalid, cannot be bound, or the
/// server fails.
pub async fn serve(config: &ServerConfig, app: App) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, app).await
}
