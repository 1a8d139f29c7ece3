//! Client address middleware.
//! Attaches the resolved caller address to every request.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

use crate::http::server::AppState;
use crate::security::resolve_client_ip;

/// Resolved caller address, stored as a request extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientIp(pub String);

/// Resolve the caller address and store it as a [`ClientIp`] extension.
pub async fn client_ip_middleware(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ip = resolve_client_ip(req.headers(), &peer.to_string(), &state.trusted_headers[..]);

    tracing::debug!(
        client_ip = %ip,
        peer = %peer,
        path = %req.uri().path(),
        "Resolved client address"
    );

    req.extensions_mut().insert(ClientIp(ip));
    next.run(req).await
}
