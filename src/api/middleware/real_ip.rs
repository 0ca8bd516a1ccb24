//! Real client IP resolution.
//!
//! Proxy headers win over the socket peer address, in this order:
//! `True-Client-IP`, `X-Real-IP`, then the first `X-Forwarded-For` entry.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

const TRUE_CLIENT_IP: &str = "true-client-ip";
const X_REAL_IP: &str = "x-real-ip";
const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Resolved client address, stored as a request extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

/// Client IP named by proxy headers, if any parses.
pub fn client_ip_from_headers(headers: &HeaderMap) -> Option<IpAddr> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    header(TRUE_CLIENT_IP)
        .and_then(|v| v.trim().parse().ok())
        .or_else(|| header(X_REAL_IP).and_then(|v| v.trim().parse().ok()))
        .or_else(|| {
            header(X_FORWARDED_FOR)
                .and_then(|v| v.split(',').next())
                .and_then(|v| v.trim().parse().ok())
        })
}

/// Middleware that attaches `ClientIp` to the request.
///
/// Requests with no usable header and no connection info (for example
/// when the router is driven directly in tests) pass through untouched.
pub async fn real_ip(mut request: Request, next: Next) -> Response {
    let ip = client_ip_from_headers(request.headers()).or_else(|| {
        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
    });

    if let Some(ip) = ip {
        request.extensions_mut().insert(ClientIp(ip));
    }

    next.run(request).await
}
