//! Client address resolution.
//!
//! # Responsibilities
//! - Attribute a request to the caller's IP address
//! - Honor only the configured list of trusted forwarding headers
//! - Fall back to the socket peer address when no trusted header applies
//!
//! # Design Decisions
//! - Trusted headers are checked in configured order; first non-empty wins
//! - Headers absent from the trusted list are never read
//! - Comma-separated chains resolve to their first (client-most) hop
//! - Never fails: the socket address is always a usable fallback
//!
//! # Trust Limitation
//! Taking the first hop of an `X-Forwarded-For` chain assumes every proxy
//! in front of the service is trusted. Behind an untrusted hop the first
//! entry can be spoofed by the client.

use axum::http::HeaderMap;

/// Resolve the address a request should be attributed to.
///
/// `remote_addr` is the transport peer in `host:port` form. An empty
/// `trusted_headers` slice means only the peer address is trusted.
pub fn resolve_client_ip<S: AsRef<str>>(
    headers: &HeaderMap,
    remote_addr: &str,
    trusted_headers: &[S],
) -> String {
    for name in trusted_headers {
        let name = name.as_ref();

        // Invalid names, non-ASCII values and blank values all count as absent.
        let value = match headers.get(name).and_then(|v| v.to_str().ok()) {
            Some(v) => v.trim(),
            None => continue,
        };
        if value.is_empty() {
            continue;
        }

        let candidate = match value.split_once(',') {
            Some((first, _)) => first.trim(),
            None => value,
        };

        tracing::trace!(header = %name, address = %candidate, "Client address from trusted header");
        return candidate.to_string();
    }

    host_of(remote_addr).to_string()
}

/// Strip the trailing `:port` from a socket address string.
///
/// Splits on the last colon. Input without a colon is returned unchanged.
/// Bracketed IPv6 hosts lose their brackets (`[::1]:443` gives `::1`).
pub fn host_of(remote_addr: &str) -> &str {
    let host = match remote_addr.rsplit_once(':') {
        Some((host, _port)) => host,
        None => return remote_addr,
    };

    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}
