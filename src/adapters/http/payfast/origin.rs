//! Sender address resolution for ITN requests.
//!
//! Header names follow the CGI convention used by the settings
//! (`REMOTE_ADDR`, `HTTP_X_FORWARDED_FOR`). `REMOTE_ADDR` designates the
//! peer of the connection; other names are mapped to the HTTP header they
//! stand for.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderMap;

use crate::config::DEFAULT_IP_ADDRESS_HEADER;

/// Returns the validated sender address of a request, if any.
///
/// An absent header, or a value that is not a single IP address, yields
/// `None`.
pub fn resolve_origin_ip(
    headers: &HeaderMap,
    header_name: &str,
    peer_addr: Option<SocketAddr>,
) -> Option<String> {
    if header_name.eq_ignore_ascii_case(DEFAULT_IP_ADDRESS_HEADER) {
        return peer_addr.map(|addr| addr.ip().to_string());
    }

    let http_name = http_header_name(header_name);
    let Some(value) = headers.get(http_name.as_str()) else {
        tracing::debug!(header = %http_name, "Origin header absent");
        return None;
    };

    let raw = value.to_str().unwrap_or_default().trim();
    match raw.parse::<IpAddr>() {
        Ok(ip) => Some(ip.to_string()),
        Err(_) => {
            tracing::warn!(header = %http_name, value = %raw, "Invalid IP address in origin header");
            None
        }
    }
}

/// Maps `HTTP_X_FORWARDED_FOR` style names to `x-forwarded-for`.
fn http_header_name(name: &str) -> String {
    let name = name
        .strip_prefix("HTTP_")
        .or_else(|| name.strip_prefix("http_"))
        .unwrap_or(name);
    name.replace('_', "-").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("197.97.145.144:44310".parse().unwrap())
    }

    fn headers(name: &'static str, value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn remote_addr_uses_peer() {
        let resolved = resolve_origin_ip(&HeaderMap::new(), "REMOTE_ADDR", peer());
        assert_eq!(resolved.as_deref(), Some("197.97.145.144"));
    }

    #[test]
    fn remote_addr_without_peer_is_none() {
        assert_eq!(resolve_origin_ip(&HeaderMap::new(), "REMOTE_ADDR", None), None);
    }

    #[test]
    fn cgi_header_name_maps_to_http_header() {
        let headers = headers("x-forwarded-for", "41.74.179.194");
        let resolved = resolve_origin_ip(&headers, "HTTP_X_FORWARDED_FOR", peer());
        assert_eq!(resolved.as_deref(), Some("41.74.179.194"));
    }

    #[test]
    fn plain_header_name_is_accepted() {
        let headers = headers("x-real-ip", "::1");
        let resolved = resolve_origin_ip(&headers, "X_REAL_IP", peer());
        assert_eq!(resolved.as_deref(), Some("::1"));
    }

    #[test]
    fn missing_header_is_none() {
        assert_eq!(resolve_origin_ip(&HeaderMap::new(), "HTTP_X_FORWARDED_FOR", peer()), None);
    }

    #[test]
    fn invalid_header_value_is_none() {
        let headers = headers("x-forwarded-for", "not-an-ip");
        assert_eq!(resolve_origin_ip(&headers, "HTTP_X_FORWARDED_FOR", peer()), None);
    }

    #[test]
    fn address_list_is_not_a_single_ip() {
        let headers = headers("x-forwarded-for", "41.74.179.194, 10.0.0.1");
        assert_eq!(resolve_origin_ip(&headers, "HTTP_X_FORWARDED_FOR", peer()), None);
    }

    #[test]
    fn header_name_mapping() {
        assert_eq!(http_header_name("HTTP_X_FORWARDED_FOR"), "x-forwarded-for");
        assert_eq!(http_header_name("X_REAL_IP"), "x-real-ip");
    }
}
