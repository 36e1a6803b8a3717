//! API URL helpers
//!
//! The backend listens on the same host as the page, on [`API_PORT`].

pub const API_PORT: u16 = 3000;

fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Base URL for API requests, e.g. "http://localhost:3000".
/// Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname)
}

/// Full URL of an API path such as "/api/products"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
