use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Middleware logging every HTTP request: method, path, status, duration
/// and response size when the body length is known.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .map(format_size)
        .unwrap_or_else(|| "-".to_string());
    let duration = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!("{} {} {} {}ms {}", status.as_u16(), method, path, duration, size);
    } else if status.is_client_error() {
        tracing::warn!("{} {} {} {}ms {}", status.as_u16(), method, path, duration, size);
    } else {
        tracing::info!("{} {} {} {}ms {}", status.as_u16(), method, path, duration, size);
    }

    response
}

/// Byte count with thousands separators
fn format_size(raw: &str) -> String {
    let digits = raw.trim();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect::<String>() + " B"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size("0"), "0 B");
        assert_eq!(format_size("999"), "999 B");
        assert_eq!(format_size("1000"), "1.000 B");
        assert_eq!(format_size("5242880"), "5.242.880 B");
    }
}
