use chrono::{DateTime, Utc};

/// Format a timestamp as DD/MM/YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}
