//! Price text <-> integer cents.

/// Parse a user supplied price into cents.
///
/// Accepts `"19"`, `"19.9"`, `"19.99"` and a comma as decimal separator.
/// Negative values and more than two fraction digits are rejected.
pub fn parse_price(raw: &str) -> Result<i64, String> {
    let s = raw.trim().replace(',', ".");
    if s.is_empty() {
        return Err("El precio es obligatorio".to_string());
    }
    if s.starts_with('-') {
        return Err("El precio no puede ser negativo".to_string());
    }

    let (whole, fraction) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s.as_str(), ""),
    };

    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(format!("Precio inválido: {}", raw.trim()));
    }
    if fraction.len() > 2 {
        return Err("El precio admite como máximo dos decimales".to_string());
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| format!("Precio inválido: {}", raw.trim()))?
    };
    let cents: i64 = format!("{:0<2}", fraction)
        .parse()
        .map_err(|_| format!("Precio inválido: {}", raw.trim()))?;

    whole
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or_else(|| "El precio es demasiado alto".to_string())
}

pub fn format_price(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("19.99"), Ok(1999));
        assert_eq!(parse_price("19.9"), Ok(1990));
        assert_eq!(parse_price("19"), Ok(1900));
        assert_eq!(parse_price(" 0,5 "), Ok(50));
        assert_eq!(parse_price(".75"), Ok(75));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(parse_price("").is_err());
        assert!(parse_price("-1").is_err());
        assert!(parse_price("1.999").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price(".").is_err());
        assert!(parse_price("1e3").is_err());
        assert!(parse_price("99999999999999999999").is_err());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1999), "19.99");
        assert_eq!(format_price(50), "0.50");
        assert_eq!(format_price(1900), "19.00");
    }
}
