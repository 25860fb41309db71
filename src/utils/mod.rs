//! Utility functions shared across the application.

pub mod schema;

/// Strips Bedrock Gateway prefix from tool name.
///
/// Format: `gateway-target-id___tool_name` → `tool_name`
#[must_use]
pub fn strip_gateway_prefix(name: &str) -> String {
    name.split_once("___").map_or_else(
        || name.to_string(),
        |(_, actual_name)| actual_name.to_string(),
    )
}

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count with 1024-based units, e.g. `1578654` → `"1.51 MB"`.
///
/// Ties round away from zero (`74880` → `"73.13 KB"`) and trailing zeros after
/// the decimal point are dropped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (value * factor).round() / factor;
    let formatted = format!("{rounded:.decimals$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    format!("{trimmed} {}", BYTE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_gateway_prefix() {
        assert_eq!(strip_gateway_prefix("target-1___analyze_anomaly"), "analyze_anomaly");
        assert_eq!(strip_gateway_prefix("list_packets"), "list_packets");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(512, 2), "512 Bytes");
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(74_880, 2), "73.13 KB");
        assert_eq!(format_bytes(1_578_654, 2), "1.51 MB");
        assert_eq!(format_bytes(12_345_678, 2), "11.77 MB");
    }

    #[test]
    fn test_format_bytes_rounds_ties_up() {
        // 1.5 KB and 73.125 KB are exact binary fractions
        assert_eq!(format_bytes(1_536, 0), "2 KB");
        assert_eq!(format_bytes(2_560, 0), "3 KB");
        assert_eq!(format_bytes(74_880, 2), "73.13 KB");
    }
}
