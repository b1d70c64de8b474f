/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as an employee ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Render an amount with its currency suffix, e.g. `"1200 DZD"` or `"12.5 DZD"`
pub fn format_amount(value: f64, currency: &str) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        // `+ 0.0` turns -0 into 0
        format!("{:.0} {}", value + 0.0, currency)
    } else {
        format!("{} {}", value, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_ids_are_positive_and_ordered_by_time() {
        let a = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = snowflake_id();
        assert!(a > 0);
        assert!(b >> 12 > a >> 12);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1200.0, "DZD"), "1200 DZD");
        assert_eq!(format_amount(-80.0, "DZD"), "-80 DZD");
        assert_eq!(format_amount(12.5, "DZD"), "12.5 DZD");
    }

    #[test]
    fn test_format_amount_beyond_integer_range() {
        assert_eq!(format_amount(1e20, "DZD"), "100000000000000000000 DZD");
        assert_eq!(format_amount(-1e19, "DZD"), "-10000000000000000000 DZD");
        assert_eq!(format_amount(-0.0, "DZD"), "0 DZD");
    }
}
