use super::*;

#[test]
fn format_timestamp_strips_fraction_and_offset() {
    assert_eq!(format_timestamp("2024-07-01T12:00:00.123456+00:00"), "2024-07-01 12:00:00");
    assert_eq!(format_timestamp("2024-07-01T12:00:00Z"), "2024-07-01 12:00:00");
    assert_eq!(format_timestamp("2024-07-01T12:00:00-05:00"), "2024-07-01 12:00:00");
    assert_eq!(format_timestamp("2024-07-01 08:30:15"), "2024-07-01 08:30:15");
}

#[test]
fn format_timestamp_passes_through_unknown_input() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp(""), "");
    assert_eq!(format_timestamp("2024-7-1T1:00"), "2024-7-1T1:00");
}

#[test]
fn format_optional_uses_dash_for_missing() {
    assert_eq!(format_optional(None), "—");
    assert_eq!(format_optional(Some("2024-07-01T12:00:00")), "2024-07-01 12:00:00");
}
