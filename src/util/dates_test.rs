use super::*;

fn wall(raw: &str) -> Timestamp {
    Timestamp::Wall(NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap())
}

fn instant_ms(ts: Option<Timestamp>) -> Option<i64> {
    match ts? {
        Timestamp::Instant(dt) => Some(dt.timestamp_millis()),
        Timestamp::Wall(_) => None,
    }
}

#[test]
fn parse_rfc3339_with_offset() {
    assert_eq!(instant_ms(parse_timestamp("2024-05-01T10:30:00Z")), Some(1_714_559_400_000));
    assert_eq!(instant_ms(parse_timestamp("2024-05-01T12:30:00+02:00")), Some(1_714_559_400_000));
}

#[test]
fn parse_offsetless_values_as_wall_clock() {
    let expected = wall("2024-05-01 10:30:00");
    assert_eq!(parse_timestamp("2024-05-01T10:30:00"), Some(expected));
    assert_eq!(parse_timestamp("2024-05-01T10:30"), Some(expected));
    assert_eq!(parse_timestamp("2024-05-01 10:30:00.000"), Some(expected));
}

#[test]
fn parse_date_only_as_utc_midnight() {
    assert_eq!(instant_ms(parse_timestamp("2024-05-01")), Some(1_714_521_600_000));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("   "), None);
    assert_eq!(parse_timestamp("next tuesday"), None);
    assert_eq!(parse_timestamp("2024-13-45T99:00:00Z"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn date_parts_split_date_and_time() {
    let parts = appointment_date_parts(Some("2024-05-01T10:30:00Z"));
    assert_eq!(parts.date, "2024-05-01");
    assert_eq!(parts.time, "10:30:00");
}

#[cfg(not(feature = "csr"))]
#[test]
fn offsetless_date_parts_keep_written_time() {
    let parts = appointment_date_parts(Some("2024-05-01T10:30:00"));
    assert_eq!(parts.date, "2024-05-01");
    assert_eq!(parts.time, "10:30:00");
    let parts = appointment_date_parts(Some("2024-12-31 23:45:10"));
    assert_eq!(parts.date, "2024-12-31");
    assert_eq!(parts.time, "23:45:10");
}

#[test]
fn missing_date_uses_unknown_labels() {
    let parts = appointment_date_parts(None);
    assert_eq!(parts.date, UNKNOWN_DATE);
    assert_eq!(parts.time, UNKNOWN_TIME);
}

#[test]
fn malformed_date_uses_unknown_labels() {
    let parts = appointment_date_parts(Some("not a date"));
    assert_eq!(parts, DateParts { date: "Unknown date".to_owned(), time: "Unknown time".to_owned() });
}
