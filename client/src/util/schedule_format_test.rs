use super::*;

fn sample_section() -> ClassSection {
    ClassSection {
        id: "s-1".to_owned(),
        course_code: "MTH 103".to_owned(),
        section_number: "001".to_owned(),
        course_name: "College Algebra".to_owned(),
        instructor: "Dr. Smith".to_owned(),
        days: vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
        start_time: "09:00".to_owned(),
        end_time: "09:50".to_owned(),
        location: "Room 101".to_owned(),
        credits: 3,
    }
}

#[test]
fn parse_clock_accepts_time_input_values() {
    assert_eq!(parse_clock("09:30"), Some((9, 30)));
    assert_eq!(parse_clock("9:05"), Some((9, 5)));
    assert_eq!(parse_clock("23:59"), Some((23, 59)));
}

#[test]
fn parse_clock_rejects_malformed_values() {
    assert_eq!(parse_clock(""), None);
    assert_eq!(parse_clock("24:00"), None);
    assert_eq!(parse_clock("12:60"), None);
    assert_eq!(parse_clock("12:5"), None);
    assert_eq!(parse_clock("noon"), None);
    assert_eq!(parse_clock(":30"), None);
    assert_eq!(parse_clock("+9:30"), None);
}

#[test]
fn format_time_uses_twelve_hour_clock() {
    assert_eq!(format_time("13:05"), "1:05 PM");
    assert_eq!(format_time("00:30"), "12:30 AM");
    assert_eq!(format_time("12:00"), "12:00 PM");
    assert_eq!(format_time("11:59"), "11:59 AM");
}

#[test]
fn format_time_passes_through_unparseable_input() {
    assert_eq!(format_time(""), "");
    assert_eq!(format_time("later"), "later");
}

#[test]
fn format_days_keeps_pick_order() {
    assert_eq!(format_days(&[Weekday::Monday, Weekday::Thursday]), "MR");
    assert_eq!(format_days(&[Weekday::Sunday, Weekday::Saturday]), "US");
    assert_eq!(format_days(&[]), "");
}

#[test]
fn meeting_summary_combines_days_and_times() {
    assert_eq!(meeting_summary(&sample_section()), "MWF 9:00 AM-9:50 AM");
}

#[test]
fn count_labels_pluralize() {
    assert_eq!(section_count_label(0), "0 sections");
    assert_eq!(section_count_label(1), "1 section");
    assert_eq!(section_count_label(2), "2 sections");
    assert_eq!(credits_label(1), "1 credit");
    assert_eq!(credits_label(12), "12 credits");
}
