mod common;

use common::{create_test_formatter, plus_seconds, ts};
use taqwim_core::{
    or_placeholder, Calendar, CalendarView, FormatError, Language, Settings, PLACEHOLDER,
};
use tempfile::TempDir;

const LANGUAGES: [Language; 2] = [Language::English, Language::Arabic];

fn sample_instants() -> Vec<&'static str> {
    vec![
        "1900-02-28T21:00:00Z",
        "1970-01-01T00:00:00Z",
        "2000-02-29T12:00:00Z",
        "2024-12-31T20:59:59Z",
        "2024-12-31T21:00:00Z",
        "2038-01-19T03:14:08Z",
        "2200-06-15T10:00:00Z",
    ]
}

#[test]
fn test_gregorian_always_has_a_four_digit_year() {
    let formatter = create_test_formatter();
    for input in sample_instants() {
        for language in LANGUAGES {
            let text = formatter
                .format_absolute(input, language, Calendar::Gregorian, false)
                .expect("Failed to format");
            let year = ts(input)
                .to_zoned(formatter.time_zone().clone())
                .year()
                .to_string();
            assert_eq!(year.len(), 4);
            assert!(text.contains(&year), "{input} {language}: {text}");
        }
    }
}

#[test]
fn test_new_year_in_display_zone() {
    let formatter = create_test_formatter();
    let text = formatter
        .format_absolute("2024-12-31T21:00:00Z", Language::English, Calendar::Gregorian, true)
        .unwrap();
    assert_eq!(text, "01 Jan 2025, 00:00");
}

#[test]
fn test_relative_now_is_just_now_everywhere() {
    let formatter = create_test_formatter();
    for input in sample_instants() {
        let t = ts(input);
        assert_eq!(
            formatter.format_relative(&t, t, Language::English).unwrap(),
            "Just now"
        );
        assert_eq!(formatter.format_relative(&t, t, Language::Arabic).unwrap(), "الآن");
    }
}

#[test]
fn test_relative_bucket_sequence() {
    let formatter = create_test_formatter();
    let t = ts("2025-10-19T05:30:00Z");
    let expectations = [
        (0, "Just now", "الآن"),
        (90, "1 minute ago", "منذ 1 دقيقة"),
        (125, "2 minutes ago", "منذ 2 دقيقة"),
        (3_600, "1 hour ago", "منذ 1 ساعة"),
        (86_399, "23 hours ago", "منذ 23 ساعة"),
        (86_400, "1 day ago", "منذ 1 يوم"),
        (604_800, "1 week ago", "منذ 1 أسبوع"),
        (2_419_199, "3 weeks ago", "منذ 3 أسبوع"),
        (2_419_200, "19 Oct 2025", "19 أكتوبر 2025"),
    ];
    for (elapsed, english, arabic) in expectations {
        let now = plus_seconds(t, elapsed);
        assert_eq!(
            formatter.format_relative(&t, now, Language::English).unwrap(),
            english,
            "{elapsed}s"
        );
        assert_eq!(
            formatter.format_relative(&t, now, Language::Arabic).unwrap(),
            arabic,
            "{elapsed}s"
        );
    }
}

#[test]
fn test_future_timestamp_never_yields_negative_phrase() {
    let formatter = create_test_formatter();
    let t = ts("2025-10-19T05:30:00Z");
    for back in [1, 10, 3_600, 86_400 * 40] {
        let now = plus_seconds(t, -back);
        let text = formatter.format_relative(&t, now, Language::English).unwrap();
        assert_eq!(
            text,
            formatter
                .format_absolute(&t, Language::English, Calendar::Gregorian, false)
                .unwrap()
        );
    }
}

#[test]
fn test_dual_calendar_ordering() {
    let formatter = create_test_formatter();
    for input in sample_instants() {
        let gregorian_ar = formatter
            .format_absolute(input, Language::Arabic, Calendar::Gregorian, false)
            .unwrap();
        let hijri_ar = formatter
            .format_absolute(input, Language::Arabic, Calendar::Islamic, false)
            .unwrap();
        assert_eq!(
            formatter
                .format_absolute(input, Language::Arabic, CalendarView::Dual, false)
                .unwrap(),
            format!("{hijri_ar} ({gregorian_ar})")
        );

        let gregorian_en = formatter
            .format_absolute(input, Language::English, Calendar::Gregorian, false)
            .unwrap();
        let hijri_en = formatter
            .format_absolute(input, Language::English, Calendar::Islamic, false)
            .unwrap();
        assert_eq!(
            formatter
                .format_absolute(input, Language::English, CalendarView::Dual, false)
                .unwrap(),
            format!("{gregorian_en} ({hijri_en})")
        );
    }
}

#[test]
fn test_invalid_input_surfaces_and_can_be_replaced() {
    let formatter = create_test_formatter();
    for input in ["", "yesterday", "2025-10-32", "2025-10-19T25:00:00Z"] {
        let result = formatter.format_absolute(input, Language::Arabic, CalendarView::Dual, true);
        assert!(matches!(result, Err(FormatError::InvalidTimestamp { .. })), "{input}");
        assert_eq!(or_placeholder(result), PLACEHOLDER);
    }
}

#[test]
fn test_formatter_from_settings_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "time_zone": "UTC", "language": "ar", "numerals": "arabic-indic" }"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("Failed to load settings");
    let formatter = settings.formatter().expect("Failed to build formatter");
    let text = formatter
        .format_absolute(
            "2025-10-18T23:30:00Z",
            settings.language,
            Calendar::Gregorian,
            true,
        )
        .unwrap();
    assert_eq!(text, "١٨ أكتوبر ٢٠٢٥، ٢٣:٣٠");
}
