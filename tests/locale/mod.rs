use chrono::{DateTime, FixedOffset, Utc};
use string_rail::locale::{resolve_locale, FixedClock, LocaleError, LocalizedFormatter, SystemClock, DEFAULT_LOCALE};
use string_rail::traits::{Clock, TimestampFormatter};
use string_rail::{ErrorField, ValidationError};

fn instant() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-10-04T15:30:45+02:00").unwrap()
}

#[test]
fn default_locale_resolves() {
    assert_eq!(DEFAULT_LOCALE, "fr-FR");
    assert!(resolve_locale(DEFAULT_LOCALE).is_ok());
}

#[test]
fn both_tag_spellings_resolve_to_the_same_locale() {
    for (bcp47, posix) in [("en-US", "en_US"), ("fr-fr", "fr_FR"), ("DE-de", "de_DE")] {
        assert_eq!(
            LocalizedFormatter.format(instant(), bcp47).unwrap(),
            LocalizedFormatter.format(instant(), posix).unwrap()
        );
    }
}

#[test]
fn unknown_tags_fail() {
    for tag in ["invalid-locale", "", "xx-YY", "en-US-!!"] {
        let err = resolve_locale(tag).err().expect("tag should not resolve");
        assert_eq!(err.locale(), tag);
    }
}

#[test]
fn french_formatting_uses_day_first_and_24_hour_time() {
    let text = LocalizedFormatter.format(instant(), "fr-FR").unwrap();
    assert_eq!(text, "04/10/2024 15:30:45");
}

#[test]
fn us_formatting_uses_month_first_and_12_hour_time() {
    let text = LocalizedFormatter.format(instant(), "en-US").unwrap();
    assert_eq!(text, "10/04/2024 03:30:45 PM");
}

#[test]
fn bare_languages_format_like_their_primary_region() {
    for (bare, regional) in [("en", "en_US"), ("ja", "ja_JP"), ("zh", "zh_CN"), ("sv", "sv_SE"), ("uk", "uk_UA")] {
        assert_eq!(
            LocalizedFormatter.format(instant(), bare).unwrap(),
            LocalizedFormatter.format(instant(), regional).unwrap()
        );
    }
}

#[test]
fn script_subtags_are_skipped() {
    assert_eq!(
        LocalizedFormatter.format(instant(), "zh-Hant-TW").unwrap(),
        LocalizedFormatter.format(instant(), "zh_TW").unwrap()
    );
    assert_eq!(
        LocalizedFormatter.format(instant(), "zh-Hant").unwrap(),
        LocalizedFormatter.format(instant(), "zh_TW").unwrap()
    );
}

#[test]
fn regions_without_a_table_fall_back_to_the_language() {
    assert_eq!(
        LocalizedFormatter.format(instant(), "es-419").unwrap(),
        LocalizedFormatter.format(instant(), "es_ES").unwrap()
    );
}

#[test]
fn tables_chrono_cannot_render_are_reported() {
    let err = LocalizedFormatter.format(instant(), "fa-IR").err().expect("fa_IR uses %O modifiers");
    assert_eq!(err.locale(), "fa-IR");
}

#[test]
fn formatting_keeps_the_instant_offset() {
    let utc = DateTime::parse_from_rfc3339("2024-10-04T13:30:45+00:00").unwrap();
    let text = LocalizedFormatter.format(utc, "fr-FR").unwrap();
    assert!(text.contains("13:30:45"), "{text}");
}

#[test]
fn locale_error_converts_into_a_tagged_validation_error() {
    let err = LocaleError::new("xx-YY");
    assert_eq!(err.to_string(), "unknown locale `xx-YY`");

    let err = ValidationError::from(err);
    assert_eq!(err.field(), Some(ErrorField::Locale));
    assert_eq!(err.message(), "Failed to format date with locale xx-YY");
    assert_eq!(err.param("locale"), Some("xx-YY"));
}

#[test]
fn fixed_clock_always_returns_its_instant() {
    let clock = FixedClock(instant());
    assert_eq!(clock.now(), instant());
    assert_eq!((&clock).now(), instant());
}

#[test]
fn system_clock_reads_a_recent_instant() {
    let before = Utc::now();
    let now = SystemClock.now().with_timezone(&Utc);
    let after = Utc::now();

    assert!(now >= before && now <= after);
}
