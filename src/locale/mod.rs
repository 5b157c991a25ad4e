//! Clock and locale-aware timestamp rendering backed by `chrono`.
//!
//! [`LocalizedFormatter`] accepts tags in either BCP-47 (`fr-FR`, `zh-Hant-TW`)
//! or POSIX (`fr_FR`) spelling and renders the locale's date representation
//! (`%x`) followed by its time representation (`%X`):
//!
//! ```
//! use chrono::DateTime;
//! use string_rail::locale::LocalizedFormatter;
//! use string_rail::traits::TimestampFormatter;
//!
//! let instant = DateTime::parse_from_rfc3339("2024-10-04T15:30:45+02:00").unwrap();
//! let text = LocalizedFormatter.format(instant, "fr-FR").unwrap();
//! assert_eq!(text, "04/10/2024 15:30:45");
//!
//! let text = LocalizedFormatter.format(instant, "en").unwrap();
//! assert_eq!(text, "10/04/2024 03:30:45 PM");
//!
//! assert!(LocalizedFormatter.format(instant, "invalid-locale").is_err());
//! ```

use crate::traits::{Clock, TimestampFormatter};
use crate::types::{ErrorField, ValidationError};
use chrono::{DateTime, FixedOffset, Local, Locale};
use core::fmt::{self, Display, Write};

/// Locale used by `welcome` when the config names none.
pub const DEFAULT_LOCALE: &str = "fr-FR";

const TIMESTAMP_FORMAT: &str = "%x %X";

/// A locale tag that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleError {
    locale: String,
}

impl LocaleError {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }

    /// The tag as the caller supplied it.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale `{}`", self.locale)
    }
}

impl std::error::Error for LocaleError {}

impl From<LocaleError> for ValidationError {
    fn from(err: LocaleError) -> Self {
        ValidationError::new(format!("Failed to format date with locale {}", err.locale))
            .with_field(ErrorField::Locale)
            .with_param("locale", err.locale)
    }
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Renders timestamps through `chrono`'s localized formatting tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalizedFormatter;

impl TimestampFormatter for LocalizedFormatter {
    fn format(&self, instant: DateTime<FixedOffset>, locale: &str) -> Result<String, LocaleError> {
        let resolved = resolve_locale(locale)?;
        let mut rendered = String::new();
        // Some tables use `%O`/`%E` modifiers that chrono cannot render.
        write!(rendered, "{}", instant.format_localized(TIMESTAMP_FORMAT, resolved))
            .map_err(|_| LocaleError::new(locale))?;
        Ok(rendered)
    }
}

/// Maps a locale tag onto one of `chrono`'s locale tables.
///
/// The language subtag is lowercased and the region uppercased, so `fr-fr`,
/// `FR_fr` and `fr-FR` all resolve to `fr_FR`. Script subtags are skipped
/// (`zh-Hant-TW` is `zh_TW`), as are trailing variants. When the tag has no
/// region, or names one `chrono` has no table for (`es-419`), the language's
/// primary locale is used instead.
pub fn resolve_locale(tag: &str) -> Result<Locale, LocaleError> {
    let parsed = LanguageTag::parse(tag).ok_or_else(|| LocaleError::new(tag))?;

    let regional = parsed.region.map(|region| format!("{}_{region}", parsed.language));
    let scripted = parsed.script.and_then(|script| script_locale(&parsed.language, script));
    let primary = primary_locale(&parsed.language);
    let doubled = format!("{}_{}", parsed.language, parsed.language.to_ascii_uppercase());

    regional
        .as_deref()
        .into_iter()
        .chain(scripted)
        .chain(primary)
        .chain(Some(doubled.as_str()))
        .find_map(|candidate| Locale::try_from(candidate).ok())
        .ok_or_else(|| LocaleError::new(tag))
}

/// A tag split into the subtags that select a locale table.
#[derive(Debug, PartialEq, Eq)]
struct LanguageTag<'a> {
    language: String,
    script: Option<&'a str>,
    region: Option<String>,
}

impl<'a> LanguageTag<'a> {
    fn parse(tag: &'a str) -> Option<Self> {
        let mut parts = tag.trim().split(['-', '_']).peekable();

        let language = parts
            .next()
            .filter(|l| (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()))?
            .to_ascii_lowercase();

        let script = parts.next_if(|s| s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic()));

        let region = parts
            .next_if(|r| {
                (r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()))
                    || (r.len() == 3 && r.chars().all(|c| c.is_ascii_digit()))
            })
            .map(str::to_ascii_uppercase);

        let variants_ok = parts.all(|v| (1..=8).contains(&v.len()) && v.chars().all(|c| c.is_ascii_alphanumeric()));
        variants_ok.then_some(Self { language, script, region })
    }
}

fn script_locale(language: &str, script: &str) -> Option<&'static str> {
    match (language, script.to_ascii_lowercase().as_str()) {
        ("zh", "hans") => Some("zh_CN"),
        ("zh", "hant") => Some("zh_TW"),
        ("sr", "latn") => Some("sr_RS@latin"),
        _ => None,
    }
}

/// The table used for a language when its tag names no usable region.
fn primary_locale(language: &str) -> Option<&'static str> {
    let locale = match language {
        "ar" => "ar_EG",
        "be" => "be_BY",
        "bn" => "bn_BD",
        "ca" => "ca_ES",
        "cs" => "cs_CZ",
        "da" => "da_DK",
        "de" => "de_DE",
        "el" => "el_GR",
        "en" => "en_US",
        "es" => "es_ES",
        "et" => "et_EE",
        "fil" => "fil_PH",
        "fr" => "fr_FR",
        "ga" => "ga_IE",
        "he" => "he_IL",
        "hi" => "hi_IN",
        "hy" => "hy_AM",
        "it" => "it_IT",
        "ja" => "ja_JP",
        "ka" => "ka_GE",
        "kk" => "kk_KZ",
        "ko" => "ko_KR",
        "ms" => "ms_MY",
        "nb" | "no" => "nb_NO",
        "nl" => "nl_NL",
        "pt" => "pt_BR",
        "sl" => "sl_SI",
        "sq" => "sq_AL",
        "sr" => "sr_RS",
        "sv" => "sv_SE",
        "ta" => "ta_IN",
        "uk" => "uk_UA",
        "ur" => "ur_PK",
        "vi" => "vi_VN",
        "zh" => "zh_CN",
        _ => return None,
    };
    Some(locale)
}
