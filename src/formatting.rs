use chrono::{DateTime, Utc};
use num_format::{Locale as NumLocale, ToFormattedString};

use crate::config::DisplayConfig;
use crate::locale::Locale;

/// Box-drawing characters for borders and separators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub connector: String,
    pub selector: String,
    pub checked: String,
    pub unchecked: String,
    pub expanded: String,
    pub collapsed: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            connector: "┴".to_string(),
            selector: "►".to_string(),
            checked: "✔".to_string(),
            unchecked: " ".to_string(),
            expanded: "▾".to_string(),
            collapsed: "▸".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            connector: "-".to_string(),
            selector: ">".to_string(),
            checked: "x".to_string(),
            unchecked: " ".to_string(),
            expanded: "v".to_string(),
            collapsed: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a count with thousands separators: 1234567 -> "1,234,567"
pub fn number_with_commas<N: ToFormattedString>(n: N) -> String {
    n.to_formatted_string(&NumLocale::en)
}

/// Daily change with an explicit sign, e.g. `+1,452` or `-3`
pub fn format_delta(n: i64) -> String {
    if n < 0 {
        number_with_commas(n)
    } else {
        format!("+{}", number_with_commas(n))
    }
}

/// `part` as a percentage of `total`
///
/// A zero total is not special-cased: the result is NaN or infinite.
pub fn percent_of(part: u64, total: u64) -> f64 {
    part as f64 / total as f64 * 100.0
}

/// Render a percentage with two decimals
///
/// Non-finite values are spelled out as `NaN` / `Infinity`.
pub fn format_rate(rate: f64) -> String {
    if rate.is_nan() {
        "NaN".to_string()
    } else if rate.is_infinite() {
        if rate > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        // Ties round away from zero
        format!("{:.2}", (rate * 100.0).round() / 100.0)
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    use unicode_width::UnicodeWidthStr;

    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Seconds,
    Minute,
    Minutes(i64),
    Hour,
    Hours(i64),
    Day,
    Days(i64),
    Month,
    Months(i64),
    Year,
    Years(i64),
}

/// Bucket an absolute duration the way "from now" humanizers do
fn humanize_span(seconds: i64) -> Span {
    let round = |value: f64| value.round() as i64;
    let s = seconds as f64;
    let minutes = round(s / 60.0);
    let hours = round(s / 3600.0);
    let days = round(s / 86400.0);

    if seconds < 45 {
        Span::Seconds
    } else if seconds < 90 {
        Span::Minute
    } else if minutes < 45 {
        Span::Minutes(minutes)
    } else if minutes < 90 {
        Span::Hour
    } else if hours < 22 {
        Span::Hours(hours)
    } else if hours < 36 {
        Span::Day
    } else if days < 26 {
        Span::Days(days)
    } else if days < 45 {
        Span::Month
    } else if days < 320 {
        Span::Months(round(s / 86400.0 / 30.4))
    } else if days < 548 {
        Span::Year
    } else {
        Span::Years(round(s / 86400.0 / 365.0))
    }
}

fn phrase_en(span: Span, past: bool) -> String {
    let body = match span {
        Span::Seconds => "a few seconds".to_string(),
        Span::Minute => "a minute".to_string(),
        Span::Minutes(n) => format!("{} minutes", n),
        Span::Hour => "an hour".to_string(),
        Span::Hours(n) => format!("{} hours", n),
        Span::Day => "a day".to_string(),
        Span::Days(n) => format!("{} days", n),
        Span::Month => "a month".to_string(),
        Span::Months(n) => format!("{} months", n),
        Span::Year => "a year".to_string(),
        Span::Years(n) => format!("{} years", n),
    };
    if past {
        format!("{} ago", body)
    } else {
        format!("in {}", body)
    }
}

fn phrase_hu(span: Span, past: bool) -> String {
    // Hungarian attaches the tense to the unit: "3 órája" / "3 óra múlva"
    let (count, past_unit, future_unit) = match span {
        Span::Seconds => ("néhány".to_string(), "másodperce", "másodperc"),
        Span::Minute => ("egy".to_string(), "perce", "perc"),
        Span::Minutes(n) => (n.to_string(), "perce", "perc"),
        Span::Hour => ("egy".to_string(), "órája", "óra"),
        Span::Hours(n) => (n.to_string(), "órája", "óra"),
        Span::Day => ("egy".to_string(), "napja", "nap"),
        Span::Days(n) => (n.to_string(), "napja", "nap"),
        Span::Month => ("egy".to_string(), "hónapja", "hónap"),
        Span::Months(n) => (n.to_string(), "hónapja", "hónap"),
        Span::Year => ("egy".to_string(), "éve", "év"),
        Span::Years(n) => (n.to_string(), "éve", "év"),
    };
    if past {
        format!("{} {}", count, past_unit)
    } else {
        format!("{} {} múlva", count, future_unit)
    }
}

/// Humanized distance between `then` and `now` in the given locale
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let seconds = (now - then).num_seconds();
    let past = seconds >= 0;
    let span = humanize_span(seconds.abs());
    match locale {
        Locale::Hu => phrase_hu(span, past),
        Locale::En => phrase_en(span, past),
    }
}

/// Relative rendering of an optional sync time
pub fn format_last_sync(last_sync: Option<DateTime<Utc>>, now: DateTime<Utc>, locale: Locale) -> String {
    match last_sync {
        Some(then) => relative_time(then, now, locale),
        None => locale.strings().never.to_string(),
    }
}
