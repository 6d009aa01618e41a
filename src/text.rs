//! Text formatting utilities shared by every renderer: date formatting,
//! markup escaping, and the greedy line-wrapping used by the preview-image
//! renderer. Everything in this module is a pure function of its inputs;
//! none of it consults the system locale or timezone.

use chrono::{Datelike, NaiveDate};

/// Three-letter Spanish month abbreviations, indexed by `month0`.
const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Maximum number of lines [`wrap_text`] will produce. The preview image
/// reserves vertical space for exactly this many title lines.
const MAX_WRAPPED_LINES: usize = 3;

/// Formats a date in the site's short localized form, e.g. `9 mar 2025`:
/// unpadded day, three-letter month from a fixed table, four-digit year.
pub fn format_date_localized(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Formats a date as an RFC-822-style timestamp, e.g.
/// `Sun, 09 Mar 2025 12:00:00 GMT`.
///
/// The time-of-day is fixed at noon UTC. This is a contract, not a
/// placeholder: feed readers interpret `pubDate` in UTC, and anchoring every
/// post to midday keeps the calendar day stable across reader timezones.
pub fn to_rfc822(date: NaiveDate) -> String {
    format!("{} 12:00:00 GMT", date.format("%a, %d %b %Y"))
}

/// Which special-character set [`escape_markup`] replaces. The two output
/// document families disagree only on the apostrophe: predefined HTML keeps
/// it literal, XML needs `&apos;`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escape {
    /// `&`, `<`, `>`, `"`.
    Html,

    /// `&`, `<`, `>`, `"`, `'`.
    Xml,
}

/// Replaces markup-significant characters with named entities. The ampersand
/// is replaced first so that the entities introduced by later replacements
/// are not themselves re-escaped.
///
/// Callers must apply this exactly once per raw value per render: the
/// function is not idempotent, and escaping an already-escaped string
/// double-escapes it.
pub fn escape_markup(input: &str, mode: Escape) -> String {
    let escaped = input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");
    match mode {
        Escape::Html => escaped,
        Escape::Xml => escaped.replace('\'', "&apos;"),
    }
}

/// Greedy word-wrap against a character-count budget.
///
/// Words accumulate into the current line while `line + " " + word` fits in
/// `max_width` characters; otherwise the line is flushed and the word starts
/// the next one. A word longer than the whole budget is never split: it gets
/// a line of its own and overflows. At most three lines are returned; any
/// further text is dropped.
///
/// Width is measured in `char`s, an approximation of rendered width tuned to
/// the preview image's fixed-size font. It is a layout heuristic by design,
/// not a stand-in for real text metrics.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty()
            && current.chars().count() + 1 + word.chars().count() > max_width
        {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.truncate(MAX_WRAPPED_LINES);
    lines
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_format_date_localized() {
        assert_eq!(format_date_localized(date("2025-03-09")), "9 mar 2025");
        assert_eq!(format_date_localized(date("2024-12-31")), "31 dic 2024");
        assert_eq!(format_date_localized(date("2023-01-01")), "1 ene 2023");
    }

    #[test]
    fn test_to_rfc822_noon_utc() {
        assert_eq!(to_rfc822(date("2025-03-09")), "Sun, 09 Mar 2025 12:00:00 GMT");
        assert_eq!(to_rfc822(date("2024-02-29")), "Thu, 29 Feb 2024 12:00:00 GMT");
    }

    #[test]
    fn test_escape_html_all_specials() {
        let escaped = escape_markup(r#"a & b < c > d " e ' f"#, Escape::Html);
        assert_eq!(escaped, "a &amp; b &lt; c &gt; d &quot; e ' f");
        for raw in ['&', '<', '>', '"'] {
            assert!(!strip_entities(&escaped).contains(raw), "unescaped {raw}");
        }
    }

    #[test]
    fn test_escape_xml_all_specials() {
        let escaped = escape_markup(r#"a & b < c > d " e ' f"#, Escape::Xml);
        assert_eq!(escaped, "a &amp; b &lt; c &gt; d &quot; e &apos; f");
        for raw in ['&', '<', '>', '"', '\''] {
            assert!(!strip_entities(&escaped).contains(raw), "unescaped {raw}");
        }
    }

    // Removes the entities the escaper is allowed to produce, so that any
    // special character left over must be an unescaped original.
    fn strip_entities(s: &str) -> String {
        s.replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&apos;", "")
    }

    #[test]
    fn test_escape_ampersand_not_double_escaped_in_one_pass() {
        assert_eq!(escape_markup("<&>", Escape::Html), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_escape_second_pass_double_escapes() {
        let once = escape_markup("a & b", Escape::Html);
        let twice = escape_markup(&once, Escape::Html);
        assert_eq!(once, "a &amp; b");
        assert_eq!(twice, "a &amp;amp; b");
    }

    #[test]
    fn test_wrap_text_short_input_single_line() {
        assert_eq!(wrap_text("hello world", 28), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_splits_at_budget() {
        assert_eq!(
            wrap_text("uno dos tres cuatro", 8),
            vec!["uno dos", "tres", "cuatro"]
        );
    }

    #[test]
    fn test_wrap_text_never_more_than_three_lines() {
        let long = "uno dos tres cuatro cinco seis siete ocho nueve diez";
        let lines = wrap_text(long, 5);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_wrap_text_preserves_word_order() {
        let input = "decisiones reales y resultados verificables en cada sesion";
        let lines = wrap_text(input, 100);
        assert_eq!(lines.join(" "), input);
    }

    #[test]
    fn test_wrap_text_oversized_word_alone_on_line() {
        let lines = wrap_text("ok incomprehensibilities ok", 10);
        assert_eq!(lines, vec!["ok", "incomprehensibilities", "ok"]);
        // Overflowing lines contain exactly one word.
        for line in &lines {
            if line.chars().count() > 10 {
                assert_eq!(line.split(' ').count(), 1);
            }
        }
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert!(wrap_text("", 28).is_empty());
    }
}
