//! Chapter segmentation and chapter-id generation.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::rules::ExtractionRules;

/// Id of the synthetic chapter used when no headers are found.
pub const SYNTHETIC_CHAPTER_ID: &str = "all";

/// Title of the synthetic chapter.
pub const SYNTHETIC_CHAPTER_TITLE: &str = "Alle Artikel";

/// A chapter-labeled span of the source text.
///
/// `title` is `None` for the implicit chapter of a document without
/// chapter headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSpan<'a> {
    pub title: Option<String>,
    pub text: &'a str,
}

/// Split the document into chapter spans.
///
/// Each span starts at its header line and runs to the next header (or
/// document end); text before the first header is preamble and is
/// dropped. Zero header matches yield one implicit span covering the
/// whole document.
pub fn segment_chapters<'a>(text: &'a str, rules: &ExtractionRules) -> Vec<ChapterSpan<'a>> {
    let matches: Vec<_> = rules.chapter_header.find_iter(text).collect();

    if matches.is_empty() {
        return vec![ChapterSpan {
            title: None,
            text,
        }];
    }

    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
            ChapterSpan {
                title: Some(m.as_str().trim().to_string()),
                text: &text[m.start()..end],
            }
        })
        .collect()
}

/// Convert a Roman numeral to its Arabic value using standard
/// subtractive arithmetic.
#[must_use]
pub fn roman_to_arabic(roman: &str) -> u32 {
    fn value(c: char) -> u32 {
        match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            _ => 0,
        }
    }

    let chars: Vec<char> = roman.chars().collect();
    let mut result = 0;
    for (i, &c) in chars.iter().enumerate() {
        let current = value(c);
        let next = chars.get(i + 1).map(|&n| value(n)).unwrap_or(0);
        if current < next {
            result -= current as i64;
        } else {
            result += current as i64;
        }
    }
    result.max(0) as u32
}

/// Derive a chapter id from its header line.
///
/// "I. Titel: Allgemeine Bestimmungen" becomes
/// "1-allgemeine-bestimmungen": Roman ordinal converted to Arabic, plus
/// an ASCII-lowercase hyphenated slug of the label capped at
/// `slug_max_len` characters.
#[must_use]
pub fn chapter_id(title: &str, rules: &ExtractionRules) -> String {
    let number = rules
        .roman_prefix
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| roman_to_arabic(m.as_str()))
        .unwrap_or(0);

    let label = rules.chapter_prefix.replace(title, "");
    let fragment: String = slugify(&label)
        .chars()
        .take(rules.slug_max_len)
        .collect();

    format!("{number}-{fragment}")
}

/// Lowercase, transliterate to ASCII, and hyphenate a chapter label.
///
/// Umlauts lose their diaeresis via NFD decomposition ("ü" → "u") and
/// "ß" becomes "ss"; everything else non-alphanumeric is stripped.
fn slugify(label: &str) -> String {
    let lowered = label.to_lowercase().replace('ß', "ss");
    let ascii: String = lowered
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();

    ascii.split_whitespace().collect::<Vec<_>>().join("-")
}
