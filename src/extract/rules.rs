//! The extraction rule set: pattern table and domain vocabulary.
//!
//! Everything the extractor keys on — chapter headers, article headers,
//! subsection openers, penalty phrases, cross-reference syntax, the
//! search vocabulary — lives in one injectable [`ExtractionRules`]
//! value, so the extractor can be retargeted to other legal-document
//! conventions without touching the extraction code.

use regex::Regex;

use crate::config::{MAX_TITLE_LEN, MIN_KEYWORD_LEN, SLUG_MAX_LEN};

/// Compiled pattern set and limits driving the extraction pipeline.
#[derive(Debug)]
pub struct ExtractionRules {
    /// Chapter header line, e.g. "II. Titel: Verkehrsregeln".
    pub chapter_header: Regex,

    /// Prefix of a chapter header up to and including "Titel:", stripped
    /// before slug generation.
    pub chapter_prefix: Regex,

    /// Leading Roman numeral of a chapter header.
    pub roman_prefix: Regex,

    /// Article header: a line consisting of exactly "Art. <number>".
    pub article_header: Regex,

    /// Subsection opener: "<digits>[bis|ter]? <text>", applied per line.
    pub subsection_line: Regex,

    /// Line starting with digits + space; such a first line is a
    /// subsection opener, not a title.
    pub numbered_line: Regex,

    /// Fine patterns, tried in order; first match wins. The stricter
    /// penalty-noun pattern comes before the bare-amount fallback.
    pub fine_patterns: Vec<Regex>,

    /// Imprisonment phrase: "Freiheitsstrafe [bis zu] <n> <unit>".
    pub imprisonment: Regex,

    /// Demerit points: "<digits> Punkt(e)".
    pub points: Regex,

    /// Cross-reference to another article: "Art(ikel). <number>".
    pub article_reference: Regex,

    /// Characters removed from title words before keyword extraction.
    /// Keeps German letters (umlauts, ß) and whitespace.
    pub title_word_strip: Regex,

    /// Domain vocabulary matched as case-insensitive substrings of the
    /// article body.
    pub legal_terms: Vec<&'static str>,

    /// First lines at or above this length are body text, not titles.
    pub max_title_len: usize,

    /// Title words must be strictly longer than this to become keywords.
    pub min_keyword_len: usize,

    /// Maximum length of the slug fragment in a chapter id.
    pub slug_max_len: usize,
}

/// German traffic-law vocabulary: vehicles, traffic, rules, drivers,
/// penalties, actions, safety.
const LEGAL_TERMS: &[&str] = &[
    // Vehicles
    "motorfahrzeug",
    "fahrzeug",
    "motorwagen",
    "lastwagen",
    "personenwagen",
    "motorrad",
    "fahrrad",
    "anhänger",
    "traktor",
    // Traffic
    "verkehr",
    "strasse",
    "autobahn",
    "kreuzung",
    "fussgänger",
    "geschwindigkeit",
    "fahren",
    "überholen",
    "parkieren",
    "halten",
    // Rules
    "verkehrsregeln",
    "vorschrift",
    "signal",
    "zeichen",
    "licht",
    "vortritt",
    "lichtsignal",
    "verkehrszeichen",
    // Driver
    "fahrer",
    "führer",
    "fahrzeugführer",
    "lenker",
    "führerausweis",
    "fahrausweis",
    "lernfahrausweis",
    // Penalties
    "busse",
    "strafe",
    "verwarnung",
    "entzug",
    "freiheitsstrafe",
    "geldstrafe",
    "ordnungsbusse",
    // Actions
    "benützen",
    "benutzen",
    "gebrauchen",
    "bewillig",
    "zulassung",
    "kontrolle",
    "prüfung",
    // Safety
    "sicherheit",
    "gefahr",
    "hindernis",
    "unfall",
    "verletz",
];

/// Build the rule set for Swiss federal traffic law (German source,
/// "Art. N" articles, Roman-numeral "Titel" chapters, CHF fines).
#[allow(clippy::expect_used)] // Static regexes that are guaranteed to be valid
#[must_use]
pub fn swiss_traffic_rules() -> ExtractionRules {
    ExtractionRules {
        chapter_header: Regex::new(r"(?m)^([IVX]+\.?\s+Titel:?\s+[^\n]+)").expect("valid regex"),
        chapter_prefix: Regex::new(r"^[IVX]+\.?\s+Titel:?\s+").expect("valid regex"),
        roman_prefix: Regex::new(r"^([IVX]+)").expect("valid regex"),
        article_header: Regex::new(r"(?m)^Art\.\s+(\d+[a-z]?)\s*$").expect("valid regex"),
        subsection_line: Regex::new(r"^(\d+(?:bis|ter)?)\s+(.+)").expect("valid regex"),
        numbered_line: Regex::new(r"^\d+\s").expect("valid regex"),
        fine_patterns: vec![
            Regex::new(
                r"(?i)(?:Busse|Geldstrafe|Ordnungsbusse).*?(?:CHF|Fr\.?)\s*([\d\s]+)(?:\s*(?:bis|–|-)\s*([\d\s]+))?",
            )
            .expect("valid regex"),
            Regex::new(r"(?i)(?:CHF|Fr\.?)\s*([\d\s']+)(?:\s*(?:bis|–|-)\s*([\d\s']+))?")
                .expect("valid regex"),
        ],
        imprisonment: Regex::new(
            r"(?i)Freiheitsstrafe\s+(?:bis\s+zu\s+)?(\d+)\s*(Jahre?|Monat(?:e)?|Tage?)",
        )
        .expect("valid regex"),
        points: Regex::new(r"(?i)(\d+)\s*Punkt(?:e)?").expect("valid regex"),
        article_reference: Regex::new(r"(?i)Art(?:ikel)?\.?\s+(\d+[a-z]?)").expect("valid regex"),
        title_word_strip: Regex::new(r"[^a-zäöüß\s]").expect("valid regex"),
        legal_terms: LEGAL_TERMS.to_vec(),
        max_title_len: MAX_TITLE_LEN,
        min_keyword_len: MIN_KEYWORD_LEN,
        slug_max_len: SLUG_MAX_LEN,
    }
}
