//! Per-article field extraction: title, body, subsections, penalties,
//! keywords, and cross-references.
//!
//! This stage never fails. Absence of a structural feature (no title,
//! no subsections, no penalty phrases, no references) is represented by
//! empty or absent fields, not errors.

use std::collections::BTreeSet;

use super::rules::ExtractionRules;
use crate::types::{Article, Penalty, Subsection};

/// Extract all fields of one article from its raw span.
#[must_use]
pub fn extract_fields(
    number: &str,
    span: &str,
    chapter: Option<&str>,
    rules: &ExtractionRules,
) -> Article {
    let (title, text) = split_title(span, rules);

    let subsections = extract_subsections(&text, rules);
    let penalties = extract_penalties(&text, rules);
    let search_keywords = generate_keywords(number, &title, &text, rules);
    let related_articles = find_related_articles(&text, number, rules);

    Article {
        article: number.to_string(),
        title,
        text,
        subsections,
        penalties,
        search_keywords,
        related_articles,
        chapter: chapter.map(str::to_string),
    }
}

/// Split an article span into title and body text.
///
/// The first non-blank line is the title when it is shorter than
/// `max_title_len` characters and does not start with a digit-space
/// sequence (which would be a subsection opener). Otherwise the whole
/// span is body text and the title is empty.
fn split_title(span: &str, rules: &ExtractionRules) -> (String, String) {
    let lines: Vec<&str> = span.lines().filter(|l| !l.trim().is_empty()).collect();

    let Some(first) = lines.first().map(|l| l.trim()) else {
        return (String::new(), String::new());
    };

    if first.chars().count() < rules.max_title_len && !rules.numbered_line.is_match(first) {
        (first.to_string(), lines[1..].join("\n").trim().to_string())
    } else {
        (String::new(), lines.join("\n").trim().to_string())
    }
}

/// Scan body lines for numbered subsections.
///
/// A line matching the subsection pattern opens a new subsection; other
/// non-blank lines are space-joined onto the open one, or discarded as
/// preamble when none is open yet.
#[must_use]
pub fn extract_subsections(text: &str, rules: &ExtractionRules) -> Vec<Subsection> {
    let mut subsections: Vec<Subsection> = Vec::new();
    let mut current: Option<Subsection> = None;

    for line in text.lines() {
        if let Some(caps) = rules.subsection_line.captures(line) {
            if let Some(previous) = current.take() {
                subsections.push(previous);
            }
            current = Some(Subsection {
                number: caps[1].to_string(),
                text: caps[2].trim().to_string(),
            });
        } else if let Some(open) = current.as_mut() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                open.text.push(' ');
                open.text.push_str(trimmed);
            }
        }
    }

    if let Some(last) = current {
        subsections.push(last);
    }

    subsections
}

/// Extract penalty fields from the full body text, independent of
/// subsection boundaries.
#[must_use]
pub fn extract_penalties(text: &str, rules: &ExtractionRules) -> Penalty {
    let mut penalty = Penalty::default();

    // Fine: stricter penalty-noun pattern first, bare amount second.
    // The fallback can misattribute an unrelated CHF amount (e.g. a
    // cross-referenced fee) as the fine; known heuristic limitation.
    for pattern in &rules.fine_patterns {
        if let Some(caps) = pattern.captures(text) {
            let low = strip_whitespace(&caps[1]);
            penalty.fine = Some(match caps.get(2) {
                Some(high) => format!("CHF {low}-{}", strip_whitespace(high.as_str())),
                None => format!("CHF {low}"),
            });
            break;
        }
    }

    if let Some(caps) = rules.imprisonment.captures(text) {
        penalty.imprisonment = Some(format!("{} {}", &caps[1], &caps[2]));
    }

    if let Some(caps) = rules.points.captures(text) {
        penalty.points = Some(caps[1].to_string());
    }

    penalty
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Generate sorted, deduplicated search keywords: the lowercased article
/// identifier, significant title words, and domain vocabulary found in
/// the body text.
#[must_use]
pub fn generate_keywords(
    number: &str,
    title: &str,
    text: &str,
    rules: &ExtractionRules,
) -> Vec<String> {
    let mut keywords: BTreeSet<String> = BTreeSet::new();

    keywords.insert(number.to_lowercase());

    if !title.is_empty() {
        let lowered = title.to_lowercase();
        let cleaned = rules.title_word_strip.replace_all(&lowered, "");
        for word in cleaned.split_whitespace() {
            if word.chars().count() > rules.min_keyword_len {
                keywords.insert(word.to_string());
            }
        }
    }

    let lower_text = text.to_lowercase();
    for term in &rules.legal_terms {
        if lower_text.contains(term) {
            keywords.insert((*term).to_string());
        }
    }

    keywords.into_iter().collect()
}

/// Collect references to other articles, canonicalized to "Art. N",
/// excluding self-references, sorted and deduplicated.
#[must_use]
pub fn find_related_articles(
    text: &str,
    current_article: &str,
    rules: &ExtractionRules,
) -> Vec<String> {
    let mut related: BTreeSet<String> = BTreeSet::new();

    for caps in rules.article_reference.captures_iter(text) {
        let reference = format!("Art. {}", &caps[1]);
        if reference != current_article {
            related.insert(reference);
        }
    }

    related.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::extract::rules::swiss_traffic_rules;

    use super::*;

    #[test]
    fn test_split_title_short_first_line() {
        let rules = swiss_traffic_rules();
        let span = "Grundsatz\nDieses Gesetz ordnet den Verkehr.";

        let article = extract_fields("Art. 1", span, None, &rules);

        assert_eq!(article.title, "Grundsatz");
        assert_eq!(article.text, "Dieses Gesetz ordnet den Verkehr.");
    }

    #[test]
    fn test_split_title_numbered_first_line_is_body() {
        let rules = swiss_traffic_rules();
        let span = "1 Dieses Gesetz ordnet den Verkehr.\n2 Es gilt auf öffentlichen Strassen.";

        let article = extract_fields("Art. 1", span, None, &rules);

        assert_eq!(article.title, "");
        assert!(article.text.starts_with("1 Dieses Gesetz"));
        assert_eq!(article.subsections.len(), 2);
    }

    #[test]
    fn test_split_title_long_first_line_is_body() {
        let rules = swiss_traffic_rules();
        let long_line = "Wer ".to_string() + &"sehr ".repeat(30) + "lange Sätze schreibt.";
        assert!(long_line.chars().count() >= 100);

        let article = extract_fields("Art. 1", &long_line, None, &rules);

        assert_eq!(article.title, "");
        assert_eq!(article.text, long_line);
    }

    #[test]
    fn test_text_populated_alongside_subsections() {
        let rules = swiss_traffic_rules();
        let span = "Grundsatz\n1 Erster Absatz.\n2 Zweiter Absatz.";

        let article = extract_fields("Art. 1", span, None, &rules);

        // text duplicates the full body for consumer convenience
        assert_eq!(article.text, "1 Erster Absatz.\n2 Zweiter Absatz.");
        assert_eq!(article.subsections.len(), 2);
    }

    #[test]
    fn test_extract_subsections_continuation_lines() {
        let rules = swiss_traffic_rules();
        let text = "1 First part.\n2 Second part continued\nmore text.";

        let subsections = extract_subsections(text, &rules);

        assert_eq!(
            subsections,
            vec![
                Subsection {
                    number: "1".to_string(),
                    text: "First part.".to_string(),
                },
                Subsection {
                    number: "2".to_string(),
                    text: "Second part continued more text.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_extract_subsections_bis_suffix() {
        let rules = swiss_traffic_rules();
        let text = "1 Absatz eins.\n2bis Eingeschobener Absatz.";

        let subsections = extract_subsections(text, &rules);

        assert_eq!(subsections.len(), 2);
        assert_eq!(subsections[1].number, "2bis");
    }

    #[test]
    fn test_extract_subsections_discards_leading_preamble() {
        let rules = swiss_traffic_rules();
        let text = "Einleitung ohne Nummer.\n1 Erster Absatz.";

        let subsections = extract_subsections(text, &rules);

        assert_eq!(subsections.len(), 1);
        assert_eq!(subsections[0].text, "Erster Absatz.");
    }

    #[test]
    fn test_extract_penalties_fine_single() {
        let rules = swiss_traffic_rules();
        let penalty = extract_penalties("Busse bis CHF 500", &rules);
        assert_eq!(penalty.fine.as_deref(), Some("CHF 500"));
    }

    #[test]
    fn test_extract_penalties_fine_range() {
        let rules = swiss_traffic_rules();
        let penalty = extract_penalties("Busse CHF 100 bis 300", &rules);
        assert_eq!(penalty.fine.as_deref(), Some("CHF 100-300"));
    }

    #[test]
    fn test_extract_penalties_fine_absent() {
        let rules = swiss_traffic_rules();
        let penalty = extract_penalties("Keine Strafbestimmung hier.", &rules);
        assert_eq!(penalty.fine, None);
    }

    #[test]
    fn test_extract_penalties_bare_amount_fallback() {
        let rules = swiss_traffic_rules();
        let penalty = extract_penalties("Eine Gebühr von Fr. 200 wird erhoben.", &rules);
        assert_eq!(penalty.fine.as_deref(), Some("CHF 200"));
    }

    #[test]
    fn test_extract_penalties_imprisonment() {
        let rules = swiss_traffic_rules();
        let penalty = extract_penalties(
            "Mit Freiheitsstrafe bis zu 3 Jahren oder Geldstrafe wird bestraft.",
            &rules,
        );
        assert_eq!(penalty.imprisonment.as_deref(), Some("3 Jahre"));
    }

    #[test]
    fn test_extract_penalties_points() {
        let rules = swiss_traffic_rules();
        let penalty = extract_penalties("Es werden 4 Punkte abgezogen.", &rules);
        assert_eq!(penalty.points.as_deref(), Some("4"));
    }

    #[test]
    fn test_extract_penalties_all_absent() {
        let rules = swiss_traffic_rules();
        let penalty = extract_penalties("Der Bundesrat regelt die Einzelheiten.", &rules);
        assert!(penalty.is_empty());
    }

    #[test]
    fn test_generate_keywords_sorted_dedup() {
        let rules = swiss_traffic_rules();
        // Domain term appears twice; must appear once, and output sorted
        let keywords = generate_keywords(
            "Art. 27",
            "Signale und Geschwindigkeit",
            "Signale sind zu befolgen. Signale gelten. Die Geschwindigkeit ist anzupassen.",
            &rules,
        );

        let signal_count = keywords.iter().filter(|k| *k == "signal").count();
        assert_eq!(signal_count, 1);

        let mut sorted = keywords.clone();
        sorted.sort();
        assert_eq!(keywords, sorted);

        assert!(keywords.contains(&"art. 27".to_string()));
        assert!(keywords.contains(&"geschwindigkeit".to_string()));
        assert!(keywords.contains(&"signale".to_string()));
    }

    #[test]
    fn test_generate_keywords_title_words_keep_umlauts() {
        let rules = swiss_traffic_rules();
        let keywords = generate_keywords("Art. 35", "Überholen und Vorbeifahren", "", &rules);

        assert!(keywords.contains(&"überholen".to_string()));
        assert!(keywords.contains(&"vorbeifahren".to_string()));
        // "und" is too short
        assert!(!keywords.contains(&"und".to_string()));
    }

    #[test]
    fn test_find_related_articles_dedup_and_self_exclusion() {
        let rules = swiss_traffic_rules();
        let text =
            "Siehe Art. 10 sowie Art. 10 und nochmals Art. 10. Ferner gilt Artikel 11 sinngemäss.";

        let related = find_related_articles(text, "Art. 10", &rules);

        assert_eq!(related, vec!["Art. 11".to_string()]);
    }

    #[test]
    fn test_find_related_articles_letter_suffix() {
        let rules = swiss_traffic_rules();
        let related = find_related_articles("In Abweichung von Art. 90a gilt:", "Art. 16", &rules);
        assert_eq!(related, vec!["Art. 90a".to_string()]);
    }

    #[test]
    fn test_extract_fields_carries_chapter() {
        let rules = swiss_traffic_rules();
        let article = extract_fields(
            "Art. 26",
            "Grundregel\nJeder muss sich im Verkehr rücksichtsvoll verhalten.",
            Some("II. Titel: Verkehrsregeln"),
            &rules,
        );

        assert_eq!(article.chapter.as_deref(), Some("II. Titel: Verkehrsregeln"));
    }
}
