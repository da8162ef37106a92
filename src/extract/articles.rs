//! Article segmentation within a chapter span.

use super::rules::ExtractionRules;

/// An article-labeled span: canonical identifier plus raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSpan<'a> {
    /// Canonical identifier, e.g. "Art. 90a".
    pub number: String,

    /// Body text from after the header line to the next header.
    pub body: &'a str,
}

/// Locate article boundaries in a text span.
///
/// Boundaries are lines consisting of exactly "Art." + whitespace +
/// article number. Zero matches yield zero articles, which is legal:
/// chapters may contain preamble-only text.
pub fn segment_articles<'a>(span: &'a str, rules: &ExtractionRules) -> Vec<ArticleSpan<'a>> {
    let matches: Vec<_> = rules.article_header.captures_iter(span).collect();

    matches
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str();
            let start = whole.end();
            let end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(span.len(), |m| m.start());

            Some(ArticleSpan {
                number: format!("Art. {number}"),
                body: span[start..end].trim(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::extract::rules::swiss_traffic_rules;

    use super::*;

    #[test]
    fn test_segment_articles_basic() {
        let rules = swiss_traffic_rules();
        let span = "Art. 1\nGrundsatz\nDieses Gesetz ordnet den Verkehr.\nArt. 2\nBefugnisse\nDer Bundesrat kann.";

        let articles = segment_articles(span, &rules);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].number, "Art. 1");
        assert!(articles[0].body.contains("Grundsatz"));
        assert!(!articles[0].body.contains("Befugnisse"));
        assert_eq!(articles[1].number, "Art. 2");
    }

    #[test]
    fn test_segment_articles_letter_suffix() {
        let rules = swiss_traffic_rules();
        let span = "Art. 90a\nEinziehung\nInhalt.";

        let articles = segment_articles(span, &rules);

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].number, "Art. 90a");
    }

    #[test]
    fn test_segment_articles_none_found() {
        let rules = swiss_traffic_rules();
        let span = "Nur Vorspanntext ohne Artikel.";

        assert!(segment_articles(span, &rules).is_empty());
    }

    #[test]
    fn test_segment_articles_ignores_inline_references() {
        let rules = swiss_traffic_rules();
        // "Art. 5" mid-paragraph must not open a new article
        let span = "Art. 4\nTitel\nGilt in Verbindung mit Art. 5 Absatz 2.\nArt. 6\nWeiter\nInhalt.";

        let articles = segment_articles(span, &rules);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].number, "Art. 4");
        assert!(articles[0].body.contains("Art. 5"));
        assert_eq!(articles[1].number, "Art. 6");
    }

    #[test]
    fn test_segment_articles_last_runs_to_span_end() {
        let rules = swiss_traffic_rules();
        let span = "Art. 106\nVollzug\nDer Bundesrat erlässt die Verordnungen.";

        let articles = segment_articles(span, &rules);

        assert_eq!(articles.len(), 1);
        assert!(articles[0].body.ends_with("Verordnungen."));
    }
}
