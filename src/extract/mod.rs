//! Document-to-structure extraction engine.
//!
//! Layered, pure segmentation over the raw document text: chapters,
//! then articles within each chapter, then per-article fields. Each
//! stage takes immutable input and returns a new structure; there is no
//! shared scan state between calls.

mod articles;
mod chapters;
mod fields;
mod rules;

pub use articles::{segment_articles, ArticleSpan};
pub use chapters::{
    chapter_id, roman_to_arabic, segment_chapters, ChapterSpan, SYNTHETIC_CHAPTER_ID,
    SYNTHETIC_CHAPTER_TITLE,
};
pub use fields::{
    extract_fields, extract_penalties, extract_subsections, find_related_articles,
    generate_keywords,
};
pub use rules::{swiss_traffic_rules, ExtractionRules};

use crate::types::Chapter;

/// Parse the full document text into chapters of extracted articles.
///
/// When the document has no chapter headers, a single synthetic chapter
/// with id "all" holds every article and articles carry no chapter
/// label.
#[must_use]
pub fn parse_document(text: &str, rules: &ExtractionRules) -> Vec<Chapter> {
    segment_chapters(text, rules)
        .into_iter()
        .map(|span| {
            let (id, title) = match &span.title {
                Some(title) => (chapter_id(title, rules), title.clone()),
                None => (
                    SYNTHETIC_CHAPTER_ID.to_string(),
                    SYNTHETIC_CHAPTER_TITLE.to_string(),
                ),
            };

            let articles = segment_articles(span.text, rules)
                .iter()
                .map(|a| extract_fields(&a.number, a.body, span.title.as_deref(), rules))
                .collect();

            Chapter { id, title, articles }
        })
        .collect()
}
