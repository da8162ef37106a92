//! Core data types for the preprocessor.
//!
//! These types model Swiss traffic-law documents the way the mobile app
//! consumes them: a `Dataset` bundling one or more `Law` records, each
//! organized into `Chapter`s of `Article`s. Wire names are camelCase to
//! match the JSON contract.

use serde::{Deserialize, Serialize};

/// A numbered paragraph ("Absatz") within an article.
///
/// German legal numbering allows "bis"/"ter" suffixes for paragraphs
/// inserted between existing ones, so `number` can be "2bis" or "3ter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// Paragraph marker (e.g., "1", "2bis").
    pub number: String,

    /// Paragraph text, continuation lines space-joined.
    pub text: String,
}

/// Penalty consequences stated in an article.
///
/// A `None` field means "not stated in the source text", never "zero".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Penalty {
    /// Formatted fine, e.g. "CHF 100" or "CHF 100-500" for a range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<String>,

    /// Demerit points as a bare digit string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<String>,

    /// Imprisonment duration phrase, e.g. "2 Jahre".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imprisonment: Option<String>,
}

impl Penalty {
    /// Whether any penalty field was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fine.is_none() && self.points.is_none() && self.imprisonment.is_none()
    }
}

/// A single numbered legal provision ("Art. N").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Canonical identifier, e.g. "Art. 90a".
    pub article: String,

    /// Title line; empty when no distinct title line exists.
    pub title: String,

    /// Full body text. Always populated when the article has content,
    /// even when `subsections` duplicates it paragraph by paragraph.
    pub text: String,

    /// Numbered paragraphs in document order.
    pub subsections: Vec<Subsection>,

    /// Extracted penalty consequences.
    pub penalties: Penalty,

    /// Sorted, deduplicated search keywords.
    #[serde(rename = "searchKeywords")]
    pub search_keywords: Vec<String>,

    /// Sorted, deduplicated references to other articles ("Art. N").
    #[serde(rename = "relatedArticles")]
    pub related_articles: Vec<String>,

    /// Raw chapter header this article belongs to, e.g.
    /// "I. Titel: Allgemeine Bestimmungen". Absent when the document
    /// has no chapter headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
}

/// A top-level grouping of articles ("Titel").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Slug id, e.g. "1-allgemeine-bestimmungen", or "all" for the
    /// synthetic chapter when no headers were found.
    pub id: String,

    /// Raw header line, e.g. "I. Titel: Allgemeine Bestimmungen".
    pub title: String,

    /// Articles in document order.
    pub articles: Vec<Article>,
}

/// Fixed descriptive metadata for a law, supplied by the pipeline
/// invocation rather than derived from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawDescriptor {
    /// Systematic collection id (e.g., "SR_741.01").
    pub id: String,

    /// Short citation title (e.g., "SVG").
    pub short_title: String,

    /// Full title (e.g., "Strassenverkehrsgesetz").
    pub full_title: String,

    /// Category tag matching a `CategoryMeta` id.
    pub category: String,

    /// Source language code (e.g., "de").
    pub language: String,

    /// Consolidation date of the source document (YYYY-MM-DD).
    pub last_updated: String,
}

impl LawDescriptor {
    /// Descriptor for the Swiss Road Traffic Act source document.
    #[must_use]
    pub fn road_traffic_act() -> Self {
        Self {
            id: "SR_741.01".to_string(),
            short_title: "SVG".to_string(),
            full_title: "Strassenverkehrsgesetz".to_string(),
            category: "traffic".to_string(),
            language: "de".to_string(),
            last_updated: "2025-04-01".to_string(),
        }
    }

    /// File stem for the per-law output file.
    ///
    /// # Examples
    /// ```
    /// use verkehrsrecht_preprocessor::types::LawDescriptor;
    ///
    /// let descriptor = LawDescriptor::road_traffic_act();
    /// assert_eq!(descriptor.file_stem(), "SR-741.01-DE");
    /// ```
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.id.replace('_', "-"), self.language.to_uppercase())
    }
}

/// Complete law with metadata, chapters, and the flattened article list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Law {
    pub id: String,

    #[serde(rename = "shortTitle")]
    pub short_title: String,

    #[serde(rename = "fullTitle")]
    pub full_title: String,

    pub category: String,

    pub language: String,

    #[serde(rename = "lastUpdated")]
    pub last_updated: String,

    pub chapters: Vec<Chapter>,

    /// Flat list of every article in document order, duplicating the
    /// per-chapter lists for consumers that don't traverse chapters.
    pub sections: Vec<Article>,
}

impl Law {
    /// Assemble a law from its descriptor and extracted chapters.
    ///
    /// `sections` is the flattened concatenation of all chapters'
    /// articles in document order.
    #[must_use]
    pub fn assemble(descriptor: LawDescriptor, chapters: Vec<Chapter>) -> Self {
        let sections = chapters
            .iter()
            .flat_map(|c| c.articles.iter().cloned())
            .collect();

        Self {
            id: descriptor.id,
            short_title: descriptor.short_title,
            full_title: descriptor.full_title,
            category: descriptor.category,
            language: descriptor.language,
            last_updated: descriptor.last_updated,
            chapters,
            sections,
        }
    }
}

/// Category metadata displayed by the consuming app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CategoryMeta {
    /// The traffic-law category.
    #[must_use]
    pub fn traffic() -> Self {
        Self {
            id: "traffic".to_string(),
            name: "Verkehrsrecht".to_string(),
            icon: "car".to_string(),
            color: "#4A90E2".to_string(),
        }
    }
}

/// Top-level dataset: the only artifact the app reads for article content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub laws: Vec<Law>,
    pub categories: Vec<CategoryMeta>,
}
