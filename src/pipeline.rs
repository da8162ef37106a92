//! Main preprocessing pipeline that ties all components together.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::MIN_ARTICLE_TEXT_LEN;
use crate::docx;
use crate::error::Result;
use crate::extract::{parse_document, swiss_traffic_rules};
use crate::types::{Article, CategoryMeta, Dataset, Law, LawDescriptor};

/// Summary statistics over one preprocessing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub chapters: usize,
    pub articles: usize,
    pub with_penalties: usize,
    pub with_subsections: usize,
}

/// Result of one preprocessing run: the assembled law, the dataset
/// wrapping it, and advisory warnings from the anomaly scan.
#[derive(Debug, Clone)]
pub struct PreprocessOutcome {
    pub law: Law,
    pub dataset: Dataset,
    pub warnings: Vec<String>,
}

impl PreprocessOutcome {
    /// Compute summary statistics for diagnostics output.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            chapters: self.law.chapters.len(),
            articles: self.law.sections.len(),
            with_penalties: self
                .law
                .sections
                .iter()
                .filter(|a| !a.penalties.is_empty())
                .count(),
            with_subsections: self
                .law
                .sections
                .iter()
                .filter(|a| !a.subsections.is_empty())
                .count(),
        }
    }
}

/// Run the full pipeline on a .docx source document.
///
/// Fatal only when the input document is missing or unreadable;
/// structural anomalies in the text are surfaced as warnings in the
/// outcome, and the anomalous records stay in the output.
pub fn preprocess_document(input: &Path, descriptor: LawDescriptor) -> Result<PreprocessOutcome> {
    let text = docx::extract_text(input)?;
    tracing::debug!(chars = text.len(), "Extracted document text");
    Ok(preprocess_text(&text, descriptor))
}

/// Run the extraction and assembly stages on already-extracted text.
#[must_use]
pub fn preprocess_text(text: &str, descriptor: LawDescriptor) -> PreprocessOutcome {
    let rules = swiss_traffic_rules();
    let chapters = parse_document(text, &rules);

    let law = Law::assemble(descriptor, chapters);
    let warnings = scan_anomalies(&law.sections);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let dataset = Dataset {
        laws: vec![law.clone()],
        categories: vec![CategoryMeta::traffic()],
    };

    PreprocessOutcome {
        law,
        dataset,
        warnings,
    }
}

/// Post-pass anomaly scan: near-empty articles and duplicate article
/// identifiers. Both are advisory; the records remain in the output.
fn scan_anomalies(articles: &[Article]) -> Vec<String> {
    let mut warnings = Vec::new();

    let empty: Vec<&str> = articles
        .iter()
        .filter(|a| a.text.chars().count() < MIN_ARTICLE_TEXT_LEN)
        .map(|a| a.article.as_str())
        .collect();
    if !empty.is_empty() {
        warnings.push(format!(
            "{} article(s) have little or no content: {}",
            empty.len(),
            empty.join(", ")
        ));
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for article in articles {
        *counts.entry(article.article.as_str()).or_insert(0) += 1;
    }
    let duplicates: Vec<String> = counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(number, count)| format!("{number} ({count}x)"))
        .collect();
    if !duplicates.is_empty() {
        warnings.push(format!(
            "{} duplicate article number(s) found: {}",
            duplicates.len(),
            duplicates.join(", ")
        ));
    }

    warnings
}
