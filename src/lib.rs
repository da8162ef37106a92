//! Verkehrsrecht Preprocessor - Extract structured law data from Swiss
//! traffic-law documents.
//!
//! This crate converts the raw text of a Swiss federal law document
//! (.docx) into the structured JSON dataset the Verkehrsrecht mobile
//! app ships as a static asset: chapters, articles, subsections,
//! penalty data, search keywords, and cross-references.
//!
//! # Example
//!
//! ```
//! use verkehrsrecht_preprocessor::pipeline::preprocess_text;
//! use verkehrsrecht_preprocessor::types::LawDescriptor;
//!
//! let text = "Art. 1\n\nGrundsatz\n\nDieses Gesetz ordnet den Verkehr.";
//! let outcome = preprocess_text(text, LawDescriptor::road_traffic_act());
//! assert_eq!(outcome.law.sections.len(), 1);
//! ```
//!
//! # Architecture
//!
//! The preprocessor is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Law, Chapter, Article, etc.)
//! - [`error`]: Error types and Result alias
//! - [`docx`]: Plain-text extraction from .docx documents
//! - [`extract`]: Chapter/article segmentation and field extraction
//! - [`pipeline`]: Main preprocessing pipeline
//! - [`json`]: JSON output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod docx;
pub mod error;
pub mod extract;
pub mod json;
pub mod pipeline;
pub mod types;

// Re-export main functions
pub use pipeline::{preprocess_document, preprocess_text};

// Re-export commonly used items
pub use error::{PreprocessError, Result};
pub use types::{Article, Chapter, Dataset, Law, LawDescriptor, Penalty, Subsection};
