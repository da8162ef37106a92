//! JSON output generation for law files.

mod writer;

pub use writer::{save_dataset, save_law, to_pretty_json};
