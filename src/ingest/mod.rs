//! Input parsing: tab-separated qrel and result files.

pub mod tsv;

pub use tsv::{parse_annotation_file, parse_annotations};
