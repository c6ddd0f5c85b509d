//! Parser for the shared qrel/result file format.
//!
//! Both files use the same tab-separated layout: a query id, optionally
//! followed by annotation field values. A line with only a query id registers
//! the query with an empty annotation collection (queries with no ground
//! truth still appear in the qrel file); repeated lines for the same query id
//! accumulate one annotation each.

use crate::error::Result;
use crate::eval::{Annotation, AnnotationMap};
use log::debug;
use std::path::Path;

/// Reads and parses one annotation file into a query id → annotations map.
pub fn parse_annotation_file(path: &Path) -> Result<AnnotationMap> {
    let content = std::fs::read_to_string(path)?;
    let map = parse_annotations(&content);
    debug!("parsed {}: {} queries", path.display(), map.len());
    Ok(map)
}

/// Parses annotation file content. Blank lines are skipped; every other line
/// contributes its query id, plus one annotation when it carries any field
/// values beyond the id.
pub fn parse_annotations(content: &str) -> AnnotationMap {
    let mut map = AnnotationMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut cols = line.split('\t');
        // split() yields at least one column for a nonempty line
        let qid = cols.next().unwrap_or_default();
        let fields: Vec<String> = cols.map(str::to_string).collect();
        let annotations = map.entry(qid.to_string()).or_default();
        if !fields.is_empty() {
            annotations.push(Annotation { fields });
        }
    }
    map
}
