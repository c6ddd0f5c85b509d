pub mod error;
pub mod eval;
pub mod ingest;

pub use error::{ErdEvalError, Result};
pub use eval::{matches, score_query, Annotation, AnnotationMap, Evaluation, Evaluator, Metrics};
pub use ingest::parse_annotation_file;
