//! Evaluation framework: annotation types, strict-match query scoring, and
//! macro-averaged aggregation.

pub mod annotation;
pub mod evaluator;
pub mod metrics;

pub use annotation::{Annotation, AnnotationMap, Metrics};
pub use evaluator::{Evaluation, Evaluator};
pub use metrics::{matches, score_query};
