//! Aggregate evaluator: scores every qrel query and macro-averages the results.

use crate::error::{ErdEvalError, Result};
use crate::eval::{Annotation, AnnotationMap, Metrics};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Holds the qrel (reference) and result (prediction) mappings for one
/// evaluation run. Construction validates that the two sides share at least
/// one query id; a disjoint pair means the files don't belong together and
/// nothing can be scored.
#[derive(Debug)]
pub struct Evaluator {
    qrels: AnnotationMap,
    results: AnnotationMap,
}

/// Outcome of an evaluation run: the macro-averaged totals plus every
/// per-query triple, keyed by query id in ascending order.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Macro-averaged precision/recall and the F1 derived from them.
    pub total: Metrics,
    /// Per-query metrics, for inspection and JSON reporting.
    pub per_query: BTreeMap<String, Metrics>,
}

impl Evaluator {
    /// Builds an evaluator over the two mappings.
    ///
    /// Fails with [`ErdEvalError::QueryMismatch`] when no query id appears in
    /// both mappings. The caller decides whether that aborts the process.
    pub fn new(qrels: AnnotationMap, results: AnnotationMap) -> Result<Self> {
        let overlap = qrels.keys().filter(|qid| results.contains_key(*qid)).count();
        if overlap == 0 {
            return Err(ErdEvalError::QueryMismatch);
        }
        debug!(
            "evaluator: {} qrel queries, {} result queries, {} in common",
            qrels.len(),
            results.len(),
            overlap
        );
        Ok(Evaluator { qrels, results })
    }

    /// Evaluates all queries and macro-averages precision and recall.
    ///
    /// Iterates the qrel query ids in ascending lexicographic order and scores
    /// each with `score_fn`; a query id missing from the result mapping is
    /// scored against an empty prediction collection. The averaging
    /// denominator is the full qrel query count, and the aggregate F1 is the
    /// harmonic mean of the averaged precision and recall (not an average of
    /// per-query F1 values).
    pub fn evaluate<F>(&self, score_fn: F) -> Evaluation
    where
        F: Fn(&[Annotation], &[Annotation]) -> Metrics,
    {
        let mut per_query = BTreeMap::new();
        let mut total_prec = 0.0;
        let mut total_rec = 0.0;

        for (qid, reference) in &self.qrels {
            let predicted = self
                .results
                .get(qid)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let metrics = score_fn(reference, predicted);
            debug!(
                "query {}: prec={:.4} rec={:.4} f={:.4}",
                qid, metrics.prec, metrics.rec, metrics.f
            );
            total_prec += metrics.prec;
            total_rec += metrics.rec;
            per_query.insert(qid.clone(), metrics);
        }

        // new() guarantees a non-empty overlap, so qrels is non-empty here.
        let n = self.qrels.len() as f64;
        total_prec /= n;
        total_rec /= n;
        let total_f = if total_prec + total_rec != 0.0 {
            2.0 * total_prec * total_rec / (total_prec + total_rec)
        } else {
            0.0
        };

        Evaluation {
            total: Metrics::new(total_prec, total_rec, total_f),
            per_query,
        }
    }
}

impl Evaluation {
    /// Human-readable results block, values rounded to four decimals.
    pub fn report(&self) -> String {
        format!(
            "\n----------------\n\
             Evaluation results:\n\
             Prec: {:.4}\n\
             Rec:  {:.4}\n\
             F1:   {:.4}\n\
             all:  {:.4}, {:.4}, {:.4}",
            self.total.prec,
            self.total.rec,
            self.total.f,
            self.total.prec,
            self.total.rec,
            self.total.f
        )
    }
}
