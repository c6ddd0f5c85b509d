//! Per-query evaluation metrics: exact-match comparison and strict P/R/F1.

use crate::eval::{Annotation, Metrics};

/// Returns true if `collection` contains at least one annotation whose
/// field-value set equals `candidate`'s (unordered, duplicates collapsed).
/// No partial credit and no normalization of field values.
pub fn matches(candidate: &Annotation, collection: &[Annotation]) -> bool {
    let target = candidate.field_set();
    collection.iter().any(|item| item.field_set() == target)
}

/// Scores a single query: strict precision, recall and F1 of `predicted`
/// against `reference`.
///
/// A query with no reference annotations is all-or-nothing: an empty
/// prediction scores `{1,1,1}`, any non-empty prediction scores `{0,0,0}` —
/// there is nothing for a prediction to be correct about.
///
/// Otherwise tp/fn are counted over the reference annotations and fp over the
/// predicted annotations, each side searched with [`matches`]. Denominators of
/// zero yield 0.0 rather than dividing.
pub fn score_query(reference: &[Annotation], predicted: &[Annotation]) -> Metrics {
    // Query has no annotation.
    if reference.is_empty() {
        if predicted.is_empty() {
            return Metrics::new(1.0, 1.0, 1.0);
        }
        return Metrics::new(0.0, 0.0, 0.0);
    }

    // Query has at least one annotation.
    let mut tp = 0usize; // correct
    let mut fn_ = 0usize; // missed
    let mut fp = 0usize; // incorrectly returned

    for ref_item in reference {
        if matches(ref_item, predicted) {
            tp += 1;
        } else {
            fn_ += 1;
        }
    }
    for pred_item in predicted {
        if !matches(pred_item, reference) {
            fp += 1;
        }
    }

    let prec = if tp + fp > 0 {
        tp as f64 / (tp + fp) as f64
    } else {
        0.0
    };
    let rec = if tp + fn_ > 0 {
        tp as f64 / (tp + fn_) as f64
    } else {
        0.0
    };
    let f = if prec + rec > 0.0 {
        2.0 * prec * rec / (prec + rec)
    } else {
        0.0
    };

    Metrics::new(prec, rec, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann(fields: &[&str]) -> Annotation {
        Annotation::new(fields.iter().copied())
    }

    #[test]
    fn matches_exact_single_field() {
        let candidate = ann(&["e1"]);
        let collection = vec![ann(&["e2"]), ann(&["e1"])];
        assert!(matches(&candidate, &collection));
    }

    #[test]
    fn matches_rejects_missing() {
        let candidate = ann(&["e3"]);
        let collection = vec![ann(&["e1"]), ann(&["e2"])];
        assert!(!matches(&candidate, &collection));
    }

    #[test]
    fn matches_is_order_insensitive_within_annotation() {
        let candidate = ann(&["a", "b"]);
        let collection = vec![ann(&["b", "a"])];
        assert!(matches(&candidate, &collection));
        // Symmetric: swapping candidate and collection element agrees
        assert!(matches(&collection[0], &[candidate.clone()]));
    }

    #[test]
    fn matches_rejects_subset() {
        let candidate = ann(&["a"]);
        let collection = vec![ann(&["a", "b"])];
        assert!(!matches(&candidate, &collection));
    }

    #[test]
    fn matches_empty_collection() {
        assert!(!matches(&ann(&["e1"]), &[]));
    }

    #[test]
    fn empty_reference_empty_prediction_is_perfect() {
        let m = score_query(&[], &[]);
        assert_eq!(m, Metrics::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn empty_reference_nonempty_prediction_is_total_failure() {
        let m = score_query(&[], &[ann(&["e1"])]);
        assert_eq!(m, Metrics::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn empty_prediction_nonempty_reference_scores_zero() {
        // tp=0, fn=|ref|, fp=0: precision denominator is 0 -> 0.0
        let m = score_query(&[ann(&["e1"]), ann(&["e2"])], &[]);
        assert_eq!(m, Metrics::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn identical_sets_score_perfect() {
        let reference = vec![ann(&["e1"]), ann(&["e2"])];
        let predicted = vec![ann(&["e2"]), ann(&["e1"])];
        let m = score_query(&reference, &predicted);
        assert_eq!(m, Metrics::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn partial_overlap_scores_half() {
        // tp=1 (e1), fn=1 (e2), fp=1 (e3)
        let reference = vec![ann(&["e1"]), ann(&["e2"])];
        let predicted = vec![ann(&["e1"]), ann(&["e3"])];
        let m = score_query(&reference, &predicted);
        assert!((m.prec - 0.5).abs() < 1e-9);
        assert!((m.rec - 0.5).abs() < 1e-9);
        assert!((m.f - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scores_invariant_under_permutation() {
        let reference = vec![ann(&["e1"]), ann(&["e2"]), ann(&["e3"])];
        let predicted = vec![ann(&["e3"]), ann(&["e4"])];
        let base = score_query(&reference, &predicted);

        let reference_rev: Vec<_> = reference.iter().rev().cloned().collect();
        let predicted_rev: Vec<_> = predicted.iter().rev().cloned().collect();
        let permuted = score_query(&reference_rev, &predicted_rev);

        assert!((base.prec - permuted.prec).abs() < 1e-9);
        assert!((base.rec - permuted.rec).abs() < 1e-9);
        assert!((base.f - permuted.f).abs() < 1e-9);
    }

    #[test]
    fn all_wrong_predictions_score_zero() {
        let reference = vec![ann(&["e1"])];
        let predicted = vec![ann(&["e2"]), ann(&["e3"])];
        let m = score_query(&reference, &predicted);
        assert_eq!(m, Metrics::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn metrics_stay_in_unit_interval() {
        let reference = vec![ann(&["e1"]), ann(&["e2"])];
        let predicted = vec![ann(&["e1"]), ann(&["e1"]), ann(&["e4"]), ann(&["e5"])];
        let m = score_query(&reference, &predicted);
        for v in [m.prec, m.rec, m.f] {
            assert!((0.0..=1.0).contains(&v), "metric out of range: {}", v);
        }
    }
}
