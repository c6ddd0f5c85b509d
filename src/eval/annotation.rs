//! Annotation and metric types for the evaluation framework.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One annotated item within a query's result: an entity identifier plus any
/// optional extra fields (score, type, ...) carried on the same input record.
///
/// Field order is irrelevant for matching: two annotations are equivalent iff
/// their field values are equal as unordered sets (duplicates collapse).
/// Values are compared exactly as provided (case- and whitespace-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Field values in input order (at least one).
    pub fields: Vec<String>,
}

impl Annotation {
    /// Build an annotation from anything yielding string-like field values.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Annotation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Field values as a set: the identity used for exact matching.
    pub fn field_set(&self) -> BTreeSet<&str> {
        self.fields.iter().map(String::as_str).collect()
    }

    /// Set equality with another annotation (order-insensitive, duplicates collapse).
    pub fn set_eq(&self, other: &Annotation) -> bool {
        self.field_set() == other.field_set()
    }
}

/// Query id → annotation collection, for both the qrel (reference) side and
/// the result (prediction) side. `BTreeMap` keeps query ids in ascending
/// lexicographic order, which fixes the evaluation iteration order.
///
/// A query id mapped to an empty collection is a real entry ("query with no
/// annotations") and is distinct from the query id being absent.
pub type AnnotationMap = BTreeMap<String, Vec<Annotation>>;

/// Precision/recall/F1 triple; every value lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Fraction of predicted annotations that are correct.
    pub prec: f64,
    /// Fraction of reference annotations that were found.
    pub rec: f64,
    /// Harmonic mean of precision and recall.
    pub f: f64,
}

impl Metrics {
    pub const fn new(prec: f64, rec: f64, f: f64) -> Self {
        Metrics { prec, rec, f }
    }
}
