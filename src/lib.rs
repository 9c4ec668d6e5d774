//! Utility measurement for anonymized tabular data.
//!
//! Quantifies how much usable information a generalized or suppressed
//! rendition of a dataset has lost relative to its original form. Measures
//! are constructed once from a header, generalization hierarchies and,
//! where needed, the input dataset, then evaluated against any number of
//! (output, transformation) pairs. Evaluation is pure and read-only, so
//! one measure instance can serve many concurrent evaluations.

pub mod aggregate;
pub mod error;
pub mod frequency;
pub mod groupify;
pub mod hierarchy;
pub mod measures;
pub mod projection;
pub mod types;

pub use aggregate::AggregateFunction;
pub use error::Error;
pub use groupify::{GroupEntry, HashGroupify};
pub use measures::{
    Aecs, Ambiguity, Discernibility, Loss, NonUniformEntropy, NonUniformEntropyWithLowerBound,
    NonUniformEntropyWithLowerBoundNormalized, Precision, UtilityMeasure,
};
pub use projection::{TabularData, ValueTable};
pub use types::{HierarchyMap, Result, UtilityValue, SUPPRESSION_MARKER};
