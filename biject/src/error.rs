//! Error returned by strict construction

use crate::BidirectionalMap;
use biject_core::{Violation, ViolationKind, ViolationReport};
use std::hash::Hash;

/// The pair list handed to a strict constructor is not a bijection
///
/// Carries the full violation report and hands the rejected pairs back, so
/// the caller can either abort or fall back to a best-effort map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pairs do not form a bijection: {report}")]
pub struct InvalidBijectionError<L, R> {
    report: ViolationReport<L, R>,
    pairs: Vec<(L, R)>,
}

impl<L, R> InvalidBijectionError<L, R> {
    pub(crate) fn new(report: ViolationReport<L, R>, pairs: Vec<(L, R)>) -> Self {
        Self { report, pairs }
    }

    /// Get the violation report
    pub fn report(&self) -> &ViolationReport<L, R> {
        &self.report
    }

    /// Get the individual violations
    pub fn violations(&self) -> &[Violation<L, R>] {
        self.report.violations()
    }

    /// Check whether a violation of the given kind was found
    pub fn has(&self, kind: ViolationKind) -> bool {
        self.report.contains(kind)
    }

    /// Get the rejected pairs, in input order
    pub fn pairs(&self) -> &[(L, R)] {
        &self.pairs
    }

    /// Split into the report and the rejected pairs
    pub fn into_parts(self) -> (ViolationReport<L, R>, Vec<(L, R)>) {
        (self.report, self.pairs)
    }
}

impl<L, R> InvalidBijectionError<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Build a permissive map from the rejected pairs anyway
    pub fn into_best_effort(self) -> BidirectionalMap<L, R> {
        BidirectionalMap::new(self.pairs)
    }
}
