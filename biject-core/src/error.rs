//! Violation types reported by bijection validation
//!
//! Violations are plain data: validation never panics and never stops at
//! the first problem, so a single report describes everything wrong with a
//! pair list.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

/// Some left values are mapped more than once
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotAFunction<L, R> {
    /// Left values occurring in more than one pair, in first-occurrence order
    pub duplicated: Vec<L>,
    /// Every pair whose left value is duplicated, in input order
    pub pairs: Vec<(L, R)>,
}

/// Some right values are reached from more than one left value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotInjective<L, R> {
    /// Right values occurring in more than one pair, in first-occurrence order
    pub duplicated: Vec<R>,
    /// Every pair whose right value is duplicated, in input order
    pub pairs: Vec<(L, R)>,
}

/// Some codomain elements are never produced
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotSurjective<R> {
    /// Codomain elements absent from the image, in codomain order
    pub missing: Vec<R>,
}

/// Some declared domain elements are never mapped
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotTotal<L> {
    /// Declared domain elements absent from the pair list, in declaration order
    pub missing: Vec<L>,
}

/// Category of a violation, independent of the value types involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViolationKind {
    /// A left value maps to several right values
    NotAFunction,
    /// A right value is reached from several left values
    NotInjective,
    /// The image does not cover the declared codomain
    NotSurjective,
    /// The pair list does not cover the declared domain
    NotTotal,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ViolationKind::NotAFunction => "not a function",
            ViolationKind::NotInjective => "not injective",
            ViolationKind::NotSurjective => "not surjective",
            ViolationKind::NotTotal => "not total",
        };
        write!(f, "{msg}")
    }
}

/// A single broken bijection rule
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation<L, R> {
    NotAFunction(NotAFunction<L, R>),
    NotInjective(NotInjective<L, R>),
    NotSurjective(NotSurjective<R>),
    NotTotal(NotTotal<L>),
}

impl<L, R> Violation<L, R> {
    /// Get the category of this violation
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::NotAFunction(_) => ViolationKind::NotAFunction,
            Violation::NotInjective(_) => ViolationKind::NotInjective,
            Violation::NotSurjective(_) => ViolationKind::NotSurjective,
            Violation::NotTotal(_) => ViolationKind::NotTotal,
        }
    }
}

impl<L, R> From<NotAFunction<L, R>> for Violation<L, R> {
    fn from(v: NotAFunction<L, R>) -> Self {
        Violation::NotAFunction(v)
    }
}

impl<L, R> From<NotInjective<L, R>> for Violation<L, R> {
    fn from(v: NotInjective<L, R>) -> Self {
        Violation::NotInjective(v)
    }
}

impl<L, R> From<NotSurjective<R>> for Violation<L, R> {
    fn from(v: NotSurjective<R>) -> Self {
        Violation::NotSurjective(v)
    }
}

impl<L, R> From<NotTotal<L>> for Violation<L, R> {
    fn from(v: NotTotal<L>) -> Self {
        Violation::NotTotal(v)
    }
}

impl<L: Debug, R: Debug> fmt::Display for Violation<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAFunction(v) => write!(
                f,
                "not a function: left values {:?} are mapped more than once",
                v.duplicated
            ),
            Violation::NotInjective(v) => write!(
                f,
                "not injective: right values {:?} are reached more than once",
                v.duplicated
            ),
            Violation::NotSurjective(v) => {
                write!(f, "not surjective: codomain elements {:?} are never produced", v.missing)
            }
            Violation::NotTotal(v) => {
                write!(f, "not total: domain elements {:?} are never mapped", v.missing)
            }
        }
    }
}

/// Exhaustive, ordered collection of violations found in one pair list
///
/// Violations appear in check order: function, injective, surjective, total.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ViolationReport<L, R> {
    violations: Vec<Violation<L, R>>,
}

impl<L, R> ViolationReport<L, R> {
    /// Create an empty report
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Record the outcome of one check
    pub fn record<V>(&mut self, outcome: Result<(), V>)
    where
        V: Into<Violation<L, R>>,
    {
        if let Err(violation) = outcome {
            self.violations.push(violation.into());
        }
    }

    /// Check whether no violation was recorded
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of recorded violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Get the recorded violations
    pub fn violations(&self) -> &[Violation<L, R>] {
        &self.violations
    }

    /// Iterate over the recorded violations
    pub fn iter(&self) -> core::slice::Iter<'_, Violation<L, R>> {
        self.violations.iter()
    }

    /// Check whether a violation of the given kind was recorded
    pub fn contains(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind() == kind)
    }

    /// Consume the report and return its violations
    pub fn into_violations(self) -> Vec<Violation<L, R>> {
        self.violations
    }

    /// `Ok(())` when empty, the report itself otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<L, R> Default for ViolationReport<L, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, L, R> IntoIterator for &'a ViolationReport<L, R> {
    type Item = &'a Violation<L, R>;
    type IntoIter = core::slice::Iter<'a, Violation<L, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Debug, R: Debug> fmt::Display for ViolationReport<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "no violations");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
