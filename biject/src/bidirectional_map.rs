//! Immutable dual-indexed map between two value sets
//!
//! Both indexes are built once, eagerly, from the same pair list: `forward`
//! maps left to right and `backward` maps right to left. Nothing mutates
//! them afterwards, so a built map can be shared across threads freely.

use crate::config::{BijectConfig, Mode};
use crate::error::InvalidBijectionError;
use biject_core::{
    find_unclosed, validate_with, BidirectionalLookup, ViolationKind, ViolationReport,
};
use hashbrown::hash_map::{Iter, Keys};
use hashbrown::HashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Bidirectional map with O(1) lookup in both directions
#[derive(Clone)]
pub struct BidirectionalMap<L, R> {
    forward: HashMap<L, R>,
    backward: HashMap<R, L>,
}

impl<L, R> BidirectionalMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Build a map without validation
    ///
    /// If `pairs` is not a bijection, later pairs silently overwrite earlier
    /// ones sharing a key in the respective index.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let pairs = pairs.into_iter();
        let (capacity, _) = pairs.size_hint();
        let mut forward = HashMap::with_capacity(capacity);
        let mut backward = HashMap::with_capacity(capacity);
        let mut overwritten = 0usize;

        for (left, right) in pairs {
            if forward.insert(left.clone(), right.clone()).is_some() {
                overwritten += 1;
            }
            if backward.insert(right, left).is_some() {
                overwritten += 1;
            }
        }

        if overwritten > 0 {
            log::debug!(
                "Best-effort build overwrote {} index entries ({} domain, {} image elements kept)",
                overwritten,
                forward.len(),
                backward.len()
            );
        }

        Self { forward, backward }
    }

    /// Build a map from a pair list that must be a bijection
    pub fn try_new<I>(pairs: I) -> Result<Self, InvalidBijectionError<L, R>>
    where
        I: IntoIterator<Item = (L, R)>,
    {
        Self::with_config(pairs, &BijectConfig::strict())
    }

    /// Build a map from a pair list that must be a bijection onto `codomain`
    pub fn try_onto<I, C>(pairs: I, codomain: C) -> Result<Self, InvalidBijectionError<L, R>>
    where
        I: IntoIterator<Item = (L, R)>,
        C: IntoIterator<Item = R>,
    {
        Self::with_config(pairs, &BijectConfig::strict().with_codomain(codomain))
    }

    /// Build a map as described by `config`
    ///
    /// In [`Mode::Strict`] the pair list is validated against the declared
    /// domain and codomain first, and every violation is returned at once.
    /// In [`Mode::Permissive`] validation and the declared sets are skipped.
    pub fn with_config<I>(
        pairs: I,
        config: &BijectConfig<L, R>,
    ) -> Result<Self, InvalidBijectionError<L, R>>
    where
        I: IntoIterator<Item = (L, R)>,
    {
        if config.mode == Mode::Permissive {
            if config.domain.is_some() || config.codomain.is_some() {
                log::debug!("Permissive build ignores the declared domain and codomain");
            }
            return Ok(Self::new(pairs));
        }

        let pairs: Vec<(L, R)> = pairs.into_iter().collect();
        let outcome = validate_with(&pairs, &config.declared());
        trace_checks(outcome.as_ref().err(), config);
        if let Err(report) = outcome {
            log_rejection(&report, pairs.len());
            return Err(InvalidBijectionError::new(report, pairs));
        }

        if !config.verify_closure {
            log::trace!("Validated {} pairs", pairs.len());
            return Ok(Self::new(pairs));
        }

        let map = Self::new(pairs.iter().cloned());
        match find_unclosed(&map, &pairs) {
            Some(position) => log::warn!(
                "Pair at position {} does not round-trip through the built indexes; \
                 the Eq and Hash implementations of the value types disagree",
                position
            ),
            None => log::trace!("Validated {} pairs, closure holds", pairs.len()),
        }

        Ok(map)
    }
}

fn trace_checks<L, R>(report: Option<&ViolationReport<L, R>>, config: &BijectConfig<L, R>) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    let checks = [
        (ViolationKind::NotAFunction, true),
        (ViolationKind::NotInjective, true),
        (ViolationKind::NotSurjective, config.codomain.is_some()),
        (ViolationKind::NotTotal, config.domain.is_some()),
    ];
    for (kind, declared) in checks {
        let outcome = match report {
            Some(report) if report.contains(kind) => "failed",
            _ if !declared => "skipped, nothing declared",
            _ => "passed",
        };
        log::trace!("Check {:?}: {}", kind, outcome);
    }
}

fn log_rejection<L, R>(report: &ViolationReport<L, R>, pair_count: usize) {
    if log::log_enabled!(log::Level::Debug) {
        let kinds: Vec<String> = report.iter().map(|v| v.kind().to_string()).collect();
        log::debug!(
            "Rejected {} pairs: {} violation(s) ({})",
            pair_count,
            report.len(),
            kinds.join(", ")
        );
    }
}

impl<L, R> BidirectionalMap<L, R>
where
    L: Eq + Hash,
    R: Eq + Hash,
{
    /// Get the right value paired with `left`
    ///
    /// `None` means `left` is not in the domain. A stored empty marker is
    /// returned as `Some`.
    pub fn map<Q>(&self, left: &Q) -> Option<&R>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(left)
    }

    /// Get the left value paired with `right`
    ///
    /// `None` means `right` is not in the image.
    pub fn invert<Q>(&self, right: &Q) -> Option<&L>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.get(right)
    }

    /// Check whether `value` is a left value of some pair
    pub fn is_in_domain<Q>(&self, value: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(value)
    }

    /// Check whether `value` is a right value of some pair
    pub fn is_in_image<Q>(&self, value: &Q) -> bool
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.contains_key(value)
    }
}

impl<L, R> BidirectionalMap<L, R> {
    /// Get the number of domain elements
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Check whether the map holds no pairs
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate over `(left, right)` pairs of the forward index, in arbitrary order
    pub fn iter(&self) -> Iter<'_, L, R> {
        self.forward.iter()
    }

    /// Iterate over the domain, in arbitrary order
    pub fn domain(&self) -> Keys<'_, L, R> {
        self.forward.keys()
    }

    /// Iterate over the image, in arbitrary order
    pub fn image(&self) -> Keys<'_, R, L> {
        self.backward.keys()
    }

    /// Swap the two sides without rebuilding either index
    pub fn inverse(self) -> BidirectionalMap<R, L> {
        BidirectionalMap {
            forward: self.backward,
            backward: self.forward,
        }
    }
}

impl<L, R> BidirectionalLookup for BidirectionalMap<L, R>
where
    L: Eq + Hash,
    R: Eq + Hash,
{
    type Left = L;
    type Right = R;

    fn map(&self, left: &L) -> Option<&R> {
        self.forward.get(left)
    }

    fn invert(&self, right: &R) -> Option<&L> {
        self.backward.get(right)
    }

    fn is_in_domain(&self, value: &L) -> bool {
        self.forward.contains_key(value)
    }

    fn is_in_image(&self, value: &R) -> bool {
        self.backward.contains_key(value)
    }

    fn len(&self) -> usize {
        self.forward.len()
    }
}

impl<L, R> Default for BidirectionalMap<L, R> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }
}

impl<L, R> PartialEq for BidirectionalMap<L, R>
where
    L: Eq + Hash,
    R: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward && self.backward == other.backward
    }
}

impl<L, R> Eq for BidirectionalMap<L, R>
where
    L: Eq + Hash,
    R: Eq + Hash,
{
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for BidirectionalMap<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

impl<L, R> FromIterator<(L, R)> for BidirectionalMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Builds without validation, like [`BidirectionalMap::new`]
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, L, R> IntoIterator for &'a BidirectionalMap<L, R> {
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.iter()
    }
}

impl<L, R> IntoIterator for BidirectionalMap<L, R> {
    type Item = (L, R);
    type IntoIter = hashbrown::hash_map::IntoIter<L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.into_iter()
    }
}
