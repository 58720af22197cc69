//! Construction configuration for bidirectional maps
//!
//! A [`BijectConfig`] selects how strictly a pair list is checked before the
//! indexes are built, and which domain and codomain it must cover.

use biject_core::Declared;

/// How a pair list is checked at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Validate first, refuse to build from anything but a bijection
    #[default]
    Strict,
    /// Skip validation; later pairs overwrite earlier ones sharing a key
    Permissive,
}

/// Configuration for building a [`BidirectionalMap`](crate::BidirectionalMap)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BijectConfig<L, R> {
    /// Validation mode
    pub mode: Mode,
    /// Declared domain every left value set must cover (strict mode only)
    pub domain: Option<Vec<L>>,
    /// Declared codomain the image must cover (strict mode only)
    pub codomain: Option<Vec<R>>,
    /// Re-check that every pair round-trips once the indexes are built
    pub verify_closure: bool,
}

impl<L, R> BijectConfig<L, R> {
    /// Create a strict config with no declared sets
    pub fn strict() -> Self {
        Self::default()
    }

    /// Create a permissive config
    pub fn permissive() -> Self {
        Self::default().with_mode(Mode::Permissive)
    }

    /// Set the validation mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Declare the domain the pair list must cover
    pub fn with_domain<I: IntoIterator<Item = L>>(mut self, domain: I) -> Self {
        self.domain = Some(domain.into_iter().collect());
        self
    }

    /// Declare the codomain the image must cover
    pub fn with_codomain<I: IntoIterator<Item = R>>(mut self, codomain: I) -> Self {
        self.codomain = Some(codomain.into_iter().collect());
        self
    }

    /// Enable or disable the post-build round-trip check
    pub fn with_closure_check(mut self, verify_closure: bool) -> Self {
        self.verify_closure = verify_closure;
        self
    }

    /// Check whether validation runs before building
    pub fn is_strict(&self) -> bool {
        self.mode == Mode::Strict
    }

    /// Borrow the declared sets for validation
    pub fn declared(&self) -> Declared<'_, L, R> {
        Declared {
            domain: self.domain.as_deref(),
            codomain: self.codomain.as_deref(),
        }
    }
}

impl<L, R> Default for BijectConfig<L, R> {
    fn default() -> Self {
        Self {
            mode: Mode::Strict,
            domain: None,
            codomain: None,
            verify_closure: cfg!(debug_assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config: BijectConfig<u8, char> = BijectConfig::default();
        assert!(config.is_strict());
        assert_eq!(config.declared(), Declared::none());
        assert_eq!(config.verify_closure, cfg!(debug_assertions));
    }

    #[test]
    fn test_builder() {
        let config = BijectConfig::permissive()
            .with_domain([1, 2])
            .with_codomain(['a', 'b'])
            .with_closure_check(true);

        assert_eq!(config.mode, Mode::Permissive);
        assert!(!config.is_strict());
        assert!(config.verify_closure);

        let declared = config.declared();
        assert_eq!(declared.domain, Some(&[1, 2][..]));
        assert_eq!(declared.codomain, Some(&['a', 'b'][..]));
    }
}
