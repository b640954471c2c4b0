// Lookup and search options

/// Number of suggestions returned when no limit (or a limit of 0) is given.
pub const DEFAULT_SUGGESTIONS_LIMIT: usize = 10;

/// Candidate checks allowed for one suggestion run before it stops early.
pub const DEFAULT_MAX_COST: usize = 50_000;

/// Character levels explored below a prefix by default.
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Options for [`Dictionary::lookup`](crate::Dictionary::lookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    /// Generate correction candidates when the word is not found.
    pub suggest: bool,
    /// Maximum number of suggestions. 0 means the default of 10.
    pub suggestions_limit: usize,
    /// Upper bound on candidate checks for one lookup.
    pub max_cost: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            suggest: true,
            suggestions_limit: DEFAULT_SUGGESTIONS_LIMIT,
            max_cost: DEFAULT_MAX_COST,
        }
    }
}

impl LookupOptions {
    /// Default options with suggestion generation turned off.
    pub fn without_suggestions() -> Self {
        Self {
            suggest: false,
            ..Self::default()
        }
    }

    /// Replace the suggestion limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.suggestions_limit = limit;
        self
    }

    /// Replace the cost budget.
    pub fn with_max_cost(mut self, max_cost: usize) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// The limit actually applied, mapping 0 to the default.
    pub fn effective_limit(&self) -> usize {
        if self.suggestions_limit == 0 {
            DEFAULT_SUGGESTIONS_LIMIT
        } else {
            self.suggestions_limit
        }
    }
}

/// Options for [`Dictionary::search`](crate::Dictionary::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// How many characters below the prefix to explore.
    pub depth: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl SearchOptions {
    pub fn with_depth(depth: usize) -> Self {
        Self { depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_defaults() {
        let o = LookupOptions::default();
        assert!(o.suggest);
        assert_eq!(o.suggestions_limit, 10);
        assert_eq!(o.max_cost, DEFAULT_MAX_COST);
    }

    #[test]
    fn zero_limit_means_default() {
        assert_eq!(LookupOptions::default().with_limit(0).effective_limit(), 10);
        assert_eq!(LookupOptions::default().with_limit(3).effective_limit(), 3);
    }

    #[test]
    fn without_suggestions_keeps_other_defaults() {
        let o = LookupOptions::without_suggestions();
        assert!(!o.suggest);
        assert_eq!(o.suggestions_limit, 10);
    }

    #[test]
    fn search_default_depth_is_three() {
        assert_eq!(SearchOptions::default().depth, 3);
        assert_eq!(SearchOptions::with_depth(9).depth, 9);
    }
}
