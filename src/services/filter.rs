//! Filter engine
//!
//! Narrows the ledger down to the rows the user asked for: a type filter, a
//! category filter and a case-insensitive search on the description, all
//! ANDed together. Filtering never reorders records.

use crate::models::{Transaction, TransactionType};

/// Value used by every front end to mean "no restriction"
pub const ALL: &str = "all";

/// Filter criteria for the transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Restrict to one type (`None` = all)
    pub kind: Option<TransactionType>,
    /// Restrict to one category, compared exactly (`None` = all)
    pub category: Option<String>,
    /// Search text as typed; trimmed and case-folded when matching
    pub search: String,
}

impl TransactionFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by description substring
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Build a filter from the textual control values
    ///
    /// `"all"` (any case) or an empty value disables the type or category
    /// restriction.
    pub fn from_controls(
        kind: &str,
        category: &str,
        search: &str,
    ) -> Result<Self, crate::models::TransactionValidationError> {
        let kind = if is_all(kind) {
            None
        } else {
            Some(kind.parse::<TransactionType>()?)
        };
        let category = if is_all(category) {
            None
        } else {
            Some(category.trim().to_string())
        };

        Ok(Self {
            kind,
            category,
            search: search.to_string(),
        })
    }

    /// Case-folded, trimmed search needle
    fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// Whether any restriction is in effect
    pub fn is_active(&self) -> bool {
        self.kind.is_some() || self.category.is_some() || !self.needle().is_empty()
    }

    /// Check a single record against all three predicates
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.matches_with(txn, &self.needle())
    }

    fn matches_with(&self, txn: &Transaction, needle: &str) -> bool {
        let kind_ok = self.kind.map_or(true, |k| txn.kind == k);
        let category_ok = self.category.as_ref().map_or(true, |c| &txn.category == c);
        let search_ok = needle.is_empty() || txn.description.to_lowercase().contains(needle);
        kind_ok && category_ok && search_ok
    }

    /// Return the matching subsequence, order preserved
    ///
    /// Accepts anything that yields `&Transaction`, so an already filtered
    /// view can be filtered again.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Transaction>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let needle = self.needle();
        records
            .into_iter()
            .filter(|txn| self.matches_with(txn, &needle))
            .collect()
    }
}

fn is_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}
