//! Positional pairing of editable and reference strings.
//!
//! Index `i` of a translation corresponds to index `i` of the reference
//! language file; nothing else links them.

/// One editable string next to its optional reference string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringComparison {
    pub editable: String,
    reference: Option<String>,
}

impl StringComparison {
    /// Empty reference strings are stored as `None`.
    pub fn new(editable: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            editable: editable.into(),
            reference: reference.filter(|r| !r.is_empty()),
        }
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Editable string is empty while a reference exists.
    pub fn is_untranslated(&self) -> bool {
        self.editable.is_empty() && self.reference.is_some()
    }
}

/// Pair two string lists by position.
///
/// The result has `max(editable.len(), reference.len())` entries. Missing
/// editable strings become `""`, missing references become `None`.
pub fn pair_strings(editable: Vec<String>, reference: Vec<String>) -> Vec<StringComparison> {
    let count = editable.len().max(reference.len());
    let mut editable = editable.into_iter();
    let mut reference = reference.into_iter();

    (0..count)
        .map(|_| StringComparison::new(editable.next().unwrap_or_default(), reference.next()))
        .collect()
}

/// Ordered collection of comparisons backing an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonSet {
    comparisons: Vec<StringComparison>,
}

impl ComparisonSet {
    pub fn new(editable: Vec<String>, reference: Vec<String>) -> Self {
        Self {
            comparisons: pair_strings(editable, reference),
        }
    }

    /// Editable strings, one per comparison.
    pub fn editable_strings(&self) -> Vec<String> {
        self.comparisons.iter().map(|c| c.editable.clone()).collect()
    }

    /// Reference strings, one per comparison, `""` where missing.
    pub fn reference_strings(&self) -> Vec<String> {
        self.comparisons
            .iter()
            .map(|c| c.reference().unwrap_or_default().to_owned())
            .collect()
    }

    /// Re-pair with new editable strings, keeping current references.
    pub fn replace_editable(&mut self, editable: Vec<String>) {
        self.comparisons = pair_strings(editable, self.reference_strings());
    }

    /// Re-pair with new reference strings, keeping current editable strings.
    pub fn replace_reference(&mut self, reference: Vec<String>) {
        self.comparisons = pair_strings(self.editable_strings(), reference);
    }

    /// Blank every editable string, keeping the rows.
    pub fn clear_editable(&mut self) {
        for comparison in &mut self.comparisons {
            comparison.editable.clear();
        }
    }

    pub fn clear(&mut self) {
        self.comparisons.clear();
    }

    pub fn has_reference(&self) -> bool {
        self.comparisons.iter().any(|c| c.reference.is_some())
    }

    pub fn get(&self, index: usize) -> Option<&StringComparison> {
        self.comparisons.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut StringComparison> {
        self.comparisons.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StringComparison> {
        self.comparisons.iter()
    }

    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComparisonSet {
    type Item = &'a StringComparison;
    type IntoIter = std::slice::Iter<'a, StringComparison>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
