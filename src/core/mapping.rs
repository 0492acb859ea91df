use std::collections::HashMap;

/// A table of contig name equivalences, original name to remapped name.
///
/// Every key maps to a non-empty value. Names listed without a target map to
/// themselves, so a lookup either finds a name to write or finds nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    names: HashMap<String, String>,
}

impl MappingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the previous target if `original` was already present.
    ///
    /// An empty `remapped` name is treated as an identity mapping. An empty
    /// `original` is ignored.
    pub fn insert(
        &mut self,
        original: impl Into<String>,
        remapped: impl Into<String>,
    ) -> Option<String> {
        let original = original.into();
        if original.is_empty() {
            return None;
        }
        let mut remapped = remapped.into();
        if remapped.is_empty() {
            remapped.clone_from(&original);
        }
        self.names.insert(original, remapped)
    }

    /// Look up the remapped name for `original`
    #[must_use]
    pub fn get(&self, original: &str) -> Option<&str> {
        self.names.get(original).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, original: &str) -> bool {
        self.names.contains_key(original)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(original, remapped)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build the reverse table (remapped name to original name).
    ///
    /// Returns `None` when two originals share a target, since the reverse
    /// mapping would then be ambiguous.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let mut inverse = Self::new();
        for (original, remapped) in self.iter() {
            if inverse.insert(remapped, original).is_some() {
                return None;
            }
        }
        Some(inverse)
    }
}

impl<K, V> FromIterator<(K, V)> for MappingTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (original, remapped) in iter {
            table.insert(original, remapped);
        }
        table
    }
}
