//! Ordered collection of chosen characters

use crate::api::Character;

/// Characters the user picked, in insertion order
///
/// Adding never de-duplicates; the same character can appear more than once.
/// Removal is by `id` and drops every matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Character>,
}

impl Selection {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a character
    pub fn push(&mut self, character: Character) {
        self.items.push(character);
    }

    /// Remove every entry whose id equals `id`, returning how many were removed
    pub fn remove_id(&mut self, id: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }

    /// Number of entries (duplicates included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entry at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.items.get(index)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.items.iter()
    }

    /// Entries as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Character] {
        &self.items
    }

    /// Consume the selection into its entries
    #[must_use]
    pub fn into_vec(self) -> Vec<Character> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
