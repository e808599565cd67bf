use std::collections::BTreeSet;

/// Selected row keys of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<K: Ord> {
    selected: BTreeSet<K>,
}

impl<K: Ord> Default for SelectionSet<K> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<K: Ord + Clone> SelectionSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header checkbox: select every key in `keys`, or clear the selection.
    pub fn select_all<I>(&mut self, keys: I, checked: bool)
    where
        I: IntoIterator<Item = K>,
    {
        self.selected.clear();
        if checked {
            self.selected.extend(keys);
        }
    }

    /// Row checkbox. Returns whether the selection changed.
    pub fn set(&mut self, key: K, checked: bool) -> bool {
        if checked {
            self.selected.insert(key)
        } else {
            self.selected.remove(&key)
        }
    }

    pub fn toggle(&mut self, key: K) -> bool {
        let checked = !self.selected.contains(&key);
        self.set(key, checked);
        checked
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    /// Header checkbox state for a list showing `keys`: checked iff there is
    /// at least one row and every row is selected.
    pub fn all_selected<'a, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut any = false;
        for key in keys {
            any = true;
            if !self.selected.contains(key) {
                return false;
            }
        }
        any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_and_clear() {
        let keys = [1, 2, 3];
        let mut selection = SelectionSet::new();
        selection.select_all(keys, true);
        assert!(selection.all_selected(&keys));
        selection.select_all(keys, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn header_is_unchecked_for_partial_or_empty_lists() {
        let mut selection = SelectionSet::new();
        assert!(!selection.all_selected(&[] as &[u32]));
        selection.set(1, true);
        assert!(!selection.all_selected(&[1, 2]));
        assert!(selection.toggle(2));
        assert!(selection.all_selected(&[1, 2]));
        assert!(!selection.toggle(1));
        assert_eq!(selection.iter().copied().collect::<Vec<_>>(), vec![2]);
    }
}
