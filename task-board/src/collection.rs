use std::ops::Deref;
use std::sync::Arc;

/// Copy-on-write snapshot of an entity list.
///
/// Every mutation builds a new snapshot; an existing snapshot never changes.
/// Consumers detect updates by comparing references with [`Collection::same_as`].
#[derive(Debug)]
pub struct Collection<T> {
    items: Arc<Vec<T>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// True when both handles point at the same snapshot
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> Collection<T> {
    /// New snapshot with `items` appended
    pub fn with_appended(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut next = self.items.as_ref().clone();
        next.extend(items);
        Self::new(next)
    }

    /// New snapshot where the first element matching `pred` is replaced.
    /// Returns `None` when nothing matches.
    pub fn with_replaced(&self, pred: impl Fn(&T) -> bool, item: T) -> Option<Self> {
        let index = self.items.iter().position(pred)?;
        let mut next = self.items.as_ref().clone();
        next[index] = item;
        Some(Self::new(next))
    }

    /// New snapshot without the first element matching `pred`
    pub fn without(&self, pred: impl Fn(&T) -> bool) -> Option<Self> {
        let index = self.items.iter().position(pred)?;
        let mut next = self.items.as_ref().clone();
        next.remove(index);
        Some(Self::new(next))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.as_ref().clone()
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_produces_new_snapshot() {
        let original = Collection::new(vec![1, 2, 3]);
        let updated = original.with_replaced(|n| *n == 2, 20).unwrap();

        assert!(!updated.same_as(&original));
        assert_eq!(&*original, &[1, 2, 3]);
        assert_eq!(&*updated, &[1, 20, 3]);
    }

    #[test]
    fn test_missing_element_yields_none() {
        let original = Collection::new(vec![1, 2, 3]);
        assert!(original.with_replaced(|n| *n == 9, 0).is_none());
        assert!(original.without(|n| *n == 9).is_none());
    }

    #[test]
    fn test_clone_shares_snapshot() {
        let original = Collection::new(vec!["a".to_string()]);
        let handle = original.clone();
        assert!(handle.same_as(&original));

        let appended = original.with_appended(["b".to_string()]);
        assert_eq!(appended.len(), 2);
        assert_eq!(original.len(), 1);
    }
}
