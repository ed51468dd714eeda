//! Conversions between [`LinkedList`] and [`rpds::List`].
//!
//! A persistent list is an immutable snapshot that shares structure between
//! versions. Converting copies every value, so the snapshot never aliases the
//! nodes of the mutable list it came from.

use rpds::List;

use super::list::LinkedList;

impl<V: Clone> LinkedList<V> {
    /// Copies the current values into a persistent list, in the same order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mola_linked_list::linked_list::single::LinkedList;
    ///
    /// let mut list: LinkedList<_> = [1, 2, 3].into();
    /// let snapshot = list.to_persistent();
    /// list.clear();
    ///
    /// assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn to_persistent(&self) -> List<V> {
        let mut snapshot = List::new();
        for value in self.iter() {
            snapshot.push_front_mut(value.clone());
        }
        snapshot.reverse_mut();
        snapshot
    }
}

impl<V: Clone> From<&List<V>> for LinkedList<V> {
    fn from(snapshot: &List<V>) -> Self {
        snapshot.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use rpds::List;

    use crate::linked_list::single::LinkedList;

    #[test]
    fn test_snapshot_keeps_order() {
        let list: LinkedList<_> = [3, 6, 1].into();
        let snapshot = list.to_persistent();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.first(), Some(&3));
        assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![3, 6, 1]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut list: LinkedList<_> = [1, 2].into();
        let snapshot = list.to_persistent();
        list.change(10, &1);
        list.add_back(3);
        assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(list.values(), vec![10, 2, 3]);
    }

    #[test]
    fn test_from_persistent() {
        let snapshot = List::new().push_front(2).push_front(1);
        let list = LinkedList::from(&snapshot);
        assert_eq!(list.values(), vec![1, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let list = LinkedList::<u8>::new();
        assert!(list.to_persistent().is_empty());
        assert!(LinkedList::from(&List::<u8>::new()).is_empty());
    }
}
