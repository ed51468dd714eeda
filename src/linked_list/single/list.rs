use alloc::vec::Vec;
use core::fmt;

use super::{
    iter::{Chain, IntoIter, Iter, IterMut},
    node::{NextLink, NodeMut, SingleNode, release},
    traits::Link,
};

/// An owning singly linked list.
///
/// # Examples
///
/// ```
/// use mola_linked_list::linked_list::single::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.add_back(3);
/// list.add_back(6);
/// list.add_front(1);
/// assert_eq!(list.values(), vec![1, 3, 6]);
///
/// assert!(list.remove(&3));
/// assert_eq!(list.pop(), Some(1));
/// assert_eq!(list.pop(), Some(6));
/// assert_eq!(list.pop(), None);
/// ```
pub struct LinkedList<V> {
    head: NextLink<V>,
    size: usize,
}

impl<V> LinkedList<V> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    /// Check if the linked list is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the number of nodes in the linked list
    pub fn len(&self) -> usize {
        self.size
    }

    /// Get the first node of the linked list
    pub fn head(&self) -> Option<&SingleNode<V>> {
        self.head.as_deref()
    }

    /// Adds `value` at the front of the list and returns its node.
    pub fn add_front(&mut self, value: V) -> NodeMut<'_, V> {
        let rest = self.head.take();
        let node = self.head.insert(SingleNode::boxed(value, rest));
        self.size += 1;
        NodeMut::new(node)
    }

    /// Adds `value` at the back of the list and returns its node.
    ///
    /// This walks the whole chain to find the tail.
    pub fn add_back(&mut self, value: V) -> NodeMut<'_, V> {
        let tail = tail_link(&mut self.head);
        let node = tail.insert(SingleNode::boxed(value, None));
        self.size += 1;
        NodeMut::new(node)
    }

    /// Adds `value` right before the first node holding `reference`.
    ///
    /// Returns `None` and leaves the list untouched when `reference` is not
    /// in the list. Inserting before the head makes the new node the head.
    pub fn add_before(&mut self, value: V, reference: &V) -> Option<NodeMut<'_, V>>
    where
        V: PartialEq,
    {
        let link = link_of(&mut self.head, reference);
        let found = link.take()?;
        let node = link.insert(SingleNode::boxed(value, Some(found)));
        self.size += 1;
        Some(NodeMut::new(node))
    }

    /// Adds `value` right after the first node holding `reference`.
    ///
    /// Returns `None` and leaves the list untouched when `reference` is not
    /// in the list.
    pub fn add_after(&mut self, value: V, reference: &V) -> Option<NodeMut<'_, V>>
    where
        V: PartialEq,
    {
        let found = link_of(&mut self.head, reference).as_deref_mut()?;
        let rest = found.take_next();
        found.set_next(Some(SingleNode::boxed(value, rest)));
        self.size += 1;
        found.next_mut().map(NodeMut::new)
    }

    /// Overwrites the first node holding `reference` with `value`.
    ///
    /// The node stays where it is. Returns `None` when `reference` is not in
    /// the list.
    pub fn change(&mut self, value: V, reference: &V) -> Option<NodeMut<'_, V>>
    where
        V: PartialEq,
    {
        let mut node = self.search_mut(reference)?;
        node.set_value(value);
        Some(node)
    }

    /// Swaps the values of the first node holding `a` and the first node
    /// holding `b`.
    ///
    /// Returns `false` without changing anything unless both are present.
    /// When `a == b` both lookups land on the same node, which ends up
    /// holding `a`.
    pub fn switch(&mut self, a: V, b: V) -> bool
    where
        V: PartialEq,
    {
        let (Some(at_a), Some(at_b)) = (self.position(&a), self.position(&b)) else {
            return false;
        };

        if at_a == at_b {
            // Writes `b` then `a` to the same node; only the last one sticks.
            if let Some(value) = self.iter_mut().nth(at_a) {
                *value = a;
            }
            return true;
        }

        let (first, second, first_value, second_value) = if at_a < at_b {
            (at_a, at_b, b, a)
        } else {
            (at_b, at_a, a, b)
        };
        let mut values = self.iter_mut();
        if let (Some(x), Some(y)) = (values.nth(first), values.nth(second - first - 1)) {
            *x = first_value;
            *y = second_value;
        }
        true
    }

    /// Returns the first node holding `value`, closest to the head.
    pub fn search(&self, value: &V) -> Option<&SingleNode<V>>
    where
        V: PartialEq,
    {
        self.nodes().find(|node| node.value == *value)
    }

    /// Returns a handle to the first node holding `value`.
    ///
    /// The handle can change the node's value but not its links.
    pub fn search_mut(&mut self, value: &V) -> Option<NodeMut<'_, V>>
    where
        V: PartialEq,
    {
        link_of(&mut self.head, value).as_deref_mut().map(NodeMut::new)
    }

    /// Returns `true` if some node holds `value`.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.search(value).is_some()
    }

    /// Unlinks and drops the first node holding `value`.
    ///
    /// Returns `false` when `value` is not in the list.
    pub fn remove(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let link = link_of(&mut self.head, value);
        let Some(mut found) = link.take() else {
            return false;
        };
        *link = found.take_next();
        self.size -= 1;
        true
    }

    /// Removes the head node and returns its value.
    pub fn pop(&mut self) -> Option<V> {
        self.head.take().map(|head| {
            let SingleNode { value, next } = *head;
            self.head = next;
            self.size -= 1;
            value
        })
    }

    /// Returns the value at the front of the list.
    pub fn peek(&self) -> Option<&V> {
        self.head.as_ref().map(|head| &head.value)
    }

    /// Returns the value at the front of the list, mutably.
    pub fn peek_mut(&mut self) -> Option<&mut V> {
        self.head.as_mut().map(|head| &mut head.value)
    }

    /// Reverses the list in place by relinking every node.
    pub fn reverse(&mut self) {
        let mut previous: NextLink<V> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.take_next();
            node.set_next(previous);
            previous = Some(node);
        }
        self.head = previous;
    }

    /// Drops every node in the list.
    pub fn clear(&mut self) {
        release(self.head.take());
        self.size = 0;
    }

    /// Returns a snapshot of the values, front to back.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Get an iterator over the values of the linked list
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    /// Get a mutable iterator over the values of the linked list
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut::new(self)
    }

    /// Get an iterator over the nodes of the linked list
    pub fn nodes(&self) -> Chain<'_, V> {
        Chain::after(self)
    }

    pub(super) fn head_mut(&mut self) -> Option<&mut SingleNode<V>> {
        self.head.as_deref_mut()
    }

    fn position(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.iter().position(|v| v == value)
    }
}

/// Walks from `link` to the link holding the first node equal to `value`,
/// or to the empty link at the end of the chain.
fn link_of<'a, V>(mut link: &'a mut NextLink<V>, value: &V) -> &'a mut NextLink<V>
where
    V: PartialEq,
{
    while link.as_ref().is_some_and(|node| node.value != *value) {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

/// Walks from `link` to the empty link at the end of the chain.
fn tail_link<V>(mut link: &mut NextLink<V>) -> &mut NextLink<V> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

impl<V> Link for LinkedList<V> {
    type Target = SingleNode<V>;

    fn next(&self) -> Option<&SingleNode<V>> {
        self.head.as_deref()
    }
}

impl<V> Default for LinkedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for LinkedList<V> {
    fn drop(&mut self) {
        release(self.head.take());
    }
}

impl<V: Clone> Clone for LinkedList<V> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<V: PartialEq> PartialEq for LinkedList<V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for LinkedList<V> {}

impl<V: fmt::Debug> fmt::Debug for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<V> Extend<V> for LinkedList<V> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        let mut tail = tail_link(&mut self.head);
        let mut added = 0;
        for value in iter {
            let node = tail.insert(SingleNode::boxed(value, None));
            tail = &mut node.next;
            added += 1;
        }
        self.size += added;
    }
}

impl<V> FromIterator<V> for LinkedList<V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<V, const N: usize> From<[V; N]> for LinkedList<V> {
    fn from(values: [V; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<V> IntoIterator for LinkedList<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter::new(self)
    }
}

impl<'a, V> IntoIterator for &'a LinkedList<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut LinkedList<V> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> IterMut<'a, V> {
        self.iter_mut()
    }
}
