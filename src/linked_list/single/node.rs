use alloc::boxed::Box;
use core::{fmt, ops::Deref};

use super::traits::{Link, NodeWithData};

/// An owned link to the rest of a chain.
pub(super) type NextLink<V> = Option<Box<SingleNode<V>>>;

/// A node in a singly linked list.
///
/// Nodes are only created by [`LinkedList`](super::list::LinkedList)
/// insertions; callers see them as handles borrowed from the list.
pub struct SingleNode<V> {
    pub(super) value: V,
    pub(super) next: NextLink<V>,
}

impl<V> SingleNode<V> {
    pub(super) fn boxed(value: V, next: NextLink<V>) -> Box<Self> {
        Box::new(SingleNode { value, next })
    }

    /// Returns the value held by this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value held by this node.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value held by this node, returning the previous one.
    pub fn set_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    /// Returns the node following this one.
    pub fn next(&self) -> Option<&SingleNode<V>> {
        self.next.as_deref()
    }

    pub(super) fn next_mut(&mut self) -> Option<&mut SingleNode<V>> {
        self.next.as_deref_mut()
    }

    /// Replaces the successor chain. The old chain is released.
    pub(super) fn set_next(&mut self, next: NextLink<V>) {
        release(core::mem::replace(&mut self.next, next));
    }

    /// Detaches and returns the successor chain.
    pub(super) fn take_next(&mut self) -> NextLink<V> {
        self.next.take()
    }
}

/// Drops a chain front to back so long chains don't recurse through `Box`.
pub(super) fn release<V>(mut link: NextLink<V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl<V> Link for SingleNode<V> {
    type Target = Self;

    fn next(&self) -> Option<&Self> {
        SingleNode::next(self)
    }
}

impl<V> NodeWithData for SingleNode<V> {
    type Data = V;

    fn data(&self) -> &V {
        &self.value
    }

    fn data_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: fmt::Debug> fmt::Debug for SingleNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleNode")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// A mutable handle to a node inside a [`LinkedList`](super::list::LinkedList).
///
/// The handle can change the node's value but never its links: it derefs to
/// a shared [`SingleNode`] only, so a node (and the chain it owns) cannot be
/// swapped or replaced through it.
///
/// ```compile_fail
/// use mola_linked_list::linked_list::single::LinkedList;
///
/// let mut a: LinkedList<_> = [1, 2, 3].into();
/// let mut b: LinkedList<_> = [9].into();
/// let mut x = a.search_mut(&1).unwrap();
/// let mut y = b.search_mut(&9).unwrap();
/// core::mem::swap(&mut *x, &mut *y);
/// ```
///
/// ```compile_fail
/// use mola_linked_list::linked_list::single::LinkedList;
///
/// let mut a: LinkedList<_> = [1, 2].into();
/// let mut b: LinkedList<_> = [9].into();
/// let x = a.add_front(0);
/// let y = b.add_front(8);
/// core::mem::swap(x.next_mut().unwrap(), y.next_mut().unwrap());
/// ```
pub struct NodeMut<'a, V> {
    node: &'a mut SingleNode<V>,
}

impl<'a, V> NodeMut<'a, V> {
    pub(super) fn new(node: &'a mut SingleNode<V>) -> Self {
        Self { node }
    }

    /// Returns a mutable reference to the value held by the node.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.node.value
    }

    /// Replaces the value held by the node, returning the previous one.
    pub fn set_value(&mut self, value: V) -> V {
        self.node.set_value(value)
    }

    /// Converts the handle into a mutable reference to the value, keeping the
    /// full borrow of the list.
    pub fn into_value_mut(self) -> &'a mut V {
        &mut self.node.value
    }
}

impl<V> Deref for NodeMut<'_, V> {
    type Target = SingleNode<V>;

    fn deref(&self) -> &SingleNode<V> {
        self.node
    }
}

impl<V: fmt::Debug> fmt::Debug for NodeMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;

    use super::{NodeMut, SingleNode, release};
    use crate::linked_list::single::traits::{Link, NodeWithData};

    #[test]
    fn test_accessors() {
        let mut node = SingleNode::boxed(1, Some(SingleNode::boxed(2, None)));
        assert_eq!(*node.value(), 1);
        assert_eq!(node.set_value(10), 1);
        *node.value_mut() += 1;
        assert_eq!(*node.data(), 11);

        let next = node.next_mut().unwrap();
        *next.data_mut() = 20;
        assert_eq!(node.next().map(|n| *n.value()), Some(20));
        assert!(node.next().unwrap().next().is_none());
    }

    #[test]
    fn test_set_next_discards_old_chain() {
        let mut node = SingleNode::boxed(1, Some(SingleNode::boxed(2, None)));
        node.set_next(Some(SingleNode::boxed(3, None)));
        assert_eq!(node.next().map(|n| *n.value()), Some(3));

        node.set_next(None);
        assert!(Link::next(&*node).is_none());
    }

    #[test]
    fn test_take_next() {
        let mut node = SingleNode::boxed('a', Some(SingleNode::boxed('b', None)));
        let rest = node.take_next();
        assert!(node.next().is_none());
        assert_eq!(rest.map(|n| n.value), Some('b'));
    }

    #[test]
    fn test_release_long_chain() {
        let mut link = None;
        for i in 0..200_000 {
            link = Some(SingleNode::boxed(i, link));
        }
        release(link);
    }

    #[test]
    fn test_handle_edits_value_only() {
        let mut node = SingleNode::boxed(1, Some(SingleNode::boxed(2, None)));
        let mut handle = NodeMut::new(&mut node);
        assert_eq!(handle.set_value(5), 1);
        *handle.value_mut() += 1;
        assert_eq!(*handle.value(), 6);
        assert_eq!(handle.next().map(|n| *n.value()), Some(2));
        assert_eq!(format!("{:?}", handle), "SingleNode { value: 6, has_next: true }");

        *handle.into_value_mut() = 7;
        assert_eq!(node.value, 7);
        assert!(node.next().is_some());
    }

    #[test]
    fn test_debug_does_not_walk_chain() {
        let node = SingleNode::boxed(7, Some(SingleNode::boxed(8, None)));
        assert_eq!(format!("{:?}", node), "SingleNode { value: 7, has_next: true }");
    }
}
