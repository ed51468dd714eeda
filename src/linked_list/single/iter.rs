use core::iter::FusedIterator;

use super::{
    list::LinkedList,
    node::SingleNode,
    traits::Link,
};

/// An iterator over the nodes of a chain, starting from any node.
///
/// Returned by [`LinkedList::nodes`] and used by
/// [`nodes_from`](super::chain::nodes_from).
pub struct Chain<'a, V> {
    current: Option<&'a SingleNode<V>>,
}

impl<'a, V> Chain<'a, V> {
    /// Creates a walk beginning at `start` (inclusive).
    pub fn new(start: Option<&'a SingleNode<V>>) -> Self {
        Self { current: start }
    }

    /// Creates a walk over whatever follows `link`.
    pub fn after<L>(link: &'a L) -> Self
    where
        L: Link<Target = SingleNode<V>>,
    {
        Self::new(link.next())
    }
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = &'a SingleNode<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = current.next();
        })
    }
}

impl<V> FusedIterator for Chain<'_, V> {}

impl<V> Clone for Chain<'_, V> {
    fn clone(&self) -> Self {
        Self { current: self.current }
    }
}

/// An iterator over the values of a [`LinkedList`], front to back.
pub struct Iter<'a, V> {
    nodes: Chain<'a, V>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(list: &'a LinkedList<V>) -> Self {
        Self {
            nodes: Chain::after(list),
            remaining: list.len(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            remaining: self.remaining,
        }
    }
}

/// A mutable iterator over the values of a [`LinkedList`], front to back.
pub struct IterMut<'a, V> {
    current: Option<&'a mut SingleNode<V>>,
    remaining: usize,
}

impl<'a, V> IterMut<'a, V> {
    pub(super) fn new(list: &'a mut LinkedList<V>) -> Self {
        let remaining = list.len();
        Self {
            current: list.head_mut(),
            remaining,
        }
    }
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.remaining -= 1;
            self.current = node.next.as_deref_mut();
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// An owning iterator over the values of a [`LinkedList`], front to back.
pub struct IntoIter<V> {
    list: LinkedList<V>,
}

impl<V> IntoIter<V> {
    pub(super) fn new(list: LinkedList<V>) -> Self {
        Self { list }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}
