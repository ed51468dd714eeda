use alloc::vec::Vec;

use super::{iter::Chain, node::SingleNode};

/// Returns the values of `start` and of every node reachable from it, in
/// order. Returns `None` when there is no starting node.
///
/// Any handle borrowed from a [`LinkedList`](super::list::LinkedList) works as
/// a starting point; the list cannot change while the handle is borrowed.
///
/// # Examples
///
/// ```
/// use mola_linked_list::linked_list::single::{LinkedList, nodes_from};
///
/// let list: LinkedList<_> = [-5, 0, 15, 10].into();
/// assert_eq!(nodes_from(list.search(&15)), Some(vec![15, 10]));
/// assert_eq!(nodes_from(list.head()), Some(list.values()));
/// assert_eq!(nodes_from(list.search(&3)), None);
/// ```
pub fn nodes_from<V: Clone>(start: Option<&SingleNode<V>>) -> Option<Vec<V>> {
    start.map(|start| {
        Chain::new(Some(start))
            .map(|node| node.value().clone())
            .collect()
    })
}
