/// A trait for anything that links to a following node.
///
/// Both [`SingleNode`](super::node::SingleNode) and
/// [`LinkedList`](super::list::LinkedList) implement it; for a list the
/// "next" node is its head. This lets a walk start from either one.
pub trait Link {
    /// The target type of the link.
    type Target;

    /// Get the next node, if any
    fn next(&self) -> Option<&Self::Target>;
}

/// A trait for a node that contains data.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
