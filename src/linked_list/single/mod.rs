//! # Singly Linked List
//!
//! This module provides an owning singly linked list.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the accessor traits shared by nodes and lists, `Link` and `NodeWithData`.
//! - [`node::SingleNode`]: A node holding one value and the boxed rest of the chain.
//! - [`node::NodeMut`]: A mutable handle that edits a node's value and nothing else.
//! - [`list::LinkedList`]: The list itself, owning the head node and tracking its length.
//! - [`iter`]: Value iterators and the [`iter::Chain`] node walker.
//! - [`chain::nodes_from`]: Collects the values reachable from any node handle.
//! - [`persistent`]: Conversions to and from [`rpds::List`] snapshots.
//!
//! ## Ownership
//!
//! The list owns its head and every node owns its successor, so the chain is
//! released from front to back when the list is cleared or dropped. Links can
//! only be rewritten from inside this module, which keeps the chain acyclic.
//!
//! Search results are handles borrowed from the list. A handle cannot be held
//! across a structural change (`remove`, `pop`, `reverse`, `clear`): the
//! compiler rejects it, so a handle is always live when it is used.
//! Shared handles are `&SingleNode`; mutable ones are [`NodeMut`], which can
//! change a node's value but never its links, so no handle can move or
//! replace part of a chain and the list's length always matches its nodes.
//!
//! Every search-based operation resolves duplicates to the occurrence closest
//! to the head.

pub mod traits;
pub mod node;
pub mod list;
pub mod iter;
pub mod chain;
pub mod persistent;

pub use chain::nodes_from;
pub use list::LinkedList;
pub use node::{NodeMut, SingleNode};
