//! Linked list implementations.
//!
//! The lists in this module own their nodes: every node is heap allocated
//! when a value is inserted and released when it is unlinked. Callers never
//! construct nodes themselves; they get borrowed handles back from the list
//! operations and the borrow checker keeps those handles from outliving a
//! structural change.
//!
//! # Examples
//!
//! ```
//! use mola_linked_list::linked_list::single::{
//!     LinkedList,
//!     traits::{Link, NodeWithData},
//! };
//!
//! let mut list: LinkedList<i32> = [3, 2, 1].into();
//! list.reverse();
//!
//! let mut values = vec![];
//! let mut current = list.next();
//! while let Some(node) = current {
//!     values.push(*node.data());
//!     current = node.next();
//! }
//! assert_eq!(values, vec![1, 2, 3]);
//! ```
pub mod single;
