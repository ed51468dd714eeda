//! Owned, singly linked collections.
//!
//! # Examples
//!
//! ```
//! use mola_linked_list::linked_list::single::{LinkedList, nodes_from};
//!
//! let mut list = LinkedList::new();
//! list.add_back(3);
//! list.add_back(6);
//! list.add_front(1);
//! assert_eq!(list.values(), vec![1, 3, 6]);
//!
//! list.add_before(9, &6);
//! assert_eq!(list.values(), vec![1, 3, 9, 6]);
//!
//! assert_eq!(nodes_from(list.search(&9)), Some(vec![9, 6]));
//! assert_eq!(nodes_from(list.search(&42)), None);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod linked_list;
