#![no_std]
//! A singly linked list with owned nodes and a sentinel head.
//!
//! [`SinglyLinkedList`] supports insertion and removal right after any known
//! position in constant time, without walking the list. Positions are
//! [`Cursor`]s: plain copyable locators that do not borrow the list. The
//! sentinel head is what makes "insert at the front" and "insert after a
//! node" the same operation.
//!
//! # Memory layout
//! ```text
//!  SinglyLinkedList
//! ╔══════════╗    ┌─────────┐    ┌─────────┐
//! ║ sentinel ╟───►│ value T ├───►│ value T ├───► ∅
//! ║ length   ║    └─────────┘    └─────────┘
//! ╚══════════╝
//! ```
//! The sentinel is embedded in the list and never carries a value; every
//! value node exclusively owns its successor.
//!
//! # Example
//! ```
//! use sll::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<i32> = [2, 3].into_iter().collect();
//! list.push_front(1);
//! assert_eq!(list.len(), 3);
//!
//! let pos = list.cursor_front();
//! // SAFETY: `pos` references the first node of `list`.
//! unsafe { list.insert_after(pos, 10) };
//! assert!(list.iter().eq(&[1, 10, 2, 3]));
//! ```

extern crate alloc;

pub mod invariants;
mod node;

pub use node::{
    cursor::{Cursor, CursorMut},
    IntoIter, Iter, IterMut,
};

use {
    core::{cmp::Ordering, fmt, mem, ptr},
    crate::node::Node,
};

/// A singly linked list with a sentinel head and a cached length.
///
/// See the [crate documentation](`crate`) for the memory layout.
pub struct SinglyLinkedList<T> {
    head: Node<T>,
    length: usize,
}

// SAFETY: the list exclusively owns its nodes; sending it moves the whole
// chain to the receiving thread.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
// SAFETY: shared access only ever hands out `&T`.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list. Does not allocate.
    pub const fn new() -> Self {
        Self {
            head: Node::sentinel(),
            length: 0,
        }
    }

    /// Number of elements in the list. O(1), reads the cached counter
    /// ([`INVARIANT_3`](`crate::invariants::INVARIANT_3`)).
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Gets a shared reference to the first element.
    pub fn front(&self) -> Option<&T> {
        let first = self.head.next_ptr();
        if first.is_null() {
            None
        } else {
            // SAFETY: non-null successors of the sentinel are value nodes.
            Some(unsafe { (*first).value() })
        }
    }

    /// Gets an exclusive reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.head.next_mut_ptr();
        if first.is_null() {
            None
        } else {
            // SAFETY: non-null successors of the sentinel are value nodes.
            Some(unsafe { (*first).value_mut() })
        }
    }

    /// Read-only cursor at the before-front position, i.e. the sentinel.
    /// Never dereferenceable, but a valid anchor for [`insert_after`] and
    /// [`erase_after`] to operate at the front.
    ///
    /// [`insert_after`]: SinglyLinkedList::insert_after
    /// [`erase_after`]: SinglyLinkedList::erase_after
    pub fn cursor_before_front(&self) -> Cursor<T> {
        Cursor {
            node: &raw const self.head,
        }
    }

    /// Mutable cursor at the before-front position.
    pub fn cursor_before_front_mut(&mut self) -> CursorMut<T> {
        CursorMut {
            node: &raw mut self.head,
        }
    }

    /// Read-only cursor at the first element; the null cursor if the list is
    /// empty.
    pub fn cursor_front(&self) -> Cursor<T> {
        Cursor {
            node: self.head.next_ptr(),
        }
    }

    /// Mutable cursor at the first element; the null cursor if the list is
    /// empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<T> {
        CursorMut {
            node: self.head.next_mut_ptr(),
        }
    }

    /// Inserts `val` at the front of the list. O(1).
    pub fn push_front(&mut self, val: T) {
        let pos = self.cursor_before_front();
        // SAFETY: the before-front position references this list's sentinel.
        unsafe { self.insert_after(pos, val) };
    }

    /// Removes the first element and returns it. O(1).
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> T {
        assert!(!self.is_empty(), "pop_front on an empty list");
        let pos = self.cursor_before_front();
        // SAFETY: the list is non-empty, so the sentinel has a successor.
        let (_, val) = unsafe { self.erase_after(pos) };
        val
    }

    /// Inserts `val` right after `pos` and returns a cursor to the new
    /// element. With `pos` at the before-front position this is
    /// [`push_front`](`SinglyLinkedList::push_front`). O(1).
    ///
    /// # Safety
    /// `pos` must reference the sentinel or a value node of `self`.
    pub unsafe fn insert_after(&mut self, pos: Cursor<T>, val: T) -> CursorMut<T> {
        debug_assert!(!pos.is_null(), "insert_after through the end cursor");
        // SAFETY: `pos` references a node of this list per the caller
        // contract, and the new node becomes that node's sole successor.
        let new = unsafe { Node::add_after(pos.node, val) };
        self.length += 1;
        CursorMut { node: new }
    }

    /// Removes the element right after `pos`. Returns a cursor to the node
    /// that now follows `pos` (the null cursor if none) together with the
    /// removed value. O(1).
    ///
    /// # Safety
    /// `pos` must reference the sentinel or a value node of `self`, and the
    /// referenced node must have a successor.
    pub unsafe fn erase_after(&mut self, pos: Cursor<T>) -> (CursorMut<T>, T) {
        debug_assert!(!pos.is_null(), "erase_after through the end cursor");
        // SAFETY: `pos` references a node of this list with a successor per
        // the caller contract.
        let val = unsafe { Node::del_after(pos.node) };
        self.length -= 1;
        let next = unsafe { (*pos.node).next_mut_ptr() };
        (CursorMut { node: next }, val)
    }

    /// Removes every element. O(n), iterative.
    pub fn clear(&mut self) {
        let first = self.head.next_mut_ptr();
        // The chain is detached before any value is dropped; the list is
        // already empty and consistent while nodes are destroyed.
        // SAFETY: the sentinel's link is not aliased here.
        unsafe { self.head.set_next(ptr::null_mut()) };
        self.length = 0;
        // SAFETY: the detached chain is owned by this function alone.
        unsafe { Node::drop_chain(first) };
    }

    /// Exchanges the contents of two lists, node chains and lengths
    /// included, in constant time. Individual nodes are never touched, so
    /// cursors keep referencing the nodes they referenced before (now in the
    /// other list).
    pub fn swap(&mut self, other: &mut Self) {
        let self_first = self.head.next_mut_ptr();
        let other_first = other.head.next_mut_ptr();
        // SAFETY: both sentinels are exclusively borrowed; each chain ends
        // up with exactly one owner again.
        unsafe {
            self.head.set_next(other_first);
            other.head.set_next(self_first);
        }
        mem::swap(&mut self.length, &mut other.length);
    }

    /// Borrowing forward iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Borrowing forward iterator with exclusive access to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Appends the values in their own order, in a single forward pass.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.cursor_before_front();
        // SAFETY: the walk starts at the sentinel and stops on the last
        // node, all positions in between reference nodes of this list.
        unsafe {
            while !(*tail.node).next_ptr().is_null() {
                tail.move_next();
            }
        }
        for val in iter {
            // SAFETY: `tail` references the current last node (or the
            // sentinel) of this list.
            tail = unsafe { self.insert_after(tail, val) }.as_cursor();
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// The copy is fully built aside and swapped in; `self` keeps its old
    /// contents if cloning an element panics.
    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap(&mut tmp);
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'life, T> IntoIterator for &'life SinglyLinkedList<T> {
    type Item = &'life T;
    type IntoIter = Iter<'life, T>;

    fn into_iter(self) -> Iter<'life, T> {
        self.iter()
    }
}

impl<'life, T> IntoIterator for &'life mut SinglyLinkedList<T> {
    type Item = &'life mut T;
    type IntoIter = IterMut<'life, T>;

    fn into_iter(self) -> IterMut<'life, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.length == other.length && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SinglyLinkedList<T> {
    /// Lexicographic over the iteration order; a strict prefix is less than
    /// the longer list.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SinglyLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
