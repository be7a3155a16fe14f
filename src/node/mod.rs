use {
    crate::SinglyLinkedList,
    alloc::boxed::Box,
    core::{cell::UnsafeCell, mem::MaybeUninit, ptr},
};

pub mod cursor;

/// List element for a singly linked list.
///
/// A node is either the sentinel embedded in a
/// [`SinglyLinkedList`](`crate::SinglyLinkedList`) or a heap-allocated value
/// node created by [`Node::new`]. Only value nodes carry an initialised
/// value; the sentinel's storage stays uninitialised for its whole life
/// ([`INVARIANT_1`](`crate::invariants::INVARIANT_1`)).
///
/// The `next` link lives in an [`UnsafeCell`] so that the chain can be
/// re-linked through a shared reference, which is what a read-only position
/// handle hands out.
pub struct Node<T> {
    next: UnsafeCell<*mut Node<T>>,
    value: MaybeUninit<T>,
}

impl<T> Node<T> {
    /// Creates the sentinel node. Its value storage is never initialised
    /// and must never be read.
    ///
    /// # Layout
    /// ```text
    /// ╔════════╗
    /// ║sentinel╟──► ∅
    /// ╚════════╝
    /// ```
    pub const fn sentinel() -> Self {
        Self {
            next: UnsafeCell::new(ptr::null_mut()),
            value: MaybeUninit::uninit(),
        }
    }

    /// Creates a new heap-allocated node holding `val`, already linked to
    /// `next`. The caller is responsible for attaching the node to a chain
    /// or destroying it with [`Node::into_value`].
    pub fn new(val: T, next: *mut Self) -> *mut Self {
        Box::into_raw(Box::new(Self {
            next: UnsafeCell::new(next),
            value: MaybeUninit::new(val),
        }))
    }

    /// Gets the successor as a const pointer (null for the last node).
    pub fn next_ptr(&self) -> *const Self {
        unsafe { *self.next.get() }
    }

    /// Gets the successor as a mutable pointer (null for the last node).
    pub fn next_mut_ptr(&self) -> *mut Self {
        unsafe { *self.next.get() }
    }

    /// Re-targets the `next` link.
    ///
    /// # Safety
    /// No other thread may access the link, and every node reachable through
    /// the new chain must keep exactly one owner
    /// ([`INVARIANT_2`](`crate::invariants::INVARIANT_2`)).
    pub unsafe fn set_next(&self, link: *mut Self) {
        unsafe { *self.next.get() = link }
    }

    /// Gets a shared reference to the value of the node.
    ///
    /// # Safety
    /// `self` must be a value node, never the sentinel.
    pub unsafe fn value(&self) -> &T {
        unsafe { self.value.assume_init_ref() }
    }

    /// Gets an exclusive reference to the value of the node.
    ///
    /// # Safety
    /// `self` must be a value node, never the sentinel.
    pub unsafe fn value_mut(&mut self) -> &mut T {
        unsafe { self.value.assume_init_mut() }
    }

    /// Allocates a node for `val` and splices it right after `pos`.
    /// Returns a pointer to the new node.
    ///
    /// # Sketch
    /// ```text
    /// ┌────┐   ┌────┐   ┌────┐
    /// │pos ├──►│new ├──►│next│
    /// └────┘   └────┘   └────┘
    /// ```
    ///
    /// # Safety
    /// `pos` must be a valid pointer to the sentinel or to a value node.
    pub unsafe fn add_after(pos: *const Self, val: T) -> *mut Self {
        let new = Self::new(val, unsafe { (*pos).next_mut_ptr() });
        unsafe {
            // SAFETY: `new` took over `pos`'s old successor, so attaching it
            // here keeps one owner per node.
            (*pos).set_next(new);
        }
        new
    }

    /// Unlinks the successor of `pos` by connecting `pos` to the successor's
    /// successor, then destroys it and returns its value.
    ///
    /// # Sketch
    /// ```text
    ///          ┌────┐
    ///          │del │
    /// ┌────┬─  └────┘  ─►┌────┐
    /// │pos │             │next│
    /// └────┘             └────┘
    /// ```
    ///
    /// # Safety
    /// `pos` must be a valid pointer to the sentinel or to a value node, and
    /// it must have a successor.
    pub unsafe fn del_after(pos: *const Self) -> T {
        unsafe {
            let to_del = (*pos).next_mut_ptr();
            debug_assert!(!to_del.is_null(), "del_after behind the last node");

            // SAFETY: `pos` takes over the ownership of `to_del`'s successor
            // before `to_del` is destroyed.
            (*pos).set_next((*to_del).next_mut_ptr());

            Self::into_value(to_del)
        }
    }

    /// Takes ownership of a detached node, moves its value out and frees the
    /// allocation.
    ///
    /// # Safety
    /// `this` must be a pointer obtained from [`Node::new`] that is no
    /// longer linked into any chain.
    pub unsafe fn into_value(this: *mut Self) -> T {
        let this = unsafe { Box::from_raw(this) };
        // SAFETY: nodes created by `Node::new` always hold a value; the
        // sentinel never reaches this function (INVARIANT_1).
        unsafe { this.value.assume_init() }
    }

    /// Destroys the whole chain hanging off `first`, one node at a time.
    ///
    /// The walk is iterative: nodes do not own their successor through the
    /// type system, so no recursive drop can overflow the stack on long
    /// chains.
    ///
    /// # Safety
    /// `first` must be null or point to the head of a chain of exclusively
    /// owned, detached value nodes.
    pub unsafe fn drop_chain(mut cur: *mut Self) {
        while !cur.is_null() {
            // SAFETY: each node of the chain is owned exactly once and is
            // destroyed exactly once here.
            let mut node = unsafe { Box::from_raw(cur) };
            cur = node.next_mut_ptr();
            // SAFETY: value nodes always hold an initialised value.
            unsafe { node.value.assume_init_drop() };
        }
    }
}

/// Forward list iterator.
pub struct Iter<'life, T> {
    _list: &'life SinglyLinkedList<T>,
    next: *const Node<T>,
}
impl<'life, T> Iterator for Iter<'life, T> {
    type Item = &'life T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: the lifetime `'life` of `self` is bound to the lifetime of
        // the list, so every node of the chain outlives the returned
        // reference. Non-null nodes reached from the first node are value
        // nodes.
        let (current, next) = unsafe {
            let r = &*self.next;
            (r.value(), r.next_ptr())
        };
        self.next = next;
        Some(current)
    }
}
impl<'life, T> Iter<'life, T> {
    pub fn new(list: &'life SinglyLinkedList<T>) -> Self {
        let first = list.head.next_ptr();
        Self {
            _list: list,
            next: first,
        }
    }
}

/// Forward list iterator with mutability.
pub struct IterMut<'life, T> {
    _list: &'life mut SinglyLinkedList<T>,
    next: *mut Node<T>,
}
impl<'life, T> Iterator for IterMut<'life, T> {
    type Item = &'life mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_null() {
            return None;
        }
        // SAFETY: the list is exclusively borrowed for `'life` and each node
        // is visited once, so the exclusive references never alias.
        let (current, next) = unsafe {
            let r = &mut *self.next;
            let next = r.next_mut_ptr();
            (r.value_mut(), next)
        };
        self.next = next;
        Some(current)
    }
}
impl<'life, T> IterMut<'life, T> {
    pub fn new(list: &'life mut SinglyLinkedList<T>) -> Self {
        let first = list.head.next_mut_ptr();
        Self {
            _list: list,
            next: first,
        }
    }
}

/// Owning list iterator, draining the list from the front.
pub struct IntoIter<T>(pub(crate) SinglyLinkedList<T>);
impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop_front())
        }
    }
}
