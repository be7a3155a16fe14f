use {super::Node, core::ptr};

/// Read-only position in a [`SinglyLinkedList`](`crate::SinglyLinkedList`).
///
/// A cursor is a plain locator, not a borrow: it stays `Copy`, never keeps
/// the list alive and never prevents mutation. The null cursor (also the
/// [`Default`]) is the one-past-the-end position
/// ([`INVARIANT_4`](`crate::invariants::INVARIANT_4`)). The safe way to use
/// a cursor is to obtain it, navigate and hand it to a single after-position
/// operation right away; keeping cursors across structural mutations is the
/// caller's unchecked responsibility.
pub struct Cursor<T> {
    pub(crate) node: *const Node<T>,
}

/// Mutable position in a [`SinglyLinkedList`](`crate::SinglyLinkedList`).
///
/// Same contract as [`Cursor`], with read-write access to the referenced
/// value. Converts to [`Cursor`] via [`CursorMut::as_cursor`] or [`From`];
/// the reverse conversion does not exist.
pub struct CursorMut<T> {
    pub(crate) node: *mut Node<T>,
}

impl<T> Cursor<T> {
    /// Creates the null cursor, the one-past-the-end position.
    pub const fn null() -> Self {
        Self { node: ptr::null() }
    }

    /// Returns `true` for the end position, which is never dereferenceable
    /// nor advanceable.
    pub fn is_null(&self) -> bool {
        self.node.is_null()
    }

    /// Advances to the successor of the referenced node. The cursor becomes
    /// null after the last node. For a postfix-style advance, copy the
    /// cursor first.
    ///
    /// # Safety
    /// The cursor must reference the sentinel or a value node of a live
    /// list.
    pub unsafe fn move_next(&mut self) {
        debug_assert!(!self.node.is_null(), "advanced the end cursor");
        self.node = unsafe { (*self.node).next_ptr() };
    }

    /// Gets a shared reference to the referenced value.
    ///
    /// # Safety
    /// The cursor must reference a value node (never the sentinel, never
    /// null) of a list that outlives `'life` and is not mutated while the
    /// reference is held.
    pub unsafe fn value<'life>(self) -> &'life T {
        debug_assert!(!self.node.is_null(), "dereferenced the end cursor");
        unsafe { (*self.node).value() }
    }
}

impl<T> CursorMut<T> {
    /// Creates the null cursor, the one-past-the-end position.
    pub const fn null() -> Self {
        Self {
            node: ptr::null_mut(),
        }
    }

    /// Returns `true` for the end position, which is never dereferenceable
    /// nor advanceable.
    pub fn is_null(&self) -> bool {
        self.node.is_null()
    }

    /// Reborrows this position as a read-only cursor.
    pub fn as_cursor(&self) -> Cursor<T> {
        Cursor { node: self.node }
    }

    /// Advances to the successor of the referenced node. The cursor becomes
    /// null after the last node.
    ///
    /// # Safety
    /// The cursor must reference the sentinel or a value node of a live
    /// list.
    pub unsafe fn move_next(&mut self) {
        debug_assert!(!self.node.is_null(), "advanced the end cursor");
        self.node = unsafe { (*self.node).next_mut_ptr() };
    }

    /// Gets a shared reference to the referenced value.
    ///
    /// # Safety
    /// Same contract as [`Cursor::value`].
    pub unsafe fn value<'life>(self) -> &'life T {
        debug_assert!(!self.node.is_null(), "dereferenced the end cursor");
        unsafe { (*self.node).value() }
    }

    /// Gets an exclusive reference to the referenced value.
    ///
    /// # Safety
    /// The cursor must reference a value node of a list that outlives
    /// `'life`, and no other reference to that value may exist while the
    /// returned one is held.
    pub unsafe fn value_mut<'life>(self) -> &'life mut T {
        debug_assert!(!self.node.is_null(), "dereferenced the end cursor");
        unsafe { (*self.node).value_mut() }
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(cursor: CursorMut<T>) -> Self {
        cursor.as_cursor()
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<T> {}
impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> Clone for CursorMut<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for CursorMut<T> {}
impl<T> Default for CursorMut<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.node, other.node)
    }
}
impl<T> Eq for Cursor<T> {}

impl<T> PartialEq for CursorMut<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.node, other.node)
    }
}
impl<T> Eq for CursorMut<T> {}

impl<T> PartialEq<CursorMut<T>> for Cursor<T> {
    fn eq(&self, other: &CursorMut<T>) -> bool {
        ptr::eq(self.node, other.node)
    }
}
impl<T> PartialEq<Cursor<T>> for CursorMut<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        ptr::eq(self.node as *const Node<T>, other.node)
    }
}
