#![allow(dead_code)]
//! This module is used to documents the invariants that are meant to be
//! preserved in this crate.

/// The sentinel `head` of a [`SinglyLinkedList<T>`](`crate::SinglyLinkedList<T>`)
/// never holds a value: its value storage stays uninitialised for the whole
/// list lifetime, and no cursor dereference may target it.
pub const INVARIANT_1: () = ();

/// Every value node has exactly one owner at all times: the sentinel for the
/// first node, the predecessor for every other. `next` chains are acyclic
/// and end with a null link, so each node is destroyed exactly once.
pub const INVARIANT_2: () = ();

/// The `length` attribute of a [`SinglyLinkedList<T>`](`crate::SinglyLinkedList<T>`)
/// is equal to the number of value nodes reachable from the sentinel; it is
/// updated each time an element is added to the list or removed from it.
pub const INVARIANT_3: () = ();

/// A [`Cursor<T>`](`crate::Cursor<T>`) or [`CursorMut<T>`](`crate::CursorMut<T>`)
/// is either null (the one-past-the-end position) or references the sentinel
/// or a value node of a live list. Only the value-node case is
/// dereferenceable; the sentinel case may still be advanced and may anchor
/// after-position operations.
pub const INVARIANT_4: () = ();
