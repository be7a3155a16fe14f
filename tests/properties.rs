//! Model-based property tests: every operation sequence must leave the list
//! observably identical to a `Vec` driven through the same sequence.

use proptest::prelude::*;
use sll::SinglyLinkedList;

#[derive(Clone, Debug)]
enum Op {
    PushFront(i32),
    PopFront,
    InsertAfter(usize, i32),
    EraseAfter(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::PushFront),
        2 => Just(Op::PopFront),
        3 => (any::<usize>(), any::<i32>()).prop_map(|(at, val)| Op::InsertAfter(at, val)),
        2 => any::<usize>().prop_map(Op::EraseAfter),
        1 => Just(Op::Clear),
    ]
}

/// Walks `steps` nodes forward from the before-front position.
fn position_at(list: &SinglyLinkedList<i32>, steps: usize) -> sll::Cursor<i32> {
    let mut pos = list.cursor_before_front();
    for _ in 0..steps {
        // SAFETY: `steps` never exceeds the list length, so the walk stays
        // on the sentinel and value nodes.
        unsafe { pos.move_next() };
    }
    pos
}

proptest! {
    #[test]
    fn behaves_like_a_vec(ops in proptest::collection::vec(op_strategy(), 0..128)) {
        let mut list = SinglyLinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::PushFront(val) => {
                    list.push_front(val);
                    model.insert(0, val);
                }
                Op::PopFront => {
                    if !model.is_empty() {
                        prop_assert_eq!(list.pop_front(), model.remove(0));
                    }
                }
                Op::InsertAfter(at, val) => {
                    // 0 inserts at the front, `len` after the last node
                    let at = at % (model.len() + 1);
                    let pos = position_at(&list, at);
                    // SAFETY: `pos` references the sentinel or a value node
                    // of `list`.
                    unsafe { list.insert_after(pos, val) };
                    model.insert(at, val);
                }
                Op::EraseAfter(at) => {
                    if !model.is_empty() {
                        let at = at % model.len();
                        let pos = position_at(&list, at);
                        // SAFETY: the node `at` steps after the sentinel has
                        // a successor, the element at index `at`.
                        let (_, removed) = unsafe { list.erase_after(pos) };
                        prop_assert_eq!(removed, model.remove(at));
                    }
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model.clone());
        }
    }

    #[test]
    fn construction_preserves_order(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let list: SinglyLinkedList<i32> = values.iter().copied().collect();
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
    }

    #[test]
    fn push_then_pop_reverses(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut list = SinglyLinkedList::new();
        for &val in &values {
            list.push_front(val);
        }
        prop_assert_eq!(list.len(), values.len());

        let mut drained = Vec::new();
        while !list.is_empty() {
            drained.push(list.pop_front());
        }
        drained.reverse();
        prop_assert_eq!(drained, values);
    }

    #[test]
    fn comparisons_agree_with_the_reference(
        a in proptest::collection::vec(any::<i32>(), 0..16),
        b in proptest::collection::vec(any::<i32>(), 0..16),
    ) {
        let list_a: SinglyLinkedList<i32> = a.iter().copied().collect();
        let list_b: SinglyLinkedList<i32> = b.iter().copied().collect();
        prop_assert_eq!(list_a == list_b, a == b);
        prop_assert_eq!(list_a.partial_cmp(&list_b), a.partial_cmp(&b));
        prop_assert_eq!(list_a.cmp(&list_b), a.cmp(&b));
    }

    #[test]
    fn double_swap_restores_both_lists(
        a in proptest::collection::vec(any::<i32>(), 0..32),
        b in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let mut list_a: SinglyLinkedList<i32> = a.iter().copied().collect();
        let mut list_b: SinglyLinkedList<i32> = b.iter().copied().collect();
        let (orig_a, orig_b) = (list_a.clone(), list_b.clone());

        list_a.swap(&mut list_b);
        prop_assert_eq!(&list_a, &orig_b);
        prop_assert_eq!(&list_b, &orig_a);

        list_a.swap(&mut list_b);
        prop_assert_eq!(&list_a, &orig_a);
        prop_assert_eq!(&list_b, &orig_b);
    }

    #[test]
    fn clones_do_not_share_nodes(values in proptest::collection::vec(any::<i32>(), 1..32)) {
        let original: SinglyLinkedList<i32> = values.iter().copied().collect();
        let mut copy = original.clone();
        prop_assert_eq!(&original, &copy);

        copy.pop_front();
        copy.push_front(i32::MIN);
        prop_assert_eq!(original.iter().copied().collect::<Vec<_>>(), values);
    }
}
