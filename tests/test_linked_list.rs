use balanced_collections::linked_list::LinkedList;
use rand::Rng;
use std::collections::VecDeque;

const NUM_OF_OPERATIONS: usize = 100_000;

#[test]
fn int_test_remove_first_scenario() {
    let mut list = LinkedList::new();
    for value in 1..21 {
        list.add_last(value);
    }

    for value in 1..21 {
        assert_eq!(list.remove_first(), Some(value));
    }
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
    assert_eq!(list.check_invariants(), Ok(()));
}

#[test]
fn int_test_linked_list() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = LinkedList::new();
    let mut expected = VecDeque::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen::<u32>();
        match rng.gen_range(0, 4) {
            0 => {
                list.add_first(value);
                expected.push_front(value);
            },
            1 => {
                list.add_last(value);
                expected.push_back(value);
            },
            2 => assert_eq!(list.remove_first(), expected.pop_front()),
            _ => assert_eq!(list.remove_last(), expected.pop_back()),
        }
        assert_eq!(list.len(), expected.len());
        assert_eq!(list.first(), expected.front());
        assert_eq!(list.last(), expected.back());
    }

    assert_eq!(list.check_invariants(), Ok(()));
    assert_eq!(
        list.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_eq!(
        list.into_iter().rev().collect::<Vec<u32>>(),
        expected.into_iter().rev().collect::<Vec<u32>>(),
    );
}
