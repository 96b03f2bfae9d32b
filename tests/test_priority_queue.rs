use balanced_collections::priority_queue::PriorityQueue;
use rand::Rng;
use std::collections::BinaryHeap;

const NUM_OF_OPERATIONS: usize = 100_000;
const VALUES: [u32; 20] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11];

#[test]
fn int_test_dequeue_scenario() {
    let mut queue = PriorityQueue::new();
    for value in VALUES.iter() {
        queue.enqueue(*value);
    }
    assert_eq!(queue.len(), VALUES.len());
    assert_eq!(queue.check_invariants(), Ok(()));

    let mut dequeued = Vec::new();
    while let Some(value) = queue.dequeue() {
        dequeued.push(value);
    }
    assert_eq!(dequeued, (1..21).rev().collect::<Vec<u32>>());
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn int_test_priority_queue() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut queue = PriorityQueue::new();
    let mut expected = BinaryHeap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        if rng.gen_range(0, 3) == 0 {
            assert_eq!(queue.dequeue(), expected.pop());
        } else {
            let value = rng.gen::<u32>();
            queue.enqueue(value);
            expected.push(value);
        }
        assert_eq!(queue.len(), expected.len());
        assert_eq!(queue.peek(), expected.peek());
    }

    assert_eq!(queue.check_invariants(), Ok(()));
    while let Some(value) = expected.pop() {
        assert_eq!(queue.dequeue(), Some(value));
    }
    assert!(queue.is_empty());
}
