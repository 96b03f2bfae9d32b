use balanced_collections::avl_tree::AvlSet;
use balanced_collections::linked_list::LinkedList;
use balanced_collections::priority_queue::PriorityQueue;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::{BTreeSet, BinaryHeap};

const NUM_OF_OPERATIONS: usize = 100;

fn random_values() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for value in &values {
                set.insert(*value);
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let values = random_values();
    let set: BTreeSet<u32> = values.iter().cloned().collect();
    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_avl_set_insert(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench avl set insert", move |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for value in &values {
                set.insert(*value);
            }
        })
    });
}

fn bench_avl_set_contains(c: &mut Criterion) {
    let values = random_values();
    let set: AvlSet<u32> = values.iter().cloned().collect();
    c.bench_function("bench avl set contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_avl_set_remove(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench avl set remove", move |b| {
        b.iter(|| {
            let mut set: AvlSet<u32> = values.iter().cloned().collect();
            for value in &values {
                black_box(set.remove(value));
            }
        })
    });
}

fn bench_binary_heap(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench binary heap push pop", move |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for value in &values {
                heap.push(*value);
            }
            while let Some(value) = heap.pop() {
                black_box(value);
            }
        })
    });
}

fn bench_priority_queue(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench priority queue enqueue dequeue", move |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new();
            for value in &values {
                queue.enqueue(*value);
            }
            while let Some(value) = queue.dequeue() {
                black_box(value);
            }
        })
    });
}

fn bench_linked_list(c: &mut Criterion) {
    let values = random_values();
    c.bench_function("bench linked list add remove", move |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for value in &values {
                list.add_last(*value);
            }
            while let Some(value) = list.remove_first() {
                black_box(value);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_contains,
    bench_avl_set_insert,
    bench_avl_set_contains,
    bench_avl_set_remove,
    bench_binary_heap,
    bench_priority_queue,
    bench_linked_list,
);
criterion_main!(benches);
