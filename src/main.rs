use balanced_collections::avl_tree::AvlSet;
use balanced_collections::linked_list::LinkedList;
use balanced_collections::priority_queue::PriorityQueue;
use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::env;
use std::process;

const VALUES: [u32; 20] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11];

fn log_level() -> LevelFilter {
    env::var("COLLECTIONS_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    let mut set = AvlSet::new();
    for value in VALUES.iter() {
        set.insert(*value);
    }
    info!("set after inserts: {:?}", set);

    for value in &[8, 10, 15, 1, 18, 11] {
        set.remove(value);
    }
    info!("set after removals: {:?}", set);

    if let Err(err) = set.check_invariants() {
        error!("set is corrupt: {}", err);
        process::exit(1);
    }

    let mut queue: PriorityQueue<u32> = VALUES.iter().cloned().collect();
    let mut dequeued = Vec::with_capacity(queue.len());
    while let Some(value) = queue.dequeue() {
        dequeued.push(value);
    }
    info!("dequeue order: {:?}", dequeued);

    let mut list: LinkedList<u32> = VALUES.iter().cloned().collect();
    list.add_first(0);
    info!("list: {:?}, first: {:?}, last: {:?}", list, list.first(), list.last());
}
