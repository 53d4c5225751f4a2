//! Tests for the scratch pool.

use super::pool::ScratchPool;

#[test]
fn test_buffer_comes_back_empty_with_capacity() {
    let pool = ScratchPool::new(16, 64);
    let initial_capacity;
    {
        let mut buf = pool.buffer();
        assert!(buf.is_empty());
        initial_capacity = buf.capacity();
        buf.extend(0..40);
    }
    let buf = pool.buffer();
    assert!(buf.is_empty());
    assert!(buf.capacity() >= initial_capacity);
}

#[test]
fn test_buffer_capacity_matches_edge_bound() {
    let pool = ScratchPool::new(8, 123);
    let buf = pool.buffer();
    assert_eq!(buf.capacity(), 123);
}

#[test]
fn test_parents_come_back_cleared() {
    let pool = ScratchPool::new(200, 10);
    {
        let mut parents = pool.parents();
        for node in [0, 1, 63, 77, 199] {
            parents.set_parent(node, 5);
        }
    }
    let parents = pool.parents();
    assert!((0..200).all(|n| !parents.contains(n)));
}

#[test]
fn test_distinct_borrows_do_not_alias() {
    let pool = ScratchPool::new(32, 8);
    let mut a = pool.buffer();
    let mut b = pool.buffer();
    a.push(1);
    b.push(2);
    assert_eq!(*a, vec![1]);
    assert_eq!(*b, vec![2]);

    let mut pa = pool.parents();
    let pb = pool.parents();
    pa.set_parent(3, 1);
    assert!(!pb.contains(3));
}

#[test]
fn test_concurrent_borrow_and_return() {
    let pool = ScratchPool::new(64, 32);
    std::thread::scope(|scope| {
        for t in 0..4u32 {
            let pool = &pool;
            scope.spawn(move || {
                for _ in 0..100 {
                    let mut buf = pool.buffer();
                    buf.push(t);
                    let mut parents = pool.parents();
                    parents.set_parent(t, 0);
                    assert!(parents.contains(t));
                }
            });
        }
    });
    // Every borrow in every thread must have started clean.
    let buf = pool.buffer();
    assert!(buf.is_empty());
    let parents = pool.parents();
    assert!((0..64).all(|n| !parents.contains(n)));
}
