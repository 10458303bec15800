//! A built tree is read-only; concurrent queries need no locks.

use std::thread;

use super::common::{words_tree, WORDS};

#[test]
fn test_concurrent_queries_agree_with_sequential() {
    let tree = words_tree();
    let expected = tree.find(&"cuba", 3).unwrap();

    thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..8 {
            handles.push(scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(tree.find(&"cuba", 3).unwrap(), expected);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn test_concurrent_mixed_queries() {
    let tree = words_tree();

    thread::scope(|scope| {
        for (index, query) in WORDS.iter().enumerate() {
            let threshold = (index % 4) as i64;
            let tree = &tree;
            scope.spawn(move || {
                let eager = tree.find(query, threshold).unwrap();
                let lazy: Vec<_> = tree.find_iter(query, threshold).unwrap().collect();
                assert_eq!(eager, lazy);
                assert!(eager.contains(&query));
            });
        }
    });
}
