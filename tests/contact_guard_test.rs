//! Concurrency tests for the contact guard
//!
//! Every update writes a matching name/email pair; a reader that ever sees a
//! name from one update and an email from another has observed a torn write.

use std::collections::HashSet;

use htmx_examples::{
    models::{ContactSnapshot, UpdateContact},
    store::ContactGuard,
};

fn pair(i: usize) -> UpdateContact {
    UpdateContact {
        name: format!("name-{}", i),
        email: format!("user-{}@example.com", i),
    }
}

fn is_consistent(snapshot: &ContactSnapshot) -> bool {
    let contact = &snapshot.contact;
    if contact.name == "Joe Smith" {
        return contact.email == "joe@smith.org";
    }
    match contact.name.strip_prefix("name-") {
        Some(i) => contact.email == format!("user-{}@example.com", i),
        None => false,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_never_observe_partial_update() {
    let guard = ContactGuard::default();
    let mut handles = Vec::new();

    for i in 0..64 {
        let writer = guard.clone();
        handles.push(tokio::spawn(async move {
            for round in 0..20 {
                let snapshot = writer.update(pair(i * 100 + round)).await;
                assert!(is_consistent(&snapshot), "{:?}", snapshot);
            }
        }));

        let reader = guard.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..20 {
                let snapshot = reader.current().await;
                assert!(is_consistent(&snapshot), "{:?}", snapshot);
                let snapshot = reader.current_for_edit().await;
                assert!(is_consistent(&snapshot), "{:?}", snapshot);
                tokio::task::yield_now().await;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let written: HashSet<String> = (0..64)
        .flat_map(|i| (0..20).map(move |round| format!("name-{}", i * 100 + round)))
        .collect();
    let last = guard.current().await;
    assert!(written.contains(&last.contact.name));
    assert!(is_consistent(&last));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_update_returns_its_own_write() {
    let guard = ContactGuard::default();
    let mut handles = Vec::new();

    for i in 0..32 {
        let guard = guard.clone();
        handles.push(tokio::spawn(async move {
            let snapshot = guard.update(pair(i)).await;
            assert_eq!(snapshot.contact.name, format!("name-{}", i));
            assert!(!snapshot.editing);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}
