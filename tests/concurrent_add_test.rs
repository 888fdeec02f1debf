mod helpers;

use std::thread;
use std::time::Duration;

use helpers::count;
use rusqlite::{Connection, TransactionBehavior};
use thought_threads::db;
use thought_threads::engine::Engine;
use thought_threads::thoughts::store::add_thought;

fn insert_raw(conn: &Connection, content: &str, keywords: &str, cluster: &str) -> i64 {
    conn.execute(
        "INSERT INTO thoughts (content, keywords, cluster, created_at) VALUES (?1, ?2, ?3, '2024-01-01T00:00:00.000000Z')",
        [content, keywords, cluster],
    )
    .unwrap();
    conn.last_insert_rowid()
}

#[test]
fn add_plans_against_thoughts_committed_by_another_connection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("threads.db");

    let mut holder = db::open_database(&path).unwrap();
    let mut writer = db::open_database(&path).unwrap();
    writer.busy_timeout(Duration::from_secs(10)).unwrap();

    // Another process is mid-write when the add starts
    let tx = holder
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .unwrap();
    let first = insert_raw(&tx, "python coding", r#"["python","coding"]"#, "Software Development");

    let adder = thread::spawn(move || {
        add_thought(&mut writer, &Engine::default(), "python coding tips").unwrap()
    });
    thread::sleep(Duration::from_millis(200));
    tx.commit().unwrap();

    let result = adder.join().unwrap();
    assert_eq!(result.connections.len(), 1);
    let link = result.connections[0];
    assert_eq!((link.source_id, link.target_id), (result.thought.id, first));
    assert!((link.strength - 0.6).abs() < 1e-9);
    assert_eq!(count(&holder, "connections"), 1);
}

#[test]
fn add_waits_for_the_write_lock_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("threads.db");

    let mut holder = db::open_database(&path).unwrap();
    let mut writer = db::open_database(&path).unwrap();
    writer.busy_timeout(Duration::ZERO).unwrap();
    let engine = Engine::default();

    let tx = holder
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .unwrap();
    assert!(add_thought(&mut writer, &engine, "java coding").is_err());
    drop(tx);

    let result = add_thought(&mut writer, &engine, "java coding").unwrap();
    assert_eq!(result.thought.content, "java coding");
    assert_eq!(count(&holder, "thoughts"), 1);
}
