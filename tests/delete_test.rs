mod helpers;

use helpers::{add, count, edges, test_db};
use thought_threads::engine::Engine;
use thought_threads::thoughts::forget::{clear_all, delete_thought};
use thought_threads::thoughts::graph::graph;
use thought_threads::thoughts::store::update_position;

#[test]
fn delete_removes_edges_in_both_directions() {
    let mut conn = test_db();
    let engine = Engine::default();
    let python = add(&mut conn, &engine, "python coding").thought.id;
    let middle = add(&mut conn, &engine, "java coding").thought.id;
    let tips = add(&mut conn, &engine, "python coding tips").thought.id;

    // middle is a source (-> python) and a target (tips ->)
    let result = delete_thought(&mut conn, middle).unwrap();
    assert!(result.deleted);
    assert_eq!(result.connections_removed, 2);

    assert_eq!(edges(&conn).len(), 1);
    assert_eq!((edges(&conn)[0].0, edges(&conn)[0].1), (tips, python));
}

#[test]
fn deleted_thought_no_longer_attracts_links() {
    let mut conn = test_db();
    let engine = Engine::default();
    let first = add(&mut conn, &engine, "python coding").thought.id;
    delete_thought(&mut conn, first).unwrap();

    let next = add(&mut conn, &engine, "python coding tips");
    assert!(next.connections.is_empty());
}

#[test]
fn clear_all_then_add_starts_fresh() {
    let mut conn = test_db();
    let engine = Engine::default();
    add(&mut conn, &engine, "python coding");
    add(&mut conn, &engine, "java coding");

    let cleared = clear_all(&mut conn).unwrap();
    assert_eq!(cleared.thoughts_removed, 2);
    assert_eq!(cleared.connections_removed, 1);
    assert!(graph(&conn).unwrap().thoughts.is_empty());

    let again = add(&mut conn, &engine, "python coding");
    assert!(again.connections.is_empty());
    assert_eq!(count(&conn, "thoughts"), 1);
}

#[test]
fn position_update_survives_in_graph() {
    let mut conn = test_db();
    let engine = Engine::default();
    let id = add(&mut conn, &engine, "python coding").thought.id;

    assert!(update_position(&conn, id, 120.0, -45.5).unwrap());
    let g = graph(&conn).unwrap();
    assert_eq!((g.thoughts[0].x, g.thoughts[0].y), (120.0, -45.5));
}
