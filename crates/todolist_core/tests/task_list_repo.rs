use todolist_core::db::open_db_in_memory;
use todolist_core::{
    KeyValueStore, KvTaskListRepository, MemoryKvStore, PersistenceError, SqliteKvStore, Task,
    TaskListRepository,
};

#[test]
fn load_returns_empty_when_key_is_absent() {
    let repo = KvTaskListRepository::new(MemoryKvStore::new());
    assert!(repo.load("todos").is_empty());
}

#[test]
fn load_treats_malformed_data_as_empty() {
    let mut store = MemoryKvStore::new();
    store.set("garbage", "not json").unwrap();
    store.set("wrong_shape", r#"{"id": 1}"#).unwrap();
    store
        .set("bad_id", r#"[{"id": "nope", "text": "x", "completed": false}]"#)
        .unwrap();
    let repo = KvTaskListRepository::new(store);

    assert!(repo.load("garbage").is_empty());
    assert!(repo.load("wrong_shape").is_empty());
    assert!(repo.load("bad_id").is_empty());
}

#[test]
fn save_then_load_preserves_order_and_fields() {
    let mut repo = KvTaskListRepository::new(MemoryKvStore::new());
    let first = Task::new("Buy milk");
    let mut second = Task::new("Walk dog");
    second.toggle();

    repo.save("todos", &[first.clone(), second.clone()]).unwrap();
    let loaded = repo.load("todos");

    assert_eq!(loaded, [first, second.clone()]);
    assert_eq!(loaded[1].text, "Walk dog");
    assert!(loaded[1].completed);
    assert!(!loaded[0].completed);
}

#[test]
fn save_replaces_the_whole_stored_list() {
    let mut repo = KvTaskListRepository::new(MemoryKvStore::new());
    repo.save("todos", &[Task::new("a"), Task::new("b")]).unwrap();
    repo.save("todos", &[]).unwrap();

    assert!(repo.load("todos").is_empty());
    assert_eq!(
        repo.store().get("todos").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn keys_are_independent() {
    let mut repo = KvTaskListRepository::new(MemoryKvStore::new());
    repo.save("work", &[Task::new("report")]).unwrap();

    assert_eq!(repo.load("work").len(), 1);
    assert!(repo.load("home").is_empty());
}

#[test]
fn save_surfaces_store_failure() {
    let mut repo = KvTaskListRepository::new(MemoryKvStore::with_quota(8));
    let err = repo
        .save("todos", &[Task::new("too long to fit")])
        .unwrap_err();

    assert!(matches!(err, PersistenceError::Store(_)));
    assert!(err.to_string().contains("quota"));
    assert!(repo.load("todos").is_empty());
}

#[test]
fn sqlite_backed_repository_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let mut repo = KvTaskListRepository::new(SqliteKvStore::new(&conn));
    let task = Task::new("Water plants");

    repo.save("todos", std::slice::from_ref(&task)).unwrap();

    let reopened = KvTaskListRepository::new(SqliteKvStore::new(&conn));
    assert_eq!(reopened.load("todos"), [task]);
}

#[test]
fn repository_can_borrow_a_store() {
    let mut store = MemoryKvStore::new();
    {
        let mut repo = KvTaskListRepository::new(&mut store);
        repo.save("todos", &[Task::new("borrowed")]).unwrap();
    }
    assert!(store.get("todos").unwrap().unwrap().contains("borrowed"));
}
