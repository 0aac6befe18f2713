//! Integration tests for the chat store
//!
//! Exercises the public `ChatStore` API end to end against real temp
//! directories: round-trips, ordering, deletion, naming schemes, and
//! tolerance of damaged directories.

mod common;

use chatshelf::storage::codec::to_pretty_json;
use chatshelf::storage::{Chat, FileNaming, Question, StoreError};
use chrono::{Duration, TimeZone, Utc};
use common::{chat_on_day, create_temp_store, dir_entries, write_file};
use uuid::Uuid;

#[tokio::test]
async fn test_roundtrip_preserves_every_field() {
    let (store, _tmp) = create_temp_store(FileNaming::Id);

    let mut chat = chat_on_day("Everything", 5);
    chat.timestamp = chat.timestamp + Duration::microseconds(123_456);
    chat.questions = Some(vec![
        Question {
            answer_text: Some("Ownership and borrowing.".to_string()),
            id: Uuid::new_v4(),
            question_text: "What makes Rust different?".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 5, 0, 1, 0).unwrap(),
        },
        Question {
            answer_text: None,
            id: Uuid::new_v4(),
            question_text: "Still thinking?".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 5, 0, 2, 0).unwrap(),
        },
    ]);

    store.put(&chat).await.expect("put failed");
    let loaded = store.get_by_id(chat.id).await.expect("get failed");
    assert_eq!(loaded, chat);

    let empty_list = Chat {
        questions: Some(Vec::new()),
        ..chat_on_day("Empty list", 6)
    };
    store.put(&empty_list).await.expect("put failed");
    assert_eq!(
        store.get_by_id(empty_list.id).await.expect("get failed"),
        empty_list
    );
}

#[tokio::test]
async fn test_listing_orders_newest_first() {
    let (store, _tmp) = create_temp_store(FileNaming::Id);
    let t2 = chat_on_day("t2", 2);
    let t3 = chat_on_day("t3", 1);
    let t1 = chat_on_day("t1", 3);

    for chat in [&t2, &t3, &t1] {
        store.put(chat).await.expect("put failed");
    }

    let listed = store.list_all().await.expect("list failed");
    assert_eq!(listed, vec![t1, t2, t3]);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (store, _tmp) = create_temp_store(FileNaming::Id);
    let chat = chat_on_day("once", 1);
    let other = chat_on_day("other", 2);
    store.put(&chat).await.expect("put failed");
    store.put(&other).await.expect("put failed");

    assert!(!store
        .delete_by_id(Uuid::new_v4())
        .await
        .expect("delete of unknown id failed"));

    store.delete_by_id(chat.id).await.expect("first delete failed");
    let after_once = store.list_all().await.expect("list failed");
    store
        .delete_by_id(chat.id)
        .await
        .expect("second delete failed");
    let after_twice = store.list_all().await.expect("list failed");

    assert_eq!(after_once, after_twice);
    assert_eq!(after_twice, vec![other]);
}

#[tokio::test]
async fn test_sanitized_title_file_is_still_found_by_id() {
    let (store, _tmp) = create_temp_store(FileNaming::Title);
    let chat = chat_on_day("My:Chat/Test?", 1);

    store.put(&chat).await.expect("put failed");

    assert_eq!(dir_entries(store.directory()), vec!["My_Chat_Test_.json"]);
    assert_eq!(store.get_by_id(chat.id).await.expect("get failed"), chat);
}

#[tokio::test]
async fn test_corrupt_file_does_not_break_listing() {
    let (store, _tmp) = create_temp_store(FileNaming::Id);
    let a = chat_on_day("a", 1);
    let b = chat_on_day("b", 2);
    store.put(&a).await.expect("put failed");
    store.put(&b).await.expect("put failed");
    write_file(store.directory(), "garbage.json", b"\x00\x01 definitely not json");

    let listed = store.list_all().await.expect("list failed");
    assert_eq!(listed, vec![b.clone(), a.clone()]);
    assert_eq!(store.get_by_id(a.id).await.expect("get failed"), a);
    assert!(store.delete_by_id(b.id).await.expect("delete failed"));
}

#[tokio::test]
async fn test_title_collision_overwrites_earlier_record() {
    let (store, _tmp) = create_temp_store(FileNaming::Title);
    let a = chat_on_day("Trip", 1);
    let b = chat_on_day("Trip", 2);

    store.put(&a).await.expect("put A failed");
    store.put(&b).await.expect("put B failed");

    assert_eq!(dir_entries(store.directory()), vec!["Trip.json"]);
    let err = store.get_by_id(a.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == a.id));
    assert_eq!(store.get_by_id(b.id).await.expect("get B failed"), b);
}

#[tokio::test]
async fn test_id_naming_removes_title_collision() {
    let (store, _tmp) = create_temp_store(FileNaming::Id);
    let a = chat_on_day("Trip", 1);
    let b = chat_on_day("Trip", 2);

    store.put(&a).await.expect("put A failed");
    store.put(&b).await.expect("put B failed");

    assert_eq!(store.get_by_id(a.id).await.expect("get A failed"), a);
    assert_eq!(store.get_by_id(b.id).await.expect("get B failed"), b);
}

#[tokio::test]
async fn test_id_store_reads_title_named_files() {
    let (store, _tmp) = create_temp_store(FileNaming::Id);
    let legacy = chat_on_day("Old server chat", 1);
    write_file(
        store.directory(),
        "Old server chat.json",
        &to_pretty_json(&legacy).expect("encode failed"),
    );

    assert_eq!(store.get_by_id(legacy.id).await.expect("get failed"), legacy);
    assert!(store.delete_by_id(legacy.id).await.expect("delete failed"));
    assert!(dir_entries(store.directory()).is_empty());
}

#[tokio::test]
async fn test_reads_files_written_with_foreign_formatting() {
    let (store, _tmp) = create_temp_store(FileNaming::Title);
    let json = r#"{
  "id" : "E621E1F8-C36C-495A-93FC-0C247A3E6E5F",
  "questions" : [
    {
      "id" : "0A1B2C3D-4E5F-4A6B-8C7D-8E9F0A1B2C3D",
      "questionText" : "Where to?",
      "timestamp" : "2026-02-10T12:35:00Z"
    }
  ],
  "timestamp" : "2026-02-10T12:34:56Z",
  "title" : "Trip"
}"#;
    write_file(store.directory(), "Trip.json", json.as_bytes());

    let chats = store.list_all().await.expect("list failed");
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].title, "Trip");
    assert_eq!(chats[0].question_count(), 1);
    assert_eq!(
        chats[0].timestamp,
        Utc.with_ymd_and_hms(2026, 2, 10, 12, 34, 56).unwrap()
    );
}

#[tokio::test]
async fn test_written_file_is_pretty_and_sorted() {
    let (store, _tmp) = create_temp_store(FileNaming::Id);
    let chat = chat_on_day("Pretty", 1);
    store.put(&chat).await.expect("put failed");

    let path = store.directory().join(format!("{}.json", chat.id));
    let text = std::fs::read_to_string(path).expect("read failed");
    let expected = format!(
        "{{\n  \"id\": \"{}\",\n  \"timestamp\": \"2026-01-01T00:00:00Z\",\n  \"title\": \"Pretty\"\n}}\n",
        chat.id
    );
    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_missing_directory_fails_per_call() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let blocker = write_file(tmp.path(), "blocker", b"not a directory");
    let store = chatshelf::ChatStore::open(blocker.join("chats"), FileNaming::Id);

    assert!(matches!(
        store.list_all().await,
        Err(StoreError::Io { .. })
    ));
    assert!(matches!(
        store.put(&chat_on_day("x", 1)).await,
        Err(StoreError::Io { .. })
    ));
}
