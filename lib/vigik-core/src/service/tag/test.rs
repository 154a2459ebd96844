use std::sync::{Arc, Mutex};

use mockall::predicate::*;

use super::TagService;
use crate::model::tag::{NdefRecord, ScannedTag, Tag, TagConflictPolicy};
use crate::repository::error::DataLayerError;
use crate::repository::tag_repository::MockTagRepository;
use crate::service::error::{EntityAlreadyExistsError, EntityNotFoundError, ServiceError};

fn dummy_tag(timestamp: i64) -> Tag {
    Tag {
        timestamp,
        uid: vec![0x13, 0x37],
        tech_list: "NfcA, Ndef".to_string(),
        data: "hello".to_string(),
        id: vec![0x01],
    }
}

/// Repository mock backed by a shared table, mutations are visible to `get_all`
fn table_backed_repository(table: Arc<Mutex<Vec<Tag>>>) -> MockTagRepository {
    let mut repository = MockTagRepository::default();

    let state = table.clone();
    repository.expect_create().returning(move |tag, _| {
        let mut table = state.lock().unwrap();
        let timestamp = tag.timestamp;
        table.retain(|stored| stored.timestamp != timestamp);
        table.push(tag);
        table.sort_by_key(|stored| stored.timestamp);
        Ok(timestamp)
    });

    let state = table.clone();
    repository.expect_update().returning(move |tag| {
        let mut table = state.lock().unwrap();
        match table.iter_mut().find(|stored| stored.timestamp == tag.timestamp) {
            Some(stored) => {
                *stored = tag;
                Ok(1)
            }
            None => Ok(0),
        }
    });

    let state = table.clone();
    repository.expect_delete().returning(move |timestamp| {
        let mut table = state.lock().unwrap();
        let before = table.len();
        table.retain(|stored| stored.timestamp != timestamp);
        Ok((before - table.len()) as u64)
    });

    let state = table;
    repository
        .expect_get_all()
        .returning(move || Ok(state.lock().unwrap().clone()));

    repository
}

fn setup_service(repository: MockTagRepository) -> TagService {
    TagService::new(Arc::new(repository), TagConflictPolicy::Replace)
}

#[tokio::test]
async fn test_insert_then_delete_is_observed() {
    let service = setup_service(table_backed_repository(Default::default()));
    let mut receiver = service.subscribe().await.unwrap();
    assert!(receiver.borrow_and_update().is_empty());

    let timestamp = service.insert(dummy_tag(42)).await.unwrap();
    assert_eq!(timestamp, 42);

    assert!(receiver.has_changed().unwrap());
    {
        let tags = receiver.borrow_and_update();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].timestamp, 42);
        assert_eq!(tags[0].uid, vec![0x13, 0x37]);
    }

    let deleted = service.delete(42).await.unwrap();
    assert_eq!(deleted, 1);

    assert!(receiver.has_changed().unwrap());
    assert!(receiver.borrow_and_update().is_empty());
}

#[tokio::test]
async fn test_insert_uses_configured_policy() {
    let mut repository = MockTagRepository::default();
    repository
        .expect_create()
        .with(eq(dummy_tag(7)), eq(TagConflictPolicy::Reject))
        .once()
        .returning(|tag, _| Ok(tag.timestamp));
    repository
        .expect_get_all()
        .once()
        .returning(|| Ok(vec![dummy_tag(7)]));

    let service = TagService::new(Arc::new(repository), TagConflictPolicy::Reject);

    assert_eq!(service.insert(dummy_tag(7)).await.unwrap(), 7);
}

#[tokio::test]
async fn test_insert_duplicate_rejected() {
    let mut repository = MockTagRepository::default();
    repository
        .expect_create()
        .once()
        .returning(|_, _| Err(DataLayerError::AlreadyExists));
    repository.expect_get_all().never();

    let service = TagService::new(Arc::new(repository), TagConflictPolicy::Reject);

    let result = service.insert(dummy_tag(42)).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityAlreadyExists(
            EntityAlreadyExistsError::Tag(42)
        ))
    ));
}

#[tokio::test]
async fn test_insert_same_timestamp_replaces() {
    let table = Arc::new(Mutex::new(vec![]));
    let service = setup_service(table_backed_repository(table.clone()));

    service.insert(dummy_tag(42)).await.unwrap();
    service
        .insert(Tag {
            data: "replaced".to_string(),
            ..dummy_tag(42)
        })
        .await
        .unwrap();

    let tags = service.get_all_tags().await.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].data, "replaced");
}

#[tokio::test]
async fn test_delete_missing_tag() {
    let mut repository = MockTagRepository::default();
    repository
        .expect_delete()
        .with(eq(5))
        .once()
        .returning(|_| Ok(0));
    repository.expect_get_all().never();

    let service = setup_service(repository);

    let result = service.delete(5).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Tag(5)))
    ));
}

#[tokio::test]
async fn test_delete_repository_failure() {
    let mut repository = MockTagRepository::default();
    repository
        .expect_delete()
        .once()
        .returning(|_| Err(DataLayerError::Db(anyhow::anyhow!("disk I/O error"))));

    let service = setup_service(repository);

    assert!(matches!(
        service.delete(5).await,
        Err(ServiceError::Repository(DataLayerError::Db(_)))
    ));
}

#[tokio::test]
async fn test_update_overwrites() {
    let table = Arc::new(Mutex::new(vec![dummy_tag(1)]));
    let service = setup_service(table_backed_repository(table.clone()));
    let mut receiver = service.subscribe().await.unwrap();
    receiver.borrow_and_update();

    let updated = service
        .update(Tag {
            data: "edited".to_string(),
            ..dummy_tag(1)
        })
        .await
        .unwrap();

    assert_eq!(updated, 1);
    assert_eq!(receiver.borrow_and_update()[0].data, "edited");
}

#[tokio::test]
async fn test_update_missing_tag_affects_nothing() {
    let service = setup_service(table_backed_repository(Default::default()));
    let mut receiver = service.subscribe().await.unwrap();
    receiver.borrow_and_update();

    assert_eq!(service.update(dummy_tag(9)).await.unwrap(), 0);
    assert!(!receiver.has_changed().unwrap());
}

#[tokio::test]
async fn test_get_tag() {
    let mut repository = MockTagRepository::default();
    repository
        .expect_get()
        .with(eq(3))
        .once()
        .returning(|timestamp| Ok(Some(dummy_tag(timestamp))));
    repository
        .expect_get()
        .with(eq(4))
        .once()
        .returning(|_| Ok(None));

    let service = setup_service(repository);

    assert_eq!(service.get_tag(3).await.unwrap(), dummy_tag(3));
    assert!(matches!(
        service.get_tag(4).await,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Tag(4)))
    ));
}

#[tokio::test]
async fn test_independent_subscribers_see_latest_snapshot() {
    let service = setup_service(table_backed_repository(Default::default()));
    let first = service.subscribe().await.unwrap();

    service.insert(dummy_tag(1)).await.unwrap();
    service.insert(dummy_tag(2)).await.unwrap();

    let second = service.subscribe().await.unwrap();

    let timestamps = |tags: &Vec<Tag>| tags.iter().map(|tag| tag.timestamp).collect::<Vec<_>>();
    assert_eq!(timestamps(&*first.borrow()), vec![1, 2]);
    assert_eq!(timestamps(&*second.borrow()), vec![1, 2]);
}

#[tokio::test]
async fn test_publish_failure_keeps_mutation_result() {
    let mut repository = MockTagRepository::default();
    repository
        .expect_create()
        .once()
        .returning(|tag, _| Ok(tag.timestamp));
    repository
        .expect_get_all()
        .once()
        .returning(|| Err(DataLayerError::Db(anyhow::anyhow!("locked"))));

    let service = setup_service(repository);

    assert_eq!(service.insert(dummy_tag(11)).await.unwrap(), 11);
}

#[tokio::test]
async fn test_save_scanned_tag_decodes_event() {
    let table = Arc::new(Mutex::new(vec![]));
    let service = setup_service(table_backed_repository(table.clone()));

    let tag = service
        .save_scanned_tag(ScannedTag {
            uid: vec![0x04, 0xA2],
            tech_list: vec![
                "android.nfc.tech.NfcA".to_string(),
                "android.nfc.tech.Ndef".to_string(),
            ],
            ndef_records: vec![
                NdefRecord {
                    tnf: 0x01,
                    r#type: b"T".to_vec(),
                    payload: b"\x02enHello".to_vec(),
                },
                NdefRecord {
                    tnf: 0x01,
                    r#type: b"U".to_vec(),
                    payload: b"\x04vigik.test".to_vec(),
                },
            ],
            id: vec![0x04, 0xA2],
        })
        .await
        .unwrap();

    assert_eq!(tag.tech_list, "NfcA, Ndef");
    assert_eq!(tag.data, "Hello\nhttps://vigik.test");
    assert!(tag.timestamp > 0);
    assert_eq!(*table.lock().unwrap(), vec![tag]);
}
