//! Black-box contract shared by every pool backend's test module.
//!
//! Each function exercises one observable property of the [`Pool`] contract
//! against an arbitrary backend, so the map-backed and filesystem-backed
//! implementations stay behaviorally equivalent.

use std::collections::BTreeSet;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::error::StoreError;
use crate::traits::{Key, Pool};

fn read_all(pool: &dyn Pool, key: &[u8]) -> Vec<u8> {
    let mut value = pool.get(key).expect("key should be present");
    let mut buf = Vec::new();
    value.read_to_end(&mut buf).expect("read should succeed");
    value.close().expect("close should succeed");
    buf
}

pub(crate) fn create_then_get_round_trips(pool: &dyn Pool) {
    let mut value = pool.create(b"foobar").unwrap();
    value.write_all(b"example").unwrap();
    value.close().unwrap();

    assert_eq!(read_all(pool, b"foobar"), b"example");
}

pub(crate) fn flush_makes_writes_visible(pool: &dyn Pool) {
    let mut value = pool.create(b"foobar").unwrap();
    value.write_all(b"example").unwrap();
    value.flush().unwrap();
    assert_eq!(read_all(pool, b"foobar"), b"example");

    value.write_all(b" test").unwrap();
    value.close().unwrap();
    assert_eq!(read_all(pool, b"foobar"), b"example test");
}

pub(crate) fn create_overwrites_previous_value(pool: &dyn Pool) {
    let mut value = pool.create(b"foobar").unwrap();
    value.write_all(b"example").unwrap();
    value.close().unwrap();

    let mut value = pool.create(b"foobar").unwrap();
    value.write_all(b"example2").unwrap();
    value.close().unwrap();

    assert_eq!(read_all(pool, b"foobar"), b"example2");
}

pub(crate) fn get_missing_key_is_not_found(pool: &dyn Pool) {
    match pool.get(b"no_such_key") {
        Err(StoreError::NotFound(key)) => assert_eq!(key, b"no_such_key"),
        Err(err) => panic!("expected NotFound, got {err:?}"),
        Ok(_) => panic!("expected NotFound, got a value handle"),
    }
}

pub(crate) fn get_then_write_updates_value(pool: &dyn Pool) {
    pool.create(b"foobar").unwrap().close().unwrap();

    let mut value = pool.get(b"foobar").unwrap();
    value.write_all(b"example").unwrap();
    value.close().unwrap();

    assert_eq!(read_all(pool, b"foobar"), b"example");
}

pub(crate) fn last_close_wins(pool: &dyn Pool) {
    let mut first = pool.create(b"foobar").unwrap();
    first.write_all(b"test").unwrap();

    let mut second = pool.get(b"foobar").unwrap();
    second.write_all(b"test2").unwrap();
    second.close().unwrap();

    assert_eq!(read_all(pool, b"foobar"), b"test2");
    drop(first);
}

pub(crate) fn delete_missing_key_is_not_found(pool: &dyn Pool) {
    match pool.delete(b"foobar") {
        Err(StoreError::NotFound(key)) => assert_eq!(key, b"foobar"),
        Err(err) => panic!("expected NotFound, got {err:?}"),
        Ok(()) => panic!("expected NotFound deleting a missing key"),
    }
}

pub(crate) fn contains_tracks_lifecycle(pool: &dyn Pool) {
    assert!(!pool.contains(b"foobar"));

    pool.create(b"foobar").unwrap().close().unwrap();
    assert!(pool.contains(b"foobar"));

    pool.delete(b"foobar").unwrap();
    assert!(!pool.contains(b"foobar"));
    assert!(matches!(
        pool.delete(b"foobar"),
        Err(StoreError::NotFound(_))
    ));
}

pub(crate) fn iter_keys_yields_created_keys(pool: &dyn Pool) {
    let keys: Vec<Key> = pool.iter_keys().collect::<Result<_, _>>().unwrap();
    assert!(keys.is_empty());

    pool.create(b"foobar").unwrap().close().unwrap();
    let keys: Vec<Key> = pool.iter_keys().collect::<Result<_, _>>().unwrap();
    assert_eq!(keys, vec![b"foobar".to_vec()]);

    pool.create(b"foobaz").unwrap().close().unwrap();
    let keys: BTreeSet<Key> = pool.iter_keys().collect::<Result<_, _>>().unwrap();
    let expected: BTreeSet<Key> = [b"foobar".to_vec(), b"foobaz".to_vec()]
        .into_iter()
        .collect();
    assert_eq!(keys, expected);
}

pub(crate) fn handles_support_seek(pool: &dyn Pool) {
    let mut value = pool.create(b"foobar").unwrap();
    value.write_all(b"abcde").unwrap();
    value.close().unwrap();

    let mut value = pool.get(b"foobar").unwrap();
    let mut head = [0u8; 2];
    value.read_exact(&mut head).unwrap();
    assert_eq!(&head, b"ab");

    value.seek(SeekFrom::Start(0)).unwrap();
    let mut all = Vec::new();
    value.read_to_end(&mut all).unwrap();
    assert_eq!(all, b"abcde");
    value.close().unwrap();
}
