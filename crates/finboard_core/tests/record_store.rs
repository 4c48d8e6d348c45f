use finboard_core::model::tax::TaxForm;
use finboard_core::seed;
use finboard_core::{RecordStore, StoreError};
use std::sync::Arc;

#[test]
fn from_records_rejects_duplicate_keys() {
    let mut events = seed::expense_claims();
    events.push(events[0].clone());
    let err = RecordStore::from_records(events).unwrap_err();
    assert_eq!(err, StoreError::DuplicateKey("1".to_string()));
}

#[test]
fn insert_with_allocates_max_plus_one() {
    let mut store = RecordStore::from_records(seed::expense_claims()).unwrap();
    let template = store.get(&2).unwrap().clone();

    let key = store
        .insert_with(|id| finboard_core::model::expense::ExpenseClaim {
            id,
            merchant: "Lyft".to_string(),
            ..template.clone()
        })
        .unwrap();

    assert_eq!(key, 7);
    assert_eq!(store.len(), 7);
    assert_eq!(store.get(&7).unwrap().merchant, "Lyft");
}

#[test]
fn uuid_keys_are_fresh() {
    let store = RecordStore::from_records(seed::tax_forms()).unwrap();
    let next = store.next_key();
    assert!(!store.contains(&next));
    assert!(store.records().iter().all(|form: &TaxForm| form.id != next));
}

#[test]
fn snapshots_are_unaffected_by_later_writes() {
    let mut store = RecordStore::from_records(seed::expense_claims()).unwrap();
    let before = store.snapshot();

    store.remove(&1).unwrap();
    store
        .update(&2, |claim| finboard_core::model::expense::ExpenseClaim {
            amount: 99.0,
            ..claim.clone()
        })
        .unwrap();

    assert_eq!(before.len(), 6);
    assert_eq!(before[1].amount, 12.80);
    assert_eq!(store.len(), 5);
    assert!(!Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn update_and_remove_of_missing_key_leave_store_untouched() {
    let mut store = RecordStore::from_records(seed::expense_claims()).unwrap();
    let before = store.snapshot();

    assert_eq!(
        store.update(&42, |claim| claim.clone()),
        Err(StoreError::NotFound("42".to_string()))
    );
    assert!(matches!(store.remove(&42), Err(StoreError::NotFound(_))));
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn update_cannot_change_the_key() {
    let mut store = RecordStore::from_records(seed::expense_claims()).unwrap();
    let err = store
        .update(&1, |claim| finboard_core::model::expense::ExpenseClaim {
            id: 2,
            ..claim.clone()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::KeyMismatch { .. }));
    assert_eq!(store.get(&1).unwrap().merchant, "Uber");
}
