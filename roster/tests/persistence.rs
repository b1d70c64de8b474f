//! Load -> change -> reopen against a redb file on disk

use roster::core::{CORRUPT_SUFFIX, DEFAULT_STORAGE_KEY};
use roster::{KeyValueStore, RedbStore, Session};
use serde_json::json;
use shared::models::{Department, ShiftType, Weekday};
use std::path::Path;

fn open(path: &Path) -> Session<RedbStore> {
    let store = RedbStore::open(path).unwrap();
    Session::load(store, DEFAULT_STORAGE_KEY)
}

#[test]
fn test_changes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.redb");

    let id = {
        let mut session = open(&path);
        session.select_department(Department::Shawarma);
        session.add_employee("Ali", 50.0, 70.0).unwrap();
        let id = session.employees()[0].id.clone();
        session
            .set_shift(&id, Weekday::Saturday, ShiftType::Double)
            .unwrap();
        session.set_advance(&id, Weekday::Saturday, 40.0).unwrap();
        id
    };

    let mut session = open(&path);
    session.select_department(Department::Shawarma);
    let ali = session.find_employee(&id).unwrap();
    assert_eq!(ali.pay_rates.double, 120.0);
    assert_eq!(ali.shifts.saturday, ShiftType::Double);
    assert_eq!(ali.total_pay, 80.0);

    let token = session.request_remove(&id);
    assert!(session.confirm(&token).unwrap());
    drop(session);

    let session = open(&path);
    assert!(session.roster().employees(Department::Shawarma).is_empty());
}

#[test]
fn test_legacy_blob_is_upgraded_and_written_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.redb");

    let legacy = json!({
        "cuisine": {
            "employees": [{
                "id": 1699999999999u64,
                "name": "Karim",
                "shifts": {
                    "saturday": "Matin", "sunday": "N/A", "monday": "",
                    "tuesday": "", "wednesday": "", "thursday": ""
                },
                "totalPay": 0
            }]
        },
        "chawarma": { "employees": [] }
    });
    {
        let store = RedbStore::open(&path).unwrap();
        store.set(DEFAULT_STORAGE_KEY, &legacy.to_string()).unwrap();
    }

    let mut session = open(&path);
    let karim = session.employees()[0].clone();
    assert_eq!(karim.id, "1699999999999");
    assert_eq!(karim.pay_rates.morning, 50.0);
    assert_eq!(karim.pay_rates.evening, 50.0);
    assert_eq!(karim.pay_rates.double, 100.0);
    for day in Weekday::ALL {
        assert_eq!(*karim.advances.get(day), 0.0);
    }
    assert_eq!(karim.shifts.sunday, ShiftType::None);
    assert_eq!(karim.total_pay, 50.0);
    assert!(session.roster().employees(Department::Pizza).is_empty());

    // next change writes the current schema
    session
        .set_shift(&karim.id, Weekday::Monday, ShiftType::Evening)
        .unwrap();
    let saved: serde_json::Value = serde_json::from_str(
        &session.store().get(DEFAULT_STORAGE_KEY).unwrap().unwrap(),
    )
    .unwrap();
    let record = &saved["cuisine"]["employees"][0];
    assert_eq!(record["payRates"]["double"], 100.0);
    assert_eq!(record["acomptes"]["thursday"], 0.0);
    assert_eq!(record["shifts"]["monday"], "Soir");
    assert_eq!(record["totalPay"], 100.0);
    assert!(saved["serveurs"]["employees"].as_array().unwrap().is_empty());
}

#[test]
fn test_corrupt_blob_is_kept_aside() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.redb");
    {
        let store = RedbStore::open(&path).unwrap();
        store.set(DEFAULT_STORAGE_KEY, "{\"cuisine\": [").unwrap();
    }

    let mut session = open(&path);
    assert_eq!(session.roster().headcount(), 0);

    session.add_employee("Nadia", 50.0, 50.0).unwrap();
    drop(session);

    let store = RedbStore::open(&path).unwrap();
    let corrupt_key = format!("{}{}", DEFAULT_STORAGE_KEY, CORRUPT_SUFFIX);
    assert_eq!(
        store.get(&corrupt_key).unwrap().as_deref(),
        Some("{\"cuisine\": [")
    );
    let session = Session::load(store, DEFAULT_STORAGE_KEY);
    assert_eq!(session.employees()[0].name, "Nadia");
}

#[test]
fn test_cancelled_clear_changes_nothing_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.redb");

    let mut session = open(&path);
    session.add_employee("Sara", 60.0, 60.0).unwrap();
    let id = session.employees()[0].id.clone();
    session
        .set_shift(&id, Weekday::Wednesday, ShiftType::Morning)
        .unwrap();
    let before = session.store().get(DEFAULT_STORAGE_KEY).unwrap();

    let token = session.request_clear_all();
    assert!(session.cancel(&token));
    assert_eq!(session.store().get(DEFAULT_STORAGE_KEY).unwrap(), before);

    let token = session.request_clear_all();
    assert!(session.confirm(&token).unwrap());
    drop(session);

    let session = open(&path);
    let sara = &session.employees()[0];
    assert_eq!(sara.name, "Sara");
    assert_eq!(sara.shifts.wednesday, ShiftType::None);
    assert_eq!(sara.total_pay, 0.0);
}
