use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

use chrono::{Duration, TimeZone, Utc};
use stockroom_catalog::{Category, CatalogService, ManualClock};

const THREADS: i64 = 8;
const PER_THREAD: i64 = 250;

#[test]
fn concurrent_adds_with_distinct_ids_are_all_kept() {
    let service = CatalogService::new();
    let barrier = Arc::new(Barrier::new(THREADS as usize));
    let created_at = Utc::now();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let service = service.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for n in 0..PER_THREAD {
                    let id = t * PER_THREAD + n + 1;
                    service
                        .add(id, &format!("Item {id}"), Category::Toys, 5, created_at)
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let all = service.get_all();
    assert_eq!(all.len() as i64, THREADS * PER_THREAD);

    let ids: BTreeSet<i64> = all.iter().map(|i| i.id().get()).collect();
    assert_eq!(ids.len() as i64, THREADS * PER_THREAD);
    assert_eq!(ids.first(), Some(&1));
    assert_eq!(ids.last(), Some(&(THREADS * PER_THREAD)));
    assert_eq!(service.count_in_category(Category::Toys) as i64, THREADS * PER_THREAD);
}

#[test]
fn racing_adds_on_one_id_admit_exactly_one_winner() {
    let service = CatalogService::new();
    let barrier = Arc::new(Barrier::new(THREADS as usize));
    let created_at = Utc::now();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let service = service.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                service.add(7, &format!("Contender {t}"), Category::Books, 6, created_at)
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| e.is_duplicate_id()));
    assert_eq!(service.len(), 1);
}

#[test]
fn readers_never_observe_a_partial_update() {
    let t0 = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(t0 + Duration::seconds(1)));
    let service = CatalogService::with_clock(clock);
    service.add(1, "Even", Category::Electronics, 2, t0).unwrap();

    let writer = {
        let service = service.clone();
        thread::spawn(move || {
            for n in 0..2_000 {
                let (name, category, rating) = if n % 2 == 0 {
                    ("Odd", Category::Clothing, 1)
                } else {
                    ("Even", Category::Electronics, 2)
                };
                assert!(service.update(1, name, category, rating).unwrap());
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            thread::spawn(move || {
                for _ in 0..2_000 {
                    let item = service.get_by_id(1).unwrap();
                    match item.name() {
                        "Even" => {
                            assert_eq!(item.category(), Category::Electronics);
                            assert_eq!(item.rating().get(), 2);
                        }
                        "Odd" => {
                            assert_eq!(item.category(), Category::Clothing);
                            assert_eq!(item.rating().get(), 1);
                        }
                        other => panic!("unexpected name {other}"),
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(service.get_modified_since_creation().len(), 1);
}
