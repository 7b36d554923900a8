// This attribute ensures the entire file is only compiled and run when
// the "parallel" feature is enabled.
#![cfg(feature = "parallel")]

use six_degrees::FilmDatabase;
use six_degrees::integrity::verify;
use six_degrees_record::constants::ACTOR_FILE_NAME;
use six_degrees_testkit::samples;
use std::fs;

#[test]
fn test_parallel_verify_counts_every_link() {
    let dir = samples::actor_chain(500).write_temp().unwrap();
    let db = FilmDatabase::open(dir.path()).unwrap();

    let report = verify(&db).unwrap();
    assert!(report.is_clean(), "Unexpected violations: {:?}", report.violations);
    // 501 chained actors plus `Loner`.
    assert_eq!(report.actors_checked, 502);
    assert_eq!(report.films_checked, 500);
    assert_eq!(report.links_checked, 500 * 2 * 2);
}

#[test]
fn test_parallel_verify_is_deterministic() {
    let dir = samples::actor_chain(200).write_temp().unwrap();
    let path = dir.path().join(ACTOR_FILE_NAME);

    // Reverse the actor index so most entries are out of order.
    let mut bytes = fs::read(&path).unwrap();
    let count = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let mut entries = bytes[4..4 + count * 4].chunks_exact(4).map(<[u8]>::to_vec).collect::<Vec<_>>();
    entries.reverse();
    bytes[4..4 + count * 4].copy_from_slice(&entries.concat());
    fs::write(&path, bytes).unwrap();

    let db = FilmDatabase::open(dir.path()).unwrap();
    let first = verify(&db).unwrap();
    let second = verify(&db).unwrap();

    assert!(!first.is_clean());
    assert_eq!(first, second);
}
