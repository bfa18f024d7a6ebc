use chrono::{NaiveDate, NaiveDateTime};
use reunion_core::db::open_db_in_memory;
use reunion_core::{
    compute_statistics, AccessService, DirectoryRepository, Personnel, Reunion,
    ReunionRepository, ReunionStatus, SqliteDirectoryRepository, SqliteReunionRepository,
    Structure,
};
use rusqlite::Connection;
use uuid::Uuid;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn at(d: u32, hour: u32) -> NaiveDateTime {
    day(d).and_hms_opt(hour, 0, 0).unwrap()
}

fn reunion(status: ReunionStatus, start_at: NaiveDateTime) -> Reunion {
    Reunion::new("meeting", "coordination", status, start_at, Uuid::new_v4())
}

#[test]
fn empty_set_yields_all_zero_counts() {
    let statistics = compute_statistics(&[], day(15));

    assert_eq!(statistics.total, 0);
    assert_eq!(statistics.upcoming, 0);
    assert_eq!(statistics.past, 0);
    assert!(statistics.by_status.is_empty());
}

#[test]
fn upcoming_plus_past_always_equals_total() {
    let set = vec![
        reunion(ReunionStatus::Completed, at(1, 9)),
        reunion(ReunionStatus::Cancelled, at(10, 9)),
        reunion(ReunionStatus::Planned, at(15, 9)),
        reunion(ReunionStatus::Planned, at(20, 9)),
        reunion(ReunionStatus::Ongoing, at(15, 14)),
    ];

    let statistics = compute_statistics(&set, day(15));

    assert_eq!(statistics.total, 5);
    assert_eq!(statistics.upcoming + statistics.past, statistics.total);
    let by_status_sum: u64 = statistics.by_status.values().sum();
    assert_eq!(by_status_sum, statistics.total);
}

#[test]
fn upcoming_is_date_granular_not_timestamp_granular() {
    // A meeting earlier today still counts as upcoming.
    let set = vec![
        reunion(ReunionStatus::Completed, at(15, 0)),
        reunion(ReunionStatus::Planned, at(15, 8)),
        reunion(ReunionStatus::Completed, at(14, 23)),
    ];

    let statistics = compute_statistics(&set, day(15));

    assert_eq!(statistics.upcoming, 2);
    assert_eq!(statistics.past, 1);
}

#[test]
fn by_status_omits_absent_statuses() {
    let set = vec![
        reunion(ReunionStatus::Planned, at(20, 9)),
        reunion(ReunionStatus::Planned, at(21, 9)),
        reunion(ReunionStatus::Cancelled, at(10, 9)),
    ];

    let statistics = compute_statistics(&set, day(15));

    assert_eq!(statistics.by_status.len(), 2);
    assert_eq!(statistics.by_status[&ReunionStatus::Planned], 2);
    assert_eq!(statistics.by_status[&ReunionStatus::Cancelled], 1);
    assert!(!statistics.by_status.contains_key(&ReunionStatus::Ongoing));
}

#[test]
fn statistics_serialize_with_snake_case_status_keys() {
    let set = vec![
        reunion(ReunionStatus::Planned, at(20, 9)),
        reunion(ReunionStatus::Cancelled, at(10, 9)),
    ];

    let statistics = compute_statistics(&set, day(15));
    let value = serde_json::to_value(&statistics).unwrap();

    assert_eq!(value["total"], 2);
    assert_eq!(value["upcoming"], 1);
    assert_eq!(value["past"], 1);
    assert_eq!(value["by_status"]["planned"], 1);
    assert_eq!(value["by_status"]["cancelled"], 1);
}

#[test]
fn summary_combines_personnel_view_and_statistics() {
    let conn: Connection = open_db_in_memory().unwrap();
    let directory = SqliteDirectoryRepository::try_new(&conn).unwrap();
    let reunions = SqliteReunionRepository::try_new(&conn).unwrap();

    let home = Structure::new("Direction A", "MIN/A");
    directory.create_structure(&home).unwrap();

    let mut member = Personnel::new("Member");
    member.structure_uuid = Some(home.uuid);
    member.user_uuid = Some(Uuid::new_v4());
    directory.create_personnel(&member).unwrap();

    let past_meeting = Reunion::new(
        "Past meeting",
        "coordination",
        ReunionStatus::Completed,
        at(10, 9),
        home.uuid,
    );
    let upcoming_meeting = Reunion::new(
        "Upcoming meeting",
        "coordination",
        ReunionStatus::Planned,
        at(20, 9),
        home.uuid,
    );
    reunions.create_reunion(&past_meeting).unwrap();
    reunions.create_reunion(&upcoming_meeting).unwrap();

    let service = AccessService::new(directory, reunions);
    let summary = service
        .summary_for_user(member.user_uuid.unwrap(), day(15))
        .unwrap();

    assert_eq!(summary.personnel.uuid, member.uuid);
    assert_eq!(summary.personnel.display_name, "Member");
    let structure = summary.personnel.structure.as_ref().unwrap();
    assert_eq!(structure.path_code, "MIN/A");

    assert_eq!(summary.statistics.total, 2);
    assert_eq!(summary.statistics.upcoming, 1);
    assert_eq!(summary.statistics.past, 1);
}

#[test]
fn summary_for_member_without_structure_has_no_structure_view() {
    let conn: Connection = open_db_in_memory().unwrap();
    let directory = SqliteDirectoryRepository::try_new(&conn).unwrap();
    let reunions = SqliteReunionRepository::try_new(&conn).unwrap();

    let mut member = Personnel::new("Detached");
    member.user_uuid = Some(Uuid::new_v4());
    directory.create_personnel(&member).unwrap();

    let service = AccessService::new(directory, reunions);
    let summary = service
        .summary_for_user(member.user_uuid.unwrap(), day(15))
        .unwrap();

    assert!(summary.personnel.structure.is_none());
    assert_eq!(summary.statistics.total, 0);
}
