use chrono::{NaiveDate, NaiveDateTime};
use reunion_core::{Reunion, ReunionFilter, ReunionStatus, DEFAULT_RESULT_CAP};
use uuid::Uuid;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn reunion(subject: &str, status: ReunionStatus, start_at: NaiveDateTime) -> Reunion {
    Reunion::new(subject, "coordination", status, start_at, Uuid::new_v4())
}

#[test]
fn status_filter_keeps_matches_in_original_relative_order() {
    let cancelled_a = reunion("A", ReunionStatus::Cancelled, at(20, 9));
    let planned_b = reunion("B", ReunionStatus::Planned, at(18, 9));
    let cancelled_c = reunion("C", ReunionStatus::Cancelled, at(15, 9));
    let completed_d = reunion("D", ReunionStatus::Completed, at(12, 9));
    let planned_e = reunion("E", ReunionStatus::Planned, at(10, 9));

    let input = vec![
        cancelled_a.clone(),
        planned_b,
        cancelled_c.clone(),
        completed_d,
        planned_e,
    ];

    let filter = ReunionFilter {
        status: Some(ReunionStatus::Cancelled),
        ..ReunionFilter::default()
    };
    let kept = filter.apply(input);

    assert_eq!(kept, vec![cancelled_a, cancelled_c]);
}

#[test]
fn date_bounds_are_inclusive() {
    let before = reunion("before", ReunionStatus::Planned, at(9, 23));
    let on_lower = reunion("on lower", ReunionStatus::Planned, at(10, 0));
    let inside = reunion("inside", ReunionStatus::Planned, at(12, 9));
    let on_upper = reunion("on upper", ReunionStatus::Planned, at(14, 0));
    let after = reunion("after", ReunionStatus::Planned, at(14, 1));

    let filter = ReunionFilter {
        start_from: Some(at(10, 0)),
        start_until: Some(at(14, 0)),
        ..ReunionFilter::default()
    };
    let kept = filter.apply(vec![
        after,
        on_upper.clone(),
        inside.clone(),
        on_lower.clone(),
        before,
    ]);

    assert_eq!(kept, vec![on_upper, inside, on_lower]);
}

#[test]
fn predicates_combine_as_logical_and() {
    let match_all = reunion("match", ReunionStatus::Planned, at(12, 9));
    let wrong_status = reunion("wrong status", ReunionStatus::Cancelled, at(12, 10));
    let wrong_date = reunion("wrong date", ReunionStatus::Planned, at(20, 9));

    let filter = ReunionFilter {
        start_from: Some(at(11, 0)),
        start_until: Some(at(13, 0)),
        status: Some(ReunionStatus::Planned),
        ..ReunionFilter::default()
    };
    let kept = filter.apply(vec![wrong_date, match_all.clone(), wrong_status]);

    assert_eq!(kept, vec![match_all]);
}

#[test]
fn empty_filter_returns_input_capped_at_default() {
    let input: Vec<Reunion> = (0..DEFAULT_RESULT_CAP + 5)
        .map(|i| reunion(&format!("meeting {i}"), ReunionStatus::Planned, at(10, 9)))
        .collect();

    let kept = ReunionFilter::default().apply(input.clone());

    assert_eq!(kept.len(), DEFAULT_RESULT_CAP);
    assert_eq!(kept, input[..DEFAULT_RESULT_CAP].to_vec());
}

#[test]
fn cap_applies_after_filtering_never_before() {
    // 55 planned meetings first, then 5 cancelled; capping before filtering
    // would leave no cancelled meeting to return.
    let mut input: Vec<Reunion> = (0..55)
        .map(|i| reunion(&format!("planned {i}"), ReunionStatus::Planned, at(10, 9)))
        .collect();
    let cancelled: Vec<Reunion> = (0..5)
        .map(|i| reunion(&format!("cancelled {i}"), ReunionStatus::Cancelled, at(5, 9)))
        .collect();
    input.extend(cancelled.clone());

    let filter = ReunionFilter {
        status: Some(ReunionStatus::Cancelled),
        limit: Some(3),
        ..ReunionFilter::default()
    };
    let kept = filter.apply(input);

    assert_eq!(kept, cancelled[..3].to_vec());
}

#[test]
fn filter_is_idempotent() {
    let input = vec![
        reunion("A", ReunionStatus::Planned, at(20, 9)),
        reunion("B", ReunionStatus::Cancelled, at(18, 9)),
        reunion("C", ReunionStatus::Planned, at(15, 9)),
    ];

    let filter = ReunionFilter {
        start_from: Some(at(16, 0)),
        status: Some(ReunionStatus::Planned),
        limit: Some(10),
        ..ReunionFilter::default()
    };

    let once = filter.apply(input);
    let twice = filter.apply(once.clone());

    assert_eq!(once, twice);
}
