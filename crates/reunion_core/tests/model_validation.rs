use reunion_core::{
    is_valid_path_code, Personnel, Reunion, ReunionStatus, Structure, ValidationError,
};
use chrono::NaiveDate;
use uuid::Uuid;

#[test]
fn path_code_grammar_accepts_slash_delimited_segments() {
    assert!(is_valid_path_code("MINESEC"));
    assert!(is_valid_path_code("MINESEC/SDEC/DRES"));
    assert!(is_valid_path_code("min-a/sub-1"));
}

#[test]
fn path_code_grammar_rejects_malformed_codes() {
    assert!(!is_valid_path_code(""));
    assert!(!is_valid_path_code("/MINESEC"));
    assert!(!is_valid_path_code("MINESEC/"));
    assert!(!is_valid_path_code("MIN//A"));
    assert!(!is_valid_path_code("MIN A"));
    assert!(!is_valid_path_code("MIN_%"));
}

#[test]
fn covers_matches_self_and_descendants_only() {
    let unit = Structure::new("Direction A", "MIN/A");

    assert!(unit.covers("MIN/A"));
    assert!(unit.covers("MIN/A/SUB1"));
    assert!(unit.covers("MIN/A/SUB1/CELL"));

    // `AB` shares the character prefix but is a sibling, not a descendant.
    assert!(!unit.covers("MIN/AB"));
    assert!(!unit.covers("MIN"));
    assert!(!unit.covers("OTHER/MIN/A"));
}

#[test]
fn structure_validation_rejects_blank_name_and_bad_path() {
    let blank = Structure::new("   ", "MIN/A");
    assert!(matches!(
        blank.validate(),
        Err(ValidationError::BlankField {
            entity: "structure",
            field: "name"
        })
    ));

    let bad_path = Structure::new("Direction A", "MIN//A");
    assert!(matches!(
        bad_path.validate(),
        Err(ValidationError::InvalidPathCode(_))
    ));
}

#[test]
fn personnel_validation_rejects_blank_display_name() {
    let personnel = Personnel::new("  ");
    assert!(matches!(
        personnel.validate(),
        Err(ValidationError::BlankField {
            entity: "personnel",
            field: "display_name"
        })
    ));
}

#[test]
fn reunion_validation_rejects_blank_subject_and_kind() {
    let start_at = NaiveDate::from_ymd_opt(2026, 3, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let structure_uuid = Uuid::new_v4();

    let blank_subject = Reunion::new("", "coordination", ReunionStatus::Planned, start_at, structure_uuid);
    assert!(matches!(
        blank_subject.validate(),
        Err(ValidationError::BlankField {
            entity: "reunion",
            field: "subject"
        })
    ));

    let blank_kind = Reunion::new("Budget review", " ", ReunionStatus::Planned, start_at, structure_uuid);
    assert!(matches!(
        blank_kind.validate(),
        Err(ValidationError::BlankField {
            entity: "reunion",
            field: "kind"
        })
    ));
}
