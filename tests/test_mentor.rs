//! Mentor CRUD integration tests

use learnow_api::app::{mentor_create, mentor_list, MentorCreateReq};
use learnow_api::infra::db::init_test_db;

// ──────────────────────── Helper ────────────────────────

fn make_create_req(username: &str) -> MentorCreateReq {
    MentorCreateReq {
        username: Some(username.to_string()),
        name: Some(format!("{} Kumar", username)),
        phone: Some("9999999999".to_string()),
        photo: Some("http://photos/m1.png".to_string()),
        expertise: Some("Backend".to_string()),
        experience: Some("5 years".to_string()),
        bio: Some("Mentors backend folks".to_string()),
        linkedin: Some(format!("https://linkedin.com/in/{}", username)),
    }
}

// ══════════════════════════════════════════════════════════
//  mentor_create
// ══════════════════════════════════════════════════════════

#[test]
fn create_mentor_returns_rowid() {
    let pool = init_test_db();
    let first = mentor_create(&pool, make_create_req("ravi")).unwrap();
    let second = mentor_create(&pool, make_create_req("asha")).unwrap();
    assert!(first >= 1);
    assert!(second > first);
}

#[test]
fn create_mentor_without_username_is_store_error() {
    let pool = init_test_db();
    let mut req = make_create_req("ravi");
    req.username = None;
    let err = mentor_create(&pool, req).unwrap_err();
    assert_eq!(err.status().as_u16(), 500);
}

#[test]
fn linkedin_arrives_under_camel_case_key() {
    let req: MentorCreateReq = serde_json::from_value(serde_json::json!({
        "username": "ravi",
        "linkedIn": "https://linkedin.com/in/ravi"
    }))
    .unwrap();
    assert_eq!(req.linkedin.as_deref(), Some("https://linkedin.com/in/ravi"));
    assert!(req.name.is_none());
}

// ══════════════════════════════════════════════════════════
//  mentor_list
// ══════════════════════════════════════════════════════════

#[test]
fn list_mentors_empty_initially() {
    let pool = init_test_db();
    assert!(mentor_list(&pool).unwrap().is_empty());
}

#[test]
fn create_then_list_includes_payload() {
    let pool = init_test_db();
    mentor_create(&pool, make_create_req("ravi")).unwrap();

    let all = mentor_list(&pool).unwrap();
    assert_eq!(all.len(), 1);
    let m = &all[0];
    assert_eq!(m.username, "ravi");
    assert_eq!(m.name.as_deref(), Some("ravi Kumar"));
    assert_eq!(m.phone.as_deref(), Some("9999999999"));
    assert_eq!(m.expertise.as_deref(), Some("Backend"));
    assert_eq!(m.experience.as_deref(), Some("5 years"));
    assert_eq!(m.bio.as_deref(), Some("Mentors backend folks"));
    assert_eq!(m.linkedin.as_deref(), Some("https://linkedin.com/in/ravi"));
}

#[test]
fn absent_optional_fields_come_back_null() {
    let pool = init_test_db();
    mentor_create(
        &pool,
        MentorCreateReq {
            username: Some("bare".to_string()),
            name: None,
            phone: None,
            photo: None,
            expertise: None,
            experience: None,
            bio: None,
            linkedin: None,
        },
    )
    .unwrap();

    let all = mentor_list(&pool).unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].name.is_none());
    assert!(all[0].linkedin.is_none());
}
