use super::*;
use civic_core::{entities::*, repositories::*, usecases};
use civic_entities::builders::*;

fn connections() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

#[test]
fn create_and_load_issues() {
    let connections = connections();
    let db = connections.exclusive().unwrap();
    let old = Issue::build()
        .id("old")
        .title("Pothole")
        .description("Deep")
        .category(Category::Infrastructure)
        .priority(Priority::Urgent)
        .lat_lng(15.85, 74.5)
        .photos(vec!["https://a/1.jpg", "https://a/2.jpg"])
        .reporter("p1", "Jane")
        .created_at(1_000)
        .finish();
    let new = Issue::build()
        .id("new")
        .title("Graffiti")
        .description("Wall")
        .created_at(2_000)
        .finish();
    db.create_issue(&old).unwrap();
    db.create_issue(&new).unwrap();
    assert!(matches!(db.create_issue(&new), Err(Error::AlreadyExists)));
    drop(db);

    let db = connections.shared().unwrap();
    assert_eq!(2, db.count_issues().unwrap());
    let loaded = db.get_issue("old").unwrap();
    assert_eq!(old, loaded);
    let ids: Vec<_> = db
        .all_issues()
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(vec![Id::from("new"), Id::from("old")], ids);
    assert!(matches!(db.get_issue("none"), Err(Error::NotFound)));
}

#[test]
fn update_issue_status() {
    let connections = connections();
    let db = connections.exclusive().unwrap();
    db.create_issue(&Issue::build().id("i").title("t").finish())
        .unwrap();
    db.update_issue_status("i", IssueStatus::InProgress).unwrap();
    assert_eq!(IssueStatus::InProgress, db.get_issue("i").unwrap().status);
    assert!(matches!(
        db.update_issue_status("x", IssueStatus::Resolved),
        Err(Error::NotFound)
    ));
}

#[test]
fn read_only_connections_reject_writes() {
    let connections = connections();
    let db = connections.shared().unwrap();
    assert!(db.create_issue(&Issue::build().finish()).is_err());
}

#[test]
fn create_and_update_profiles() {
    let connections = connections();
    let db = connections.exclusive().unwrap();
    let mut profile = Profile::build()
        .id("p")
        .email("jane@example.org")
        .password("secret1")
        .name("Jane")
        .finish();
    profile.home_pos = MapPoint::try_from_lat_lng_deg(15.85, 74.5).ok();
    db.create_profile(&profile).unwrap();
    let duplicate = Profile::build().id("q").email("jane@example.org").finish();
    assert!(matches!(
        db.create_profile(&duplicate),
        Err(Error::AlreadyExists)
    ));

    let loaded = db
        .get_profile_by_email(&"jane@example.org".parse().unwrap())
        .unwrap();
    assert_eq!(profile, loaded);
    assert!(loaded.password.verify("secret1"));

    profile.role = Role::Admin;
    profile.name = None;
    profile.is_complete = true;
    db.update_profile(&profile).unwrap();
    let loaded = db.get_profile("p").unwrap();
    assert_eq!(Role::Admin, loaded.role);
    assert_eq!(None, loaded.name);
    assert!(loaded.is_complete);
    assert!(db
        .try_get_profile_by_email(&EmailAddress::new_unchecked("x@y.z".into()))
        .unwrap()
        .is_none());
}

#[test]
fn roll_back_failed_transactions() {
    let connections = connections();
    let mut db = connections.exclusive().unwrap();
    let res: std::result::Result<(), usecases::Error> = db.transaction(|conn| {
        conn.create_issue(&Issue::build().id("a").title("t").finish())?;
        Err(usecases::Error::Forbidden)
    });
    assert!(matches!(res, Err(usecases::Error::Forbidden)));
    assert_eq!(0, db.count_issues().unwrap());
}
