use super::*;

/// Finishes the signup of the account with the chosen role.
pub fn complete_profile(
    connections: &sqlite::Connections,
    account: &Profile,
    role: &str,
    update: usecases::ProfileUpdate,
) -> Result<Profile> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::complete_profile(conn, account, role, update).inspect_err(|err| {
            log::warn!("Failed to complete profile {}: {err}", account.id);
        })
    })?)
}

pub fn update_profile(
    connections: &sqlite::Connections,
    account: &Profile,
    update: usecases::ProfileUpdate,
) -> Result<Profile> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_profile(conn, account, update)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn complete_and_update_profile() {
        let fixture = BackendFixture::new();
        let account = fixture.create_profile("org@example.org", None);
        let update = usecases::ProfileUpdate {
            name: Some("Ann".into()),
            organization_name: Some("Public Works".into()),
            location_text: Some("Belagavi".into()),
            lat: Some(15.85),
            lng: Some(74.5),
            ..Default::default()
        };
        let profile = flows::complete_profile(
            &fixture.db_connections,
            &account,
            "admin",
            update,
        )
        .unwrap();
        assert!(profile.is_complete);
        assert_eq!(Role::Admin, profile.role);

        let profile = flows::update_profile(
            &fixture.db_connections,
            &profile,
            usecases::ProfileUpdate {
                name: Some("Ann B.".into()),
                organization_name: Some("Public Works".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(Role::Admin, profile.role);
        let stored = fixture.get_profile(account.id.as_str());
        assert_eq!(Some("Ann B.".into()), stored.name);
        assert_eq!(Some("Public Works".into()), stored.organization_name);
        assert_eq!(None, stored.home_pos);
        assert!(stored.is_complete);
    }

    #[test]
    fn update_uses_the_given_account() {
        let fixture = BackendFixture::new();
        let account = fixture.create_profile("user@example.org", None);
        let mut unknown = account.clone();
        unknown.id = "unknown".into();
        let err = flows::update_profile(
            &fixture.db_connections,
            &unknown,
            usecases::ProfileUpdate {
                name: Some("Eve".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
        assert_eq!(None, fixture.get_profile(account.id.as_str()).name);
    }

    #[test]
    fn invalid_role_leaves_profile_untouched() {
        let fixture = BackendFixture::new();
        let account = fixture.create_profile("user@example.org", None);
        assert!(flows::complete_profile(
            &fixture.db_connections,
            &account,
            "moderator",
            Default::default(),
        )
        .is_err());
        assert!(!fixture.get_profile(account.id.as_str()).is_complete);
    }
}
