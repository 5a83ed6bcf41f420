pub mod prelude {
    pub use civic_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            civic_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_profile(&self, email: &str, name: Option<&str>) -> Profile {
            let profile = flows::register_with_email(
                &self.db_connections,
                usecases::NewProfile {
                    email: email.parse().unwrap(),
                    password: "secret".into(),
                },
            )
            .unwrap();
            if let Some(name) = name {
                let mut profile = profile.clone();
                profile.name = Some(name.into());
                self.db_connections
                    .exclusive()
                    .unwrap()
                    .update_profile(&profile)
                    .unwrap();
                return profile;
            }
            profile
        }

        pub fn set_role(&self, profile_id: &str, role: Role) {
            let db = self.db_connections.exclusive().unwrap();
            let mut profile = db.get_profile(profile_id).unwrap();
            profile.role = role;
            db.update_profile(&profile).unwrap();
        }

        pub fn get_profile(&self, id: &str) -> Profile {
            self.db_connections
                .shared()
                .unwrap()
                .get_profile(id)
                .unwrap()
        }

        pub fn report_issue(&self, reporter_id: &str, title: &str) -> String {
            flows::report_issue(
                &self.db_connections,
                &self.get_profile(reporter_id),
                usecases::NewIssue {
                    title: title.into(),
                    description: format!("{title} reported by a citizen"),
                    location_text: "Market Square".into(),
                    ..Default::default()
                },
            )
            .unwrap()
            .id
            .into()
        }

        pub fn get_issue(&self, id: &str) -> Issue {
            self.db_connections.shared().unwrap().get_issue(id).unwrap()
        }

        pub fn count_issues(&self) -> usize {
            self.db_connections.shared().unwrap().count_issues().unwrap()
        }
    }
}
