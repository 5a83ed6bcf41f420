pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{issue_builder::*, profile_builder::*};

pub mod issue_builder {

    use super::*;
    use crate::{geo::*, id::*, issue::*, time::*};

    #[derive(Debug)]
    pub struct IssueBuild {
        issue: Issue,
    }

    impl IssueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.issue.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.issue.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.issue.description = desc.into();
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.issue.category = category;
            self
        }
        pub fn priority(mut self, priority: Priority) -> Self {
            self.issue.priority = priority;
            self
        }
        pub fn status(mut self, status: IssueStatus) -> Self {
            self.issue.status = status;
            self
        }
        pub fn location_text(mut self, text: &str) -> Self {
            self.issue.location_text = text.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.issue.pos = Some(pos);
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            let pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            self.pos(pos)
        }
        pub fn photos(mut self, photos: Vec<&str>) -> Self {
            self.issue.photos = photos.into_iter().map(Into::into).collect();
            self
        }
        pub fn reporter(mut self, id: &str, name: &str) -> Self {
            self.issue.reporter = Reporter {
                id: Some(id.into()),
                name: Some(name.into()),
            };
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.issue.created_at = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> Issue {
            self.issue
        }
    }

    impl Builder for Issue {
        type Build = IssueBuild;
        fn build() -> IssueBuild {
            IssueBuild {
                issue: Issue {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    category: Category::default(),
                    priority: Priority::default(),
                    status: IssueStatus::default(),
                    location_text: "".into(),
                    pos: None,
                    photos: vec![],
                    contact_info: None,
                    reporter: Reporter::default(),
                    created_at: Timestamp::from_millis(0),
                },
            }
        }
    }
}

pub mod profile_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, profile::*, time::*};

    #[derive(Debug)]
    pub struct ProfileBuild {
        profile: Profile,
    }

    impl ProfileBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.profile.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.profile.email = email.parse().unwrap();
            self
        }
        pub fn password(mut self, plain: &str) -> Self {
            self.profile.password = plain.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.profile.role = role;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.profile.name = Some(name.into());
            self
        }
        pub fn complete(mut self) -> Self {
            self.profile.is_complete = true;
            self
        }
        pub fn finish(self) -> Profile {
            self.profile
        }
    }

    impl Builder for Profile {
        type Build = ProfileBuild;
        fn build() -> ProfileBuild {
            ProfileBuild {
                profile: Profile {
                    id: Id::new(),
                    email: EmailAddress::new_unchecked("user@example.org".into()),
                    password: Password::from_hash("".into()),
                    role: Role::default(),
                    name: None,
                    phone: None,
                    avatar_url: None,
                    organization_name: None,
                    location_text: None,
                    home_pos: None,
                    is_complete: false,
                    created_at: Timestamp::from_millis(0),
                },
            }
        }
    }
}
