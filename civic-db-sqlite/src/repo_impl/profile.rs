use super::*;

impl ProfileRepo for DbReadOnly<'_> {
    fn create_profile(&self, _profile: &Profile) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_profile(&self, _profile: &Profile) -> Result<()> {
        Err(read_only_violation())
    }
    fn get_profile(&self, id: &str) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>> {
        try_get_profile_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl ProfileRepo for DbReadWrite<'_> {
    fn create_profile(&self, profile: &Profile) -> Result<()> {
        create_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &Profile) -> Result<()> {
        update_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn get_profile(&self, id: &str) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>> {
        try_get_profile_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl ProfileRepo for DbConnection<'_> {
    fn create_profile(&self, profile: &Profile) -> Result<()> {
        create_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &Profile) -> Result<()> {
        update_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn get_profile(&self, id: &str) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>> {
        try_get_profile_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> From<&'a Profile> for models::NewProfile<'a> {
    fn from(p: &'a Profile) -> Self {
        Self {
            id: p.id.as_str(),
            email: p.email.as_str(),
            password: p.password.as_hash(),
            role: p.role.into(),
            name: p.name.as_deref(),
            phone: p.phone.as_deref(),
            avatar_url: p.avatar_url.as_deref(),
            organization_name: p.organization_name.as_deref(),
            location_text: p.location_text.as_deref(),
            lat: p.home_pos.map(MapPoint::lat),
            lng: p.home_pos.map(MapPoint::lng),
            is_complete: p.is_complete,
            created_at: p.created_at.as_millis(),
        }
    }
}

impl TryFrom<models::ProfileEntity> for Profile {
    type Error = repo::Error;
    fn try_from(from: models::ProfileEntity) -> Result<Self> {
        let models::ProfileEntity {
            rowid: _,
            id,
            email,
            password,
            role,
            name,
            phone,
            avatar_url,
            organization_name,
            location_text,
            lat,
            lng,
            is_complete,
            created_at,
        } = from;
        let role = Role::try_from(role).map_err(anyhow::Error::from)?;
        Ok(Self {
            id: id.into(),
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            role,
            name,
            phone,
            avatar_url,
            organization_name,
            location_text,
            home_pos: load_pos(lat, lng)?,
            is_complete,
            created_at: Timestamp::from_millis(created_at),
        })
    }
}

fn create_profile(conn: &mut SqliteConnection, p: &Profile) -> Result<()> {
    let new_profile = models::NewProfile::from(p);
    diesel::insert_into(schema::profiles::table)
        .values(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_profile(conn: &mut SqliteConnection, p: &Profile) -> Result<()> {
    use schema::profiles::dsl;
    let new_profile = models::NewProfile::from(p);
    let count = diesel::update(dsl::profiles.filter(dsl::id.eq(new_profile.id)))
        .set(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_profile(conn: &mut SqliteConnection, id: &str) -> Result<Profile> {
    use schema::profiles::dsl;
    dsl::profiles
        .filter(dsl::id.eq(id))
        .first::<models::ProfileEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn try_get_profile_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<Profile>> {
    use schema::profiles::dsl;
    dsl::profiles
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::ProfileEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Profile::try_from)
        .transpose()
}
