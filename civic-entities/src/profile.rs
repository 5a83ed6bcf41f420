use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

use crate::{email::EmailAddress, geo::MapPoint, id::Id, password::Password, time::Timestamp};

pub type RolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id                : Id,
    pub email             : EmailAddress,
    pub password          : Password,
    pub role              : Role,
    pub name              : Option<String>,
    pub phone             : Option<String>,
    pub avatar_url        : Option<String>,
    pub organization_name : Option<String>,
    pub location_text     : Option<String>,
    pub home_pos          : Option<MapPoint>,
    pub is_complete       : bool,
    pub created_at        : Timestamp,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
         FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Role {
    #[default]
    User  = 1,
    Admin = 2,
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<i16> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().unwrap_or_default()
    }
}
