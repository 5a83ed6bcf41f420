#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # civic-entities
//!
//! Reusable, agnostic domain entities for civic issue reporting.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod geo;
pub mod geocoding;
pub mod id;
pub mod issue;
pub mod password;
pub mod profile;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
