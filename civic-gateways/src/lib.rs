//! Implementations of the gateways that connect the
//! core with external services.

pub mod google;
pub mod nominatim;
pub mod photos;
