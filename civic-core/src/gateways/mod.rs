pub mod geocode;
pub mod geolocation;
pub mod photos;
pub mod places;

#[cfg(test)]
pub mod mock;
