pub mod custom_location;
pub mod location_response;
pub mod place;
