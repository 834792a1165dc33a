use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::kakao,
    config::{CUSTOM_LOCATIONS, PLACE_DETECTION_RADIUS},
    models::{location_response::LocationResponse, place::Place},
    util::distance::haversine_distance,
};

/// Closest custom location within the detection radius.
pub fn nearest_custom_location(latitude: f64, longitude: f64) -> Option<Place> {
    CUSTOM_LOCATIONS
        .iter()
        .map(|location| {
            let distance = haversine_distance(
                latitude,
                longitude,
                location.latitude,
                location.longitude,
            )
            .round() as u32;

            (location, distance)
        })
        .filter(|(_, distance)| *distance <= PLACE_DETECTION_RADIUS)
        .min_by_key(|(_, distance)| *distance)
        .map(|(location, distance)| Place {
            name: location.name.to_string(),
            category: location.category.to_string(),
            distance,
            address: Some(location.address.to_string()),
            phone: None,
            is_custom_location: true,
        })
}

pub async fn locate(
    latitude: f64,
    longitude: f64,
    state: &AppState,
) -> Result<LocationResponse, ApiError> {
    if let Some(place) = nearest_custom_location(latitude, longitude) {
        tracing::debug!(name = %place.name, "matched custom location");
        return Ok(LocationResponse::from_place(Some(place)));
    }

    let Some(kakao_api_key) = &state.envy.kakao_api_key else {
        return Ok(LocationResponse::from_place(None));
    };

    let place = kakao::service::search_nearest_place(
        latitude,
        longitude,
        kakao_api_key,
        state.envy.kakao_base_url(),
        &state.http_client,
    )
    .await?;

    Ok(LocationResponse::from_place(place))
}
