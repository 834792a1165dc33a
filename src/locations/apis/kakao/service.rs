use reqwest::header;

use crate::{
    app::models::api_error::ApiError,
    locations::{
        config::{KAKAO_CATEGORY_SEARCH_PATH, PLACE_CATEGORIES, PLACE_DETECTION_RADIUS},
        errors::LocationsApiError,
        models::place::Place,
    },
};

use super::structs::KakaoCategorySearchResponse;

/// Nearest categorized place within the detection radius, if any.
pub async fn search_nearest_place(
    latitude: f64,
    longitude: f64,
    kakao_api_key: &str,
    base_url: &str,
    client: &reqwest::Client,
) -> Result<Option<Place>, ApiError> {
    let url = [base_url.trim_end_matches('/'), KAKAO_CATEGORY_SEARCH_PATH].concat();

    let result = client
        .get(url)
        .header(header::AUTHORIZATION, ["KakaoAK ", kakao_api_key].concat())
        .query(&[
            ("category_group_code", PLACE_CATEGORIES.join(",")),
            ("x", longitude.to_string()),
            ("y", latitude.to_string()),
            ("radius", PLACE_DETECTION_RADIUS.to_string()),
            ("sort", "distance".to_string()),
        ])
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();
            match res.text().await {
                Ok(text) if status.is_success() => {
                    match serde_json::from_str::<KakaoCategorySearchResponse>(&text) {
                        Ok(response) => Ok(response.documents.first().and_then(|document| {
                            document
                                .distance_in_meters()
                                .filter(|distance| *distance <= PLACE_DETECTION_RADIUS)
                                .map(|distance| document.to_place(distance))
                        })),
                        Err(_) => {
                            tracing::error!(%text);
                            Err(LocationsApiError::LookupFailed.value())
                        }
                    }
                }
                Ok(text) => {
                    tracing::error!(%status, %text, "kakao category search failed");
                    Err(LocationsApiError::LookupFailed.value())
                }
                Err(e) => {
                    tracing::error!(%e);
                    Err(LocationsApiError::LookupFailed.value())
                }
            }
        }
        Err(e) => {
            tracing::error!("search_nearest_place, {:?}", e);
            Err(LocationsApiError::LookupFailed.value())
        }
    }
}
