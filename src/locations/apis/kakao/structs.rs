use serde::Deserialize;

use crate::locations::models::place::Place;

// https://developers.kakao.com/docs/latest/ko/local/dev-guide#search-by-category

#[derive(Debug, Deserialize)]
pub struct KakaoCategorySearchResponse {
    #[serde(default)]
    pub documents: Vec<KakaoDocument>,
}

#[derive(Debug, Deserialize)]
pub struct KakaoDocument {
    pub place_name: String,
    pub category_name: String,
    // sent as a string of meters, empty when no center point was given
    #[serde(default)]
    pub distance: String,
    pub address_name: Option<String>,
    pub phone: Option<String>,
}

impl KakaoDocument {
    pub fn distance_in_meters(&self) -> Option<u32> {
        self.distance.trim().parse().ok()
    }

    pub fn to_place(&self, distance: u32) -> Place {
        Place {
            name: self.place_name.to_string(),
            category: self.category_name.to_string(),
            distance,
            address: self.address_name.clone().filter(|address| !address.is_empty()),
            phone: self.phone.clone().filter(|phone| !phone.is_empty()),
            is_custom_location: false,
        }
    }
}
