use super::models::custom_location::CustomLocation;

/// Places farther than this are not considered "here".
pub const PLACE_DETECTION_RADIUS: u32 = 40;

pub const PLACE_CATEGORIES: [&str; 6] = [
    "MT1", // mart
    "CS2", // convenience store
    "FD6", // restaurant
    "CE7", // cafe
    "HP8", // hospital
    "PM9", // pharmacy
];

pub const KAKAO_CATEGORY_SEARCH_PATH: &str = "/v2/local/search/category.json";

pub const NOT_IN_PLACE_MESSAGE: &str = "Not currently in any detected place";

lazy_static! {
    pub static ref CUSTOM_LOCATIONS: Vec<CustomLocation> = vec![
        CustomLocation {
            name: "포항공과대학교 생활관 16동".to_string(),
            latitude: 36.017140,
            longitude: 129.322108,
            category: "학교 > 기숙사".to_string(),
            address: "경상북도 포항시 남구 청암로 77, 지곡동 포항공과대학교 기숙사16동".to_string(),
        },
        CustomLocation {
            name: "포항공과대학교 생활관 13동".to_string(),
            latitude: 36.016900,
            longitude: 129.322720,
            category: "학교 > 기숙사".to_string(),
            address: "경상북도 포항시 남구 청암로 77, 지곡동 포항공과대학교 기숙사16동".to_string(),
        },
        CustomLocation {
            name: "포항공과대학교 제2공학관".to_string(),
            latitude: 36.012430,
            longitude: 129.321970,
            category: "학교 > 공학관".to_string(),
            address: "경상북도 포항시 남구 청암로 77".to_string(),
        },
    ];
}
