use serde::Serialize;

use crate::locations::config::NOT_IN_PLACE_MESSAGE;

use super::place::Place;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub is_in_place: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LocationResponse {
    pub fn from_place(place: Option<Place>) -> Self {
        match place {
            Some(place) => Self {
                is_in_place: true,
                place: Some(place),
                message: None,
            },
            None => Self {
                is_in_place: false,
                place: None,
                message: Some(NOT_IN_PLACE_MESSAGE.to_string()),
            },
        }
    }
}
