mod common;

use axum::http::StatusCode;
use phraser_api::{router, AppState};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{envy, post_json};

fn kakao_documents(distance: &str) -> serde_json::Value {
    json!({
        "documents": [
            {
                "place_name": "까오산",
                "category_name": "음식점 > 아시아음식 > 동남아음식 > 태국음식",
                "category_group_code": "FD6",
                "distance": distance,
                "address_name": "경북 포항시 남구 효자동 253-105",
                "phone": "054-000-0000",
                "x": "129.3",
                "y": "36.0"
            }
        ],
        "meta": { "total_count": 1 }
    })
}

#[tokio::test]
async fn custom_location_wins_without_calling_kakao() {
    let kakao = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kakao_documents("5")))
        .expect(0)
        .mount(&kakao)
        .await;

    let app = router(AppState::new(envy("http://localhost", Some(&kakao.uri()))));

    let (status, body) = post_json(
        &app,
        "/api/location",
        json!({ "latitude": 36.017140, "longitude": 129.322108 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isInPlace"], true);
    assert_eq!(body["place"]["name"], "포항공과대학교 생활관 16동");
    assert_eq!(body["place"]["isCustomLocation"], true);
    assert_eq!(body["place"]["distance"], 0);
}

#[tokio::test]
async fn nearby_kakao_place_is_returned() {
    let kakao = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/local/search/category.json"))
        .and(header("authorization", "KakaoAK kakao-key"))
        .and(query_param("category_group_code", "MT1,CS2,FD6,CE7,HP8,PM9"))
        .and(query_param("radius", "40"))
        .and(query_param("sort", "distance"))
        .and(query_param("x", "129.3"))
        .and(query_param("y", "36.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kakao_documents("12")))
        .expect(1)
        .mount(&kakao)
        .await;

    let app = router(AppState::new(envy("http://localhost", Some(&kakao.uri()))));

    let (status, body) = post_json(
        &app,
        "/api/location",
        json!({ "latitude": 36.5, "longitude": 129.3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isInPlace"], true);
    assert_eq!(body["place"]["name"], "까오산");
    assert_eq!(body["place"]["distance"], 12);
    assert_eq!(body["place"]["address"], "경북 포항시 남구 효자동 253-105");
    assert_eq!(body["place"]["isCustomLocation"], false);
}

#[tokio::test]
async fn kakao_place_outside_radius_is_ignored() {
    let kakao = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(kakao_documents("41")))
        .mount(&kakao)
        .await;

    let app = router(AppState::new(envy("http://localhost", Some(&kakao.uri()))));

    let (status, body) = post_json(
        &app,
        "/api/location",
        json!({ "latitude": 36.5, "longitude": 129.3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isInPlace"], false);
    assert_eq!(body["message"], "Not currently in any detected place");
    assert!(body.get("place").is_none());
}

#[tokio::test]
async fn kakao_error_is_a_server_error() {
    let kakao = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"errorType\":\"AccessDeniedError\"}"))
        .mount(&kakao)
        .await;

    let app = router(AppState::new(envy("http://localhost", Some(&kakao.uri()))));

    let (status, body) = post_json(
        &app,
        "/api/location",
        json!({ "latitude": 36.5, "longitude": 129.3 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch location information.");
}

#[tokio::test]
async fn without_kakao_key_only_custom_locations_are_checked() {
    let app = router(AppState::new(envy("http://localhost", None)));

    let (status, body) = post_json(
        &app,
        "/api/location",
        json!({ "latitude": 37.5665, "longitude": 126.978 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isInPlace"], false);
}

#[tokio::test]
async fn missing_or_invalid_coordinates_are_bad_requests() {
    let app = router(AppState::new(envy("http://localhost", None)));

    let (status, _) = post_json(&app, "/api/location", json!({ "latitude": 36.5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        "/api/location",
        json!({ "latitude": 136.5, "longitude": 129.3 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
