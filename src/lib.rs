//! Phrase generation service.
//!
//! Asks a chat-completions endpoint for polite, practical phrases to use at a
//! place (given its name, category and address), and detects which place a
//! device is at from its coordinates.

use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use axum::{
    extract::DefaultBodyLimit,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::envy::Envy,
    phrases::{
        client::PhraseClient, conversation::Conversation,
        models::generation_params::GenerationParams, prompts::CONVERSATION_PROMPT,
    },
};

pub mod app;
pub mod locations;
pub mod phrases;

const MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub http_client: reqwest::Client,
    pub phrase_client: PhraseClient,
    pub generation_params: GenerationParams,
    pub conversation: Arc<RwLock<Conversation>>,
}

impl AppState {
    pub fn new(envy: Envy) -> AppState {
        let http_client = reqwest::Client::new();
        let phrase_client = PhraseClient::new(
            envy.openai_endpoint.to_string(),
            envy.openai_api_key.to_string(),
            Some(http_client.clone()),
        );
        let generation_params = GenerationParams {
            max_tokens: envy.phrase_max_tokens(),
            ..GenerationParams::default()
        };

        AppState {
            envy: Arc::new(envy),
            http_client,
            phrase_client,
            generation_params,
            conversation: Arc::new(RwLock::new(Conversation::new(CONVERSATION_PROMPT))),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/health", get(app::controller::get_health))
        // phrases
        .route(
            "/generate-phrases",
            post(phrases::controller::generate_phrases),
        )
        // locations
        .route("/api/location", post(locations::controller::locate))
        .fallback(app::controller::fallback)
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
