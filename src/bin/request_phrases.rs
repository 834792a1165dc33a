//! Sends the example phrase request once and prints what came back.

use phraser_api::{
    app::{self, envy::IssuerEnvy},
    phrases::{client::PhraseClient, errors::PhraseError, models::chat_payload::ChatPayload},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), PhraseError> {
    // stdout is reserved for the response line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let envy = match app::envy::from_env::<IssuerEnvy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let client = PhraseClient::new(envy.openai_endpoint, envy.openai_api_key, None);
    let outcome = client.issue(&ChatPayload::example()).await?;

    println!("{}", outcome);

    Ok(())
}
