use anyhow::Context;
use dotenv::dotenv;
use raseed_chat::{
    api::CoachingClient,
    app::App,
    config::{get_config, initialize_config},
    conversation::Conversation,
    logging::init_logging,
    translator::PhraseTranslator,
    ui::run_ui,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    initialize_config().context("failed to load configuration")?;
    let config = get_config();
    let _logger = init_logging(&config).context("failed to start logging")?;

    let client = CoachingClient::from_config(&config)?;
    let translator = Arc::new(PhraseTranslator::new(config.translation_delay())?);
    log::info!("Using coaching endpoint {}", client.endpoint());

    let conversation = match config.default_language {
        Some(language) => Conversation::with_language(language),
        None => Conversation::new(),
    };

    run_ui(App::new(conversation), client, translator).await?;
    Ok(())
}
