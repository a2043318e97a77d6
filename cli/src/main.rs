//! CLI entrypoint for qna-relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use qna_application::{
    ConversationLogger, ConversationOrchestrator, GenerateAnswerUseCase, NoConversationLogger,
    PublishAnswerUseCase, TextGenerationProvider,
};
use qna_domain::{GenerationMode, Question};
use qna_infrastructure::{
    ConfigLoader, FileConfig, HttpPublishingClient, InMemoryAnswerCache, JsonlConversationLogger,
    MockProvider, SystemPromptLoader,
};
use qna_presentation::{AppState, Cli, Command, ConsoleFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    let _log_guard = logging::init(cli.verbose, config.logging.directory.as_deref())?;
    info!("Starting qna-relay");

    match cli.command() {
        Command::Serve { bind } => {
            let orchestrator = build_orchestrator(&config).await?;
            let bind_addr = bind.unwrap_or_else(|| config.server.bind_addr.clone());
            qna_presentation::serve(&bind_addr, AppState::new(orchestrator), shutdown_signal())
                .await
                .with_context(|| format!("HTTP server failed on {bind_addr}"))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ask {
            question,
            simulate_error,
        } => {
            let generator = build_generator(&config, conversation_logger(&config)).await;
            let question = Question::new(question)?;

            match generator.execute(&question, simulate_error).await {
                Ok(answer) => {
                    print!(
                        "{}",
                        ConsoleFormatter::answer(question.content(), generator.mode(), &answer)
                    );
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    warn!(error = %e, "Generation failed");
                    eprintln!("{}", ConsoleFormatter::error(e.user_message()));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

async fn build_orchestrator(config: &FileConfig) -> Result<ConversationOrchestrator> {
    let logger = conversation_logger(config);
    let generator = build_generator(config, logger.clone()).await;

    let client = match HttpPublishingClient::from_config(&config.content_backend) {
        Ok(client) => client,
        Err(e) => bail!("failed to create content backend client: {e}"),
    };
    info!(base_url = %client.base_url(), "Content backend configured");
    let publisher =
        PublishAnswerUseCase::new(Arc::new(client)).with_conversation_logger(logger.clone());

    let cache = match config.cache.ttl_seconds {
        Some(ttl) => InMemoryAnswerCache::with_ttl(Duration::from_secs(ttl)),
        None => InMemoryAnswerCache::new(),
    };

    Ok(ConversationOrchestrator::new(generator, publisher, Arc::new(cache))
        .with_conversation_logger(logger))
}

async fn build_generator(
    config: &FileConfig,
    logger: Arc<dyn ConversationLogger>,
) -> GenerateAnswerUseCase {
    let mut settings = config.generation_settings();
    let provider = build_provider(config, &mut settings.mode).await;
    let (prompt, source) = SystemPromptLoader::load(&config.generation.system_prompt_path);

    info!(
        mode = %settings.mode,
        provider = provider.name(),
        model = %settings.model_id,
        prompt = ?source,
        "Answer generator ready"
    );

    GenerateAnswerUseCase::new(provider, settings, prompt).with_conversation_logger(logger)
}

/// Provider for the resolved mode. Falls back to mock (and updates `mode`)
/// when live generation is not compiled in.
async fn build_provider(
    config: &FileConfig,
    mode: &mut GenerationMode,
) -> Arc<dyn TextGenerationProvider> {
    let mock = || -> Arc<dyn TextGenerationProvider> {
        Arc::new(
            MockProvider::new().rejecting(config.generation.simulation.invalid_model_id.clone()),
        )
    };

    match *mode {
        GenerationMode::Mock => mock(),
        #[cfg(feature = "bedrock")]
        GenerationMode::Live => {
            Arc::new(qna_infrastructure::BedrockProvider::new(&config.bedrock).await)
        }
        #[cfg(not(feature = "bedrock"))]
        GenerationMode::Live => {
            warn!("Live generation requires the `bedrock` feature, using mock mode");
            *mode = GenerationMode::Mock;
            mock()
        }
    }
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = &config.logging.conversation_log else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(path) {
        Ok(logger) => {
            info!(path = %logger.path().display(), "Conversation log enabled");
            Arc::new(logger)
        }
        Err(e) => {
            warn!(path = %path.display(), "Could not open conversation log: {}", e);
            Arc::new(NoConversationLogger)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
