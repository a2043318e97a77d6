//! Bedrock provider adapter
//!
//! Implements [`TextGenerationProvider`] on top of the stateless Converse
//! API. One call, one request: no history is kept between questions.

use super::types;
use crate::config::FileBedrockConfig;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use qna_application::{GenerationRequest, ProviderError, TextGenerationProvider};
use tracing::{debug, info};

pub struct BedrockProvider {
    client: BedrockClient,
}

impl BedrockProvider {
    /// Load AWS configuration and create a Bedrock Runtime client.
    pub async fn new(config: &FileBedrockConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            loader = loader.profile_name(profile);
        }

        let aws_config = loader.load().await;
        info!(region = %config.region, "Bedrock provider initialized");

        Self {
            client: BedrockClient::new(&aws_config),
        }
    }

    fn user_message(question: &str) -> Result<bedrock::Message, ProviderError> {
        bedrock::Message::builder()
            .role(bedrock::ConversationRole::User)
            .content(bedrock::ContentBlock::Text(question.to_string()))
            .build()
            .map_err(|e| ProviderError::rejected("InvalidRequest", e.to_string()))
    }
}

#[async_trait]
impl TextGenerationProvider for BedrockProvider {
    fn name(&self) -> &str {
        "bedrock"
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let mut converse = self
            .client
            .converse()
            .model_id(&request.model_id)
            .messages(Self::user_message(&request.question)?)
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(request.max_tokens.min(i32::MAX as u32) as i32)
                    .temperature(request.temperature)
                    .build(),
            );

        if !request.system_prompt.is_empty() {
            converse = converse.system(bedrock::SystemContentBlock::Text(
                request.system_prompt.clone(),
            ));
        }

        debug!(model = %request.model_id, "Calling Bedrock Converse API");

        let response = converse
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        let text = response
            .output()
            .map(types::output_text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}
