//! Conversions between AWS Bedrock SDK types and provider port types

use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types as bedrock;
use qna_application::ProviderError;

/// Concatenate the text blocks of a Converse output message.
///
/// Non-text blocks (images, tool use, guard content) are skipped.
pub fn output_text(output: &bedrock::ConverseOutput) -> String {
    match output {
        bedrock::ConverseOutput::Message(message) => message
            .content()
            .iter()
            .filter_map(|block| match block {
                bedrock::ContentBlock::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(""),
        _ => String::new(),
    }
}

/// Convert a Bedrock SDK error to a [`ProviderError`].
///
/// Service errors keep the AWS exception name as the error code.
pub fn convert_converse_error(err: &SdkError<ConverseError>) -> ProviderError {
    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                ProviderError::rejected("ThrottlingException", e.to_string())
            }
            ConverseError::ModelNotReadyException(e) => {
                ProviderError::ModelNotAvailable(e.to_string())
            }
            ConverseError::ResourceNotFoundException(e) => {
                ProviderError::ModelNotAvailable(e.to_string())
            }
            ConverseError::ValidationException(e) => {
                ProviderError::rejected("ValidationException", e.to_string())
            }
            ConverseError::AccessDeniedException(e) => {
                ProviderError::rejected("AccessDeniedException", e.to_string())
            }
            ConverseError::ModelTimeoutException(_) => ProviderError::Timeout,
            other => ProviderError::rejected("ServiceError", format!("{:?}", other)),
        },
        SdkError::TimeoutError(_) => ProviderError::Timeout,
        other => ProviderError::ConnectionError(format!("Bedrock SDK error: {}", other)),
    }
}
