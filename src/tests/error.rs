// Unit Tests for FinePrint Error Handling
//
// UNIT UNDER TEST: FinePrintError
//
// BUSINESS RESPONSIBILITY:
//   - Categorizes failures so callers can route them without matching every variant
//   - Separates provider failures from caller mistakes
//   - Produces user-facing messages that never leak credentials or raw bodies
//   - Marks transient failures as retryable (advisory only)
//
// TEST COVERAGE:
//   - Category and severity for each variant
//   - Provider error grouping
//   - Retryability hints
//   - User message content
//   - Source error preservation on RequestFailed

use crate::error::{ErrorCategory, ErrorSeverity, FinePrintError};
use std::error::Error as _;

#[cfg(test)]
mod categorization_tests {
    use super::*;

    #[test]
    fn test_caller_mistakes_are_client_errors() {
        // Test verifies every error the caller can fix is categorized as Client

        // Arrange
        let errors = vec![
            FinePrintError::unknown_provider("Mystery AI"),
            FinePrintError::missing_credential("Groq (Free)", "GROQ_API_KEY"),
            FinePrintError::configuration("bad limit"),
            FinePrintError::EmptyDocument,
            FinePrintError::unsupported_document("scan.pdf", "application/pdf"),
            FinePrintError::extraction("notes.txt", "not valid UTF-8"),
        ];

        // Act & Assert
        for error in errors {
            assert_eq!(error.category(), ErrorCategory::Client, "{error:?}");
            assert!(!error.is_provider_error(), "{error:?}");
            assert!(!error.is_retryable(), "{error:?}");
        }
    }

    #[test]
    fn test_provider_failures_are_grouped() {
        // Test verifies the four remote failure variants report as provider errors

        // Arrange
        let errors = vec![
            FinePrintError::request_failed("Groq (Free)", "HTTP 500", None),
            FinePrintError::authentication_failed("Groq (Free)", "invalid key"),
            FinePrintError::rate_limit_exceeded("Groq (Free)", 30),
            FinePrintError::response_parsing("Groq (Free)", "missing choices"),
        ];

        // Act & Assert
        for error in errors {
            assert!(error.is_provider_error(), "{error:?}");
        }
    }

    #[test]
    fn test_rate_limit_is_transient_and_retryable() {
        // Arrange & Act
        let error = FinePrintError::rate_limit_exceeded("Anthropic Claude", 45);

        // Assert
        assert_eq!(error.category(), ErrorCategory::Transient);
        assert_eq!(error.severity(), ErrorSeverity::Warning);
        assert!(error.is_retryable());
    }

    #[test]
    fn test_authentication_failure_is_not_retryable() {
        // Test verifies a rejected key is treated as something the user must fix

        // Arrange & Act
        let error = FinePrintError::authentication_failed("Google Gemini (Free)", "API_KEY_INVALID");

        // Assert
        assert_eq!(error.category(), ErrorCategory::Client);
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_request_failed_is_external_and_retryable() {
        // Arrange & Act
        let error = FinePrintError::request_failed("Groq (Free)", "connection reset", None);

        // Assert
        assert_eq!(error.category(), ErrorCategory::External);
        assert!(error.is_retryable());
    }

    #[test]
    fn test_empty_document_is_informational() {
        assert_eq!(FinePrintError::EmptyDocument.severity(), ErrorSeverity::Info);
    }
}

#[cfg(test)]
mod user_message_tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_provider() {
        // Arrange
        let error = FinePrintError::missing_credential("Anthropic Claude", "ANTHROPIC_API_KEY");

        // Act
        let message = error.user_message();

        // Assert
        assert_eq!(message, "Please provide your API key for Anthropic Claude");
    }

    #[test]
    fn test_request_failure_hides_technical_details() {
        // Test verifies raw transport details stay out of user-facing text

        // Arrange
        let error = FinePrintError::request_failed(
            "Groq (Free)",
            "HTTP 502: <html>upstream connect error</html>",
            None,
        );

        // Act
        let message = error.user_message();

        // Assert
        assert!(message.contains("Groq (Free)"));
        assert!(!message.contains("upstream"));
        assert!(!message.contains("502"));
    }

    #[test]
    fn test_rate_limit_message_includes_wait_time() {
        let error = FinePrintError::rate_limit_exceeded("Groq (Free)", 60);
        assert!(error.user_message().contains("60 seconds"));
    }

    #[test]
    fn test_display_includes_env_var_for_missing_credential() {
        let error = FinePrintError::missing_credential("Groq (Free)", "GROQ_API_KEY");
        assert_eq!(
            error.to_string(),
            "No API key configured for Groq (Free) (set GROQ_API_KEY)"
        );
    }
}

#[cfg(test)]
mod source_tests {
    use super::*;

    #[test]
    fn test_request_failed_preserves_source() {
        // Arrange
        let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");

        // Act
        let error = FinePrintError::request_failed(
            "Groq (Free)",
            "transport failure",
            Some(Box::new(io_error)),
        );

        // Assert
        let source = error.source().expect("source should be kept");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn test_request_failed_without_source() {
        let error = FinePrintError::request_failed("Groq (Free)", "HTTP 500", None);
        assert!(error.source().is_none());
    }
}
