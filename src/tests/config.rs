// Unit Tests for Analysis Configuration
//
// UNIT UNDER TEST: AnalysisSettings, Credential
//
// BUSINESS RESPONSIBILITY:
//   - Supplies the token and length limits used by both analysis paths
//   - Lets operators override limits through FINEPRINT_* environment variables
//   - Reads provider credentials from their environment variables
//   - Keeps secrets out of Debug output
//
// TEST COVERAGE:
//   - Defaults match the documented limits
//   - Environment overrides and rejection of invalid values
//   - Zero limits rejected by validation
//   - Credential resolution treats blank values as unset
//   - Redacted Debug formatting
//
// Environment tests are #[serial] because they mutate process state.

use crate::config::{
    AnalysisSettings, Credential, ENV_MAX_DOCUMENT_LENGTH, ENV_MAX_TOKENS_ANALYSIS,
    ENV_MAX_TOKENS_SCORING,
};
use crate::error::FinePrintError;
use crate::registry::{ProviderDescriptor, ProviderRegistry};
use serial_test::serial;

fn clear_settings_env() {
    std::env::remove_var(ENV_MAX_TOKENS_ANALYSIS);
    std::env::remove_var(ENV_MAX_TOKENS_SCORING);
    std::env::remove_var(ENV_MAX_DOCUMENT_LENGTH);
}

fn test_descriptor(env_var: &str) -> ProviderDescriptor {
    ProviderDescriptor {
        credential_env_var: env_var.to_string(),
        ..ProviderRegistry::builtin().lookup("Groq (Free)").unwrap().clone()
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_limits() {
        // Arrange & Act
        let settings = AnalysisSettings::default();

        // Assert
        assert_eq!(settings.max_tokens_analysis, 4096);
        assert_eq!(settings.max_tokens_scoring, 800);
        assert_eq!(settings.max_document_length, 10_000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_without_overrides_uses_defaults() {
        // Arrange
        clear_settings_env();

        // Act
        let settings = AnalysisSettings::from_env().unwrap();

        // Assert
        assert_eq!(settings, AnalysisSettings::default());
    }

    #[test]
    #[serial]
    fn test_from_env_applies_overrides() {
        // Arrange
        clear_settings_env();
        std::env::set_var(ENV_MAX_TOKENS_ANALYSIS, "2048");
        std::env::set_var(ENV_MAX_TOKENS_SCORING, " 400 ");
        std::env::set_var(ENV_MAX_DOCUMENT_LENGTH, "5000");

        // Act
        let result = AnalysisSettings::from_env();
        clear_settings_env();

        // Assert
        let settings = result.unwrap();
        assert_eq!(settings.max_tokens_analysis, 2048);
        assert_eq!(settings.max_tokens_scoring, 400);
        assert_eq!(settings.max_document_length, 5000);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_value() {
        // Arrange
        clear_settings_env();
        std::env::set_var(ENV_MAX_TOKENS_SCORING, "lots");

        // Act
        let result = AnalysisSettings::from_env();
        clear_settings_env();

        // Assert
        match result {
            Err(FinePrintError::Configuration { message }) => {
                assert!(message.contains(ENV_MAX_TOKENS_SCORING));
            }
            other => panic!("Expected Configuration error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero() {
        // Arrange
        clear_settings_env();
        std::env::set_var(ENV_MAX_DOCUMENT_LENGTH, "0");

        // Act
        let result = AnalysisSettings::from_env();
        clear_settings_env();

        // Assert
        assert!(matches!(result, Err(FinePrintError::Configuration { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_analysis_tokens() {
        let settings = AnalysisSettings {
            max_tokens_analysis: 0,
            ..AnalysisSettings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(FinePrintError::Configuration { .. })
        ));
    }
}

#[cfg(test)]
mod credential_tests {
    use super::*;

    #[test]
    #[serial]
    fn test_from_env_reads_configured_key() {
        // Arrange
        let descriptor = test_descriptor("FINEPRINT_TEST_KEY_SET");
        std::env::set_var("FINEPRINT_TEST_KEY_SET", "gsk_live_123");

        // Act
        let credential = Credential::from_env(&descriptor);
        std::env::remove_var("FINEPRINT_TEST_KEY_SET");

        // Assert
        assert_eq!(credential.unwrap().expose(), "gsk_live_123");
    }

    #[test]
    #[serial]
    fn test_from_env_treats_blank_as_unset() {
        // Arrange
        let descriptor = test_descriptor("FINEPRINT_TEST_KEY_BLANK");
        std::env::set_var("FINEPRINT_TEST_KEY_BLANK", "   ");

        // Act
        let credential = Credential::from_env(&descriptor);
        std::env::remove_var("FINEPRINT_TEST_KEY_BLANK");

        // Assert
        assert!(credential.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_variable() {
        let descriptor = test_descriptor("FINEPRINT_TEST_KEY_NEVER_SET");
        std::env::remove_var("FINEPRINT_TEST_KEY_NEVER_SET");

        assert!(Credential::from_env(&descriptor).is_none());
    }

    #[test]
    fn test_debug_never_shows_secret() {
        // Arrange
        let credential = Credential::new("sk-ant-very-secret");

        // Act
        let debug = format!("{:?}", credential);

        // Assert
        assert_eq!(debug, "Credential(<redacted>)");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_whitespace_credential_is_empty() {
        assert!(Credential::new(" \t\n").is_empty());
        assert!(Credential::default().is_empty());
        assert!(!Credential::from("key").is_empty());
    }
}
