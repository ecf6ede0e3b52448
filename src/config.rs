use crate::error::{Result, UrlBuildError};
use crate::url_builder::UrlStringBuilder;

use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the base URL
pub const BASE_URL_ENV_VAR: &str = "URL_STRING_BUILDER_BASE_URL";

/// Required environment variables for `BuilderConfig::from_env`
const REQUIRED_ENV_VARS: &[&str] = &[BASE_URL_ENV_VAR];

/// Validates that all required environment variables are set
///
/// # Errors
/// Returns `UrlBuildError::MissingEnvVar` listing every missing variable
pub fn validate_env_vars() -> Result<()> {
    let missing_vars: Vec<&str> = REQUIRED_ENV_VARS
        .iter()
        .copied()
        .filter(|var_name| env::var(var_name).is_err())
        .collect();

    if !missing_vars.is_empty() {
        return Err(UrlBuildError::MissingEnvVar(missing_vars.join(", ")));
    }

    Ok(())
}

/// Gets a required environment variable
///
/// # Arguments
/// * `var_name` - The name of the environment variable to retrieve
///
/// # Errors
/// Returns `UrlBuildError::MissingEnvVar` if the environment variable is not set
pub fn get_required_env_var(var_name: &str) -> Result<String> {
    env::var(var_name).map_err(|_| UrlBuildError::MissingEnvVar(var_name.to_string()))
}

/// One configured query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterConfig {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub encode: bool,
}

/// A base URL plus default parameters, loadable from the environment or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub base_url: String,
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

impl BuilderConfig {
    /// Reads the base URL from `URL_STRING_BUILDER_BASE_URL`, loading a
    /// `.env` file first if one is present.
    ///
    /// # Errors
    /// Returns `UrlBuildError::MissingEnvVar` if the variable is not set
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(BASE_URL_ENV_VAR)
    }

    /// Same as `from_env`, reading the base URL from `var_name`.
    ///
    /// # Errors
    /// Returns `UrlBuildError::MissingEnvVar` if the variable is not set
    pub fn from_env_var(var_name: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let base_url = get_required_env_var(var_name)?;
        debug!(var = var_name, base_url = %base_url, "Loaded base URL from environment");

        Ok(BuilderConfig {
            base_url,
            parameters: Vec::new(),
        })
    }

    /// # Errors
    /// Returns `UrlBuildError::Parse` if `json` is not a valid configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a JSON configuration file.
    ///
    /// # Errors
    /// * `UrlBuildError::Io` - If the file cannot be opened
    /// * `UrlBuildError::Parse` - If the content is not a valid configuration
    pub fn from_path(file_path: &Path) -> Result<Self> {
        let file = File::open(file_path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;

        debug!(
            path = %file_path.display(),
            parameters = config.parameters.len(),
            "Loaded builder configuration"
        );

        Ok(config)
    }

    /// Creates a builder with every configured parameter appended in order.
    #[must_use]
    pub fn into_builder(self) -> UrlStringBuilder {
        self.parameters
            .into_iter()
            .fold(UrlStringBuilder::new(self.base_url), |builder, param| {
                builder.append(param.key, param.value, param.encode)
            })
    }
}
