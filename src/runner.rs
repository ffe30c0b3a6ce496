//! A single search run: send the request, persist the response, extract values.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::api::{ApiError, SearchApi};
use crate::config::Config;
use crate::models::{ExtractedResults, SearchRequest};
use crate::utils::{
    extract_results, write_artifact, write_lines, ArtifactPaths, OutputError, ParseError,
};

/// Errors that end a search run
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The raw response was saved but could not be interpreted
    #[error("failed to parse results saved to {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// What a run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output_path: PathBuf,

    /// Set only when at least one email was found
    pub email_path: Option<PathBuf>,

    /// Set only when at least one password was found
    pub password_path: Option<PathBuf>,

    pub total: usize,
    pub emails: usize,
    pub passwords: usize,

    /// Informational API ceiling, reported next to `total`
    pub max_results: usize,

    #[serde(skip)]
    pub results: ExtractedResults,
}

impl RunSummary {
    /// Whether the total reached the API's result ceiling
    pub fn hit_limit(&self) -> bool {
        self.total >= self.max_results
    }
}

/// Runs searches against an API and writes the artifacts.
#[derive(Debug, Clone)]
pub struct SearchRunner {
    api: Arc<dyn SearchApi>,
    paths: ArtifactPaths,
    max_results: usize,
}

impl SearchRunner {
    pub fn new(api: Arc<dyn SearchApi>, paths: ArtifactPaths, max_results: usize) -> Self {
        Self {
            api,
            paths,
            max_results,
        }
    }

    /// Create a runner using the output and limit settings from `config`
    pub fn from_config(api: Arc<dyn SearchApi>, config: &Config) -> Result<Self, RunError> {
        let paths = ArtifactPaths::new(
            config.output.path.clone(),
            &config.output.email_prefix,
            &config.output.password_prefix,
        )?;
        Ok(Self::new(api, paths, config.limits.max_results))
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// Execute `request`.
    ///
    /// The raw body is written before parsing, so it stays on disk when the
    /// response turns out to be unparseable.
    pub async fn run(&self, request: &SearchRequest) -> Result<RunSummary, RunError> {
        tracing::info!(
            "Searching for {} on {} ({})",
            request.term(),
            self.api.endpoint(),
            self.api.id()
        );
        tracing::debug!(fields = ?request.fields(), categories = ?request.categories(), "Request details");

        let body = self.api.search(request).await?;

        write_artifact(&self.paths.output, &body)?;
        tracing::info!("Response saved to {}", self.paths.output.display());

        let results = extract_results(&body).map_err(|source| RunError::Parse {
            path: self.paths.output.clone(),
            source,
        })?;

        let email_path = if results.emails.is_empty() {
            None
        } else {
            write_lines(&self.paths.emails, &results.emails)?;
            tracing::info!("Emails saved to {}", self.paths.emails.display());
            Some(self.paths.emails.clone())
        };

        let password_path = if results.passwords.is_empty() {
            None
        } else {
            write_lines(&self.paths.passwords, &results.passwords)?;
            tracing::info!("Passwords saved to {}", self.paths.passwords.display());
            Some(self.paths.passwords.clone())
        };

        let summary = RunSummary {
            output_path: self.paths.output.clone(),
            email_path,
            password_path,
            total: results.total,
            emails: results.emails.len(),
            passwords: results.passwords.len(),
            max_results: self.max_results,
            results,
        };

        if summary.hit_limit() {
            tracing::warn!(
                "Result count {} reached the API maximum of {}; results may be truncated",
                summary.total,
                summary.max_results
            );
        }

        Ok(summary)
    }
}
