use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::{
    config::ExecutionConfig,
    error::Error,
    service::ExecutionService,
    types::{ExecutionRequest, ExecutionResult, LanguageInfo, SubmissionResponse},
};

const SUBMISSION_FIELDS: &str = "stdout,stderr,compile_output,message,status";

/// Client for a Judge0 execution API reached through RapidAPI
pub struct Judge0Client {
    client: Client,
    config: ExecutionConfig,
}

impl Judge0Client {
    /// Create a new Judge0Client with the given configuration
    pub fn new(config: ExecutionConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::HttpClient)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Submit source code, falling back to the configured default language
    pub async fn submit(
        &self,
        source_code: impl Into<String>,
        language_id: Option<u32>,
    ) -> Result<ExecutionResult, Error> {
        let request = ExecutionRequest {
            language_id: language_id.unwrap_or(self.config.default_language_id),
            source_code: source_code.into(),
        };
        self.execute(&request).await
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-RapidAPI-Key", &self.config.api_key)
            .header("X-RapidAPI-Host", &self.config.host)
    }

    async fn check_status(response: Response) -> Result<Response, Error> {
        if !response.status().is_success() {
            return Err(Error::Api {
                status_code: response.status().as_u16(),
                message: response.text().await?,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ExecutionService for Judge0Client {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, Error> {
        debug!(
            language_id = request.language_id,
            bytes = request.source_code.len(),
            "Submitting snippet"
        );

        let response = self
            .with_auth(
                self.client
                    .post(format!("{}/submissions", self.config.base_url)),
            )
            .query(&[
                ("base64_encoded", "false"),
                ("wait", "true"),
                ("fields", SUBMISSION_FIELDS),
            ])
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        response
            .json::<SubmissionResponse>()
            .await
            .map(ExecutionResult::from)
            .map_err(Error::HttpClient)
    }

    async fn list_languages(&self) -> Result<Vec<LanguageInfo>, Error> {
        let response = self
            .with_auth(self.client.get(format!("{}/languages", self.config.base_url)))
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        response.json().await.map_err(Error::HttpClient)
    }
}
