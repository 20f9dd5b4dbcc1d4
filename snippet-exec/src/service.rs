use async_trait::async_trait;

use crate::{
    error::Error,
    types::{ExecutionRequest, ExecutionResult, LanguageInfo},
};

/// Remote service that runs submitted code
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Run the request and wait for its terminal result
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, Error>;

    /// Languages the service accepts
    async fn list_languages(&self) -> Result<Vec<LanguageInfo>, Error>;
}
