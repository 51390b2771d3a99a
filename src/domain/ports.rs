use crate::domain::model::CompletionRequest;
use crate::domain::records::Entity;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Chat-completion backend that turns a prompt into advice text.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Simple persistence operations. Each call is one atomic step.
pub trait Repository<T: Entity>: Send + Sync {
    /// Stores the record under a freshly assigned id and returns it.
    fn create(&self, record: T) -> impl std::future::Future<Output = Result<T>> + Send;
    fn get_by_id(&self, id: u64) -> impl std::future::Future<Output = Result<Option<T>>> + Send;
    fn update(
        &self,
        id: u64,
        record: T,
    ) -> impl std::future::Future<Output = Result<Option<T>>> + Send;
    fn delete(&self, id: u64) -> impl std::future::Future<Output = Result<Option<T>>> + Send;
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<T>>> + Send;
}
