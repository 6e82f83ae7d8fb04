//! Service line repository trait (port)

use async_trait::async_trait;

use crate::domain::ServiceLine;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceLineRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<ServiceLine>, DomainError>;
    async fn find_all(&self) -> Result<Vec<ServiceLine>, DomainError>;
    async fn create(&self, nom: &str) -> Result<ServiceLine, DomainError>;
    async fn update(&self, line: &ServiceLine) -> Result<ServiceLine, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
