//! Profil repository trait (port)

use async_trait::async_trait;

use crate::domain::Profil;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfilRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Profil>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Profil>, DomainError>;
    async fn create(&self, nom: &str) -> Result<Profil, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
