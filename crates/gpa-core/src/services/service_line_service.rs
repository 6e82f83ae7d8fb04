//! Service line service (organizational units)

use std::sync::Arc;

use crate::domain::ServiceLine;
use crate::error::DomainError;
use crate::repositories::ServiceLineRepository;

pub struct ServiceLineService {
    repo: Arc<dyn ServiceLineRepository>,
}

impl ServiceLineService {
    pub fn new(repo: Arc<dyn ServiceLineRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i64) -> Result<ServiceLine, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ServiceLineNotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<ServiceLine>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn create(&self, nom: &str) -> Result<ServiceLine, DomainError> {
        let nom = nom.trim();
        if nom.is_empty() {
            return Err(DomainError::ValidationError("nom is required".to_string()));
        }
        self.repo.create(nom).await
    }

    pub async fn rename(&self, id: i64, nom: &str) -> Result<ServiceLine, DomainError> {
        let nom = nom.trim();
        if nom.is_empty() {
            return Err(DomainError::ValidationError("nom is required".to_string()));
        }
        let mut existing = self.get(id).await?;
        existing.nom = nom.to_string();
        self.repo.update(&existing).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.get(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::service_line_repository::MockServiceLineRepository;

    #[tokio::test]
    async fn test_create_trims_and_rejects_blank() {
        let mut repo = MockServiceLineRepository::new();
        repo.expect_create()
            .withf(|nom| nom == "Finance")
            .returning(|nom| Ok(ServiceLine { id: 1, nom: nom.to_string() }));
        let service = ServiceLineService::new(Arc::new(repo));

        let created = service.create("  Finance  ").await.unwrap();
        assert_eq!(created.nom, "Finance");

        let err = service.create("   ").await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_reports_not_found() {
        let mut repo = MockServiceLineRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = ServiceLineService::new(Arc::new(repo));
        let err = service.delete(3).await.unwrap_err();
        assert!(matches!(err, DomainError::ServiceLineNotFound(3)));
    }
}
