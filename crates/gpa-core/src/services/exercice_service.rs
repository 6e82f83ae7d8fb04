//! Exercice service (yearly periods)

use std::sync::Arc;

use tracing::info;

use crate::domain::Exercice;
use crate::error::DomainError;
use crate::repositories::{ExerciceRepository, NewExercice};

pub struct ExerciceService {
    repo: Arc<dyn ExerciceRepository>,
}

impl ExerciceService {
    pub fn new(repo: Arc<dyn ExerciceRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i64) -> Result<Exercice, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ExerciceNotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<Exercice>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn create(&self, new: NewExercice) -> Result<Exercice, DomainError> {
        validate_exercice(new.annee, new.date_debut, new.date_fin)?;
        let created = self.repo.create(&new).await?;
        info!("Created exercice {} ({})", created.id, created.annee);
        Ok(created)
    }

    pub async fn update(&self, id: i64, new: NewExercice) -> Result<Exercice, DomainError> {
        validate_exercice(new.annee, new.date_debut, new.date_fin)?;
        let mut existing = self.get(id).await?;
        existing.annee = new.annee;
        existing.verrouille = new.verrouille;
        existing.description = new.description;
        existing.date_debut = new.date_debut;
        existing.date_fin = new.date_fin;
        self.repo.update(&existing).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.get(id).await?;
        self.repo.delete(id).await
    }
}

fn validate_exercice(
    annee: i32,
    date_debut: Option<chrono::NaiveDate>,
    date_fin: Option<chrono::NaiveDate>,
) -> Result<(), DomainError> {
    if !(2000..=2100).contains(&annee) {
        return Err(DomainError::ValidationError(format!(
            "annee out of range: {}",
            annee
        )));
    }
    if let (Some(debut), Some(fin)) = (date_debut, date_fin) {
        if fin < debut {
            return Err(DomainError::ValidationError(
                "date_fin precedes date_debut".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::exercice_repository::MockExerciceRepository;
    use chrono::NaiveDate;

    fn new_exercice(annee: i32) -> NewExercice {
        NewExercice {
            annee,
            verrouille: false,
            description: None,
            date_debut: None,
            date_fin: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_year() {
        let service = ExerciceService::new(Arc::new(MockExerciceRepository::new()));
        let err = service.create(new_exercice(1999)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_dates() {
        let service = ExerciceService::new(Arc::new(MockExerciceRepository::new()));
        let mut bad = new_exercice(2025);
        bad.date_debut = NaiveDate::from_ymd_opt(2025, 12, 31);
        bad.date_fin = NaiveDate::from_ymd_opt(2025, 1, 1);
        let err = service.create(bad).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_get_missing_reports_not_found() {
        let mut repo = MockExerciceRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = ExerciceService::new(Arc::new(repo));
        let err = service.get(9).await.unwrap_err();
        assert!(matches!(err, DomainError::ExerciceNotFound(9)));
    }
}
