//! Exercice repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::Exercice;
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct NewExercice {
    pub annee: i32,
    pub verrouille: bool,
    pub description: Option<String>,
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciceRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Exercice>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Exercice>, DomainError>;
    async fn create(&self, new: &NewExercice) -> Result<Exercice, DomainError>;
    async fn update(&self, exercice: &Exercice) -> Result<Exercice, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
