//! User repository trait (port)

use async_trait::async_trait;

use crate::domain::User;
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub nom: String,
    pub prenom: String,
    pub username: String,
    pub email: String,
    pub actif: bool,
    pub service_line_id: Option<i64>,
    pub profils: Vec<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
    async fn create(&self, new: &NewUser) -> Result<User, DomainError>;
    async fn update(&self, user: &User) -> Result<User, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
