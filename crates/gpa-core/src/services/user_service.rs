// ============================================================================
// GPA Core - User Service
// File: crates/gpa-core/src/services/user_service.rs
// ============================================================================
//! User and profile administration. Profiles assigned to a user must
//! exist in the profile catalog; usernames are unique.

use std::sync::Arc;

use gpa_shared::utils::mask_email;
use tracing::info;
use validator::ValidateEmail;

use crate::domain::{Profil, User};
use crate::error::DomainError;
use crate::repositories::{NewUser, ProfilRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct UserInput {
    pub nom: String,
    pub prenom: String,
    pub username: String,
    pub email: String,
    pub actif: bool,
    pub service_line_id: Option<i64>,
    pub profils: Vec<String>,
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    profil_repo: Arc<dyn ProfilRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, profil_repo: Arc<dyn ProfilRepository>) -> Self {
        Self { user_repo, profil_repo }
    }

    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.user_repo.find_by_username(username).await
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.find_all().await
    }

    pub async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        self.validate(&input).await?;
        if self.user_repo.find_by_username(&input.username).await?.is_some() {
            return Err(DomainError::ValidationError(format!(
                "username already taken: {}",
                input.username
            )));
        }

        let new = NewUser {
            nom: input.nom.trim().to_string(),
            prenom: input.prenom.trim().to_string(),
            username: input.username.trim().to_string(),
            email: input.email.trim().to_string(),
            actif: input.actif,
            service_line_id: input.service_line_id,
            profils: input.profils,
        };
        let created = self.user_repo.create(&new).await?;
        info!(
            "Created user {} ({}, {})",
            created.id,
            created.username,
            mask_email(&created.email),
        );
        Ok(created)
    }

    pub async fn update(&self, id: i64, input: UserInput) -> Result<User, DomainError> {
        self.validate(&input).await?;
        let mut existing = self.get(id).await?;

        if input.username != existing.username {
            if let Some(other) = self.user_repo.find_by_username(&input.username).await? {
                if other.id != id {
                    return Err(DomainError::ValidationError(format!(
                        "username already taken: {}",
                        input.username
                    )));
                }
            }
        }

        existing.nom = input.nom.trim().to_string();
        existing.prenom = input.prenom.trim().to_string();
        existing.username = input.username.trim().to_string();
        existing.email = input.email.trim().to_string();
        existing.actif = input.actif;
        existing.service_line_id = input.service_line_id;
        existing.profils = input.profils;
        self.user_repo.update(&existing).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.get(id).await?;
        self.user_repo.delete(id).await
    }

    // ------------------------------------------------------------------
    // Profile catalog
    // ------------------------------------------------------------------

    pub async fn list_profils(&self) -> Result<Vec<Profil>, DomainError> {
        self.profil_repo.find_all().await
    }

    pub async fn create_profil(&self, nom: &str) -> Result<Profil, DomainError> {
        let nom = nom.trim().to_uppercase();
        if nom.is_empty() {
            return Err(DomainError::ValidationError("nom is required".to_string()));
        }
        self.profil_repo.create(&nom).await
    }

    pub async fn delete_profil(&self, id: i64) -> Result<(), DomainError> {
        if self.profil_repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::ProfilNotFound(id));
        }
        self.profil_repo.delete(id).await
    }

    /// Basic field checks plus assigned-profile existence.
    async fn validate(&self, input: &UserInput) -> Result<(), DomainError> {
        if input.username.trim().is_empty() {
            return Err(DomainError::ValidationError("username is required".to_string()));
        }
        if input.nom.trim().is_empty() {
            return Err(DomainError::ValidationError("nom is required".to_string()));
        }
        if !input.email.validate_email() {
            return Err(DomainError::ValidationError(format!(
                "invalid email: {}",
                input.email
            )));
        }
        if !input.profils.is_empty() {
            let catalog = self.profil_repo.find_all().await?;
            for profil in &input.profils {
                if !catalog.iter().any(|p| &p.nom == profil) {
                    return Err(DomainError::ValidationError(format!(
                        "unknown profil: {}",
                        profil
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::profil_repository::MockProfilRepository;
    use crate::repositories::user_repository::MockUserRepository;
    use chrono::Utc;

    fn catalog() -> Vec<Profil> {
        vec![
            Profil { id: 1, nom: "ADMINISTRATEUR".to_string() },
            Profil { id: 2, nom: "COLLABORATEUR".to_string() },
        ]
    }

    fn input() -> UserInput {
        UserInput {
            nom: "Dupont".to_string(),
            prenom: "Jean".to_string(),
            username: "jdupont".to_string(),
            email: "jean.dupont@example.com".to_string(),
            actif: true,
            service_line_id: None,
            profils: vec!["COLLABORATEUR".to_string()],
        }
    }

    fn user_from(new: &NewUser) -> User {
        User {
            id: 1,
            nom: new.nom.clone(),
            prenom: new.prenom.clone(),
            username: new.username.clone(),
            email: new.email.clone(),
            actif: new.actif,
            service_line_id: new.service_line_id,
            profils: new.profils.clone(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_valid_user() {
        let mut user_repo = MockUserRepository::new();
        let mut profil_repo = MockProfilRepository::new();
        profil_repo.expect_find_all().returning(|| Ok(catalog()));
        user_repo.expect_find_by_username().returning(|_| Ok(None));
        user_repo.expect_create().returning(|new| Ok(user_from(new)));
        let service = UserService::new(Arc::new(user_repo), Arc::new(profil_repo));

        let created = service.create(input()).await.unwrap();
        assert_eq!(created.username, "jdupont");
        assert!(created.has_role("COLLABORATEUR"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_email() {
        let service = UserService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockProfilRepository::new()),
        );
        let mut bad = input();
        bad.email = "not-an-email".to_string();
        let err = service.create(bad).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_profil() {
        let mut profil_repo = MockProfilRepository::new();
        profil_repo.expect_find_all().returning(|| Ok(catalog()));
        let service =
            UserService::new(Arc::new(MockUserRepository::new()), Arc::new(profil_repo));

        let mut bad = input();
        bad.profils = vec!["SUPERVISEUR".to_string()];
        let err = service.create(bad).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let mut user_repo = MockUserRepository::new();
        let mut profil_repo = MockProfilRepository::new();
        profil_repo.expect_find_all().returning(|| Ok(catalog()));
        user_repo.expect_find_by_username().returning(|_| {
            let mut existing = user_from(&NewUser {
                nom: "Autre".to_string(),
                prenom: "Marc".to_string(),
                username: "jdupont".to_string(),
                email: "marc@example.com".to_string(),
                actif: true,
                service_line_id: None,
                profils: vec![],
            });
            existing.id = 99;
            Ok(Some(existing))
        });
        let service = UserService::new(Arc::new(user_repo), Arc::new(profil_repo));

        let err = service.create(input()).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_profil_normalizes_name() {
        let mut profil_repo = MockProfilRepository::new();
        profil_repo
            .expect_create()
            .withf(|nom| nom == "DIRECTEUR_GENERAL")
            .returning(|nom| Ok(Profil { id: 3, nom: nom.to_string() }));
        let service =
            UserService::new(Arc::new(MockUserRepository::new()), Arc::new(profil_repo));

        let created = service.create_profil("  directeur_general ").await.unwrap();
        assert_eq!(created.nom, "DIRECTEUR_GENERAL");
    }
}
