//! Service line and profil DTOs

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ServiceLineRequest {
    #[validate(length(min = 1, message = "nom is required"))]
    pub nom: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProfilRequest {
    #[validate(length(min = 1, message = "nom is required"))]
    pub nom: String,
}
