//! Route guard: boolean predicate over the caller's role list.

use crate::error::DomainError;

pub fn has_any_role(user_roles: &[String], required: &[&str]) -> bool {
    if required.is_empty() {
        return true;
    }
    required.iter().any(|r| user_roles.iter().any(|u| u == r))
}

/// Guard used by the API layer before role-scoped operations.
pub fn ensure_any_role(user_roles: &[String], required: &[&str]) -> Result<(), DomainError> {
    if has_any_role(user_roles, required) {
        Ok(())
    } else {
        Err(DomainError::Authorization(format!(
            "requires one of: {}",
            required.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(roles: &[&str]) -> Vec<String> {
        roles.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_empty_requirement_passes() {
        assert!(ensure_any_role(&owned(&[]), &[]).is_ok());
    }

    #[test]
    fn test_matching_role_passes() {
        let user = owned(&["COLLABORATEUR", "DIRECTEUR_GENERAL"]);
        assert!(ensure_any_role(&user, &["DIRECTEUR_GENERAL"]).is_ok());
    }

    #[test]
    fn test_missing_role_rejected() {
        let user = owned(&["COLLABORATEUR"]);
        let err = ensure_any_role(&user, &["ADMINISTRATEUR"]).unwrap_err();
        assert!(matches!(err, DomainError::Authorization(_)));
    }
}
