// ============================================================================
// GPA Core - Sibling Weight Policy
// File: crates/gpa-core/src/hierarchy/weights.rs
// ============================================================================
//! Sibling weights are fractional shares that must sum to 1.0 within the
//! configured tolerance. Rebalancing splits equally among *unlocked*
//! siblings: a `fige` node keeps its weight and only the remainder is
//! redistributed across the rest.

use gpa_shared::constants::WEIGHT_SUM_TOLERANCE;
use gpa_shared::utils::weights_sum_to_one;

use crate::domain::VariableAction;
use crate::error::DomainError;

/// Redistribute weights in place across one sibling set.
///
/// Locked siblings are left untouched; if every sibling is locked the
/// whole set is left as-is. Fails with `WeightSumInvalid` when the locked
/// weights alone already exceed 1.0.
pub fn rebalance(siblings: &mut [VariableAction]) -> Result<(), DomainError> {
    if siblings.is_empty() {
        return Ok(());
    }

    let locked_sum: f64 = siblings.iter().filter(|va| va.fige).map(|va| va.poids).sum();
    let unlocked = siblings.iter().filter(|va| !va.fige).count();

    if unlocked == 0 {
        return Ok(());
    }
    if locked_sum > 1.0 + WEIGHT_SUM_TOLERANCE {
        return Err(DomainError::WeightSumInvalid { sum: locked_sum });
    }

    let share = (1.0 - locked_sum).max(0.0) / unlocked as f64;
    for va in siblings.iter_mut().filter(|va| !va.fige) {
        va.poids = share;
    }

    Ok(())
}

/// Check that one sibling set's weights sum to 1.0 within tolerance.
pub fn check_sum(siblings: &[VariableAction]) -> Result<(), DomainError> {
    if siblings.is_empty() {
        return Ok(());
    }
    let sum: f64 = siblings.iter().map(|va| va.poids).sum();
    if !weights_sum_to_one(sum) {
        return Err(DomainError::WeightSumInvalid { sum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn va(id: i64, poids: f64, fige: bool) -> VariableAction {
        VariableAction {
            id,
            code: None,
            description: format!("VA {}", id),
            poids,
            fige,
            niveau: 1,
            ordre: None,
            responsable_id: 1,
            plan_action_id: 1,
            va_mere_id: None,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_equal_split_three_unlocked() {
        let mut siblings = vec![va(1, 0.0, false), va(2, 0.0, false), va(3, 0.0, false)];
        rebalance(&mut siblings).unwrap();
        for s in &siblings {
            assert!((s.poids - 1.0 / 3.0).abs() < 1e-9);
        }
        assert!(check_sum(&siblings).is_ok());
    }

    #[test]
    fn test_locked_sibling_keeps_weight() {
        let mut siblings = vec![va(1, 0.4, true), va(2, 0.1, false), va(3, 0.5, false)];
        rebalance(&mut siblings).unwrap();
        assert_eq!(siblings[0].poids, 0.4);
        assert!((siblings[1].poids - 0.3).abs() < 1e-9);
        assert!((siblings[2].poids - 0.3).abs() < 1e-9);
        assert!(check_sum(&siblings).is_ok());
    }

    #[test]
    fn test_all_locked_untouched() {
        let mut siblings = vec![va(1, 0.6, true), va(2, 0.4, true)];
        rebalance(&mut siblings).unwrap();
        assert_eq!(siblings[0].poids, 0.6);
        assert_eq!(siblings[1].poids, 0.4);
    }

    #[test]
    fn test_locked_overflow_rejected() {
        let mut siblings = vec![va(1, 0.8, true), va(2, 0.7, true), va(3, 0.0, false)];
        let err = rebalance(&mut siblings).unwrap_err();
        assert!(matches!(err, DomainError::WeightSumInvalid { .. }));
    }

    #[test]
    fn test_check_sum_tolerance() {
        let siblings = vec![va(1, 0.33, false), va(2, 0.33, false), va(3, 0.335, false)];
        assert!(check_sum(&siblings).is_ok());
        let bad = vec![va(1, 0.5, false), va(2, 0.3, false)];
        assert!(check_sum(&bad).is_err());
    }
}
