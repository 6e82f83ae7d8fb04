//! Utility functions

/// Compare two weight sums within the configured tolerance.
pub fn weights_sum_to_one(sum: f64) -> bool {
    (sum - 1.0).abs() <= super::constants::WEIGHT_SUM_TOLERANCE
}

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        if local.len() <= 2 {
            format!("{}***{}", &local[..1], domain)
        } else {
            format!("{}***{}", &local[..2], domain)
        }
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_tolerance() {
        assert!(weights_sum_to_one(1.0));
        assert!(weights_sum_to_one(0.995));
        assert!(!weights_sum_to_one(0.9));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jean.dupont@example.com"), "je***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
