// ============================================================================
// GPA Core - Hierarchical Code Generation
// File: crates/gpa-core/src/hierarchy/code.rs
// ============================================================================
//! Codes encode the position of a variable action in its plan's tree:
//! roots are "VA1", "VA2", ...; a child appends its sibling number to the
//! parent's code ("VA1" -> "VA11", "VA12"). The digit count is the level.

use gpa_shared::constants::CODE_PREFIX;

/// Next code under `parent_code` (`None` for a plan root), picking the
/// smallest sibling number not already used.
pub fn next_code(parent_code: Option<&str>, sibling_codes: &[String]) -> String {
    let prefix = parent_code.unwrap_or(CODE_PREFIX);
    let mut used: Vec<u32> = sibling_codes
        .iter()
        .filter_map(|code| code.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .collect();
    used.sort_unstable();

    let mut n = 1;
    for u in used {
        if u == n {
            n += 1;
        } else if u > n {
            break;
        }
    }
    format!("{}{}", prefix, n)
}

/// Level encoded by a code: the number of digits after the prefix
/// ("VA1" = 1, "VA11" = 2). Codes without the prefix count as roots.
pub fn level_from_code(code: &str) -> i32 {
    code.strip_prefix(CODE_PREFIX)
        .map(|digits| digits.len() as i32)
        .filter(|len| *len > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_first_root_code() {
        assert_eq!(next_code(None, &[]), "VA1");
    }

    #[test]
    fn test_smallest_unused_number() {
        assert_eq!(next_code(None, &codes(&["VA1", "VA3"])), "VA2");
        assert_eq!(next_code(None, &codes(&["VA1", "VA2", "VA3"])), "VA4");
    }

    #[test]
    fn test_child_codes_extend_parent() {
        assert_eq!(next_code(Some("VA1"), &[]), "VA11");
        assert_eq!(next_code(Some("VA1"), &codes(&["VA11", "VA12"])), "VA13");
    }

    #[test]
    fn test_foreign_prefixes_ignored() {
        // Siblings of VA2 ignore VA1's children.
        assert_eq!(next_code(Some("VA2"), &codes(&["VA11", "VA21"])), "VA22");
    }

    #[test]
    fn test_level_from_code() {
        assert_eq!(level_from_code("VA1"), 1);
        assert_eq!(level_from_code("VA11"), 2);
        assert_eq!(level_from_code("VA111"), 3);
        assert_eq!(level_from_code("malformed"), 1);
    }
}
