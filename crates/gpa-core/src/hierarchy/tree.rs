// ============================================================================
// GPA Core - Hierarchy Builder
// File: crates/gpa-core/src/hierarchy/tree.rs
// Description: Rebuild the rooted forest from a flat variable-action list
// ============================================================================

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::VariableAction;
use crate::error::DomainError;

/// One node of the reconstructed forest. `level` is computed during the
/// walk (roots = 1) and does not trust the stored `niveau`.
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyNode {
    #[serde(flatten)]
    pub action: VariableAction,
    pub level: i32,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Total node count of this subtree, self included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::count).sum::<usize>()
    }
}

/// Reconstruct the forest in O(n): one pass to index children by parent
/// id, then a walk from the roots.
///
/// A node whose parent id does not occur in the list is treated as a
/// root, so no record is silently dropped. Cyclic input (a node that is
/// its own ancestor) is unreachable from any root and reported as
/// `CycleDetected` instead of recursing forever.
pub fn build_forest(flat: &[VariableAction]) -> Result<Vec<HierarchyNode>, DomainError> {
    let ids: HashSet<i64> = flat.iter().map(|va| va.id).collect();

    let mut children_by_parent: HashMap<i64, Vec<&VariableAction>> = HashMap::new();
    let mut roots: Vec<&VariableAction> = Vec::new();

    for va in flat {
        match va.va_mere_id {
            Some(parent_id) if ids.contains(&parent_id) && parent_id != va.id => {
                children_by_parent.entry(parent_id).or_default().push(va);
            }
            Some(parent_id) if parent_id == va.id => {
                return Err(DomainError::CycleDetected(va.id));
            }
            _ => roots.push(va),
        }
    }

    sort_siblings(&mut roots);
    for siblings in children_by_parent.values_mut() {
        sort_siblings(siblings);
    }

    let mut visited: HashSet<i64> = HashSet::new();
    let forest: Vec<HierarchyNode> = roots
        .iter()
        .map(|root| build_node(root, 1, &children_by_parent, &mut visited))
        .collect::<Result<_, _>>()?;

    // Any node not reached from a root belongs to a cycle.
    if visited.len() != flat.len() {
        let orphan = flat
            .iter()
            .map(|va| va.id)
            .filter(|id| !visited.contains(id))
            .min()
            .unwrap_or_default();
        return Err(DomainError::CycleDetected(orphan));
    }

    Ok(forest)
}

fn sort_siblings(siblings: &mut [&VariableAction]) {
    siblings.sort_by_key(|va| (va.ordre.unwrap_or(0), va.id));
}

fn build_node(
    va: &VariableAction,
    level: i32,
    children_by_parent: &HashMap<i64, Vec<&VariableAction>>,
    visited: &mut HashSet<i64>,
) -> Result<HierarchyNode, DomainError> {
    if !visited.insert(va.id) {
        return Err(DomainError::CycleDetected(va.id));
    }

    let children = children_by_parent
        .get(&va.id)
        .map(|kids| {
            kids.iter()
                .map(|child| build_node(child, level + 1, children_by_parent, visited))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(HierarchyNode { action: va.clone(), level, children })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn va(id: i64, parent: Option<i64>) -> VariableAction {
        VariableAction {
            id,
            code: None,
            description: format!("VA {}", id),
            poids: 0.0,
            fige: false,
            niveau: 0,
            ordre: Some(id as i32),
            responsable_id: 1,
            plan_action_id: 1,
            va_mere_id: parent,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    fn levels_consistent(node: &HierarchyNode) -> bool {
        node.children
            .iter()
            .all(|c| c.level == node.level + 1 && levels_consistent(c))
    }

    #[test]
    fn test_forest_from_flat_list() {
        // 1 -> {2, 3}, 2 -> {4}
        let flat = vec![va(1, None), va(2, Some(1)), va(3, Some(1)), va(4, Some(2))];
        let forest = build_forest(&flat).unwrap();

        assert_eq!(forest.len(), 1);
        let root = &forest[0];
        assert_eq!(root.action.id, 1);
        assert_eq!(root.level, 1);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].action.id, 2);
        assert_eq!(root.children[0].level, 2);
        assert_eq!(root.children[0].children[0].action.id, 4);
        assert_eq!(root.children[0].children[0].level, 3);
    }

    #[test]
    fn test_node_count_preserved() {
        let flat = vec![
            va(1, None),
            va(2, Some(1)),
            va(3, Some(1)),
            va(4, Some(2)),
            va(5, None),
        ];
        let forest = build_forest(&flat).unwrap();
        let total: usize = forest.iter().map(HierarchyNode::count).sum();
        assert_eq!(total, flat.len());
        assert!(forest.iter().all(levels_consistent));
    }

    #[test]
    fn test_self_cycle_detected() {
        let flat = vec![va(1, Some(1))];
        assert!(matches!(build_forest(&flat), Err(DomainError::CycleDetected(1))));
    }

    #[test]
    fn test_two_node_cycle_detected() {
        let flat = vec![va(1, None), va(2, Some(3)), va(3, Some(2))];
        let err = build_forest(&flat).unwrap_err();
        assert!(matches!(err, DomainError::CycleDetected(2)));
    }

    #[test]
    fn test_dangling_parent_treated_as_root() {
        let flat = vec![va(1, None), va(2, Some(99))];
        let forest = build_forest(&flat).unwrap();
        assert_eq!(forest.len(), 2);
        assert!(forest.iter().all(|n| n.level == 1));
    }

    #[test]
    fn test_siblings_ordered_by_ordre() {
        let mut second = va(2, Some(1));
        second.ordre = Some(9);
        let mut third = va(3, Some(1));
        third.ordre = Some(1);
        let flat = vec![va(1, None), second, third];
        let forest = build_forest(&flat).unwrap();
        let ids: Vec<i64> = forest[0].children.iter().map(|c| c.action.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_input_not_mutated() {
        let flat = vec![va(1, None), va(2, Some(1))];
        let before = flat.clone();
        let _ = build_forest(&flat).unwrap();
        assert_eq!(flat.len(), before.len());
        assert_eq!(flat[1].va_mere_id, before[1].va_mere_id);
    }
}
