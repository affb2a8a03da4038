use crate::{Id, Node};

/// Assign ids to every node that still carries `Id(0)`, depth-first.
///
/// Already-assigned nodes keep their ids, so this is safe to re-run after
/// new subtrees are spliced in (though injected subtrees normally go through
/// [`crate::build::IdAllocator`] instead).
pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        if node.id() == Id(0) {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = max_assigned_id(root).wrapping_add(1).max(1);
    walk(root, &mut next);
}

/// Highest id currently assigned anywhere in the tree (0 if none).
pub fn max_assigned_id(root: &Node) -> u32 {
    fn walk(node: &Node, max: &mut u32) {
        *max = (*max).max(node.id().0);
        if let Some(children) = node.children() {
            for c in children {
                walk(c, max);
            }
        }
    }

    let mut max = 0;
    walk(root, &mut max);
    max
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children() {
        for c in children {
            if let Some(found) = find_node_by_id(c, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    if let Some(children) = node.children_mut() {
        for c in children {
            if let Some(found) = find_node_by_id_mut(c, id) {
                return Some(found);
            }
        }
    }
    None
}
