use crate::clipper::out_rec::{build_out_recs, measure_loops};
use crate::clipper::poly_tree::PolyTree;
use crate::geometry::point::PathSet;

use super::square;

fn nested_tree() -> PolyTree {
    // island inside hole inside outer, plus a separate outer
    let loops: PathSet = vec![
        square(10, 10, 10),
        square(0, 0, 30),
        square(5, 5, 20),
        square(100, 0, 10),
    ];
    PolyTree::from_out_recs(build_out_recs(measure_loops(loops).unwrap(), false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = PolyTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.roots().count(), 0);
        assert!(tree.into_paths().is_empty());
    }

    #[test]
    fn test_nodes_are_ordered_by_depth() {
        let tree = nested_tree();
        assert_eq!(tree.len(), 4);

        let depths: Vec<usize> = (0..tree.len()).map(|index| tree.depth(index)).collect();
        assert_eq!(depths, vec![0, 0, 1, 2]);

        assert_eq!(tree.node(0).contour(), &square(0, 0, 30));
        assert_eq!(tree.node(1).contour(), &square(100, 0, 10));
    }

    #[test]
    fn test_parent_child_links() {
        let tree = nested_tree();

        assert_eq!(tree.roots().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(tree.children(0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(tree.children(2).collect::<Vec<_>>(), vec![3]);
        assert_eq!(tree.child_count(1), 0);

        assert_eq!(tree.node(2).parent(), Some(0));
        assert_eq!(tree.node(3).parent(), Some(2));
        assert_eq!(tree.node(0).parent(), None);
    }

    #[test]
    fn test_hole_flags_alternate() {
        let tree = nested_tree();
        let holes: Vec<bool> = tree.nodes().iter().map(|node| node.is_hole()).collect();
        assert_eq!(holes, vec![false, false, true, false]);
    }

    #[test]
    fn test_to_paths_keeps_node_order() {
        let tree = nested_tree();
        let paths = tree.to_paths();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths, tree.clone().into_paths());
        assert_eq!(paths[3], square(10, 10, 10));
    }
}
