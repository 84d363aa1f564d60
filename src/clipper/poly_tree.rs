use crate::clipper::out_rec::OutRec;
use crate::geometry::point::{Path, PathSet};

#[derive(Debug, Clone, PartialEq)]
pub struct PolyNode {
    contour: Path,
    is_hole: bool,
    parent: Option<usize>,
    first_child: Option<usize>,
    last_child: Option<usize>,
    next_sibling: Option<usize>,
}

impl PolyNode {
    fn new(contour: Path, is_hole: bool, parent: Option<usize>) -> Self {
        Self {
            contour,
            is_hole,
            parent,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    pub fn contour(&self) -> &Path {
        &self.contour
    }

    pub fn is_hole(&self) -> bool {
        self.is_hole
    }

    /// `None` for top-level contours.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// Nested result contours. Node indices are stable for the tree's lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyTree {
    nodes: Vec<PolyNode>,
    first_root: Option<usize>,
    last_root: Option<usize>,
}

impl PolyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tree shallowest first, keeping trace order within a depth.
    pub fn from_out_recs(recs: Vec<OutRec>) -> Self {
        let mut order: Vec<usize> = (0..recs.len()).collect();
        order.sort_by_key(|&i| (recs[i].depth, recs[i].idx));

        let mut node_of: Vec<Option<usize>> = vec![None; recs.len()];
        let mut tree = PolyTree::new();
        let mut recs: Vec<Option<OutRec>> = recs.into_iter().map(Some).collect();

        for i in order {
            if let Some(rec) = recs[i].take() {
                let parent = rec.first_left.and_then(|j| node_of[j]);
                node_of[i] = Some(tree.add_node(rec.pts, rec.is_hole, parent));
            }
        }

        tree
    }

    fn add_node(&mut self, contour: Path, is_hole: bool, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        self.nodes.push(PolyNode::new(contour, is_hole, parent));

        let prev = match parent {
            Some(parent) => {
                let node = &mut self.nodes[parent];
                let prev = node.last_child.replace(index);
                if node.first_child.is_none() {
                    node.first_child = Some(index);
                }
                prev
            }
            None => {
                let prev = self.last_root.replace(index);
                if self.first_root.is_none() {
                    self.first_root = Some(index);
                }
                prev
            }
        };

        if let Some(prev) = prev {
            self.nodes[prev].next_sibling = Some(index);
        }

        index
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> &PolyNode {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[PolyNode] {
        &self.nodes
    }

    pub fn roots(&self) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.first_root,
        }
    }

    pub fn children(&self, index: usize) -> Siblings<'_> {
        Siblings {
            tree: self,
            next: self.nodes[index].first_child,
        }
    }

    pub fn child_count(&self, index: usize) -> usize {
        self.children(index).count()
    }

    /// Number of enclosing contours.
    pub fn depth(&self, index: usize) -> usize {
        let mut depth = 0;
        let mut current = self.nodes[index].parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes[parent].parent;
        }
        depth
    }

    /// All contours, outers before the holes they contain.
    pub fn to_paths(&self) -> PathSet {
        self.nodes.iter().map(|node| node.contour.clone()).collect()
    }

    pub fn into_paths(self) -> PathSet {
        self.nodes.into_iter().map(|node| node.contour).collect()
    }
}

/// Iterator over the node indices of one sibling list.
pub struct Siblings<'a> {
    tree: &'a PolyTree,
    next: Option<usize>,
}

impl Iterator for Siblings<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.tree.nodes[current].next_sibling;
        Some(current)
    }
}
