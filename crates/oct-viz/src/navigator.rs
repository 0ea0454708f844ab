//! Oct-tree navigation utilities for interactive visualization.

use macroquad::prelude::*;
use oct_tree::{Octant, Octree, OctreeNode};

use crate::draw_subtree;

/// Interactive oct-tree navigator for exploring tree structure.
///
/// The navigator keeps a path of octants from the root; keys 1–8 descend
/// into the corresponding child (canonical octant order), P goes back up,
/// R returns to the root.
pub struct TreeNavigator {
    path: Vec<Octant>,
}

impl Default for TreeNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeNavigator {
    /// Creates a new navigator starting at the root.
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Returns the current navigation path.
    pub fn path(&self) -> &[Octant] {
        &self.path
    }

    /// Returns the current depth in the tree.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Attempts to descend into the given octant. Returns true if the
    /// current node has children.
    pub fn descend<T>(&mut self, tree: &Octree<T>, octant: Octant) -> bool {
        if let Some(node) = self.current_node(tree) {
            if node.is_subdivided() {
                self.path.push(octant);
                return true;
            }
        }
        false
    }

    /// Navigates to the parent node. Returns true if not already at root.
    pub fn go_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Returns to the root node.
    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Handles keyboard input for navigation.
    /// Returns true if navigation state changed.
    pub fn update<T>(&mut self, tree: &Octree<T>) -> bool {
        let mut changed = false;

        const OCTANT_KEYS: [KeyCode; 8] = [
            KeyCode::Key1,
            KeyCode::Key2,
            KeyCode::Key3,
            KeyCode::Key4,
            KeyCode::Key5,
            KeyCode::Key6,
            KeyCode::Key7,
            KeyCode::Key8,
        ];
        for (key, octant) in OCTANT_KEYS.iter().zip(Octant::ALL) {
            if is_key_pressed(*key) {
                changed = self.descend(tree, octant);
            }
        }

        if is_key_pressed(KeyCode::P) {
            changed = self.go_parent();
        }
        if is_key_pressed(KeyCode::R) {
            if !self.path.is_empty() {
                self.go_root();
                changed = true;
            }
        }

        changed
    }

    /// Returns a reference to the current node, if the path is valid.
    pub fn current_node<'a, T>(&self, tree: &'a Octree<T>) -> Option<&'a OctreeNode<T>> {
        let mut current = tree.root();
        for octant in &self.path {
            current = current.child(*octant)?;
        }
        Some(current)
    }

    /// Renders only the current subtree.
    pub fn render<T>(&self, tree: &Octree<T>, marker_size: f32) {
        if let Some(node) = self.current_node(tree) {
            draw_subtree(node, marker_size);
        }
    }

    /// Draws the navigation UI overlay.
    pub fn draw_ui<T>(&self, tree: &Octree<T>, y_offset: f32) {
        let (direct, subtree, is_subdivided) = if let Some(node) = self.current_node(tree) {
            (node.entries().len(), node.entry_count(), node.is_subdivided())
        } else {
            (0, 0, false)
        };

        // Build path string
        let path_str = if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path
                .iter()
                .map(|o| o.abbreviation())
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        draw_text(
            &format!("Subtree: {} entries ({} direct)", subtree, direct),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            &format!("Path: {} (depth {})", path_str, self.path.len()),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text(
            if is_subdivided {
                "[1-8] descend into octant (FNE FNW FSE FSW BNE BNW BSE BSW)"
            } else {
                "(leaf)"
            },
            10.0,
            y_offset + 40.0,
            18.0,
            if is_subdivided { GREEN } else { ORANGE },
        );
        draw_text("[P]arent | [R]oot", 10.0, y_offset + 60.0, 16.0, DARKGRAY);
    }
}
