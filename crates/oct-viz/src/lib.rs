//! Shared visualization utilities for oct-tree examples.

use std::hash::{Hash, Hasher};

use macroquad::prelude::*;
use nalgebra::Point3;
use oct_tree::{OctreeNode, OctreeVisitor};

pub mod navigator;
pub use navigator::TreeNavigator;

/// Converts a nalgebra point to a macroquad vector.
pub fn to_vec3(point: Point3<f32>) -> Vec3 {
    vec3(point.x, point.y, point.z)
}

/// Generates a deterministic color from a node's region using hashing.
/// This keeps node colors stable across frames and navigation.
pub fn node_color<T>(node: &OctreeNode<T>) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    let center = node.center();
    center.x.to_bits().hash(&mut hasher);
    center.y.to_bits().hash(&mut hasher);
    center.z.to_bits().hash(&mut hasher);
    node.size().to_bits().hash(&mut hasher);
    let hash = hasher.finish();

    // Extract RGB from hash bytes
    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Ensure colors aren't too dark by adding a minimum brightness
    let r = r.max(60);
    let g = g.max(60);
    let b = b.max(60);

    Color::from_rgba(r, g, b, 255)
}

/// Draws the wireframe bounds of a single node.
pub fn draw_node_bounds<T>(node: &OctreeNode<T>, color: Color) {
    let size = node.size();
    draw_cube_wires(to_vec3(node.center()), vec3(size, size, size), color);
}

/// Draws a marker cube for one stored entry.
pub fn draw_entry_marker(position: Point3<f32>, size: f32, color: Color) {
    draw_cube(to_vec3(position), vec3(size, size, size), None, color);
}

/// Recursively draws a node's subtree: wireframe bounds for every node,
/// markers for every stored entry.
pub fn draw_subtree<T>(node: &OctreeNode<T>, marker_size: f32) {
    draw_node_bounds(node, node_color(node));
    for entry in node.entries() {
        draw_entry_marker(entry.position(), marker_size, WHITE);
    }
    if let Some(children) = node.children() {
        for child in children {
            draw_subtree(child, marker_size);
        }
    }
}

/// Visitor that renders node bounds and entry markers during a tree
/// traversal.
///
/// With `occupied_only` set, untouched leaves are skipped, which keeps
/// sparse trees readable.
pub struct RenderVisitor {
    pub marker_size: f32,
    pub occupied_only: bool,
}

impl RenderVisitor {
    /// Creates a visitor drawing every node, with the given entry marker
    /// size.
    pub fn new(marker_size: f32) -> Self {
        Self {
            marker_size,
            occupied_only: false,
        }
    }

    /// Skips empty, un-subdivided nodes while drawing.
    pub fn occupied_only(mut self) -> Self {
        self.occupied_only = true;
        self
    }
}

impl<T> OctreeVisitor<T> for RenderVisitor {
    fn visit(&mut self, node: &OctreeNode<T>) {
        let skip = self.occupied_only && node.entries().is_empty() && !node.is_subdivided();
        if !skip {
            draw_node_bounds(node, node_color(node));
        }
        for entry in node.entries() {
            draw_entry_marker(entry.position(), self.marker_size, WHITE);
        }
    }
}

/// Simple orbit camera for 3D scene navigation.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    /// Multiplier for scroll wheel zoom
    pub zoom_speed: f32,
    /// Minimum distance from target
    pub min_distance: f32,
    /// Maximum distance from target
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Creates a new orbit camera with the given configuration.
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: vec3(0.0, 0.0, 0.0),
            zoom_speed: 5.0,
            min_distance: 10.0,
            max_distance: 200.0,
        }
    }

    /// Sets the zoom configuration (speed and distance limits).
    pub fn with_zoom(mut self, speed: f32, min: f32, max: f32) -> Self {
        self.zoom_speed = speed;
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Sets the camera target point.
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Updates camera state from user input (mouse drag, scroll, arrow keys).
    pub fn update(&mut self) {
        // Mouse drag for rotation
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        // Clamp pitch to avoid gimbal lock
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        // Mouse wheel for zoom
        let scroll = mouse_wheel().1;
        self.distance -= scroll * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);

        // Arrow keys for rotation
        if is_key_down(KeyCode::Left) {
            self.yaw += 0.02;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= 0.02;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += 0.02;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= 0.02;
        }
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + vec3(x, y, z)
    }

    /// Converts to macroquad's Camera3D for rendering.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            ..Default::default()
        }
    }
}
