use macroquad::prelude::*;
use nalgebra::Point3;
use oct_tree::Octree;
use oct_viz::{OrbitCamera, RenderVisitor, TreeNavigator};

const NUM_POINTS: usize = 256;
const WORLD_SIZE: f32 = 32.0;
const CAPACITY: usize = 8;
const MIN_SIZE: f32 = 1.0;
// Scatter range deliberately exceeds the indexed region so some inserts
// land out of bounds and get rejected.
const SCATTER_RANGE: f32 = 40.0;

/// Simple seeded random number generator (LCG).
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.state >> 33) as f32) / (u32::MAX as f32 / 2.0)
    }
}

/// Scatters seeded points over a range wider than the tree's bounds and
/// returns the tree plus the number of rejected inserts.
fn build_scattered_tree(seed: u64) -> (Octree<u32>, usize) {
    let mut rng = Rng::new(seed);
    let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), WORLD_SIZE, CAPACITY, MIN_SIZE);
    let mut rejected = 0;

    for id in 0..NUM_POINTS as u32 {
        let x = (rng.next_f32() - 0.5) * SCATTER_RANGE;
        let y = (rng.next_f32() - 0.5) * SCATTER_RANGE;
        let z = (rng.next_f32() - 0.5) * SCATTER_RANGE;

        if !tree.insert(Point3::new(x, y, z), id) {
            rejected += 1;
        }
    }

    (tree, rejected)
}

#[macroquad::main("Oct-tree Scatter Scene")]
async fn main() {
    println!("Scattering {} points...", NUM_POINTS);
    let (tree, rejected) = build_scattered_tree(1234);
    println!(
        "Tree built: {} accepted, {} rejected (out of bounds), {} nodes, depth {}",
        tree.entry_count(),
        rejected,
        tree.node_count(),
        tree.depth()
    );

    let mut camera = OrbitCamera::new(70.0, 0.4, 0.4).with_zoom(4.0, 10.0, 150.0);
    let mut navigator = TreeNavigator::new();
    let mut show_all = true;

    loop {
        camera.update();
        navigator.update(&tree);
        if is_key_pressed(KeyCode::Space) {
            show_all = !show_all;
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        if show_all {
            let mut visitor = RenderVisitor::new(0.4).occupied_only();
            tree.traverse(&mut visitor);
        } else {
            navigator.render(&tree, 0.4);
        }

        set_default_camera();

        draw_text(
            &format!(
                "Oct-tree Scatter Scene - {} entries in {} nodes ({} rejected)",
                tree.entry_count(),
                tree.node_count(),
                rejected
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!(
                "Tree depth: {} | [Space] {} view",
                tree.depth(),
                if show_all { "subtree" } else { "whole-tree" }
            ),
            10.0,
            45.0,
            18.0,
            GRAY,
        );

        navigator.draw_ui(&tree, 70.0);

        draw_text(
            "Drag mouse to rotate, scroll to zoom",
            10.0,
            155.0,
            16.0,
            DARKGRAY,
        );
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 175.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
