use macroquad::prelude::*;
use nalgebra::Point3;
use oct_tree::Octree;
use oct_viz::{OrbitCamera, TreeNavigator};

const WORLD_SIZE: f32 = 32.0;
const CAPACITY: usize = 4;
const MIN_SIZE: f32 = 1.0;

/// Builds a tree with one densely packed octant and a light sprinkle
/// elsewhere, so the adaptive subdivision is visible: the cluster's corner
/// splits several levels deep while the rest stays coarse.
fn build_clustered_tree() -> Octree<u32> {
    let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), WORLD_SIZE, CAPACITY, MIN_SIZE);
    let mut next_id = 0u32;

    // Dense cluster in the +x+y+z octant: a 4x4 sheet of close points.
    for i in 0..4 {
        for j in 0..4 {
            let x = 5.0 + i as f32 * 0.9;
            let y = 5.5 + j as f32 * 0.9;
            let z = 6.0 + (i + j) as f32 * 0.3;
            assert!(tree.insert(Point3::new(x, y, z), next_id));
            next_id += 1;
        }
    }

    // One lonely point per remaining octant.
    for (x, y, z) in [
        (-9.0, 9.0, 9.0),
        (9.0, -9.0, 9.0),
        (-9.0, -9.0, 9.0),
        (9.0, 9.0, -9.0),
        (-9.0, 9.0, -9.0),
        (9.0, -9.0, -9.0),
        (-9.0, -9.0, -9.0),
    ] {
        assert!(tree.insert(Point3::new(x, y, z), next_id));
        next_id += 1;
    }

    tree
}

#[macroquad::main("Oct-tree Clustered Scene")]
async fn main() {
    println!("Building clustered tree...");
    let tree = build_clustered_tree();
    println!(
        "Tree built: {} entries, {} nodes, depth {}",
        tree.entry_count(),
        tree.node_count(),
        tree.depth()
    );

    let mut camera = OrbitCamera::new(60.0, 0.6, 0.4).with_zoom(4.0, 10.0, 150.0);
    let mut navigator = TreeNavigator::new();

    loop {
        camera.update();
        navigator.update(&tree);

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        navigator.render(&tree, 0.4);

        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(4.0, 0.0, 0.0), RED);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 4.0, 0.0), GREEN);
        draw_line_3d(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 4.0), BLUE);

        set_default_camera();

        draw_text(
            &format!(
                "Oct-tree Clustered Scene - {} entries in {} nodes",
                tree.entry_count(),
                tree.node_count()
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("Tree depth: {}", tree.depth()),
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
