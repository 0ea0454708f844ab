use macroquad::prelude::*;

#[macroquad::main("Oct-tree Visualization")]
async fn main() {
    loop {
        clear_background(BLACK);

        draw_text("Oct-tree Visualization", 20.0, 40.0, 30.0, WHITE);
        draw_text(
            "Run the `clustered` or `scatter` binaries for a scene.",
            20.0,
            70.0,
            20.0,
            GRAY,
        );

        next_frame().await
    }
}
