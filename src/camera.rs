use bevy::camera::ScalingMode;
use bevy::prelude::*;

/// The original widget laid the forest out in a 900x500 design space with a
/// top-left origin and y pointing down. All node positions are authored in
/// that space; `layout_to_world` maps them into the centred, y-up world.
pub const LAYOUT_WIDTH: f32 = 900.0;
pub const LAYOUT_HEIGHT: f32 = 500.0;

/// Margin kept visible around the layout, as a fraction of its size
const VIEW_MARGIN: f32 = 0.08;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Map a layout-space position to world space
pub fn layout_to_world(x: f32, y: f32) -> Vec3 {
    Vec3::new(x - LAYOUT_WIDTH * 0.5, LAYOUT_HEIGHT * 0.5 - y, 0.0)
}

/// Orthographic 2D camera that always keeps the whole forest in view,
/// whatever the window aspect ratio.
fn setup_camera(mut commands: Commands) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::AutoMin {
            min_width: LAYOUT_WIDTH * (1.0 + VIEW_MARGIN),
            min_height: LAYOUT_HEIGHT * (1.0 + VIEW_MARGIN),
        },
        ..OrthographicProjection::default_2d()
    });

    commands.spawn((Camera2d, projection, MainCamera));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_to_world_centres_the_board() {
        let centre = layout_to_world(LAYOUT_WIDTH * 0.5, LAYOUT_HEIGHT * 0.5);
        assert_eq!(centre, Vec3::ZERO);
    }

    #[test]
    fn test_layout_to_world_flips_y() {
        // Top-left of the layout is up-left in world space
        let corner = layout_to_world(0.0, 0.0);
        assert!(corner.x < 0.0);
        assert!(corner.y > 0.0);
    }
}
