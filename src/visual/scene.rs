use bevy::prelude::*;

use crate::{
    camera::layout_to_world,
    game::session::FireSession,
    visual::nodes::{MOUNTAIN_GREEN, Mountain, TANK_YELLOW, TankMarker},
    visual::roads::{ROAD_BURNING, Road},
};

/// Mountain triangle half-width in layout units
pub const MOUNTAIN_RADIUS: f32 = 26.0;

/// Tank overlay radius
const TANK_RADIUS: f32 = 10.0;

/// Road line thickness
const ROAD_WIDTH: f32 = 4.0;

/// System: create the session resource
pub fn setup_session(mut commands: Commands) {
    let session = FireSession::new();
    let map = session.map();

    info!(
        "Forest map loaded: {} mountains, {} road entries ({} distinct roads)",
        map.node_ids().count(),
        map.edges().len(),
        map.distinct_road_count()
    );
    info!(
        "Minimum cover for this map: {} tanks",
        session.progress().minimum_tank_count
    );

    commands.insert_resource(session);
}

/// System: spawn one entity per road and per mountain.
/// Every road and every mountain gets its own ColorMaterial so the update
/// systems can recolor them independently.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    session: Res<FireSession>,
) {
    let map = session.map();

    // Unit rectangle, stretched per road by the transform scale
    let road_mesh = meshes.add(Rectangle::new(1.0, 1.0));

    for &edge in map.edges() {
        let (from, to) = edge.endpoints();
        let (ax, ay) = map.position(from);
        let (bx, by) = map.position(to);
        let a = layout_to_world(ax, ay);
        let b = layout_to_world(bx, by);

        let midpoint = (a + b) * 0.5;
        let delta = b - a;
        let length = delta.length();
        let angle = delta.y.atan2(delta.x);

        commands.spawn((
            Road { edge },
            Mesh2d(road_mesh.clone()),
            MeshMaterial2d(materials.add(ROAD_BURNING)),
            Transform {
                translation: midpoint.with_z(0.0),
                rotation: Quat::from_rotation_z(angle),
                scale: Vec3::new(length, ROAD_WIDTH, 1.0),
            },
        ));
    }

    let mountain_mesh = meshes.add(Triangle2d::new(
        Vec2::new(-MOUNTAIN_RADIUS, -MOUNTAIN_RADIUS * 0.8),
        Vec2::new(MOUNTAIN_RADIUS, -MOUNTAIN_RADIUS * 0.8),
        Vec2::new(0.0, MOUNTAIN_RADIUS),
    ));
    let tank_mesh = meshes.add(Circle::new(TANK_RADIUS));

    for node in map.node_ids() {
        let (x, y) = map.position(node);
        let position = layout_to_world(x, y).with_z(1.0);

        commands
            .spawn((
                Mountain { id: node },
                Mesh2d(mountain_mesh.clone()),
                MeshMaterial2d(materials.add(MOUNTAIN_GREEN)),
                Transform::from_translation(position),
            ))
            .with_children(|parent| {
                // Tank overlay, top-right of the peak, hidden until placed
                parent.spawn((
                    TankMarker { id: node },
                    Mesh2d(tank_mesh.clone()),
                    MeshMaterial2d(materials.add(TANK_YELLOW)),
                    Transform::from_xyz(MOUNTAIN_RADIUS * 0.65, MOUNTAIN_RADIUS * 0.65, 0.5),
                    Visibility::Hidden,
                ));

                // Id label under the mountain
                parent.spawn((
                    Text2d::new(node.to_string()),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, -MOUNTAIN_RADIUS - 14.0, 0.5),
                ));
            });
    }

    info!("Scene spawned: board is burning, place your tanks");
}
