//! Placeholder game view: a flat-coloured pyramid spinning in front of a
//! perspective camera until there is something real to show.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::domain::shell::Screen;

pub const FOV_DEGREES: f32 = 60.0;
pub const CAMERA_DISTANCE: f32 = 5.0;
/// Spin rate in degrees per millisecond of elapsed app time.
pub const DEGREES_PER_MS: f32 = 0.05;
pub const PYRAMID_COLOR: (f32, f32, f32) = (0.8, 0.8, 0.2);

/// Four side faces, apex first in each triangle. The base is left open.
pub const PYRAMID_VERTICES: [[f32; 3]; 12] = [
    [0.0, 1.0, 0.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [0.0, 1.0, 0.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [0.0, 1.0, 0.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [0.0, 1.0, 0.0],
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

#[derive(Component)]
pub struct Spinner;

pub fn pyramid_mesh() -> Mesh {
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, PYRAMID_VERTICES.to_vec())
    .with_computed_flat_normals()
}

pub fn spin_angle(elapsed_seconds: f32) -> f32 {
    (elapsed_seconds * 1000.0 * DEGREES_PER_MS).to_radians()
}

pub fn spawn_game_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3dBundle {
            projection: Projection::Perspective(PerspectiveProjection {
                fov: FOV_DEGREES.to_radians(),
                near: 0.1,
                far: 100.0,
                ..default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE)
                .looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        StateScoped(Screen::InGame),
    ));

    let (r, g, b) = PYRAMID_COLOR;
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(pyramid_mesh()),
            material: materials.add(StandardMaterial {
                base_color: Color::srgb(r, g, b),
                unlit: true,
                cull_mode: None,
                double_sided: true,
                ..default()
            }),
            ..default()
        },
        Spinner,
        StateScoped(Screen::InGame),
    ));
}

pub fn spin_placeholder(time: Res<Time>, mut q: Query<&mut Transform, With<Spinner>>) {
    let angle = spin_angle(time.elapsed_seconds());
    for mut t in &mut q {
        t.rotation = Quat::from_rotation_y(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pyramid_has_four_open_faces() {
        let mesh = pyramid_mesh();
        assert_eq!(mesh.count_vertices(), 12);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());

        let apexes = PYRAMID_VERTICES
            .iter()
            .step_by(3)
            .filter(|v| **v == [0.0, 1.0, 0.0])
            .count();
        assert_eq!(apexes, 4);
    }

    #[test]
    fn spins_fifty_degrees_per_second() {
        assert_eq!(spin_angle(0.0), 0.0);
        assert!((spin_angle(1.0) - 50f32.to_radians()).abs() < 1e-5);
        assert!((spin_angle(7.2) - std::f32::consts::TAU).abs() < 1e-4);
    }
}
