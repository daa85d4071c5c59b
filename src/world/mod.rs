//! Static arena the actor moves around in: a ground slab and a sun light.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::ConfigLoaded;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, spawn_world);
  }
}

fn spawn_world(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  config: Res<ConfigLoaded>,
) {
  let ground = &config.ground;

  // Rapier cuboid uses half-extents
  commands.spawn((
    Mesh3d(meshes.add(Plane3d::default().mesh().size(ground.size, ground.size))),
    MeshMaterial3d(materials.add(Color::srgb(
      ground.color[0],
      ground.color[1],
      ground.color[2],
    ))),
    Transform::default(),
    RigidBody::Fixed,
    Collider::cuboid(ground.size / 2.0, 0.1, ground.size / 2.0),
  ));

  commands.spawn((
    DirectionalLight {
      illuminance: 10_000.0,
      shadows_enabled: true,
      ..default()
    },
    Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
  ));
}
