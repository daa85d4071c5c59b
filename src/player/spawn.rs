use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{
  AnimBlend, AnimTargets, LocalOwner, Locomotion, LookState, MovementConfig, Player, ToggleLatches,
};
use crate::camera::{AimState, LeanState};
use crate::config::ConfigLoaded;
use crate::input::{PlayerInput, player_input_actions};

/// Spawns the locally-owned actor with its physics body and input context.
/// Remote actors are spawned by the replication layer and never carry
/// `LocalOwner`, so none of the simulation systems touch them.
pub fn spawn_player(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  config: Res<ConfigLoaded>,
) {
  let player = &config.player;
  let look = &config.look;
  let spawn_pos = Vec3::new(player.spawn_x, player.spawn_y, player.spawn_z);

  info!("Spawning player at {:?}", spawn_pos);

  commands
    .spawn((
      (
        Player,
        LocalOwner,
        Transform::from_translation(spawn_pos),
        Visibility::default(),
      ),
      (
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(player.collider_height / 2.0, player.collider_radius),
        KinematicCharacterController::default(),
      ),
      (
        Locomotion::default(),
        MovementConfig {
          crawl_speed: player.crawl_speed,
          crouch_speed: player.crouch_speed,
          walk_speed: player.walk_speed,
          run_speed: player.run_speed,
          sprint_speed: player.sprint_speed,
        },
        LookState {
          turn: Vec2::ZERO,
          sensitivity: look.normal_sensitivity,
          min_pitch: look.min_pitch,
          max_pitch: look.max_pitch,
        },
        ToggleLatches::default(),
      ),
      (AnimTargets::default(), AnimBlend::default()),
      (AimState::default(), LeanState::default()),
      (PlayerInput, player_input_actions()),
    ))
    // Placeholder body until the animated character comes in; inherits the
    // actor's transform, so it turns with the accumulated yaw.
    .with_child((
      Mesh3d(meshes.add(Capsule3d::new(player.collider_radius, player.collider_height))),
      MeshMaterial3d(materials.add(Color::srgb(
        player.body_color[0],
        player.body_color[1],
        player.body_color[2],
      ))),
      Transform::default(),
    ));
}
