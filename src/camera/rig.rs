use bevy::prelude::*;

use super::components::{ActiveViewRig, GameCamera, LeanState, RigKind, ViewRig};
use crate::config::ConfigLoaded;
use crate::player::components::{LocalOwner, LookState, Player};

/// Spawns the rendering camera and the two view rigs. The aim rig starts
/// disabled; the aim toggle enables it.
pub fn setup_camera(mut commands: Commands, config: Res<ConfigLoaded>) {
  commands.spawn((
    GameCamera,
    Camera3d::default(),
    Projection::Perspective(PerspectiveProjection {
      fov: config.camera.fov_degrees.to_radians(),
      ..default()
    }),
    Transform::default(),
  ));

  commands.spawn((
    ViewRig::new(RigKind::Follow, ViewRig::PRIORITY_FOLLOW, true),
    Transform::default(),
  ));
  commands.spawn((
    ViewRig::new(RigKind::Aim, ViewRig::PRIORITY_AIM, false),
    Transform::default(),
  ));
}

/// Positions both rigs around the actor from its yaw/pitch and the current
/// lean. The lateral offset is applied identically to the follow and aim
/// viewpoints; only the trailing distance differs.
pub fn place_view_rigs(
  players: Query<(&Transform, &LookState, &LeanState), (With<Player>, With<LocalOwner>)>,
  mut rigs: Query<(&ViewRig, &mut Transform), Without<Player>>,
  config: Res<ConfigLoaded>,
) {
  let Ok((player_transform, look, lean)) = players.single() else {
    return;
  };
  let cam = &config.camera;

  let rotation = Quat::from_euler(
    EulerRot::YXZ,
    -look.turn.x.to_radians(),
    -look.turn.y.to_radians(),
    0.0,
  );
  let pivot = player_transform.translation + Vec3::Y * cam.eye_height;
  // 0 = left shoulder, 1 = right shoulder.
  let lateral = -cam.shoulder_offset + 2.0 * cam.shoulder_offset * lean.current;

  for (rig, mut transform) in &mut rigs {
    let distance = match rig.kind {
      RigKind::Follow => cam.follow_distance,
      RigKind::Aim => cam.aim_distance,
    };
    transform.translation = pivot + rotation * Vec3::new(lateral, cam.rig_height, distance);
    transform.rotation = rotation;
  }
}

/// Selects the rig that drives the camera.
///
/// Selection rules:
/// 1. Highest priority among enabled rigs wins
/// 2. On tie: prefer the currently active rig (hysteresis)
/// 3. On tie with no current: lowest Entity (deterministic)
pub fn select_active_rig(mut active: ResMut<ActiveViewRig>, rigs: Query<(Entity, &ViewRig)>) {
  let current_active = active.entity;

  let best = rigs
    .iter()
    .filter(|(_, rig)| rig.enabled)
    .max_by_key(|(entity, rig)| {
      let is_active = current_active == Some(*entity);
      // Invert entity bits so lower Entity compares higher
      let inverse_entity = !entity.to_bits();
      (rig.priority, is_active, inverse_entity)
    });

  let next = best.map(|(e, _)| e);
  if active.entity != next {
    active.entity = next;
  }
}

/// Copies the active rig's transform onto the rendering camera.
pub fn sync_camera_to_rig(
  active: Res<ActiveViewRig>,
  rigs: Query<&Transform, (With<ViewRig>, Without<GameCamera>)>,
  mut cameras: Query<&mut Transform, With<GameCamera>>,
) {
  let Some(active_entity) = active.entity else {
    return;
  };
  let Ok(rig_transform) = rigs.get(active_entity) else {
    return;
  };
  let Ok(mut camera_transform) = cameras.single_mut() else {
    return;
  };

  *camera_transform = *rig_transform;
}
