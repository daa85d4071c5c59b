use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{
  AnimTargets, LocalOwner, Locomotion, LookState, MovementConfig, Player, SprintMonitor, Stance,
  ToggleLatches,
};
use crate::input::{
  Move, PlayerInput, Sprint, StanceHold, StanceTap, Walk, action_fired, action_held,
};

/// Runs in Update so FixedUpdate always consumes the last sampled value.
pub fn sample_move_input(
  mut players: Query<
    (&Actions<PlayerInput>, &mut Locomotion),
    (With<Player>, With<LocalOwner>),
  >,
  move_actions: Query<(&Action<Move>, &ActionState)>,
) {
  for (actions, mut locomotion) in &mut players {
    for action_entity in actions.iter() {
      if let Ok((action, action_state)) = move_actions.get(action_entity) {
        locomotion.move_input = match action_state {
          ActionState::Fired | ActionState::Ongoing => **action,
          _ => Vec2::ZERO,
        };
      }
    }
  }
}

pub fn handle_walk_toggle(
  mut players: Query<
    (&Actions<PlayerInput>, &mut Locomotion, &mut ToggleLatches),
    (With<Player>, With<LocalOwner>),
  >,
  action_states: Query<&ActionState, With<Action<Walk>>>,
) {
  for (actions, mut locomotion, mut latches) in &mut players {
    let pressed = action_held::<Walk>(actions, &action_states);
    if pressed && !latches.walk {
      locomotion.toggle_walk();
    }
    latches.walk = pressed;
  }
}

pub fn handle_sprint_toggle(
  mut commands: Commands,
  mut players: Query<
    (Entity, &Actions<PlayerInput>, &mut Locomotion, &mut ToggleLatches),
    (With<Player>, With<LocalOwner>),
  >,
  action_states: Query<&ActionState, With<Action<Sprint>>>,
) {
  for (entity, actions, mut locomotion, mut latches) in &mut players {
    let pressed = action_held::<Sprint>(actions, &action_states);
    if pressed && !latches.sprint {
      match locomotion.toggle_sprint() {
        // Inserting replaces any running monitor: at most one per actor.
        Some(true) => {
          commands.entity(entity).insert(SprintMonitor);
        }
        Some(false) => {
          commands.entity(entity).remove::<SprintMonitor>();
        }
        None => {}
      }
    }
    latches.sprint = pressed;
  }
}

pub fn handle_stance_gesture(
  mut commands: Commands,
  mut players: Query<
    (Entity, &Actions<PlayerInput>, &mut Locomotion, &mut ToggleLatches),
    (With<Player>, With<LocalOwner>),
  >,
  tap_states: Query<&ActionState, With<Action<StanceTap>>>,
  hold_states: Query<&ActionState, With<Action<StanceHold>>>,
) {
  for (entity, actions, mut locomotion, mut latches) in &mut players {
    let tap = action_fired::<StanceTap>(actions, &tap_states);
    let hold = action_fired::<StanceHold>(actions, &hold_states);
    let mut gestured = false;

    if tap && !latches.stance_tap {
      locomotion.toggle_crouch();
      gestured = true;
    }
    if hold && !latches.stance_hold {
      locomotion.toggle_prone();
      gestured = true;
    }
    if gestured {
      debug!("Stance -> {:?}", locomotion.stance);
      // Leaving Standing cleared the sprint flag; cancel its monitor too.
      if !locomotion.sprinting {
        commands.entity(entity).remove::<SprintMonitor>();
      }
    }

    latches.stance_tap = tap;
    latches.stance_hold = hold;
  }
}

/// Speed and animation parameter for the current stance and flags. Idle
/// input forces the animation parameter to 0 regardless of the stance row.
pub fn select_speed(locomotion: &Locomotion, config: &MovementConfig) -> (f32, f32) {
  let (speed, anim) = match locomotion.stance {
    Stance::Standing if locomotion.walking => (config.walk_speed, 1.0),
    Stance::Standing if locomotion.sprinting => (config.sprint_speed, 3.0),
    Stance::Standing => (config.run_speed, 2.0),
    Stance::Crouching => (config.crouch_speed, 1.0),
    Stance::Prone => (config.crawl_speed, 1.0),
  };

  if locomotion.move_input == Vec2::ZERO {
    (speed, 0.0)
  } else {
    (speed, anim)
  }
}

/// Runs in FixedUpdate before physics. The body faces the accumulated yaw;
/// pitch is applied by the camera rig alone. The move vector is flattened
/// to the horizontal plane regardless of ground slope and handed to the
/// character controller, which absorbs collision response.
pub fn apply_movement(
  mut players: Query<
    (
      &Locomotion,
      &MovementConfig,
      &LookState,
      &mut Transform,
      &mut KinematicCharacterController,
      &mut AnimTargets,
    ),
    (With<Player>, With<LocalOwner>),
  >,
  time: Res<Time>,
) {
  for (locomotion, config, look, mut transform, mut controller, mut targets) in &mut players {
    transform.rotation = Quat::from_rotation_y(-look.turn.x.to_radians());

    let forward = transform.rotation * -Vec3::Z;
    let right = transform.rotation * Vec3::X;
    let mut movement = forward * locomotion.move_input.y + right * locomotion.move_input.x;
    movement.y = 0.0;

    let (speed, anim_speed) = select_speed(locomotion, config);
    controller.translation = Some(movement * speed * time.delta_secs());

    targets.speed_param = anim_speed;
    targets.horizontal = locomotion.move_input.x;
    targets.vertical = locomotion.move_input.y;
  }
}
