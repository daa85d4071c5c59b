//! End-to-end checks for the locomotion pass: sprint monitoring, movement
//! application through the character controller, and the ownership guard.
//!
//! The systems are registered in `Update` here so every `app.update()` is
//! exactly one simulation tick.

use std::time::Duration;

use approx::assert_relative_eq;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use fireteam::player::components::{
  AnimTargets, LocalOwner, Locomotion, LookState, MovementConfig, Player, SprintMonitor, Stance,
};
use fireteam::player::{locomotion, sprint};

fn test_app() -> App {
  let mut app = App::new();
  app.add_plugins(MinimalPlugins).add_systems(
    Update,
    (sprint::tick_sprint_monitor, locomotion::apply_movement).chain(),
  );
  app
}

fn movement_config() -> MovementConfig {
  MovementConfig {
    crawl_speed: 1.0,
    crouch_speed: 2.0,
    walk_speed: 2.0,
    run_speed: 4.0,
    sprint_speed: 6.0,
  }
}

fn look_state() -> LookState {
  LookState {
    turn: Vec2::ZERO,
    sensitivity: 25.0,
    min_pitch: -55.0,
    max_pitch: 75.0,
  }
}

fn spawn_actor(app: &mut App, owner: bool) -> Entity {
  let entity = app
    .world_mut()
    .spawn((
      Player,
      Transform::default(),
      KinematicCharacterController::default(),
      Locomotion::default(),
      movement_config(),
      look_state(),
      AnimTargets::default(),
    ))
    .id();
  if owner {
    app.world_mut().entity_mut(entity).insert(LocalOwner);
  }
  entity
}

fn tick(app: &mut App) {
  // Keep the tick's delta time nonzero.
  std::thread::sleep(Duration::from_millis(2));
  app.update();
}

#[test]
fn sprint_survives_full_forward_input() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, true);

  {
    let mut entity = app.world_mut().entity_mut(actor);
    let mut locomotion = entity.get_mut::<Locomotion>().unwrap();
    locomotion.move_input = Vec2::new(0.0, 1.0);
    locomotion.sprinting = true;
  }
  app.world_mut().entity_mut(actor).insert(SprintMonitor);

  for _ in 0..10 {
    tick(&mut app);
    assert!(app.world().get::<Locomotion>(actor).unwrap().sprinting);
  }
  assert!(app.world().get::<SprintMonitor>(actor).is_some());
}

#[test]
fn sprint_cancels_within_one_tick_of_lateral_input() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, true);

  {
    let mut entity = app.world_mut().entity_mut(actor);
    let mut locomotion = entity.get_mut::<Locomotion>().unwrap();
    locomotion.move_input = Vec2::new(0.0, 1.0);
    locomotion.sprinting = true;
  }
  app.world_mut().entity_mut(actor).insert(SprintMonitor);

  tick(&mut app);
  assert!(app.world().get::<Locomotion>(actor).unwrap().sprinting);

  app
    .world_mut()
    .get_mut::<Locomotion>(actor)
    .unwrap()
    .move_input = Vec2::new(0.5, 1.0);

  tick(&mut app);
  assert!(!app.world().get::<Locomotion>(actor).unwrap().sprinting);
  assert!(app.world().get::<SprintMonitor>(actor).is_none());
}

#[test]
fn sprint_cancels_when_forward_input_drops() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, true);

  {
    let mut entity = app.world_mut().entity_mut(actor);
    let mut locomotion = entity.get_mut::<Locomotion>().unwrap();
    locomotion.move_input = Vec2::new(0.0, 0.9);
    locomotion.sprinting = true;
  }
  app.world_mut().entity_mut(actor).insert(SprintMonitor);

  tick(&mut app);
  assert!(!app.world().get::<Locomotion>(actor).unwrap().sprinting);
}

#[test]
fn sprint_cancels_when_stance_leaves_standing() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, true);

  {
    let mut entity = app.world_mut().entity_mut(actor);
    let mut locomotion = entity.get_mut::<Locomotion>().unwrap();
    locomotion.move_input = Vec2::new(0.0, 1.0);
    locomotion.sprinting = true;
  }
  app.world_mut().entity_mut(actor).insert(SprintMonitor);

  tick(&mut app);
  assert!(app.world().get::<Locomotion>(actor).unwrap().sprinting);

  app
    .world_mut()
    .get_mut::<Locomotion>(actor)
    .unwrap()
    .stance = Stance::Prone;

  tick(&mut app);
  assert!(!app.world().get::<Locomotion>(actor).unwrap().sprinting);
}

#[test]
fn movement_is_horizontal_and_speed_scaled() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, true);

  app
    .world_mut()
    .get_mut::<Locomotion>(actor)
    .unwrap()
    .move_input = Vec2::new(0.0, 1.0);

  tick(&mut app);
  tick(&mut app);

  let dt = app.world().resource::<Time>().delta_secs();
  let translation = app
    .world()
    .get::<KinematicCharacterController>(actor)
    .unwrap()
    .translation
    .expect("movement should be handed to the controller");

  // Standing, neither walking nor sprinting: run speed, straight ahead
  // along -Z, no vertical component.
  assert_relative_eq!(translation.x, 0.0, epsilon = 1e-5);
  assert_relative_eq!(translation.y, 0.0, epsilon = 1e-5);
  assert_relative_eq!(translation.z, -4.0 * dt, epsilon = 1e-4);
}

#[test]
fn body_faces_accumulated_yaw_only() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, true);

  {
    let mut entity = app.world_mut().entity_mut(actor);
    let mut look = entity.get_mut::<LookState>().unwrap();
    look.turn = Vec2::new(90.0, 30.0);
  }
  app
    .world_mut()
    .get_mut::<Locomotion>(actor)
    .unwrap()
    .move_input = Vec2::new(0.0, 1.0);

  tick(&mut app);
  tick(&mut app);

  let transform = *app.world().get::<Transform>(actor).unwrap();
  let forward = transform.rotation * -Vec3::Z;

  // Yaw 90 degrees turns the body to +X; pitch stays with the camera.
  assert_relative_eq!(forward.x, 1.0, epsilon = 1e-5);
  assert_relative_eq!(forward.y, 0.0, epsilon = 1e-5);
  assert_relative_eq!(forward.z, 0.0, epsilon = 1e-5);

  let translation = app
    .world()
    .get::<KinematicCharacterController>(actor)
    .unwrap()
    .translation
    .unwrap();
  assert!(translation.x > 0.0);
  assert_relative_eq!(translation.y, 0.0, epsilon = 1e-5);
}

#[test]
fn anim_targets_follow_the_speed_table() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, true);

  tick(&mut app);
  assert_eq!(
    app.world().get::<AnimTargets>(actor).unwrap().speed_param,
    0.0
  );

  {
    let mut entity = app.world_mut().entity_mut(actor);
    let mut locomotion = entity.get_mut::<Locomotion>().unwrap();
    locomotion.move_input = Vec2::new(0.0, 1.0);
    locomotion.sprinting = true;
  }

  tick(&mut app);
  let targets = app.world().get::<AnimTargets>(actor).unwrap();
  assert_eq!(targets.speed_param, 3.0);
  assert_eq!(targets.vertical, 1.0);
}

#[test]
fn non_owner_state_is_never_touched() {
  let mut app = test_app();
  let actor = spawn_actor(&mut app, false);

  {
    let mut entity = app.world_mut().entity_mut(actor);
    let mut locomotion = entity.get_mut::<Locomotion>().unwrap();
    // Disqualifying sprint conditions everywhere: lateral input, partial
    // forward. A monitored owner would cancel within one tick.
    locomotion.move_input = Vec2::new(0.5, 0.5);
    locomotion.sprinting = true;
  }
  app.world_mut().entity_mut(actor).insert(SprintMonitor);

  for _ in 0..5 {
    tick(&mut app);
  }

  let locomotion = app.world().get::<Locomotion>(actor).unwrap();
  assert!(locomotion.sprinting, "non-owner sprint flag must be left alone");
  assert!(app.world().get::<SprintMonitor>(actor).is_some());
  assert!(
    app
      .world()
      .get::<KinematicCharacterController>(actor)
      .unwrap()
      .translation
      .is_none(),
    "non-owner must not be moved"
  );
  assert_eq!(
    *app.world().get::<Transform>(actor).unwrap(),
    Transform::default()
  );
}
