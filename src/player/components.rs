use bevy::prelude::*;

#[derive(Component)]
pub struct Player;

/// Authority marker: present only on actors simulated by this machine.
///
/// Every mutating system filters on it, so the ownership check lives in one
/// place per system and non-owning actors never match a query.
#[derive(Component)]
pub struct LocalOwner;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
  #[default]
  Standing,
  Crouching,
  Prone,
}

/// Mutable locomotion state, owned by the locomotion systems of the owning
/// machine.
///
/// `walking` and `sprinting` are meaningful only while Standing and are
/// never both true; the toggle methods below keep that so.
#[derive(Component, Default, Debug)]
pub struct Locomotion {
  pub stance: Stance,
  pub walking: bool,
  pub sprinting: bool,
  /// Last sampled move vector, each axis in [-1, 1]. `y` is forward,
  /// `x` is lateral.
  pub move_input: Vec2,
}

impl Locomotion {
  /// Walk toggle: Standing-only; clears sprint, flips walk.
  pub fn toggle_walk(&mut self) {
    if self.stance != Stance::Standing {
      return;
    }
    self.sprinting = false;
    self.walking = !self.walking;
  }

  /// Sprint toggle: Standing-only; clears walk, flips sprint. Returns the
  /// new sprint state, or `None` when the toggle does not apply.
  pub fn toggle_sprint(&mut self) -> Option<bool> {
    if self.stance != Stance::Standing {
      return None;
    }
    self.walking = false;
    self.sprinting = !self.sprinting;
    Some(self.sprinting)
  }

  /// Moves directly to `next`. Leaving Standing clears walk/sprint in the
  /// same step so the flags never contradict the stance.
  pub fn set_stance(&mut self, next: Stance) {
    self.stance = next;
    if next != Stance::Standing {
      self.walking = false;
      self.sprinting = false;
    }
  }

  /// Short press on the stance key: Crouching toggles back to Standing,
  /// any other stance goes to Crouching.
  pub fn toggle_crouch(&mut self) {
    let next = if self.stance == Stance::Crouching {
      Stance::Standing
    } else {
      Stance::Crouching
    };
    self.set_stance(next);
  }

  /// Sustained hold on the stance key: Prone toggles back to Standing,
  /// any other stance goes to Prone.
  pub fn toggle_prone(&mut self) {
    let next = if self.stance == Stance::Prone {
      Stance::Standing
    } else {
      Stance::Prone
    };
    self.set_stance(next);
  }
}

#[derive(Component)]
pub struct MovementConfig {
  pub crawl_speed: f32,
  pub crouch_speed: f32,
  pub walk_speed: f32,
  pub run_speed: f32,
  pub sprint_speed: f32,
}

/// Accumulated look rotation and the sensitivity it is scaled by.
#[derive(Component, Debug)]
pub struct LookState {
  /// Accumulated (yaw, pitch) in degrees. Yaw is unbounded and wraps when
  /// converted to a rotation; pitch is clamped every update.
  pub turn: Vec2,
  pub sensitivity: f32,
  pub min_pitch: f32,
  pub max_pitch: f32,
}

impl LookState {
  /// Accumulates a scaled look delta. Pitch uses the inverted convention
  /// (positive raw y looks down) and is clamped to the configured range.
  pub fn integrate(&mut self, delta: Vec2, dt: f32) {
    let scaled = delta * dt * self.sensitivity;
    self.turn.x += scaled.x;
    self.turn.y = (self.turn.y - scaled.y).clamp(self.min_pitch, self.max_pitch);
  }

  /// Replaces the look sensitivity. Called by the owning actor's camera
  /// controller when aiming starts or ends.
  pub fn set_sensitivity(&mut self, value: f32) {
    self.sensitivity = value;
  }
}

/// Live sprint-cancellation task. Inserting replaces any running monitor,
/// removal cancels it; despawning the actor cancels it with everything else.
#[derive(Component)]
pub struct SprintMonitor;

/// Previous-frame action states for the edge-triggered toggles.
#[derive(Component, Default)]
pub struct ToggleLatches {
  pub walk: bool,
  pub sprint: bool,
  pub stance_tap: bool,
  pub stance_hold: bool,
}

/// Raw per-tick presentation targets written by the locomotion pass.
#[derive(Component, Default)]
pub struct AnimTargets {
  /// 0 = idle, 1 = walk/crouch/prone, 2 = run, 3 = sprint.
  pub speed_param: f32,
  pub horizontal: f32,
  pub vertical: f32,
}

/// Smoothed blend values handed to the animation layer.
#[derive(Component, Default)]
pub struct AnimBlend {
  pub speed: f32,
  pub horizontal: f32,
  pub vertical: f32,
}
