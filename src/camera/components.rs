use bevy::prelude::*;

/// Which viewpoint a rig renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigKind {
  Follow,
  Aim,
}

/// A virtual viewpoint. The highest-priority enabled rig drives the real
/// camera, so flipping `enabled` on the aim rig switches viewpoints.
#[derive(Component)]
pub struct ViewRig {
  pub kind: RigKind,
  pub priority: i32,
  pub enabled: bool,
}

impl ViewRig {
  pub const PRIORITY_FOLLOW: i32 = 0;
  pub const PRIORITY_AIM: i32 = 10;

  pub fn new(kind: RigKind, priority: i32, enabled: bool) -> Self {
    Self {
      kind,
      priority,
      enabled,
    }
  }
}

/// Marker for the rendering camera that mirrors the active rig.
#[derive(Component)]
pub struct GameCamera;

/// Tracks which rig currently drives the camera. Updated by
/// `select_active_rig` each frame.
#[derive(Resource, Default)]
pub struct ActiveViewRig {
  pub entity: Option<Entity>,
}

/// Aim viewpoint state for the owning actor; true while the aim action is
/// held.
#[derive(Component, Default)]
pub struct AimState {
  pub active: bool,
}

/// Smoothed lateral lean: 0 = left shoulder, 1 = right shoulder.
#[derive(Component, Debug)]
pub struct LeanState {
  pub current: f32,
}

impl Default for LeanState {
  fn default() -> Self {
    Self { current: 0.5 }
  }
}

/// Bounded-duration lean interpolation task. Inserting a new one replaces
/// (and thereby cancels) any running blend: at most one per actor.
#[derive(Component, Debug)]
pub struct LeanBlend {
  pub from: f32,
  pub target: f32,
  pub elapsed: f32,
  pub duration: f32,
}

impl LeanBlend {
  pub fn new(from: f32, target: f32, duration: f32) -> Self {
    Self {
      from,
      // Clamping is the defined correction for out-of-range requests.
      target: target.clamp(0.0, 1.0),
      elapsed: 0.0,
      duration,
    }
  }

  /// Advances the task by `dt` and returns the new lean value. Once the
  /// duration is reached this returns the target exactly, eliminating
  /// residual interpolation error.
  pub fn advance(&mut self, dt: f32) -> f32 {
    self.elapsed += dt;
    self.sample()
  }

  pub fn finished(&self) -> bool {
    self.elapsed >= self.duration
  }

  fn sample(&self) -> f32 {
    if self.finished() {
      self.target
    } else {
      let t = self.elapsed / self.duration;
      self.from + (self.target - self.from) * t
    }
  }
}
