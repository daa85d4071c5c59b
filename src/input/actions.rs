use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

#[derive(Debug, InputAction)]
#[action_output(Vec2)]
pub struct Move;

#[derive(Debug, InputAction)]
#[action_output(Vec2)]
pub struct Look;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Walk;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Sprint;

/// Short press on the stance key.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct StanceTap;

/// Sustained hold on the stance key.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct StanceHold;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Aim;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct LeanLeft;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct LeanRight;
