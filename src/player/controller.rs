//! Player domain: the frame-stepped character controller.
//!
//! One `update` per simulation tick, in this order: spawn and death gates,
//! buffer countdown, landing re-check, input, the locomotion ladder, the dash
//! override, dash cooldown, and last the velocity write into the body.
//! Contact callbacks arrive between updates and only touch counters and flags.

use bevy::prelude::*;

use crate::player::body::{EffectKind, EffectRequest, PlayerBody, SensorShape, WorldHooks};
use crate::player::contacts::{ContactRef, ContactTag, ContactTracker, TerrainKind, WallSide};
use crate::player::input::{PlayerInput, TimedBuffer};
use crate::player::state::{Locomotion, LocomotionFacts, PlayerState, evaluate_locomotion};
use crate::player::{DrawState, Facing, PlayerTuning};

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    tuning: PlayerTuning,
    state: PlayerState,
    state_time: f32,
    spawn_timer: f32,
    facing: Facing,
    velocity: Vec2,
    gravity_scale: f32,
    contacts: ContactTracker,
    /// Latched on ground-begin, cleared by jumping or by the ground counter
    /// reaching zero.
    grounded: bool,

    on_wall: bool,
    on_wall_timer: f32,

    jump_buffer: TimedBuffer,
    wall_jump_buffer: TimedBuffer,
    queued_jump: bool,
    /// Variable-height window is open while this is set and jump is held.
    jump_rising: bool,
    jump_time: f32,

    attacking: bool,
    attack_timer: f32,
    hitbox: Option<Entity>,

    dashing: bool,
    can_dash: bool,
    dash_cooldown_timer: f32,
    dash_anim_timer: f32,
    dash_direction: Facing,

    cleared: bool,
}

impl PlayerController {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            tuning,
            state: PlayerState::Spawn,
            state_time: 0.0,
            spawn_timer: 0.0,
            facing: Facing::Right,
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            contacts: ContactTracker::default(),
            grounded: false,
            on_wall: false,
            on_wall_timer: 0.0,
            jump_buffer: TimedBuffer::default(),
            wall_jump_buffer: TimedBuffer::default(),
            queued_jump: false,
            jump_rising: false,
            jump_time: 0.0,
            attacking: false,
            attack_timer: 0.0,
            hitbox: None,
            dashing: false,
            can_dash: true,
            dash_cooldown_timer: 0.0,
            dash_anim_timer: 0.0,
            dash_direction: Facing::Right,
            cleared: false,
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        input: &PlayerInput,
        body: &mut impl PlayerBody,
        hooks: &mut impl WorldHooks,
    ) {
        self.state_time += dt;

        if self.state == PlayerState::Spawn {
            self.spawn_timer += dt;
            if self.spawn_timer <= self.tuning.spawn_duration {
                return;
            }
            self.set_state(PlayerState::Idle);
        }

        match self.state {
            PlayerState::Dead => {
                self.hold_still(body, 0.0);
                return;
            }
            PlayerState::Cleared if self.cleared => {
                self.hold_still(body, 1.0);
                return;
            }
            PlayerState::Cleared => self.set_state(PlayerState::Idle),
            _ => {}
        }

        self.jump_buffer.tick(dt);
        self.wall_jump_buffer.tick(dt);
        self.settle_on_ground(body);

        self.handle_input(dt, input, body, hooks);
        if self.state == PlayerState::Cleared {
            return;
        }

        self.gravity_scale = 1.0;

        if self.attacking {
            self.attack_timer += dt;
            self.set_state(PlayerState::Attack);
            if self.attack_timer > self.tuning.attack_duration {
                self.end_attack(body);
                debug!("Attack finished");
            }
        } else {
            self.evaluate_ladder(dt, input);
            if self.dashing {
                self.apply_dash(dt);
            }
        }

        self.tick_dash_cooldown(dt);

        body.set_gravity_scale(self.gravity_scale);
        body.set_velocity(self.velocity);
    }

    fn handle_input(
        &mut self,
        dt: f32,
        input: &PlayerInput,
        body: &mut impl PlayerBody,
        hooks: &mut impl WorldHooks,
    ) {
        self.velocity = Vec2::new(0.0, body.velocity().y);

        match input.horizontal() {
            Some(direction) => self.move_horizontal(direction),
            None => self.velocity.x = 0.0,
        }

        if self.on_wall {
            self.velocity.y = input.vertical() * self.tuning.climb_speed();
        }

        if input.jump_just_pressed || self.queued_jump {
            self.queued_jump = false;
            self.jump();
        }

        if input.jump_held && self.jump_rising {
            self.control_jump_height(dt);
        }

        if !input.jump_held {
            self.jump_rising = false;
        }

        if input.interact_held {
            self.interact(body);
            if self.state == PlayerState::Cleared {
                return;
            }
        }

        if input.dash_held {
            self.dash(body, hooks);
        }

        if input.attack_just_pressed {
            self.attack(body, hooks);
        }
    }

    fn evaluate_ladder(&mut self, dt: f32, input: &PlayerInput) {
        let facts = LocomotionFacts {
            grounded: self.grounded,
            clinging: self.on_wall,
            stamina_left: self.on_wall_timer < self.tuning.wall_stamina,
            velocity_x: self.velocity.x,
            velocity_y: self.velocity.y,
        };
        let locomotion = evaluate_locomotion(facts, self.tuning.motion_epsilon);

        match locomotion {
            Locomotion::Grounded { .. } => self.on_wall = false,
            Locomotion::Clinging => {
                self.on_wall_timer += dt;
                self.gravity_scale = 0.0;
            }
            Locomotion::Airborne {
                wall_exhausted: true,
                ..
            } => {
                self.on_wall = false;
                debug!("Wall stamina exhausted after {:.2}s", self.on_wall_timer);
            }
            Locomotion::Airborne { .. } => {}
        }

        let state = match locomotion {
            Locomotion::Grounded { walking: false } if !self.dashing => self
                .standing_overlay(input)
                .unwrap_or(PlayerState::Idle),
            other => other.state(),
        };
        self.set_state(state);
    }

    fn standing_overlay(&self, input: &PlayerInput) -> Option<PlayerState> {
        if input.interact_held && self.contacts.near_signpost() {
            Some(PlayerState::Interact)
        } else if input.up {
            Some(PlayerState::LookUp)
        } else {
            None
        }
    }

    fn apply_dash(&mut self, dt: f32) {
        self.gravity_scale = 0.0;
        self.dash_anim_timer += dt;
        self.set_state(PlayerState::Dash);
        self.velocity = Vec2::new(self.dash_direction.sign() * self.tuning.dash_speed, 0.0);

        if self.dash_anim_timer > self.tuning.dash_anim_duration {
            self.dashing = false;
            debug!("Dash finished");
        }
    }

    fn tick_dash_cooldown(&mut self, dt: f32) {
        if self.can_dash {
            return;
        }

        self.dash_cooldown_timer += dt;
        if self.dash_cooldown_timer > self.tuning.dash_cooldown && self.grounded {
            self.can_dash = true;
            debug!("Dash ready");
        }
    }

    /// Re-land when a jump cleared the grounded latch but the feet never
    /// left the ground.
    fn settle_on_ground(&mut self, body: &impl PlayerBody) {
        if !self.grounded
            && self.contacts.grounded()
            && !self.jump_rising
            && body.velocity().y <= self.tuning.motion_epsilon
        {
            self.land();
        }
    }

    fn hold_still(&mut self, body: &mut impl PlayerBody, gravity_scale: f32) {
        self.velocity = Vec2::ZERO;
        self.gravity_scale = gravity_scale;
        body.set_gravity_scale(gravity_scale);
        body.set_velocity(Vec2::ZERO);
    }

    fn set_state(&mut self, state: PlayerState) {
        if self.state == state {
            return;
        }

        debug!("Player state: {:?} -> {:?}", self.state, state);
        self.state = state;
        self.state_time = 0.0;
    }

    fn move_horizontal(&mut self, direction: Facing) {
        if self.dashing && direction == self.dash_direction.opposite() {
            self.dashing = false;
            debug!("Dash cancelled by opposite input");
        }

        self.velocity.x = direction.sign() * self.tuning.move_speed;
        self.facing = direction;

        let stamina_left = self.on_wall_timer < self.tuning.wall_stamina;
        if self.on_wall && stamina_left {
            self.wall_jump_buffer
                .arm(self.tuning.wall_jump_buffer_time);
        }

        let side = match direction {
            Facing::Left => WallSide::Left,
            Facing::Right => WallSide::Right,
        };
        self.on_wall =
            self.contacts.on_wall(side) && stamina_left && !self.attacking && !self.grounded;
    }

    fn jump(&mut self) {
        if !self.grounded {
            if self.on_wall || self.wall_jump_buffer.is_active() {
                self.wall_jump();
            } else if !self.dashing {
                // No double jump: an airborne press only arms the buffer.
                self.jump_buffer.arm(self.tuning.jump_buffer_time);
            }
            return;
        }

        self.jump_rising = true;
        self.jump_time = 0.0;
        self.velocity.y = self.tuning.jump_force;
        self.grounded = false;
        debug!("Jump");
    }

    fn control_jump_height(&mut self, dt: f32) {
        if self.jump_time < self.tuning.max_jump_time {
            self.velocity.y = self.tuning.jump_force;
            self.jump_time += dt;
        }
    }

    /// Same-wall re-jumps are allowed; the stamina cost is the only limit.
    fn wall_jump(&mut self) {
        self.wall_jump_buffer.consume();
        self.jump_rising = true;
        self.jump_time = 0.0;
        self.velocity.y = self.tuning.jump_force;
        self.on_wall_timer += self.tuning.wall_jump_cost;
        self.grounded = false;
        self.on_wall = false;
        debug!("Wall jump, wall timer now {:.2}s", self.on_wall_timer);
    }

    fn interact(&mut self, body: &mut impl PlayerBody) {
        if !(self.contacts.touching_goal() && self.grounded) {
            return;
        }

        self.end_attack(body);
        self.dashing = false;
        self.cleared = true;
        self.velocity = Vec2::ZERO;
        body.set_velocity(Vec2::ZERO);
        self.set_state(PlayerState::Cleared);
        info!("Level cleared");
    }

    fn dash(&mut self, body: &mut impl PlayerBody, hooks: &mut impl WorldHooks) {
        if self.dashing || !self.can_dash || self.on_wall {
            return;
        }

        if self.attacking {
            self.end_attack(body);
            debug!("Attack cancelled by dash");
        }

        self.dashing = true;
        self.can_dash = false;
        self.dash_cooldown_timer = 0.0;
        self.dash_anim_timer = 0.0;
        self.dash_direction = self.facing;

        hooks.add_effect(EffectRequest {
            kind: EffectKind::Dash,
            position: body.position(),
            duration: self.tuning.dash_effect_duration,
            facing: self.facing,
        });
        debug!("Dash started facing {:?}", self.facing);
    }

    fn attack(&mut self, body: &mut impl PlayerBody, hooks: &mut impl WorldHooks) {
        if self.attacking || self.on_wall {
            return;
        }

        if self.dashing {
            self.dashing = false;
            debug!("Dash cancelled by attack");
        }

        self.attacking = true;
        self.attack_timer = 0.0;

        self.teardown_hitbox(body);
        let shape = SensorShape {
            half_extents: Vec2::new(self.tuning.hitbox_half_width, self.tuning.hitbox_half_height),
            offset: Vec2::new(
                self.facing.sign() * self.tuning.hitbox_offset_x,
                self.tuning.hitbox_offset_y,
            ),
        };
        self.hitbox = Some(body.create_sensor(shape));

        hooks.add_effect(EffectRequest {
            kind: EffectKind::Attack,
            position: body.position(),
            duration: self.tuning.attack_duration,
            facing: self.facing,
        });
        debug!("Attack started facing {:?}", self.facing);
    }

    fn end_attack(&mut self, body: &mut impl PlayerBody) {
        self.attacking = false;
        self.attack_timer = 0.0;
        self.teardown_hitbox(body);
    }

    /// The single exit for the attack sensor. Safe to call with no hitbox.
    fn teardown_hitbox(&mut self, body: &mut impl PlayerBody) {
        if let Some(sensor) = self.hitbox.take() {
            body.destroy_sensor(sensor);
        }
    }

    /// Enter `Dead`. Input is ignored until [`PlayerController::respawn`].
    pub fn kill(&mut self, body: &mut impl PlayerBody) {
        if self.state == PlayerState::Dead {
            return;
        }

        self.end_attack(body);
        self.dashing = false;
        self.on_wall = false;
        self.jump_rising = false;
        self.queued_jump = false;
        self.set_state(PlayerState::Dead);
        self.hold_still(body, 0.0);
        info!("Player died");
    }

    /// Rebuild the body at `position` and reset every counter, timer and flag
    /// except the cleared flag. Safe mid-attack and mid-dash.
    pub fn respawn(&mut self, position: Vec2, body: &mut impl PlayerBody) {
        self.teardown_hitbox(body);

        let tuning = self.tuning.clone();
        let cleared = self.cleared;
        *self = Self {
            cleared,
            ..Self::new(tuning)
        };

        body.rebuild(position);
        self.velocity = Vec2::new(self.tuning.spawn_drift(), 0.0);
        body.set_gravity_scale(self.gravity_scale);
        body.set_velocity(self.velocity);
        info!("Player respawned at ({:.2}, {:.2})", position.x, position.y);
    }

    pub fn on_begin_contact(&mut self, other: Option<&ContactRef>, hooks: &mut impl WorldHooks) {
        let Some(other) = other else {
            return;
        };

        match other.tag {
            ContactTag::Terrain(_) => {
                self.contacts.ground.begin();
                self.land();
            }
            ContactTag::Goal => {
                self.contacts.goal.begin();
            }
            ContactTag::Signpost => {
                self.contacts.signpost.begin();
                hooks.set_message_visible(other.entity, true);
            }
        }
    }

    pub fn on_end_contact(&mut self, other: Option<&ContactRef>, hooks: &mut impl WorldHooks) {
        let Some(other) = other else {
            return;
        };

        match other.tag {
            ContactTag::Terrain(_) => {
                self.contacts.ground.end();
                if !self.contacts.grounded() {
                    self.grounded = false;
                }
            }
            ContactTag::Goal => {
                self.contacts.goal.end();
            }
            ContactTag::Signpost => {
                self.contacts.signpost.end();
                hooks.set_message_visible(other.entity, false);
            }
        }
    }

    pub fn on_begin_wall_contact(&mut self, other: Option<&ContactRef>, side: WallSide) {
        let Some(kind) = other.and_then(|contact| contact.terrain()) else {
            return;
        };

        if kind.is_climbable() {
            self.contacts.wall_mut(side).begin();
        }
    }

    pub fn on_end_wall_contact(&mut self, other: Option<&ContactRef>, side: WallSide) {
        let Some(kind) = other.and_then(|contact| contact.terrain()) else {
            return;
        };

        if !kind.is_climbable() {
            return;
        }

        self.contacts.wall_mut(side).end();
        if !self.contacts.on_any_wall() {
            self.on_wall = false;
        }
    }

    pub fn on_begin_attack_contact(
        &mut self,
        other: Option<&ContactRef>,
        hooks: &mut impl WorldHooks,
    ) {
        let Some(other) = other else {
            return;
        };

        if other.terrain().is_some_and(TerrainKind::is_breakable) {
            debug!("Attack hit breakable {:?}", other.entity);
            hooks.add_destroy_box(other.entity);
        }
    }

    fn land(&mut self) {
        self.grounded = true;
        self.on_wall_timer = 0.0;
        if self.jump_buffer.consume() {
            self.queued_jump = true;
            debug!("Buffered jump queued on landing");
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn draw_state(&self) -> DrawState {
        DrawState {
            state: self.state,
            state_time: self.state_time,
            facing: self.facing,
            animation_key: self.state.animation_key(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn set_is_cleared(&mut self, cleared: bool) {
        self.cleared = cleared;
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_on_wall(&self) -> bool {
        self.on_wall
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn is_dashing(&self) -> bool {
        self.dashing
    }

    pub fn can_dash(&self) -> bool {
        self.can_dash
    }

    pub fn hitbox(&self) -> Option<Entity> {
        self.hitbox
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    pub fn contacts(&self) -> &ContactTracker {
        &self.contacts
    }

    pub fn jump_buffer(&self) -> TimedBuffer {
        self.jump_buffer
    }

    pub fn wall_jump_buffer(&self) -> TimedBuffer {
        self.wall_jump_buffer
    }

    pub fn wall_timer(&self) -> f32 {
        self.on_wall_timer
    }

    /// Remaining wall-cling stamina in [0, 1].
    pub fn wall_stamina_ratio(&self) -> f32 {
        (1.0 - self.on_wall_timer / self.tuning.wall_stamina).clamp(0.0, 1.0)
    }

    pub fn dash_cooldown_timer(&self) -> f32 {
        self.dash_cooldown_timer
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn set_tuning(&mut self, tuning: PlayerTuning) {
        self.tuning = tuning;
    }
}
