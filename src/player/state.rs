//! Player domain: the canonical player state and the locomotion ladder.

/// Exactly one state is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    Attack,
    WallSlide,
    Dash,
    Interact,
    LookUp,
    Spawn,
    Cleared,
    Dead,
}

impl PlayerState {
    /// Animation key used by the renderer to pick a clip.
    pub fn animation_key(self) -> &'static str {
        match self {
            PlayerState::Idle => "player_idle",
            PlayerState::Walk => "player_walk",
            PlayerState::Jump => "player_jump",
            PlayerState::Fall => "player_fall",
            PlayerState::Attack => "player_attack",
            PlayerState::WallSlide => "player_wall_slide",
            PlayerState::Dash => "player_dash",
            PlayerState::Interact => "player_interact",
            PlayerState::LookUp => "player_look_up",
            PlayerState::Spawn => "player_spawn",
            PlayerState::Cleared => "player_cleared",
            PlayerState::Dead => "player_dead",
        }
    }

    /// States that ignore input entirely while active.
    pub fn blocks_input(self) -> bool {
        matches!(
            self,
            PlayerState::Spawn | PlayerState::Dead | PlayerState::Cleared
        )
    }
}

/// What the ladder needs to know about the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocomotionFacts {
    pub grounded: bool,
    pub clinging: bool,
    /// Wall-cling stamina has not yet run out.
    pub stamina_left: bool,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

/// Outcome of the locomotion ladder for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    Grounded { walking: bool },
    Clinging,
    /// `wall_exhausted` is set when the character was clinging but ran out of
    /// stamina this frame and must let go.
    Airborne { rising: bool, wall_exhausted: bool },
}

impl Locomotion {
    pub fn state(self) -> PlayerState {
        match self {
            Locomotion::Grounded { walking: true } => PlayerState::Walk,
            Locomotion::Grounded { walking: false } => PlayerState::Idle,
            Locomotion::Clinging => PlayerState::WallSlide,
            Locomotion::Airborne { rising: true, .. } => PlayerState::Jump,
            Locomotion::Airborne { rising: false, .. } => PlayerState::Fall,
        }
    }
}

/// Grounded beats clinging beats airborne.
pub fn evaluate_locomotion(facts: LocomotionFacts, epsilon: f32) -> Locomotion {
    if facts.grounded {
        return Locomotion::Grounded {
            walking: facts.velocity_x.abs() > epsilon,
        };
    }

    if facts.clinging && facts.stamina_left {
        return Locomotion::Clinging;
    }

    Locomotion::Airborne {
        rising: facts.velocity_y > epsilon,
        wall_exhausted: facts.clinging,
    }
}
