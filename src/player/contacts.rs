//! Player domain: reference-counted contact predicates and contact categories.

use bevy::prelude::*;

/// Saturating overlap counter. The predicate only flips when the count
/// crosses zero, so several overlapping bodies never cause flicker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactCounter(u32);

impl ContactCounter {
    /// Returns true if this begin made the predicate active.
    pub fn begin(&mut self) -> bool {
        self.0 = self.0.saturating_add(1);
        self.0 == 1
    }

    /// Returns true if this end made the predicate inactive. Unmatched ends
    /// are floored at zero.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        self.0 = self.0.saturating_sub(1);
        was_active && !self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.0 > 0
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

/// Which side of the body a wall sensor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

/// All overlap counters owned by one controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactTracker {
    pub ground: ContactCounter,
    pub left_wall: ContactCounter,
    pub right_wall: ContactCounter,
    pub goal: ContactCounter,
    pub signpost: ContactCounter,
}

impl ContactTracker {
    pub fn grounded(&self) -> bool {
        self.ground.is_active()
    }

    pub fn on_left_wall(&self) -> bool {
        self.left_wall.is_active()
    }

    pub fn on_right_wall(&self) -> bool {
        self.right_wall.is_active()
    }

    pub fn on_wall(&self, side: WallSide) -> bool {
        match side {
            WallSide::Left => self.on_left_wall(),
            WallSide::Right => self.on_right_wall(),
        }
    }

    pub fn on_any_wall(&self) -> bool {
        self.on_left_wall() || self.on_right_wall()
    }

    pub fn touching_goal(&self) -> bool {
        self.goal.is_active()
    }

    pub fn near_signpost(&self) -> bool {
        self.signpost.is_active()
    }

    pub fn wall_mut(&mut self, side: WallSide) -> &mut ContactCounter {
        match side {
            WallSide::Left => &mut self.left_wall,
            WallSide::Right => &mut self.right_wall,
        }
    }
}

/// Kinds of level terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    /// Breakable wooden crate.
    Crate,
    /// The only climbable terrain.
    Stone,
    Sand,
}

impl TerrainKind {
    pub fn is_climbable(self) -> bool {
        matches!(self, TerrainKind::Stone)
    }

    pub fn is_breakable(self) -> bool {
        matches!(self, TerrainKind::Crate)
    }
}

/// Category tag attached to every non-player collider the controller may touch.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTag {
    Terrain(TerrainKind),
    Goal,
    Signpost,
}

/// The other side of a contact: the entity and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRef {
    pub entity: Entity,
    pub tag: ContactTag,
}

impl ContactRef {
    pub fn new(entity: Entity, tag: ContactTag) -> Self {
        Self { entity, tag }
    }

    pub fn terrain(&self) -> Option<TerrainKind> {
        match self.tag {
            ContactTag::Terrain(kind) => Some(kind),
            _ => None,
        }
    }
}
