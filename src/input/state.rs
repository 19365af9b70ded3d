use std::collections::HashSet;

use glam::Vec2;

use crate::camera::MoveDirection;

/// Transient input state owned by the input-handling phase.
///
/// Replaces free-standing "last cursor" and "first mouse" globals: the
/// cursor position is `None` until the first cursor event, which only
/// records a position and yields no look delta.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    last_cursor: Option<Vec2>,
    held: HashSet<MoveDirection>,
}

impl InputContext {
    /// Fresh state: no cursor seen, no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position and return the motion since the previous
    /// one, or `None` for the first position seen.
    pub fn cursor_delta(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let current = Vec2::new(x, y);
        self.last_cursor.replace(current).map(|last| current - last)
    }

    /// Last recorded cursor position.
    #[must_use]
    pub fn last_cursor(&self) -> Option<Vec2> {
        self.last_cursor
    }

    /// Mark a movement key as held.
    pub fn press(&mut self, direction: MoveDirection) {
        let _ = self.held.insert(direction);
    }

    /// Mark a movement key as released.
    pub fn release(&mut self, direction: MoveDirection) {
        let _ = self.held.remove(&direction);
    }

    /// Whether a movement key is held.
    #[must_use]
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        self.held.contains(&direction)
    }

    /// Held directions in [`MoveDirection::ALL`] order.
    pub fn held(&self) -> impl Iterator<Item = MoveDirection> + '_ {
        MoveDirection::ALL
            .into_iter()
            .filter(|direction| self.held.contains(direction))
    }

    /// Forget the cursor and release every key, e.g. on focus loss, so
    /// the next cursor event does not produce a jump.
    pub fn reset(&mut self) {
        self.last_cursor = None;
        self.held.clear();
    }
}
