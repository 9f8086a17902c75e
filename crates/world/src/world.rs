use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default gravity for a fresh world, in world units per second squared.
const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, -9.8);

/// One physical entity in a world.
///
/// A body may be dynamic (advanced by the simulation) and/or interacting
/// (participates in collision response). A body that is neither is purely
/// decorative. The `user_data` slot carries an opaque label; tooling reads
/// and writes it but the model attaches no meaning to its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    /// Orientation in radians. Not a length, so scaling leaves it alone.
    pub angle: f32,
    pub linear_velocity: Vec2,
    /// Half-extents of the body's bounding shape.
    pub extents: Vec2,
    pub dynamic: bool,
    pub interacting: bool,
    pub user_data: String,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            linear_velocity: Vec2::ZERO,
            extents: Vec2::ONE,
            dynamic: true,
            interacting: true,
            user_data: String::new(),
        }
    }
}

impl Body {
    /// The body's attribute text.
    pub fn user_data(&self) -> &str {
        &self.user_data
    }

    /// Replace the body's attribute text.
    pub fn set_user_data(&mut self, text: impl Into<String>) {
        self.user_data = text.into();
    }
}

/// The world: an index-addressed sequence of bodies plus world-level state.
///
/// All mutations go through explicit operations. Bodies keep their insertion
/// order; removal compacts the sequence, so callers that remove while
/// iterating must walk indices from high to low.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    bodies: Vec<Body>,
    gravity: Vec2,
    user_data: String,
}

impl Default for World {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: DEFAULT_GRAVITY,
            user_data: String::new(),
        }
    }
}

impl World {
    /// Create an empty world with default gravity and empty attribute text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bodies in the world.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Read-only access to all bodies in index order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Get a reference to the body at `index`.
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Get a mutable reference to the body at `index`.
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Append a body to the world. Returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Remove the body at `index`, shifting later bodies down by one.
    /// Returns the removed body if the index was in range.
    pub fn remove_body(&mut self, index: usize) -> Option<Body> {
        if index < self.bodies.len() {
            Some(self.bodies.remove(index))
        } else {
            None
        }
    }

    /// World gravity.
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Set world gravity.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// The world-level attribute text.
    pub fn user_data(&self) -> &str {
        &self.user_data
    }

    /// Replace the world-level attribute text.
    pub fn set_user_data(&mut self, text: impl Into<String>) {
        self.user_data = text.into();
    }

    /// Multiply every spatial quantity in the world by `factor`.
    ///
    /// Covers gravity and, per body, position, linear velocity, and extents.
    /// Angles are unchanged. The factor is applied as given: zero, negative,
    /// and fractional values are all legal.
    pub fn scale(&mut self, factor: f32) {
        self.gravity *= factor;
        for body in &mut self.bodies {
            body.position *= factor;
            body.linear_velocity *= factor;
            body.extents *= factor;
        }
    }
}
