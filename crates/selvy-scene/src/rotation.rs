//! Pointer-driven rotation for the interactive model viewer
//!
//! The controller maps the cursor position over the viewing surface to a
//! bounded (pitch, yaw) offset. The offset is a function of the current
//! pointer state only, recomputed on every move and composed with the
//! model's base rotation at read time; it is never accumulated.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Bounds for the pointer-driven tilt, in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationLimits {
    /// Maximum up/down tilt
    #[serde(default = "default_max_pitch")]
    pub max_pitch: f32,
    /// Maximum left/right tilt
    #[serde(default = "default_max_yaw")]
    pub max_yaw: f32,
}

fn default_max_pitch() -> f32 {
    0.5
}

fn default_max_yaw() -> f32 {
    0.8
}

impl Default for RotationLimits {
    fn default() -> Self {
        Self {
            max_pitch: default_max_pitch(),
            max_yaw: default_max_yaw(),
        }
    }
}

/// Bounding rectangle of the viewing surface, in the same coordinate
/// space as pointer positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect with zero extent has not been laid out yet
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Maps pointer position to a bounded rotation offset
#[derive(Debug, Clone, PartialEq)]
pub struct PointerRotationController {
    limits: RotationLimits,
    /// Current (pitch, yaw) offset in radians
    offset: Vec2,
}

impl Default for PointerRotationController {
    fn default() -> Self {
        Self::new(RotationLimits::default())
    }
}

impl PointerRotationController {
    pub fn new(limits: RotationLimits) -> Self {
        Self {
            limits,
            offset: Vec2::ZERO,
        }
    }

    /// Update the offset from a pointer-move event
    ///
    /// The cursor is normalized into [-1, 1] on both axes relative to the
    /// surface center and clamped if out of range. If the surface has not
    /// been measured yet, pointer input is treated as absent and the
    /// offset stays at zero (base rotation only).
    pub fn pointer_move(&mut self, cursor: Vec2, surface: Option<SurfaceRect>) {
        let Some(rect) = surface.filter(SurfaceRect::is_measurable) else {
            self.offset = Vec2::ZERO;
            return;
        };

        let center = rect.center();
        let norm_x = ((cursor.x - center.x) / (rect.width / 2.0)).clamp(-1.0, 1.0);
        let norm_y = ((cursor.y - center.y) / (rect.height / 2.0)).clamp(-1.0, 1.0);

        self.offset = Vec2::new(-norm_y * self.limits.max_pitch, norm_x * self.limits.max_yaw);
    }

    /// Reset the offset on pointer-leave
    pub fn pointer_leave(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Current offset as (rx, ry, 0)
    pub fn offset(&self) -> Vec3 {
        Vec3::new(self.offset.x, self.offset.y, 0.0)
    }

    /// Final rotation: per-model base composed with the pointer offset
    pub fn rotation(&self, base: Vec3) -> Vec3 {
        base + self.offset()
    }

    pub fn limits(&self) -> RotationLimits {
        self.limits
    }
}
