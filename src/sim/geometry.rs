//! Screen-space geometry for sprites and burst patterns
//!
//! Positions are integer pixels with y growing downward. A `Rect` covers the
//! closed box from (x, y) to (x + w, y + h).

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size at the origin
    pub const fn from_size(size: (i32, i32)) -> Self {
        Self::new(0, 0, size.0, size.1)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Move by an integer step
    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Place the rectangle so its horizontal center sits on `cx`
    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    /// Place the rectangle so its bottom edge sits on `bottom`
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Closed-rectangle intersection test (shared edges count as overlap)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// True when no part of the rectangle lies inside a `width` x `height` world
    pub fn is_outside(&self, width: i32, height: i32) -> bool {
        self.top() > height || self.bottom() < 0 || self.right() < 0 || self.left() > width
    }
}

/// Rotate `v` counterclockwise (in y-up terms) by `degrees`.
///
/// Quarter turns are exact, so axis-aligned directions carry no stray
/// fractional component.
pub fn rotate_deg(v: DVec2, degrees: f64) -> DVec2 {
    let angle = degrees.rem_euclid(360.0);
    let (sin, cos) = if angle % 90.0 == 0.0 {
        match (angle / 90.0) as u32 {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        angle.to_radians().sin_cos()
    };
    DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Velocities of `count` bullets spread evenly around a full circle.
///
/// Bullet `i` points at `360 / count * i` degrees from the positive x axis.
pub fn radial_directions(count: u32, speed: f64) -> impl Iterator<Item = DVec2> {
    let step = if count == 0 { 0.0 } else { 360.0 / count as f64 };
    (0..count).map(move |i| rotate_deg(DVec2::X, step * i as f64) * speed)
}
