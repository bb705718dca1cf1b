use crate::geometry::Point;

/// Angular distance between two neighbouring holes.
pub const STEP_SIZE: f64 = 360.0 / 12.0;
pub const DIGITS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// Hole number on the dial face. Zero sits in the tenth hole.
fn hole_number(digit: u8) -> f64 {
    match digit {
        0 => 10.0,
        n => n as f64,
    }
}

/// Rest angle, in degrees, of the hole for `digit`.
pub fn digit_degrees(digit: u8) -> f64 {
    (4.5 * STEP_SIZE - (hole_number(digit) - 1.0) * STEP_SIZE + 180.0).rem_euclid(360.0)
}

/// Rotation needed before `digit` counts as dialed.
pub fn digit_max_degrees(digit: u8) -> f64 {
    (1.0 + hole_number(digit)) * STEP_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Geometry of the dial for one widget size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialLayout {
    pub center: Point,
    pub radius: f64,
    pub hole_radius: f64,
    pub hole_distance: f64,
}

impl DialLayout {
    /// Fits the dial into a `width` x `height` area. The ten holes (plus
    /// the two empty stops) share the circumference left after the outer
    /// rim, with `inner_padding` between neighbours.
    pub fn new(
        width: f64,
        height: f64,
        padding: Padding,
        outer_padding: f64,
        inner_padding: f64,
    ) -> Self {
        use std::f64::consts::PI;

        let center = Point::new(width / 2.0, height / 2.0);
        let radius = ((width - padding.horizontal()).min(height - padding.vertical()) / 2.0).max(0.0);
        let hole_radius = (PI * radius - PI * outer_padding - 6.0 * inner_padding) / (12.0 + PI);
        let hole_distance = radius - hole_radius - outer_padding;

        Self {
            center,
            radius,
            hole_radius,
            hole_distance,
        }
    }

    pub fn hole_position(&self, digit: u8) -> Point {
        self.center
            .translate(self.hole_distance, digit_degrees(digit))
    }

    pub fn hole_positions(&self) -> impl Iterator<Item = (u8, Point)> + '_ {
        DIGITS.iter().map(|&d| (d, self.hole_position(d)))
    }

    /// The digit whose resting hole contains `point`.
    pub fn digit_at(&self, point: Point) -> Option<u8> {
        if self.hole_radius <= 0.0 {
            return None;
        }
        self.hole_positions()
            .find(|(_, pos)| pos.distance_to(point) <= self.hole_radius)
            .map(|(d, _)| d)
    }
}
