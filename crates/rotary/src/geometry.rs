/// A point in widget coordinates. The y axis grows downwards, so positive
/// angles turn clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Angle in degrees, in `[0, 360)`, swept from the ray `self -> from` to
    /// the ray `self -> to`.
    pub fn angle_with(&self, from: Point, to: Point) -> f64 {
        let a = to.relative_to(*self);
        let b = from.relative_to(*self);
        let angle = (a.y.atan2(a.x) - b.y.atan2(b.x)).to_degrees();
        if angle >= 0.0 { angle } else { angle + 360.0 }
    }

    /// This point expressed relative to `origin`.
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Moves the point `distance` units in the direction of `degrees`.
    pub fn translate(&self, distance: f64, degrees: f64) -> Point {
        let a = degrees.to_radians();
        Point::new(self.x + distance * a.cos(), self.y + distance * a.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_angle_is_clockwise_on_screen() {
        let center = Point::new(0.0, 0.0);
        let right = Point::new(10.0, 0.0);
        let below = Point::new(0.0, 10.0);

        assert!((center.angle_with(right, below) - 90.0).abs() < EPS);
        assert!((center.angle_with(below, right) - 270.0).abs() < EPS);
    }

    #[test]
    fn test_angle_is_never_negative() {
        let center = Point::new(50.0, 50.0);
        let cases = [
            (Point::new(60.0, 50.0), Point::new(60.0, 49.0)),
            (Point::new(50.0, 40.0), Point::new(40.0, 50.0)),
            (Point::new(40.0, 50.0), Point::new(50.0, 60.0)),
        ];

        for (from, to) in cases {
            let angle = center.angle_with(from, to);
            assert!((0.0..360.0).contains(&angle), "angle {angle} out of range");
        }
    }

    #[test]
    fn test_same_ray_is_zero() {
        let center = Point::new(3.0, 4.0);
        let p = Point::new(7.0, 9.0);
        assert!(center.angle_with(p, p).abs() < EPS);
    }

    #[test]
    fn test_distance_and_relative() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(b) - 5.0).abs() < EPS);
        assert_eq!(b.relative_to(a), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_translate() {
        let origin = Point::new(10.0, 10.0);

        let east = origin.translate(5.0, 0.0);
        assert!((east.x - 15.0).abs() < EPS && (east.y - 10.0).abs() < EPS);

        // 90 degrees points down the screen
        let south = origin.translate(5.0, 90.0);
        assert!((south.x - 10.0).abs() < EPS && (south.y - 15.0).abs() < EPS);

        let moved = origin.translate(7.5, 123.0);
        assert!((origin.distance_to(moved) - 7.5).abs() < EPS);
    }
}
