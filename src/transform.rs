//! 2D points, vectors and affine transforms used by the display surface.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, v: Vector) -> Point {
        Point {
            x: self.x + v.dx,
            y: self.y + v.dy,
        }
    }

    /// Vector pointing from `self` to `other`.
    pub fn to(self, other: Point) -> Vector {
        Vector {
            dx: other.x - self.x,
            dy: other.y - self.y,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        self.to(other).length()
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Angle of the vector in radians, measured from +x towards +y.
    pub fn angle(self) -> f64 {
        self.dy.atan2(self.dx)
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

/// Affine map in row-vector form:
/// `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// Returns the transform that applies `self` first, then `other`.
    pub fn concat(self, other: Affine) -> Affine {
        Affine {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    /// Scales in the transform's local space; translation is left alone.
    pub fn scaled_by(self, sx: f64, sy: f64) -> Affine {
        Affine::scale(sx, sy).concat(self)
    }

    /// Rotates in the transform's local space; translation is left alone.
    pub fn rotated_by(self, angle: f64) -> Affine {
        Affine::rotation(angle).concat(self)
    }

    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.tx,
            y: self.b * p.x + self.d * p.y + self.ty,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn approx_eq(&self, other: &Affine, eps: f64) -> bool {
        [
            (self.a, other.a),
            (self.b, other.b),
            (self.c, other.c),
            (self.d, other.d),
            (self.tx, other.tx),
            (self.ty, other.ty),
        ]
        .iter()
        .all(|(l, r)| (l - r).abs() <= eps)
    }

    /// CSS `transform` value with the same component order as the struct.
    pub fn to_css(&self) -> String {
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    fn close(p: Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < EPS && (p.y - y).abs() < EPS
    }

    #[test]
    fn identity_is_neutral_for_concat() {
        let t = Affine::rotation(0.3).concat(Affine::translation(4.0, -2.0));
        assert!(t.concat(Affine::IDENTITY).approx_eq(&t, EPS));
        assert!(Affine::IDENTITY.concat(t).approx_eq(&t, EPS));
        assert!(Affine::default().is_identity());
    }

    #[test]
    fn scaled_by_keeps_translation() {
        let t = Affine::translation(10.0, 20.0).scaled_by(2.0, 2.0);
        assert_eq!(t.tx, 10.0);
        assert_eq!(t.ty, 20.0);
        assert!(close(t.apply(Point::new(1.0, 1.0)), 12.0, 22.0));
    }

    #[test]
    fn rotated_by_quarter_turn_maps_x_to_y() {
        let t = Affine::IDENTITY.rotated_by(FRAC_PI_2);
        assert!(close(t.apply(Point::new(1.0, 0.0)), 0.0, 1.0));
        assert!(close(t.apply(Point::new(0.0, 1.0)), -1.0, 0.0));
    }

    #[test]
    fn scale_then_rotate_composes_in_local_space() {
        // Rotating a scaled transform must still scale the rotated axes.
        let t = Affine::scale(2.0, 2.0).rotated_by(FRAC_PI_2);
        assert!(close(t.apply(Point::new(1.0, 0.0)), 0.0, 2.0));
    }

    #[test]
    fn successive_scales_multiply() {
        let t = Affine::IDENTITY.scaled_by(1.5, 1.5).scaled_by(2.0, 2.0);
        assert!(t.approx_eq(&Affine::scale(3.0, 3.0), EPS));
    }

    #[test]
    fn css_matrix_lists_components_in_order() {
        let t = Affine {
            a: 1.0,
            b: 2.0,
            c: 3.0,
            d: 4.0,
            tx: 5.0,
            ty: 6.0,
        };
        assert_eq!(t.to_css(), "matrix(1, 2, 3, 4, 5, 6)");
    }

    #[test]
    fn point_helpers() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.midpoint(b), Point::new(1.5, 2.0));
        assert_eq!(a.offset(Vector::new(1.0, -1.0)), Point::new(1.0, -1.0));
        assert!((a.to(Point::new(0.0, 1.0)).angle() - FRAC_PI_2).abs() < EPS);
    }
}
