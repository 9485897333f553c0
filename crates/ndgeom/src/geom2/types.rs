//! Value types shared by the planar algorithms.

use nalgebra::Vector2;

/// Sort direction for `argsort_points`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// An oriented rectangle: `center`, `size = (width, height)`, and `angle` in
/// radians, counter-clockwise from the x-axis.
///
/// Produced by `min_area_rectangle`; an immutable value type. The default is
/// the zero rectangle at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedRectangle {
    pub center: Vector2<f64>,
    pub size: Vector2<f64>,
    pub angle: f64,
}

impl Default for RotatedRectangle {
    fn default() -> Self {
        Self {
            center: Vector2::zeros(),
            size: Vector2::zeros(),
            angle: 0.0,
        }
    }
}

impl RotatedRectangle {
    /// `angle` converted to degrees.
    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// `width * height`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.size.x * self.size.y
    }
}
