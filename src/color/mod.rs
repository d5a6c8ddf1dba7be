use std::ops::Mul;

use ggez::graphics;

pub mod to_color;

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    pub const WHITE: Self = Self(graphics::Color::WHITE);

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(graphics::Color::from_rgb(r, g, b))
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self(graphics::Color { a, ..self.0 })
    }
}

/// Scales the brightness, alpha is kept
impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(graphics::Color {
            r: (self.r * rhs).min(1.),
            g: (self.g * rhs).min(1.),
            b: (self.b * rhs).min(1.),
            a: self.a,
        })
    }
}

impl From<Color> for graphics::Color {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_keeps_alpha() {
        let color = Color::from_rgb(200, 100, 0).with_alpha(0.5) * 0.5;
        assert!((color.r - 100. / 255.).abs() < 1e-6);
        assert!((color.g - 50. / 255.).abs() < 1e-6);
        assert_eq!(color.b, 0.);
        assert_eq!(color.a, 0.5);
    }
}
