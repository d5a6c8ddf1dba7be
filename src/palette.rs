use hsl::HSL;

use crate::color::{to_color::ToColor, Color};

macro_rules! gray {
    ($lightness:expr) => {
        gray!($lightness, 1.)
    };
    ($lightness:expr, $opacity:expr) => {
        crate::color::Color(ggez::graphics::Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: $opacity,
        })
    };
}

lazy_static! {
    pub static ref BACKGROUND: Color = gray!(0.08);
    pub static ref FLOOR: Color = gray!(0.16);
    pub static ref FLOOR_ALT: Color = gray!(0.19);
    pub static ref WALL: Color = gray!(0.42);
    pub static ref GRID_LINE: Color = gray!(0.25, 0.6);

    pub static ref SNAKE_BODY: Color = HSL { h: 140., s: 0.55, l: 0.42 }.to_color();
    pub static ref SNAKE_HEAD: Color = HSL { h: 140., s: 0.6, l: 0.5 }.to_color();
    pub static ref SNAKE_EYE: Color = gray!(0.95);
    pub static ref SNAKE_PUPIL: Color = gray!(0.05);
    pub static ref SNAKE_MOUTH: Color = Color::from_rgb(140, 20, 40);

    pub static ref OVERLAY: Color = gray!(0., 0.6);
    pub static ref TEXT: Color = Color::WHITE;
    pub static ref WON_TEXT: Color = Color::from_rgb(0, 255, 128);
    pub static ref LOST_TEXT: Color = Color::from_rgb(255, 0, 128);
}
