use std::time::Duration;

use hsl::HSL;

use crate::color::{to_color::ToColor, Color};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Flavor {
    Apple,
    Banana,
    Cherries,
    Lemon,
    Orange,
    Watermelon,
}

impl Flavor {
    pub const ALL: [Flavor; 6] = [
        Self::Apple,
        Self::Banana,
        Self::Cherries,
        Self::Lemon,
        Self::Orange,
        Self::Watermelon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Banana => "banana",
            Self::Cherries => "cherries",
            Self::Lemon => "lemon",
            Self::Orange => "orange",
            Self::Watermelon => "watermelon",
        }
    }

    pub fn color(self) -> Color {
        let (h, l) = match self {
            Self::Apple => (0., 0.45),
            Self::Banana => (52., 0.6),
            Self::Cherries => (340., 0.35),
            Self::Lemon => (60., 0.5),
            Self::Orange => (30., 0.5),
            Self::Watermelon => (130., 0.4),
        };
        HSL { h, s: 0.85, l }.to_color()
    }
}

/// A looping frame clock, each flavor keeps its own
#[derive(Clone, Debug)]
pub struct Animation {
    frames: usize,
    frame_time: Duration,
    elapsed: Duration,
}

impl Animation {
    pub const FRAMES: usize = 4;
    pub const FRAME_TIME: Duration = Duration::from_millis(500);

    pub fn new(frames: usize, frame_time: Duration) -> Self {
        assert!(frames > 0 && !frame_time.is_zero());
        Self {
            frames,
            frame_time,
            elapsed: Duration::ZERO,
        }
    }

    pub fn update(&mut self, dt: Duration) {
        let period = self.frame_time * self.frames as u32;
        self.elapsed += dt;
        while self.elapsed >= period {
            self.elapsed -= period;
        }
    }

    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn frame(&self) -> usize {
        (self.elapsed.as_nanos() / self.frame_time.as_nanos()) as usize % self.frames
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(Self::FRAMES, Self::FRAME_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_loops() {
        let mut animation = Animation::default();
        assert_eq!(animation.frame(), 0);

        animation.update(Duration::from_millis(499));
        assert_eq!(animation.frame(), 0);
        animation.update(Duration::from_millis(1));
        assert_eq!(animation.frame(), 1);

        animation.update(Duration::from_millis(1500));
        assert_eq!(animation.frame(), 0);

        animation.update(Duration::from_secs(60) + Duration::from_millis(1200));
        assert_eq!(animation.frame(), 2);

        animation.restart();
        assert_eq!(animation.frame(), 0);
    }
}
