use rand::{rngs::SmallRng, Rng};

use crate::basic::Point;
use crate::food::{Burst, Flavor};

/// A short-lived fragment of eaten food, positions are in cells
/// (the centre of cell (x, y) is at (x + 0.5, y + 0.5))
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Point,
    pub velocity: Point,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    /// Updates left before the particle disappears
    pub ttl: i32,
    pub flavor: Flavor,
}

impl Particle {
    fn update(&mut self) {
        self.ttl -= 1;
        self.pos += self.velocity;
        self.rotation += self.rotation_speed;
    }
}

pub struct Particles {
    particles: Vec<Particle>,
    per_burst: usize,
    rng: SmallRng,
}

impl Particles {
    const MAX_ROTATION_SPEED: f32 = 0.1;
    const MAX_VELOCITY: f32 = 0.02;
    const MAX_TTL: i32 = 100;
    const SCALE: f32 = 0.3;

    pub fn new(per_burst: usize, rng: SmallRng) -> Self {
        Self {
            particles: vec![],
            per_burst,
            rng,
        }
    }

    /// Scatter fragments from the centre of the cell where food was eaten
    pub fn burst(&mut self, Burst { pos, flavor }: Burst) {
        let centre = Point {
            x: pos.x as f32 + 0.5,
            y: pos.y as f32 + 0.5,
        };

        for _ in 0..self.per_burst {
            let rng = &mut self.rng;
            self.particles.push(Particle {
                pos: centre,
                velocity: Point {
                    x: Self::MAX_VELOCITY * rng.gen_range(-1.0..=1.0),
                    y: Self::MAX_VELOCITY * rng.gen_range(-1.0..=1.0),
                },
                rotation: rng.gen::<f32>(),
                rotation_speed: Self::MAX_ROTATION_SPEED * rng.gen_range(-1.0..=1.0),
                scale: Self::SCALE,
                ttl: Self::MAX_TTL / 2 + rng.gen_range(0..Self::MAX_TTL / 2),
                flavor,
            });
        }
    }

    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|particle| particle.ttl >= 0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
impl Particles {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::GridPoint;
    use rand::SeedableRng;

    fn burst() -> Burst {
        Burst { pos: GridPoint::new(3, 4), flavor: Flavor::Lemon }
    }

    #[test]
    fn test_burst_and_expire() {
        let mut particles = Particles::new(7, SmallRng::seed_from_u64(0));
        particles.burst(burst());
        assert_eq!(particles.len(), 7);

        for particle in particles.iter() {
            assert_eq!(particle.pos, Point { x: 3.5, y: 4.5 });
            assert!((50..100).contains(&particle.ttl));
            assert!(particle.velocity.x.abs() <= Particles::MAX_VELOCITY);
        }

        for _ in 0..Particles::MAX_TTL {
            particles.update();
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_particles_drift() {
        let mut particles = Particles::new(1, SmallRng::seed_from_u64(5));
        particles.burst(burst());
        let before = particles.iter().next().unwrap().clone();
        particles.update();
        let after = particles.iter().next().unwrap();

        assert_eq!(after.pos, before.pos + before.velocity);
        assert_eq!(after.ttl, before.ttl - 1);
    }

    #[test]
    fn test_clear() {
        let mut particles = Particles::new(3, SmallRng::seed_from_u64(0));
        particles.burst(burst());
        particles.clear();
        assert!(particles.is_empty());
    }
}
