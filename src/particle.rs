// Simple particle struct to keep track of individual position and velocity

use rand::Rng;
use vecmath::Vector2;

pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
}

impl Particle {
    // Per-axis drift speed, in canvas units per tick
    pub const MAX_DRIFT: f64 = 0.4;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
        }
    }

    // Uniform position over the surface, each velocity axis drawn from
    // ±MAX_DRIFT. The magnitude is fixed for the particle's whole life;
    // edge bounces only flip its sign.
    pub fn random<R: Rng>(width: f64, height: f64, rng: &mut R) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_DRIFT;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_DRIFT;
        Particle::new(pos_x, pos_y, vel_x, vel_y)
    }
}
