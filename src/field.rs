// Particle field simulation: drift, edge reflection, cursor repulsion and
// proximity-link enumeration. Holds no DOM types, so the whole thing runs
// under native `cargo test` with a seeded rng.

use rand::Rng;
use vecmath::{vec2_add, vec2_len, vec2_normalized, vec2_scale, vec2_sub, Vector2};

use crate::particle::Particle;

pub const DEFAULT_PARTICLE_COUNT: u32 = 100;
pub const DEFAULT_INTERACTION_RADIUS: f64 = 180.0;
pub const PUSH_STRENGTH: f64 = 3.0;
pub const LINK_RADIUS: f64 = 150.0;

// Off-surface sentinel so no particle reacts before the first mousemove
pub const CURSOR_SENTINEL: Vector2<f64> = [-1000.0, -1000.0];

// Override sanitizers: a bad count renders an empty field and a bad radius
// disables repulsion, neither may take the page down
pub fn sanitize_count(count: i32) -> usize {
    count.max(0) as usize
}

pub fn sanitize_radius(radius: f64) -> f64 {
    if radius.is_finite() {
        radius.max(0.0)
    } else {
        DEFAULT_INTERACTION_RADIUS
    }
}

pub struct FieldSim {
    width: f64,
    height: f64,
    cursor: Vector2<f64>,
    interaction_radius: f64,
    particles: Vec<Particle>,
}

impl FieldSim {
    pub fn new<R: Rng>(
        width: f64,
        height: f64,
        count: usize,
        interaction_radius: f64,
        rng: &mut R,
    ) -> FieldSim {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::random(width, height, rng));
        }
        FieldSim {
            width,
            height,
            cursor: CURSOR_SENTINEL,
            interaction_radius,
            particles,
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Last-writer-wins; the event handler and the tick never overlap
    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = [x, y];
    }

    // Particles are not rescaled to the new surface; they just reflect
    // against the new bounds from the next step on
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // One Euler tick per particle: integrate, reflect at the edges, then
    // shove away from the cursor. Deliberately not time-corrected; a tick
    // always advances one velocity unit no matter the real frame interval.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.pos = vec2_add(particle.pos, particle.vel);

            if particle.pos[0] < 0.0 || particle.pos[0] > self.width {
                particle.vel[0] *= -1.0;
                particle.pos[0] = particle.pos[0].max(0.0).min(self.width);
            }
            if particle.pos[1] < 0.0 || particle.pos[1] > self.height {
                particle.vel[1] *= -1.0;
                particle.pos[1] = particle.pos[1].max(0.0).min(self.height);
            }

            // Repulsion displaces position only, never velocity, so the
            // effect fades as soon as the cursor leaves
            let from_cursor = vec2_sub(particle.pos, self.cursor);
            let distance = vec2_len(from_cursor);
            if distance > 0.0 && distance < self.interaction_radius {
                let force = (self.interaction_radius - distance) / self.interaction_radius;
                let push = vec2_scale(vec2_normalized(from_cursor), force * PUSH_STRENGTH);
                particle.pos = vec2_add(particle.pos, push);
            }
        }
    }

    // Opacity of the link between two positions, fading linearly from 1 at
    // zero distance to fully transparent at LINK_RADIUS
    pub fn link_opacity(a: Vector2<f64>, b: Vector2<f64>) -> Option<f64> {
        let distance = vec2_len(vec2_sub(b, a));
        if distance < LINK_RADIUS {
            Some(1.0 - distance / LINK_RADIUS)
        } else {
            None
        }
    }

    // Visit every unordered pair within LINK_RADIUS, using this frame's
    // post-step positions for both ends. O(N²) over the particle set, which
    // is fine at the counts this backdrop runs at.
    pub fn for_each_link<F: FnMut(Vector2<f64>, Vector2<f64>, f64)>(&self, mut visit: F) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                if let Some(opacity) = FieldSim::link_opacity(a, b) {
                    visit(a, b, opacity);
                }
            }
        }
    }
}
