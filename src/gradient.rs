// Gradient transition state machine for the animated text fill. Morphs
// between randomized 3-stop endpoints on a fixed cycle, chaining a fresh
// target every time one completes.

use rand::Rng;

use crate::color::{lerp, lerp_angle, lerp_hsl, Hsl};

pub const DEFAULT_CYCLE_MS: f64 = 5000.0;
const MIN_CYCLE_MS: f64 = 1.0;

// Cubic ease with zero slope at both ends of [0, 1]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[derive(Copy, Clone, Debug)]
pub struct GradientTarget {
    pub color1: Hsl,
    pub color2: Hsl,
    pub color3: Hsl,
    pub angle: f64,
    pub stop1: f64,
    pub stop2: f64,
}

impl GradientTarget {
    // Stop ranges are disjoint (0-30 and 70-100) so stop1 < stop2 holds
    // for every target this can produce
    pub fn random<R: Rng>(rng: &mut R) -> GradientTarget {
        GradientTarget {
            color1: Hsl::random(rng),
            color2: Hsl::random(rng),
            color3: Hsl::random(rng),
            angle: rng.gen::<f64>() * 360.0,
            stop1: rng.gen::<f64>() * 30.0,
            stop2: 70.0 + rng.gen::<f64>() * 30.0,
        }
    }
}

// One interpolated sample, ready to serialize as a CSS linear-gradient.
// The middle stop is always the midpoint of the two outer stops.
#[derive(Copy, Clone, Debug)]
pub struct GradientFrame {
    pub color1: Hsl,
    pub color2: Hsl,
    pub color3: Hsl,
    pub angle: f64,
    pub stop1: f64,
    pub stop_mid: f64,
    pub stop2: f64,
}

impl GradientFrame {
    pub fn to_css(&self) -> String {
        format!(
            "linear-gradient({:.1}deg, {} {:.1}%, {} {:.1}%, {} {:.1}%)",
            self.angle,
            self.color1.to_css(),
            self.stop1,
            self.color2.to_css(),
            self.stop_mid,
            self.color3.to_css(),
            self.stop2,
        )
    }
}

pub struct GradientCycle {
    current: GradientTarget,
    next: GradientTarget,
    started_at: f64,
    cycle_ms: f64,
}

impl GradientCycle {
    pub fn new<R: Rng>(now: f64, cycle_ms: f64, rng: &mut R) -> GradientCycle {
        let cycle_ms = if cycle_ms.is_finite() {
            cycle_ms.max(MIN_CYCLE_MS)
        } else {
            DEFAULT_CYCLE_MS
        };
        GradientCycle {
            current: GradientTarget::random(rng),
            next: GradientTarget::random(rng),
            started_at: now,
            cycle_ms,
        }
    }

    // Sample the gradient at `now`, rotating to a fresh target once the
    // cycle completes. The frame emitted at the seam is exactly the old
    // `next`, which becomes the new `current`, so chained cycles join
    // without a visible jump.
    pub fn frame<R: Rng>(&mut self, now: f64, rng: &mut R) -> GradientFrame {
        let raw = ((now - self.started_at) / self.cycle_ms).max(0.0).min(1.0);
        let t = smoothstep(raw);

        let stop1 = lerp(self.current.stop1, self.next.stop1, t);
        let stop2 = lerp(self.current.stop2, self.next.stop2, t);
        let frame = GradientFrame {
            color1: lerp_hsl(self.current.color1, self.next.color1, t),
            color2: lerp_hsl(self.current.color2, self.next.color2, t),
            color3: lerp_hsl(self.current.color3, self.next.color3, t),
            angle: lerp_angle(self.current.angle, self.next.angle, t),
            stop1,
            stop_mid: (stop1 + stop2) / 2.0,
            stop2,
        };

        if raw >= 1.0 {
            self.current = self.next;
            self.next = GradientTarget::random(rng);
            self.started_at = now;
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 1e-9;

    fn assert_frames_match(a: &GradientFrame, b: &GradientFrame) {
        let pairs = [
            (a.color1.h, b.color1.h),
            (a.color1.s, b.color1.s),
            (a.color1.l, b.color1.l),
            (a.color2.h, b.color2.h),
            (a.color2.s, b.color2.s),
            (a.color2.l, b.color2.l),
            (a.color3.h, b.color3.h),
            (a.color3.s, b.color3.s),
            (a.color3.l, b.color3.l),
            (a.angle, b.angle),
            (a.stop1, b.stop1),
            (a.stop_mid, b.stop_mid),
            (a.stop2, b.stop2),
        ];
        for (x, y) in pairs.iter() {
            assert!((x - y).abs() < TOLERANCE, "{} != {}", x, y);
        }
    }

    #[test]
    fn smoothstep_hits_its_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn smoothstep_is_monotonic_on_the_unit_interval() {
        let mut previous = smoothstep(0.0);
        for i in 1..=100 {
            let value = smoothstep(i as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn emitted_gradient_is_continuous_across_the_cycle_seam() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut cycle = GradientCycle::new(1000.0, 4000.0, &mut rng);

        let end_of_first = cycle.frame(5000.0, &mut rng);
        let start_of_second = cycle.frame(5000.0, &mut rng);
        assert_frames_match(&end_of_first, &start_of_second);
    }

    #[test]
    fn mid_cycle_sample_sits_between_its_endpoints() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cycle = GradientCycle::new(0.0, 1000.0, &mut rng);
        let frame = cycle.frame(500.0, &mut rng);
        assert!(frame.stop1 >= 0.0 && frame.stop1 <= 30.0);
        assert!(frame.stop2 >= 70.0 && frame.stop2 <= 100.0);
        assert!(frame.stop_mid > frame.stop1 && frame.stop_mid < frame.stop2);
    }

    #[test]
    fn degenerate_cycle_durations_are_clamped() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut zero = GradientCycle::new(0.0, 0.0, &mut rng);
        let mut negative = GradientCycle::new(0.0, -250.0, &mut rng);
        let mut nan = GradientCycle::new(0.0, f64::NAN, &mut rng);
        // None of these may divide by zero or emit NaN
        for cycle in [&mut zero, &mut negative, &mut nan].iter_mut() {
            let frame = cycle.frame(10.0, &mut rng);
            assert!(frame.angle.is_finite());
            assert!(frame.stop_mid.is_finite());
        }
    }

    #[test]
    fn css_serialization_shape() {
        let frame = GradientFrame {
            color1: Hsl::new(0.0, 60.0, 55.0),
            color2: Hsl::new(120.0, 75.0, 65.0),
            color3: Hsl::new(240.0, 90.0, 75.0),
            angle: 90.0,
            stop1: 10.0,
            stop_mid: 50.0,
            stop2: 90.0,
        };
        assert_eq!(
            frame.to_css(),
            "linear-gradient(90.0deg, hsl(0.0, 60.0%, 55.0%) 10.0%, \
             hsl(120.0, 75.0%, 65.0%) 50.0%, hsl(240.0, 90.0%, 75.0%) 90.0%)"
        );
    }
}
