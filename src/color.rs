// HSL color handling for the gradient text fill

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Hsl {
        Hsl { h, s, l }
    }

    // Vivid pastel gamut: full hue wheel, 60-90% saturation, 55-75% lightness
    pub fn random<R: Rng>(rng: &mut R) -> Hsl {
        Hsl {
            h: rng.gen::<f64>() * 360.0,
            s: 60.0 + rng.gen::<f64>() * 30.0,
            l: 55.0 + rng.gen::<f64>() * 20.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!("hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// Interpolate an angle in degrees along the shortest arc, never taking the
// long way around the wheel. The result is wrapped into [0, 360).
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let mut diff = b - a;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    let mut result = a + diff * t;
    if result < 0.0 {
        result += 360.0;
    }
    if result >= 360.0 {
        result -= 360.0;
    }
    result
}

// Hue goes shortest-arc, saturation and lightness are plain linear
pub fn lerp_hsl(a: Hsl, b: Hsl, t: f64) -> Hsl {
    Hsl {
        h: lerp_angle(a.h, b.h, t),
        s: lerp(a.s, b.s, t),
        l: lerp(a.l, b.l, t),
    }
}
