//! Easing curves selectable from keyframe easing codes.

use std::f64::consts::PI;

/// Progress curve applied to one move action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Interpolation {
    /// Identity.
    Linear,
    /// Sine ease in and out.
    Sine,
    /// Sine ease in.
    SineIn,
    /// Sine ease out.
    SineOut,
    /// Base-2 exponential (power 10) in and out.
    Exp10,
    /// Base-2 exponential (power 10) ease in.
    Exp10In,
    /// Base-2 exponential (power 10) ease out.
    Exp10Out,
    /// Circular in and out.
    Circle,
    /// Circular ease in.
    CircleIn,
    /// Circular ease out.
    CircleOut,
    /// Damped oscillation in and out.
    Elastic,
    /// Damped oscillation ease in.
    ElasticIn,
    /// Damped oscillation ease out.
    ElasticOut,
    /// Four-bounce in and out.
    Bounce,
    /// Four-bounce ease in.
    BounceIn,
    /// Four-bounce ease out.
    BounceOut,
}

const EXP_VALUE: f64 = 2.0;
const EXP_POWER: f64 = 10.0;
const BOUNCE_WIDTHS: [f64; 4] = [0.68, 0.34, 0.2, 0.15];
const BOUNCE_HEIGHTS: [f64; 4] = [1.0, 0.26, 0.11, 0.03];

impl Interpolation {
    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let a = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => a,
            Self::Sine => (1.0 - (a * PI).cos()) / 2.0,
            Self::SineIn => 1.0 - (a * PI / 2.0).cos(),
            Self::SineOut => (a * PI / 2.0).sin(),
            Self::Exp10 => {
                let (min, scale) = exp_bounds();
                if a <= 0.5 {
                    (EXP_VALUE.powf(EXP_POWER * (a * 2.0 - 1.0)) - min) * scale / 2.0
                } else {
                    (2.0 - (EXP_VALUE.powf(-EXP_POWER * (a * 2.0 - 1.0)) - min) * scale) / 2.0
                }
            }
            Self::Exp10In => {
                let (min, scale) = exp_bounds();
                (EXP_VALUE.powf(EXP_POWER * (a - 1.0)) - min) * scale
            }
            Self::Exp10Out => {
                let (min, scale) = exp_bounds();
                1.0 - (EXP_VALUE.powf(-EXP_POWER * a) - min) * scale
            }
            Self::Circle => {
                if a <= 0.5 {
                    let a = a * 2.0;
                    (1.0 - (1.0 - a * a).sqrt()) / 2.0
                } else {
                    let a = (a - 1.0) * 2.0;
                    ((1.0 - a * a).sqrt() + 1.0) / 2.0
                }
            }
            Self::CircleIn => 1.0 - (1.0 - a * a).sqrt(),
            Self::CircleOut => {
                let a = a - 1.0;
                (1.0 - a * a).sqrt()
            }
            Self::Elastic => {
                let bounces = elastic_bounces(7.0);
                if a <= 0.5 {
                    let a = a * 2.0;
                    elastic_term(a, bounces) / 2.0
                } else {
                    let a = (1.0 - a) * 2.0;
                    1.0 - elastic_term(a, bounces) / 2.0
                }
            }
            Self::ElasticIn => {
                if a >= 0.99 {
                    return 1.0;
                }
                elastic_term(a, elastic_bounces(6.0))
            }
            Self::ElasticOut => {
                if a == 0.0 {
                    return 0.0;
                }
                1.0 - elastic_term(1.0 - a, elastic_bounces(7.0))
            }
            Self::Bounce => {
                if a <= 0.5 {
                    (1.0 - bounce_inner(1.0 - a * 2.0)) / 2.0
                } else {
                    bounce_inner(a * 2.0 - 1.0) / 2.0 + 0.5
                }
            }
            Self::BounceIn => 1.0 - bounce_out(1.0 - a),
            Self::BounceOut => bounce_out(a),
        }
    }
}

fn exp_bounds() -> (f64, f64) {
    let min = EXP_VALUE.powf(-EXP_POWER);
    (min, 1.0 / (1.0 - min))
}

// Odd bounce counts flip the phase so the curve settles from the correct side.
fn elastic_bounces(count: f64) -> f64 {
    let sign = if count % 2.0 == 0.0 { 1.0 } else { -1.0 };
    count * PI * sign
}

fn elastic_term(a: f64, bounces: f64) -> f64 {
    EXP_VALUE.powf(EXP_POWER * (a - 1.0)) * (a * bounces).sin()
}

fn bounce_out(a: f64) -> f64 {
    if a == 1.0 {
        return 1.0;
    }
    let mut a = a + BOUNCE_WIDTHS[0] / 2.0;
    let mut width = 0.0;
    let mut height = 0.0;
    for (w, h) in BOUNCE_WIDTHS.iter().zip(BOUNCE_HEIGHTS) {
        width = *w;
        if a <= width {
            height = h;
            break;
        }
        a -= width;
    }
    a /= width;
    let z = 4.0 / width * height * a;
    1.0 - (z - z * a) * width
}

fn bounce_inner(a: f64) -> f64 {
    let test = a + BOUNCE_WIDTHS[0] / 2.0;
    if test < BOUNCE_WIDTHS[0] {
        return test / (BOUNCE_WIDTHS[0] / 2.0) - 1.0;
    }
    bounce_out(a)
}

/// Curve selected by an editor easing code.
///
/// Codes `0..=30` always yield a curve; families without a dedicated variant (quad, cubic,
/// quart, quint, back) play linearly. Any other code returns `None`.
pub fn curve_for(code: i32) -> Option<Interpolation> {
    use Interpolation::*;
    Some(match code {
        0 => Linear,
        1 => SineIn,
        2 => SineOut,
        3 => Sine,
        4..=15 => Linear,
        16 => Exp10In,
        17 => Exp10Out,
        18 => Exp10,
        19 => CircleIn,
        20 => CircleOut,
        21 => Circle,
        22 => ElasticIn,
        23 => ElasticOut,
        24 => Elastic,
        25..=27 => Linear,
        28 => BounceIn,
        29 => BounceOut,
        30 => Bounce,
        _ => return None,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
