//! Evaluate filter effects on a color
//!
//! Uses the Filter Effects Module matrices (the same ones browsers use for
//! the CSS shorthand functions), operating on normalized sRGB values and
//! clamping between primitives.

use super::{FilterDescription, FilterEffect};
use crate::color::Rgb;

type Matrix3 = [[f64; 3]; 3];

impl FilterDescription {
    /// Tint a color with this filter.
    pub fn apply(&self, color: Rgb) -> Rgb {
        if self.is_no_effect() {
            return color;
        }

        let mut rgb = color.to_unit();
        for effect in self.effects() {
            rgb = effect.apply_unit(rgb);
        }
        Rgb::from_unit(rgb)
    }
}

impl FilterEffect {
    /// Apply to a normalized color; the result is clamped to 0.0-1.0.
    pub fn apply_unit(&self, rgb: [f64; 3]) -> [f64; 3] {
        let out = match *self {
            FilterEffect::Sepia(percent) => mul(&sepia_matrix(percent / 100.0), rgb),
            FilterEffect::HueRotate(degrees) => mul(&hue_rotate_matrix(degrees), rgb),
            FilterEffect::Saturate(percent) => mul(&saturate_matrix(percent / 100.0), rgb),
            FilterEffect::Brightness(percent) => {
                let k = (percent / 100.0).max(0.0);
                [rgb[0] * k, rgb[1] * k, rgb[2] * k]
            }
        };
        [
            out[0].clamp(0.0, 1.0),
            out[1].clamp(0.0, 1.0),
            out[2].clamp(0.0, 1.0),
        ]
    }
}

#[inline]
fn mul(m: &Matrix3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

fn sepia_matrix(amount: f64) -> Matrix3 {
    let inv = 1.0 - amount.clamp(0.0, 1.0);
    [
        [0.393 + 0.607 * inv, 0.769 - 0.769 * inv, 0.189 - 0.189 * inv],
        [0.349 - 0.349 * inv, 0.686 + 0.314 * inv, 0.168 - 0.168 * inv],
        [0.272 - 0.272 * inv, 0.534 - 0.534 * inv, 0.131 + 0.869 * inv],
    ]
}

fn saturate_matrix(s: f64) -> Matrix3 {
    let s = s.max(0.0);
    [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ]
}

fn hue_rotate_matrix(degrees: f64) -> Matrix3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}
