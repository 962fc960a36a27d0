//! Colour ramps for layer overlays.
//!
//! Each simulated layer has a base hue; the cell value (0..=100) drives the
//! opacity of that hue. Road access and density also get continuous ramps
//! for heat-map style previews.

use bevy::prelude::*;

use citygen::layers::LayerKind;

// ---------------------------------------------------------------------------
// Continuous colour ramps
// ---------------------------------------------------------------------------

/// A continuous colour ramp defined by evenly-spaced sRGB control points.
/// Interpolates linearly in sRGB space for a given `t` in `[0, 1]`.
pub struct ColorRamp {
    points: &'static [[f32; 3]],
}

impl ColorRamp {
    /// Sample the ramp at parameter `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let n = self.points.len();
        if n == 0 {
            return Color::BLACK;
        }
        if n == 1 {
            let p = self.points[0];
            return Color::srgb(p[0], p[1], p[2]);
        }
        let scaled = t * (n - 1) as f32;
        let lo = (scaled as usize).min(n - 2);
        let frac = scaled - lo as f32;
        let (a, b) = (self.points[lo], self.points[lo + 1]);
        Color::srgb(
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        )
    }

    /// Samples the ramp at `value / 100`.
    pub fn sample_value(&self, value: i32) -> Color {
        self.sample(value as f32 / 100.0)
    }
}

/// No access (dark red) to full access (green).
pub static ACCESS_RAMP: ColorRamp = ColorRamp {
    points: &[
        [0.35, 0.05, 0.05],
        [0.70, 0.25, 0.10],
        [0.85, 0.60, 0.15],
        [0.60, 0.75, 0.20],
        [0.20, 0.70, 0.30],
    ],
};

/// Sparse (pale) to dense (deep violet).
pub static DENSITY_RAMP: ColorRamp = ColorRamp {
    points: &[
        [0.95, 0.93, 0.88],
        [0.80, 0.65, 0.80],
        [0.55, 0.35, 0.70],
        [0.30, 0.10, 0.50],
    ],
};

// ---------------------------------------------------------------------------
// Per-layer tints
// ---------------------------------------------------------------------------

/// Base colour of a layer overlay; opacity comes from the cell value.
pub fn layer_tint(kind: LayerKind) -> Color {
    match kind {
        LayerKind::Water => Color::srgb(0.0, 0.0, 1.0),
        LayerKind::Electricity => Color::srgb(1.0, 1.0, 0.0),
        LayerKind::Satisfaction => Color::srgb(0.0, 1.0, 0.0),
        LayerKind::Pollution => Color::srgb(1.0, 1.0, 0.0),
        LayerKind::Density => DENSITY_RAMP.sample(1.0),
        LayerKind::RoadAccess => ACCESS_RAMP.sample(1.0),
        LayerKind::Security => Color::srgb(0.0, 0.0, 1.0),
    }
}

/// Opacity for a layer value: `value / 100`, clamped.
#[inline]
pub fn value_alpha(value: i32) -> f32 {
    (value as f32 / 100.0).clamp(0.0, 1.0)
}

/// Blend a base colour toward a tint using the tint's alpha.
pub fn blend_tint(base: Color, tint: Color) -> Color {
    let b = base.to_srgba().to_f32_array();
    let t = tint.to_srgba().to_f32_array();
    let a = t[3];
    Color::srgb(
        b[0] * (1.0 - a) + t[0] * a,
        b[1] * (1.0 - a) + t[1] * a,
        b[2] * (1.0 - a) + t[2] * a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(c: Color) -> (f32, f32, f32) {
        let s = c.to_srgba();
        (s.red, s.green, s.blue)
    }

    #[test]
    fn access_ramp_endpoints() {
        let (r0, g0, _) = rgb(ACCESS_RAMP.sample(0.0));
        assert!(r0 > g0, "no access should read as red");
        let (r1, g1, _) = rgb(ACCESS_RAMP.sample_value(100));
        assert!(g1 > r1, "full access should read as green");
    }

    #[test]
    fn sample_clamps_out_of_range() {
        assert_eq!(rgb(DENSITY_RAMP.sample(-3.0)), rgb(DENSITY_RAMP.sample(0.0)));
        assert_eq!(rgb(DENSITY_RAMP.sample(7.0)), rgb(DENSITY_RAMP.sample(1.0)));
    }

    #[test]
    fn value_alpha_scales_and_clamps() {
        assert_eq!(value_alpha(0), 0.0);
        assert!((value_alpha(50) - 0.5).abs() < 1e-6);
        assert_eq!(value_alpha(250), 1.0);
        assert_eq!(value_alpha(-5), 0.0);
    }

    #[test]
    fn water_is_blue() {
        let (r, g, b) = rgb(layer_tint(LayerKind::Water));
        assert!(b > r && b > g);
    }

    #[test]
    fn blend_with_transparent_tint_keeps_base() {
        let base = Color::srgb(0.2, 0.4, 0.6);
        let out = blend_tint(base, Color::srgba(1.0, 0.0, 0.0, 0.0));
        let (r, g, b) = rgb(out);
        assert!((r - 0.2).abs() < 1e-5 && (g - 0.4).abs() < 1e-5 && (b - 0.6).abs() < 1e-5);
    }
}
