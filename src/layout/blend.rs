use crate::foundation::core::{Point, Rect, Rgba8};

/// Axis along which the panel tint varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GradientDirection {
    /// Top edge of the panel at 0, bottom edge at 1.
    ToBottom,
    /// Left edge of the panel at 0, right edge at 1.
    ToRight,
}

impl GradientDirection {
    pub fn css(self) -> &'static str {
        match self {
            Self::ToBottom => "to bottom",
            Self::ToRight => "to right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the gradient line in `[0, 1]`.
    pub offset: f64,
    pub color: Rgba8,
}

/// Static translucency rule of the scrolling panel ("glass panel").
///
/// The tint is a pure function of the position inside the panel; nothing
/// here depends on scroll position or time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlassBlend {
    pub direction: GradientDirection,
    pub stops: Vec<GradientStop>,
    /// `backdrop-filter: blur(..)` radius in CSS pixels (Gaussian sigma).
    pub backdrop_blur_px: f64,
}

const PANEL: Rgba8 = Rgba8::opaque(250, 250, 249);
const GLASS_ALPHA: f64 = 0.4;

impl GlassBlend {
    /// Vertical rule: translucent head of the panel, solid remainder.
    ///
    /// The third stop sits before the second; stop fix-up turns the pair into
    /// a hard edge at 45%.
    pub fn narrow_default() -> Self {
        let glass = PANEL.with_alpha(GLASS_ALPHA);
        Self {
            direction: GradientDirection::ToBottom,
            stops: vec![
                GradientStop { offset: 0.0, color: glass },
                GradientStop { offset: 0.45, color: glass },
                GradientStop { offset: 0.351, color: PANEL },
                GradientStop { offset: 1.0, color: PANEL },
            ],
            backdrop_blur_px: 12.0,
        }
    }

    /// Horizontal rule: solid left half under the text column, glass right half.
    pub fn wide_default() -> Self {
        let glass = PANEL.with_alpha(GLASS_ALPHA);
        Self {
            direction: GradientDirection::ToRight,
            stops: vec![
                GradientStop { offset: 0.0, color: PANEL },
                GradientStop { offset: 0.5, color: PANEL },
                GradientStop { offset: 0.501, color: glass },
                GradientStop { offset: 1.0, color: glass },
            ],
            backdrop_blur_px: 12.0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.stops.len() < 2 {
            return Err("glass blend needs at least two stops".to_string());
        }
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(format!(
                    "glass blend stop offset {} must be within [0, 1]",
                    stop.offset
                ));
            }
        }
        if !self.backdrop_blur_px.is_finite() || self.backdrop_blur_px < 0.0 {
            return Err("backdrop blur must be >= 0".to_string());
        }
        Ok(())
    }

    /// Stops after CSS fix-up: each offset is raised to the largest offset before it.
    pub fn resolved_stops(&self) -> Vec<GradientStop> {
        let mut max_seen = 0.0f64;
        self.stops
            .iter()
            .map(|s| {
                max_seen = max_seen.max(s.offset);
                GradientStop {
                    offset: max_seen,
                    color: s.color,
                }
            })
            .collect()
    }

    /// Tint color at gradient position `t`.
    pub fn color_at(&self, t: f64) -> Rgba8 {
        let stops = self.resolved_stops();
        let Some(first) = stops.first() else {
            return Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            };
        };
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        if t < first.offset {
            return first.color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t < b.offset {
                let span = b.offset - a.offset;
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        stops[stops.len() - 1].color
    }

    /// Tint opacity at gradient position `t`; 1 hides the hero entirely.
    pub fn alpha_at(&self, t: f64) -> f64 {
        self.color_at(t).alpha_f64()
    }

    /// Gradient position of `p` inside `panel` (both in the same space).
    pub fn position_in(&self, panel: Rect, p: Point) -> f64 {
        let t = match self.direction {
            GradientDirection::ToBottom => (p.y - panel.y0) / panel.height(),
            GradientDirection::ToRight => (p.x - panel.x0) / panel.width(),
        };
        if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
    }

    /// `linear-gradient(..)` value with the stops as authored.
    pub fn css_background(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color.css(), fmt_percent(s.offset)))
            .collect();
        format!(
            "linear-gradient({}, {})",
            self.direction.css(),
            stops.join(", ")
        )
    }
}

fn fmt_percent(offset: f64) -> String {
    let pct = (offset * 100.0 * 1000.0).round() / 1000.0;
    format!("{pct}")
}

#[cfg(test)]
#[path = "../../tests/unit/layout/blend.rs"]
mod tests;
