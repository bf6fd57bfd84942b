use crate::animation::ease::Ease;

/// Keyframe programs used by the one-shot entrance effects.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Keyframes {
    /// Outline draws itself by animating `stroke-dashoffset` from `dash_length` to 0.
    DrawRect { dash_length: f64 },
    /// Opacity 0 -> 1 while rising by `rise_px`.
    FadeIn { rise_px: f64 },
    /// Opacity 1 -> 0.
    FadeOut,
}

impl Keyframes {
    pub fn name(self) -> &'static str {
        match self {
            Self::DrawRect { .. } => "drawRect",
            Self::FadeIn { .. } => "fadeIn",
            Self::FadeOut => "fadeOut",
        }
    }

    /// `@keyframes` rule for this program.
    pub fn css(self) -> String {
        match self {
            Self::DrawRect { dash_length } => format!(
                "@keyframes drawRect {{\n  0% {{ stroke-dashoffset: {dash_length}; }}\n  100% {{ stroke-dashoffset: 0; }}\n}}\n"
            ),
            Self::FadeIn { rise_px } => format!(
                "@keyframes fadeIn {{\n  0% {{ opacity: 0; transform: translateY({rise_px}px); }}\n  100% {{ opacity: 1; transform: translateY(0); }}\n}}\n"
            ),
            Self::FadeOut => {
                "@keyframes fadeOut {\n  0% { opacity: 1; }\n  100% { opacity: 0; }\n}\n".to_string()
            }
        }
    }

    /// Declarations the element carries before the animation starts.
    ///
    /// With `animation-fill-mode: forwards` these also hold during the delay.
    fn initial_declarations(self) -> Vec<String> {
        match self {
            Self::DrawRect { dash_length } => vec![
                format!("stroke-dasharray: {dash_length};"),
                format!("stroke-dashoffset: {dash_length};"),
            ],
            Self::FadeIn { .. } => vec!["opacity: 0;".to_string()],
            Self::FadeOut => Vec::new(),
        }
    }
}

/// A single entrance effect: runs once after page load and holds its final state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceAnimation {
    pub keyframes: Keyframes,
    pub duration_s: f64,
    #[serde(default)]
    pub delay_s: f64,
    pub ease: Ease,
}

/// Values of an entrance effect at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntranceSample {
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    pub opacity: f64,
    pub translate_y_px: f64,
    /// Remaining dash offset; `None` for non-stroke programs.
    pub dash_offset: Option<f64>,
}

impl EntranceAnimation {
    pub fn validate(&self) -> Result<(), String> {
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(format!(
                "{} duration must be > 0 seconds",
                self.keyframes.name()
            ));
        }
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(format!(
                "{} delay must be >= 0 seconds",
                self.keyframes.name()
            ));
        }
        match self.keyframes {
            Keyframes::DrawRect { dash_length } if !dash_length.is_finite() || dash_length <= 0.0 => {
                return Err("drawRect dash_length must be > 0".to_string());
            }
            Keyframes::FadeIn { rise_px } if !rise_px.is_finite() => {
                return Err("fadeIn rise_px must be finite".to_string());
            }
            _ => {}
        }
        self.ease.validate()
    }

    /// Time at which the effect reaches its final state.
    pub fn end_s(&self) -> f64 {
        self.delay_s + self.duration_s
    }

    /// Sample at `t_s` seconds after the page was first displayed.
    ///
    /// Only load time is an input: scroll position cannot restart or rewind
    /// the effect.
    pub fn sample(&self, t_s: f64) -> EntranceSample {
        let local = if t_s.is_finite() {
            ((t_s - self.delay_s) / self.duration_s).clamp(0.0, 1.0)
        } else if t_s > 0.0 {
            1.0
        } else {
            0.0
        };
        let progress = self.ease.apply(local);

        match self.keyframes {
            Keyframes::DrawRect { dash_length } => EntranceSample {
                progress,
                opacity: 1.0,
                translate_y_px: 0.0,
                dash_offset: Some(dash_length * (1.0 - progress)),
            },
            Keyframes::FadeIn { rise_px } => EntranceSample {
                progress,
                opacity: progress,
                translate_y_px: rise_px * (1.0 - progress),
                dash_offset: None,
            },
            Keyframes::FadeOut => EntranceSample {
                progress,
                opacity: 1.0 - progress,
                translate_y_px: 0.0,
                dash_offset: None,
            },
        }
    }

    /// Class rule applying this effect exactly once.
    pub fn class_css(&self, class: &str) -> String {
        let mut decls = self.keyframes.initial_declarations();
        decls.push(format!(
            "animation: {} {}s {} {}s 1 normal forwards;",
            self.keyframes.name(),
            self.duration_s,
            self.ease.css(),
            self.delay_s
        ));
        let body: String = decls.iter().map(|d| format!("  {d}\n")).collect();
        format!(".{class} {{\n{body}}}\n")
    }
}

/// The three entrance effects of the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceConfig {
    pub border_trace: EntranceAnimation,
    pub border_fade: EntranceAnimation,
    pub content_fade: EntranceAnimation,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            border_trace: EntranceAnimation {
                keyframes: Keyframes::DrawRect {
                    dash_length: 10_000.0,
                },
                duration_s: 6.0,
                delay_s: 0.0,
                ease: Ease::CubicBezier {
                    x1: 0.25,
                    y1: 1.0,
                    x2: 0.5,
                    y2: 1.0,
                },
            },
            border_fade: EntranceAnimation {
                keyframes: Keyframes::FadeOut,
                duration_s: 3.0,
                delay_s: 1.0,
                ease: Ease::EaseOut,
            },
            content_fade: EntranceAnimation {
                keyframes: Keyframes::FadeIn { rise_px: 10.0 },
                duration_s: 4.0,
                delay_s: 1.0,
                ease: Ease::EaseOut,
            },
        }
    }
}

impl EntranceConfig {
    pub const BORDER_TRACE_CLASS: &'static str = "animate-draw-rect";
    pub const BORDER_FADE_CLASS: &'static str = "animate-trace-fade-out";
    pub const CONTENT_FADE_CLASS: &'static str = "animate-fade-in-delayed";

    /// Each effect must be valid, and effects sharing a keyframe name must
    /// share its parameters: the stylesheet emits one `@keyframes` per name.
    pub fn validate(&self) -> Result<(), String> {
        let classes = self.classes();
        for (_, anim) in classes {
            anim.validate()?;
        }
        for (i, (class, anim)) in classes.iter().enumerate() {
            for (other_class, other) in &classes[i + 1..] {
                if anim.keyframes.name() == other.keyframes.name()
                    && anim.keyframes != other.keyframes
                {
                    return Err(format!(
                        "{class} and {other_class} both use {} keyframes with different parameters",
                        anim.keyframes.name()
                    ));
                }
            }
        }
        Ok(())
    }

    /// `(class, animation)` pairs in stylesheet order.
    pub fn classes(&self) -> [(&'static str, &EntranceAnimation); 3] {
        [
            (Self::BORDER_TRACE_CLASS, &self.border_trace),
            (Self::BORDER_FADE_CLASS, &self.border_fade),
            (Self::CONTENT_FADE_CLASS, &self.content_fade),
        ]
    }

    /// All keyframe rules plus the class rules, deduplicated by keyframe name.
    pub fn css(&self) -> String {
        let mut out = String::new();
        let mut seen: Vec<&'static str> = Vec::new();
        for (_, anim) in self.classes() {
            let name = anim.keyframes.name();
            if seen.contains(&name) {
                continue;
            }
            seen.push(name);
            out.push_str(&anim.keyframes.css());
        }
        for (class, anim) in self.classes() {
            out.push_str(&anim.class_css(class));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
