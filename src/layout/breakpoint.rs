/// Device class selected by viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    /// Every device class, in stylesheet order (mobile-first).
    pub const ALL: [Breakpoint; 2] = [Breakpoint::Narrow, Breakpoint::Wide];

    /// Classify a viewport width. The threshold itself counts as wide.
    pub fn classify(width_px: u32, rule: &BreakpointRule) -> Self {
        if width_px >= rule.min_wide_px {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }

    /// Class carried by markup that only exists for this device class.
    pub fn only_class(self) -> &'static str {
        match self {
            Self::Narrow => "only-narrow",
            Self::Wide => "only-wide",
        }
    }
}

/// Single width threshold between the two device classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BreakpointRule {
    pub min_wide_px: u32,
}

impl Default for BreakpointRule {
    fn default() -> Self {
        Self { min_wide_px: 768 }
    }
}

impl BreakpointRule {
    /// Media condition under which `bp` applies, or `None` for the mobile-first base.
    ///
    /// `min-width` is inclusive, matching [`Breakpoint::classify`].
    pub fn media_condition(&self, bp: Breakpoint) -> Option<String> {
        match bp {
            Breakpoint::Narrow => None,
            Breakpoint::Wide => Some(format!("(min-width: {}px)", self.min_wide_px)),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_wide_px == 0 {
            return Err("breakpoint min_wide_px must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/breakpoint.rs"]
mod tests;
