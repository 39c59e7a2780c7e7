//! Damage multipliers

/// A damage multiplier reachable by one or two type relations
///
/// Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Multiplier {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

impl Multiplier {
    pub const ALL: [Multiplier; 6] = [
        Multiplier::Immune,
        Multiplier::Quarter,
        Multiplier::Half,
        Multiplier::Neutral,
        Multiplier::Double,
        Multiplier::Quadruple,
    ];

    /// Classify a computed multiplier; `None` outside {0, ¼, ½, 1, 2, 4}
    pub fn from_value(value: f32) -> Option<Self> {
        match value {
            v if v == 0.0 => Some(Multiplier::Immune),
            v if v == 0.25 => Some(Multiplier::Quarter),
            v if v == 0.5 => Some(Multiplier::Half),
            v if v == 1.0 => Some(Multiplier::Neutral),
            v if v == 2.0 => Some(Multiplier::Double),
            v if v == 4.0 => Some(Multiplier::Quadruple),
            _ => None,
        }
    }

    pub fn value(self) -> f32 {
        match self {
            Multiplier::Immune => 0.0,
            Multiplier::Quarter => 0.25,
            Multiplier::Half => 0.5,
            Multiplier::Neutral => 1.0,
            Multiplier::Double => 2.0,
            Multiplier::Quadruple => 4.0,
        }
    }

    /// Bucket heading, e.g. `200% (x2)`
    pub fn label(self) -> &'static str {
        match self {
            Multiplier::Immune => "0% (x0)",
            Multiplier::Quarter => "25% (x1/4)",
            Multiplier::Half => "50% (x1/2)",
            Multiplier::Neutral => "100% (x1)",
            Multiplier::Double => "200% (x2)",
            Multiplier::Quadruple => "400% (x4)",
        }
    }

    /// Compact form for chart cells
    pub fn cell(self) -> &'static str {
        match self {
            Multiplier::Immune => "0",
            Multiplier::Quarter => "¼",
            Multiplier::Half => "½",
            Multiplier::Neutral => "1",
            Multiplier::Double => "2",
            Multiplier::Quadruple => "4",
        }
    }

    pub fn is_super_effective(self) -> bool {
        self > Multiplier::Neutral
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
