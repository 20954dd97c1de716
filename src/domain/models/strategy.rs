//! Weighting strategy model.
//!
//! A strategy is a named weight profile over the four normalized
//! metrics. The set is closed: every variant carries its fixed weight
//! vector, and unknown names resolve to the default profile instead of
//! failing.

use serde::{Deserialize, Serialize};

/// Relative influence of each normalized metric on the composite score.
///
/// Each profile's weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight of the urgency metric (deadline pressure).
    pub urgency: f64,
    /// Weight of the importance metric.
    pub importance: f64,
    /// Weight of the effort metric (quick wins).
    pub effort: f64,
    /// Weight of the dependency-blocking metric.
    pub dependencies: f64,
}

/// Named weighting profile selecting how the four metrics combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Balanced default: urgency and importance dominate.
    SmartBalance,
    /// Favor small efforts to clear quick wins first.
    FastestWins,
    /// Favor stated importance above everything else.
    HighImpact,
    /// Favor deadline pressure above everything else.
    DeadlineDriven,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::SmartBalance
    }
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::SmartBalance,
        Self::FastestWins,
        Self::HighImpact,
        Self::DeadlineDriven,
    ];

    /// The fixed weight vector this strategy applies.
    pub const fn weights(self) -> Weights {
        match self {
            Self::SmartBalance => Weights {
                urgency: 0.35,
                importance: 0.35,
                effort: 0.15,
                dependencies: 0.15,
            },
            Self::FastestWins => Weights {
                urgency: 0.15,
                importance: 0.2,
                effort: 0.5,
                dependencies: 0.15,
            },
            Self::HighImpact => Weights {
                urgency: 0.15,
                importance: 0.6,
                effort: 0.1,
                dependencies: 0.15,
            },
            Self::DeadlineDriven => Weights {
                urgency: 0.6,
                importance: 0.2,
                effort: 0.05,
                dependencies: 0.15,
            },
        }
    }

    /// Stable wire name of this strategy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmartBalance => "smart_balance",
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
        }
    }

    /// Resolve a strategy name, falling back to [`Strategy::SmartBalance`]
    /// for anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "smart_balance" => Self::SmartBalance,
            "fastest_wins" => Self::FastestWins,
            "high_impact" => Self::HighImpact,
            "deadline_driven" => Self::DeadlineDriven,
            other => {
                tracing::warn!(strategy = other, "unknown strategy, using smart_balance");
                Self::SmartBalance
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
