//! Ordinal risk levels and their comparison rules.

use serde::{Deserialize, Serialize};

/// Risk level assigned to a scan result.
///
/// The derived `Ord` follows the ordinal value, so
/// `Acceptable < Low < Medium < High < Informational`. `Informational` is a
/// separate tag rather than a real escalation: it is excluded from "worst
/// issue" ranking via [`Severity::is_actionable`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// No action needed, the check passed.
    #[default]
    Acceptable = 0,
    /// Low risk.
    Low = 1,
    /// Medium risk.
    Medium = 2,
    /// High risk.
    High = 3,
    /// Informational result, never ranked as a risk.
    Informational = 4,
}

impl Severity {
    /// All levels in ordinal order.
    pub const ALL: [Severity; 5] = [
        Severity::Acceptable,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Informational,
    ];

    /// Returns the canonical display form for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Acceptable => "Acceptable",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Informational => "Info",
        }
    }

    /// Returns `false` only for [`Severity::Informational`].
    ///
    /// Non-actionable levels never participate in suggested-issue ranking.
    #[must_use]
    pub const fn is_actionable(self) -> bool {
        !matches!(self, Severity::Informational)
    }

    /// Display-ordering rank used by the issue table.
    ///
    /// Unlike the ordinal value, `Informational` ranks *below* `Low` here:
    /// an informational row is the least pressing thing shown in the table.
    /// Sorting always uses this rank, never the localized label text, so the
    /// order is stable across locales.
    #[must_use]
    pub const fn risk_rank(self) -> u8 {
        match self {
            Severity::Acceptable => 0,
            Severity::Informational => 1,
            Severity::Low => 2,
            Severity::Medium => 3,
            Severity::High => 4,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Severity::Acceptable),
            1 => Ok(Severity::Low),
            2 => Ok(Severity::Medium),
            3 => Ok(Severity::High),
            4 => Ok(Severity::Informational),
            other => Err(format!("invalid severity ordinal: {other}")),
        }
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn ordinal_ordering() {
        assert!(Severity::Acceptable < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn only_informational_is_not_actionable() {
        for level in Severity::ALL {
            assert_eq!(level.is_actionable(), level != Severity::Informational);
        }
    }

    #[test]
    fn informational_ranks_below_low_in_the_table() {
        assert!(Severity::Informational.risk_rank() < Severity::Low.risk_rank());
        assert!(Severity::High.risk_rank() > Severity::Medium.risk_rank());
    }

    #[test]
    fn ordinal_round_trip() {
        for level in Severity::ALL {
            assert_eq!(Severity::try_from(u8::from(level)), Ok(level));
        }
        assert!(Severity::try_from(5).is_err());
    }
}
