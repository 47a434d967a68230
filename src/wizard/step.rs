//! Calculator steps

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four linear steps of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Direction,
    Package,
    TimelineAndAddons,
    ContactRequest,
}

impl WizardStep {
    pub const FIRST: Self = Self::Direction;
    pub const LAST: Self = Self::ContactRequest;

    /// 1-based position of the step
    pub fn number(self) -> u8 {
        match self {
            Self::Direction => 1,
            Self::Package => 2,
            Self::TimelineAndAddons => 3,
            Self::ContactRequest => 4,
        }
    }

    /// The following step, or `None` on the last one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Direction => Some(Self::Package),
            Self::Package => Some(Self::TimelineAndAddons),
            Self::TimelineAndAddons => Some(Self::ContactRequest),
            Self::ContactRequest => None,
        }
    }

    /// The preceding step, or `None` on the first one
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Direction => None,
            Self::Package => Some(Self::Direction),
            Self::TimelineAndAddons => Some(Self::Package),
            Self::ContactRequest => Some(Self::TimelineAndAddons),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Direction => "Choose direction",
            Self::Package => "Choose package",
            Self::TimelineAndAddons => "Timeline",
            Self::ContactRequest => "Request a proposal",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}/4", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_order() {
        let mut step = WizardStep::FIRST;
        let mut seen = vec![step.number()];
        while let Some(next) = step.next() {
            step = next;
            seen.push(step.number());
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(step, WizardStep::LAST);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(WizardStep::Direction.prev(), None);
        assert_eq!(WizardStep::ContactRequest.next(), None);
        assert_eq!(WizardStep::Package.prev(), Some(WizardStep::Direction));
    }

    #[test]
    fn test_display() {
        assert_eq!(WizardStep::TimelineAndAddons.to_string(), "Step 3/4");
    }
}
