/// The four named wizard states, in navigation order.
///
/// Steps form a fixed sequence; there are no arbitrary jumps. `next` and
/// `previous` clamp at the boundaries, which is the documented policy for
/// the two edges of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    Targeting,
    Messaging,
    Execution,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Targeting,
        WizardStep::Messaging,
        WizardStep::Execution,
        WizardStep::Review,
    ];

    /// 1-based position, matching how the steps are numbered for users.
    pub fn index(self) -> u8 {
        match self {
            WizardStep::Targeting => 1,
            WizardStep::Messaging => 2,
            WizardStep::Execution => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Targeting => "Targeting",
            WizardStep::Messaging => "Messaging",
            WizardStep::Execution => "Schedule",
            WizardStep::Review => "Review",
        }
    }

    /// The following step, clamped at review.
    pub fn forward(self) -> WizardStep {
        match self {
            WizardStep::Targeting => WizardStep::Messaging,
            WizardStep::Messaging => WizardStep::Execution,
            WizardStep::Execution | WizardStep::Review => WizardStep::Review,
        }
    }

    /// The preceding step, clamped at targeting.
    pub fn back(self) -> WizardStep {
        match self {
            WizardStep::Targeting | WizardStep::Messaging => WizardStep::Targeting,
            WizardStep::Execution => WizardStep::Messaging,
            WizardStep::Review => WizardStep::Execution,
        }
    }

    pub fn is_review(self) -> bool {
        matches!(self, WizardStep::Review)
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_clamps_at_both_edges() {
        assert_eq!(WizardStep::Review.forward(), WizardStep::Review);
        assert_eq!(WizardStep::Targeting.back(), WizardStep::Targeting);
    }

    #[test]
    fn indices_are_one_based_and_ordered() {
        let indices: Vec<u8> = WizardStep::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }
}
