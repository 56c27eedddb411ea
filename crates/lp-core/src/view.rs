//! Tab identities shown in the shared display area.

/// One of the mutually exclusive content modes of the display area.
///
/// `Result` is the dashboard trigger, never a leaf: selecting it lands on
/// [`View::Objective`] and reveals the result tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    Source,
    Matrix,
    Result,
    Objective,
    Constraints,
    Sensitivity,
}

impl View {
    /// Top-level tab buttons, in display order.
    pub const TABS: [View; 3] = [View::Source, View::Matrix, View::Result];

    /// Tabs inside the result dashboard, in display order.
    pub const RESULT_TABS: [View; 3] = [View::Objective, View::Constraints, View::Sensitivity];

    /// Views that own a text slot in the buffer store.
    pub const SLOTTED: [View; 5] = [
        View::Source,
        View::Matrix,
        View::Objective,
        View::Constraints,
        View::Sensitivity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Source => "Source",
            View::Matrix => "Matrix",
            View::Result => "Result",
            View::Objective => "Objective",
            View::Constraints => "Constraints",
            View::Sensitivity => "Sensitivity",
        }
    }

    /// True for the leaf views that live inside the result dashboard.
    pub fn is_result_leaf(self) -> bool {
        matches!(self, View::Objective | View::Constraints | View::Sensitivity)
    }

    /// Resolve the dashboard trigger to the leaf view it opens.
    pub fn resolve(self) -> View {
        match self {
            View::Result => View::Objective,
            other => other,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_resolves_to_objective() {
        assert_eq!(View::Result.resolve(), View::Objective);
        assert_eq!(View::Matrix.resolve(), View::Matrix);
    }

    #[test]
    fn slotted_views_exclude_dashboard() {
        assert!(!View::SLOTTED.contains(&View::Result));
        assert!(View::RESULT_TABS.iter().all(|v| v.is_result_leaf()));
    }
}
