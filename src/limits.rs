use serde::{Deserialize, Serialize};

/// Caps on how many occurrences are generated in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Used when materializing a rule, which matters most for rules that never end.
    pub unbounded: usize,
    /// Used when showing upcoming dates to a user.
    pub preview: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            unbounded: 100,
            preview: 10,
        }
    }
}
