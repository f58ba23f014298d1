use std::fmt;

/// Where the exploration loop currently is.
///
/// `Initializing -> Rendering -> (Rendering)* -> Accepted -> Exploring -> Rendering ...`;
/// a hard reset re-enters `Initializing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerPhase {
    #[default]
    Initializing,
    Rendering,
    Accepted,
    Exploring,
}

impl fmt::Display for ExplorerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initializing => "initializing",
            Self::Rendering => "rendering",
            Self::Accepted => "accepted",
            Self::Exploring => "exploring",
        };

        f.write_str(name)
    }
}
