/// The two output colours of a rendered frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Colour {
    Foreground,
    #[default]
    Background,
}

impl Colour {
    #[must_use]
    pub const fn from_foreground(is_foreground: bool) -> Self {
        if is_foreground {
            Self::Foreground
        } else {
            Self::Background
        }
    }

    #[must_use]
    pub const fn is_foreground(self) -> bool {
        matches!(self, Self::Foreground)
    }
}
