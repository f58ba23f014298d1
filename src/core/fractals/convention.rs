/// Which side of the escape test is painted as foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForegroundConvention {
    /// Points that never escape are foreground.
    #[default]
    Interior,
    /// Points that escape are foreground.
    Exterior,
}

impl ForegroundConvention {
    #[must_use]
    pub const fn is_foreground(self, interior: bool) -> bool {
        match self {
            Self::Interior => interior,
            Self::Exterior => !interior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ForegroundConvention;

    #[test]
    fn conventions_are_complementary() {
        for interior in [true, false] {
            assert_ne!(
                ForegroundConvention::Interior.is_foreground(interior),
                ForegroundConvention::Exterior.is_foreground(interior)
            );
        }
        assert!(ForegroundConvention::default().is_foreground(true));
    }
}
