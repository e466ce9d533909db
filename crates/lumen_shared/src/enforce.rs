//! Per-call enforcement override.
//!
//! Every clamp/sanitize entry point takes one of these next to the registry it
//! reads. "No override" must be distinguishable from "explicitly off", so this
//! is a three-valued enum rather than an `Option<bool>` in disguise at call
//! sites.

/// Tri-state override for a registry's enforcement flag.
///
/// Resolution order: an explicit `On`/`Off` always wins; `Inherit` defers to
/// the registry's own `enforce_validation` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Enforce {
    /// Use the registry's global flag.
    #[default]
    Inherit,
    /// Force enforcement on for this call only.
    On,
    /// Force enforcement off for this call only.
    Off,
}

impl Enforce {
    /// Resolves the override against a registry's global flag.
    #[must_use]
    pub const fn resolve(self, registry_flag: bool) -> bool {
        match self {
            Self::Inherit => registry_flag,
            Self::On => true,
            Self::Off => false,
        }
    }
}

impl From<Option<bool>> for Enforce {
    /// Maps a nullable flag from a foreign call surface onto the tri-state.
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Inherit,
            Some(true) => Self::On,
            Some(false) => Self::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_both_directions() {
        assert!(Enforce::On.resolve(false));
        assert!(!Enforce::Off.resolve(true));
    }

    #[test]
    fn inherit_follows_registry() {
        assert!(Enforce::Inherit.resolve(true));
        assert!(!Enforce::Inherit.resolve(false));
    }

    #[test]
    fn from_option_round_trip() {
        assert_eq!(Enforce::from(None), Enforce::Inherit);
        assert_eq!(Enforce::from(Some(true)), Enforce::On);
        assert_eq!(Enforce::from(Some(false)), Enforce::Off);
    }
}
