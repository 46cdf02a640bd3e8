use crate::core::api::TrayError;
use crate::core::strategy::*;

#[cfg(unix)]
mod nix;

#[cfg(windows)]
mod windows;

/// Platform entry point: which strategies exist here and how to build them.
pub struct System;

impl System {
    /// Builds the platform chain restricted to `selection`. Strategies this
    /// platform doesn't have are skipped.
    pub fn strategies(selection: &[StrategyKind]) -> Result<Vec<Box<dyn AccessStrategy>>, TrayError> {
        let available = System::available_strategies();
        if available.is_empty() {
            return Err(TrayError::UnsupportedPlatform);
        }

        for kind in selection.iter().filter(|k| !available.contains(*k)) {
            tracing::warn!(strategy = kind.key(), "strategy is not available on this platform, skipping");
        }

        Ok(available
            .iter()
            .filter(|k| selection.contains(*k))
            .filter_map(|k| System::create(*k))
            .collect())
    }
}

#[cfg(not(any(unix, windows)))]
impl System {
    pub fn available_strategies() -> &'static [StrategyKind] {
        &[]
    }

    fn create(_kind: StrategyKind) -> Option<Box<dyn AccessStrategy>> {
        None
    }

    pub fn is_elevated() -> bool {
        false
    }

    pub fn describe_code(_kind: StrategyKind, _step: Step, code: RawCode) -> String {
        format!("code {}", code)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_selection() {
        if System::available_strategies().is_empty() {
            return;
        }
        let chain = System::strategies(&[]).unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_chain_follows_availability() {
        let available = System::available_strategies();
        if available.is_empty() {
            assert_eq!(
                System::strategies(StrategyKind::all()).err(),
                Some(TrayError::UnsupportedPlatform)
            );
            return;
        }

        let chain = System::strategies(StrategyKind::all()).unwrap();
        let kinds: Vec<StrategyKind> = chain.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, available);
    }
}
