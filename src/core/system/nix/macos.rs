use crate::core::strategy::*;

use super::ProcessRunner;

// drutil talks to the optical drive through the disc recording framework,
// which needs no elevation and handles the tray on its own. Drives that
// refuse `drutil tray open` can still be ejected through diskutil or
// `drutil eject`.
pub fn available_strategies() -> &'static [StrategyKind] {
    &[StrategyKind::TrayUtility]
}

pub fn create(kind: StrategyKind) -> Option<Box<dyn AccessStrategy>> {
    match kind {
        StrategyKind::TrayUtility => Some(Box::new(TrayUtility::new(
            vec![Utility::Drutil, Utility::Diskutil, Utility::DrutilEject],
            ProcessRunner,
        ))),
        _ => None,
    }
}
