use crate::core::controller::{AttemptReceiver, NullReceiver, TrayController};
use crate::core::drive::DriveId;
use crate::core::strategy::{StrategyKind, TrayAction};
use crate::core::system::System;
use thiserror::Error;

/// Errors raised to the caller. Failing to move the tray is not one of them:
/// that is reported as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrayError {
    #[error("invalid drive identifier: {0}")]
    InvalidDrive(String),
    #[error("tray control is not supported on this platform")]
    UnsupportedPlatform,
    #[error("unknown strategy '{0}' (expected one of: device, mci, shell, utility)")]
    UnknownStrategy(String),
}

/// Which strategies a deployment is willing to use. Order doesn't matter,
/// the chain always runs in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayConfig {
    pub strategies: Vec<StrategyKind>,
}

impl Default for TrayConfig {
    fn default() -> Self {
        TrayConfig {
            strategies: System::available_strategies().to_vec(),
        }
    }
}

impl TrayConfig {
    /// Parses a comma separated list like `device,shell`.
    pub fn from_list(list: &str) -> Result<TrayConfig, TrayError> {
        let strategies = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.parse())
            .collect::<Result<Vec<StrategyKind>, TrayError>>()?;
        Ok(TrayConfig { strategies })
    }
}

pub struct Tray {
    controller: TrayController,
}

impl Tray {
    /// The platform's strategy chain, restricted to `config`.
    pub fn system(config: &TrayConfig) -> Result<Tray, TrayError> {
        let controller = TrayController::new(System::strategies(&config.strategies)?);
        Ok(Tray::new(controller))
    }

    pub fn new(controller: TrayController) -> Tray {
        Tray { controller }
    }

    pub fn controller(&self) -> &TrayController {
        &self.controller
    }

    pub fn open(&self, drive: &str, receiver: &mut dyn AttemptReceiver) -> Result<bool, TrayError> {
        self.run(TrayAction::Open, drive, receiver)
    }

    pub fn close(&self, drive: &str, receiver: &mut dyn AttemptReceiver) -> Result<bool, TrayError> {
        self.run(TrayAction::Close, drive, receiver)
    }

    pub fn run(
        &self,
        action: TrayAction,
        drive: &str,
        receiver: &mut dyn AttemptReceiver,
    ) -> Result<bool, TrayError> {
        let drive = DriveId::parse(drive)?;
        Ok(self.controller.run(action, &drive, receiver))
    }
}

/// Opens the tray using every strategy the platform offers.
pub fn open_tray(drive: &str) -> Result<bool, TrayError> {
    let drive = DriveId::parse(drive)?;
    let tray = Tray::system(&TrayConfig::default())?;
    Ok(tray.controller.open_tray(&drive, &mut NullReceiver))
}

/// Closes the tray using every strategy the platform offers.
pub fn close_tray(drive: &str) -> Result<bool, TrayError> {
    let drive = DriveId::parse(drive)?;
    let tray = Tray::system(&TrayConfig::default())?;
    Ok(tray.controller.close_tray(&drive, &mut NullReceiver))
}
