#![cfg(windows)]
extern crate winapi;

use crate::core::strategy::*;

mod helpers;
use helpers::*;

mod device;
use device::*;

mod mci;
use mci::*;

mod shell;
use shell::*;

mod misc;

use super::System;

impl System {
    pub fn available_strategies() -> &'static [StrategyKind] {
        &[
            StrategyKind::PrivilegedControl,
            StrategyKind::MediaCommandInterface,
            StrategyKind::ShellMediaService,
        ]
    }

    pub(super) fn create(kind: StrategyKind) -> Option<Box<dyn AccessStrategy>> {
        match kind {
            StrategyKind::PrivilegedControl => Some(Box::new(PrivilegedControl::new(DeviceIo))),
            StrategyKind::MediaCommandInterface => {
                Some(Box::new(MediaCommandInterface::new(MciCommands)))
            }
            StrategyKind::ShellMediaService => Some(Box::new(ShellMediaService::new(ShellEject))),
            StrategyKind::TrayUtility => None,
        }
    }

    pub fn is_elevated() -> bool {
        misc::is_elevated()
    }

    pub fn describe_code(kind: StrategyKind, _step: Step, code: RawCode) -> String {
        match kind {
            StrategyKind::MediaCommandInterface => mci_error_str(code),
            _ => error_str(code),
        }
    }
}
