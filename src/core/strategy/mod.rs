use crate::core::api::TrayError;
use crate::core::drive::DriveId;
use std::fmt;
use std::str::FromStr;

pub mod device;
pub mod mci;
pub mod shell;
pub mod utility;

pub use device::{ControlRequest, DeviceControl, PrivilegedControl};
pub use mci::{MediaCommandInterface, MediaCommands};
pub use shell::{ShellMediaService, ShellService};
pub use utility::{CommandRunner, RunFailure, TrayUtility, Utility};

/// Raw code reported by the platform: `GetLastError`, `MCIERROR`, `errno`,
/// a process exit status and so on. Only ever used for diagnostics.
pub type RawCode = u32;

pub type RawResult<A> = std::result::Result<A, RawCode>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    Open,
    Close,
}

impl fmt::Display for TrayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrayAction::Open => write!(f, "open"),
            TrayAction::Close => write!(f, "close"),
        }
    }
}

/// Known strategies. Declaration order is the priority order of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrategyKind {
    PrivilegedControl,
    MediaCommandInterface,
    ShellMediaService,
    TrayUtility,
}

impl StrategyKind {
    pub fn all() -> &'static [StrategyKind] {
        &[
            StrategyKind::PrivilegedControl,
            StrategyKind::MediaCommandInterface,
            StrategyKind::ShellMediaService,
            StrategyKind::TrayUtility,
        ]
    }

    /// Short name used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            StrategyKind::PrivilegedControl => "device",
            StrategyKind::MediaCommandInterface => "mci",
            StrategyKind::ShellMediaService => "shell",
            StrategyKind::TrayUtility => "utility",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::PrivilegedControl => "Device I/O control",
            StrategyKind::MediaCommandInterface => "Media command interface",
            StrategyKind::ShellMediaService => "Shell eject",
            StrategyKind::TrayUtility => "Tray utility",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StrategyKind {
    type Err = TrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        StrategyKind::all()
            .iter()
            .find(|k| k.key() == key)
            .cloned()
            .ok_or_else(|| TrayError::UnknownStrategy(s.trim().to_owned()))
    }
}

/// The step an attempt ended at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AcquireHandle,
    ControlRequest,
    AliasOpen,
    DoorCommand,
    ShellEject,
    StartUtility,
    RunUtility,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::AcquireHandle => "acquire handle",
            Step::ControlRequest => "control request",
            Step::AliasOpen => "alias open",
            Step::DoorCommand => "door command",
            Step::ShellEject => "shell eject",
            Step::StartUtility => "start utility",
            Step::RunUtility => "run utility",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub code: Option<RawCode>,
    pub step: Step,
    /// Path or command the step was issued with.
    pub parameter: String,
}

impl Outcome {
    pub fn success(step: Step, parameter: String) -> Self {
        Outcome {
            succeeded: true,
            code: None,
            step,
            parameter,
        }
    }

    pub fn failure(step: Step, code: RawCode, parameter: String) -> Self {
        Outcome {
            succeeded: false,
            code: Some(code),
            step,
            parameter,
        }
    }

    pub fn from_result(step: Step, result: RawResult<()>, parameter: String) -> Self {
        match result {
            Ok(()) => Outcome::success(step, parameter),
            Err(code) => Outcome::failure(step, code, parameter),
        }
    }
}

/// One mechanism able to move the tray.
///
/// `None` means the action is not supported by this mechanism at all: the
/// controller skips it without recording anything.
pub trait AccessStrategy {
    fn kind(&self) -> StrategyKind;
    fn open(&self, drive: &DriveId) -> Option<Outcome>;

    fn close(&self, _drive: &DriveId) -> Option<Outcome> {
        None
    }

    fn attempt(&self, action: TrayAction, drive: &DriveId) -> Option<Outcome> {
        match action {
            TrayAction::Open => self.open(drive),
            TrayAction::Close => self.close(drive),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::*;

    #[test]
    fn test_priority_order() {
        let mut kinds = vec![
            StrategyKind::TrayUtility,
            StrategyKind::ShellMediaService,
            StrategyKind::PrivilegedControl,
            StrategyKind::MediaCommandInterface,
        ];
        kinds.sort();
        assert_eq!(kinds, StrategyKind::all());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            "device".parse::<StrategyKind>().unwrap(),
            StrategyKind::PrivilegedControl
        );
        assert_eq!(
            " MCI ".parse::<StrategyKind>().unwrap(),
            StrategyKind::MediaCommandInterface
        );
        assert_eq!(
            "shell".parse::<StrategyKind>().unwrap(),
            StrategyKind::ShellMediaService
        );
        assert_eq!(
            "utility".parse::<StrategyKind>().unwrap(),
            StrategyKind::TrayUtility
        );
        assert_matches!(
            "floppy".parse::<StrategyKind>(),
            Err(TrayError::UnknownStrategy(ref s)) if s == "floppy"
        );
    }

    #[test]
    fn test_outcome_from_result() {
        let ok = Outcome::from_result(Step::ShellEject, Ok(()), "D:\\".to_owned());
        assert!(ok.succeeded);
        assert_eq!(ok.code, None);

        let failed = Outcome::from_result(Step::ShellEject, Err(2), "D:\\".to_owned());
        assert!(!failed.succeeded);
        assert_eq!(failed.code, Some(2));
    }
}
