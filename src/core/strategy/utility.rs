use super::*;

/// Why a utility did not do its job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunFailure {
    /// The program could not be started at all (`errno`).
    NotStarted(RawCode),
    /// The program ran and exited with a non-zero status.
    Exited(RawCode),
}

pub trait CommandRunner {
    /// Runs the program to completion. A non-zero exit status is an error.
    fn run(&self, program: &str, args: &[String]) -> Result<(), RunFailure>;
}

/// Tray utilities shipped with the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    /// util-linux `eject`, `-t` closes the tray.
    Eject,
    /// macOS `drutil tray`, always acts on the first optical drive.
    Drutil,
    /// macOS `diskutil eject <path>`. Open only.
    Diskutil,
    /// macOS `drutil eject`, ejects the medium. Open only.
    DrutilEject,
}

impl Utility {
    pub fn program(&self) -> &'static str {
        match self {
            Utility::Eject => "eject",
            Utility::Drutil | Utility::DrutilEject => "drutil",
            Utility::Diskutil => "diskutil",
        }
    }

    /// Arguments for `action`, `None` if the utility can't perform it.
    pub fn args(&self, action: TrayAction, drive: &DriveId) -> Option<Vec<String>> {
        let args = match (self, action) {
            (Utility::Eject, TrayAction::Open) => vec![drive.device_path()],
            (Utility::Eject, TrayAction::Close) => vec!["-t".to_owned(), drive.device_path()],
            (Utility::Drutil, TrayAction::Open) => vec!["tray".to_owned(), "open".to_owned()],
            (Utility::Drutil, TrayAction::Close) => vec!["tray".to_owned(), "close".to_owned()],
            (Utility::Diskutil, TrayAction::Open) => vec!["eject".to_owned(), drive.device_path()],
            (Utility::DrutilEject, TrayAction::Open) => vec!["eject".to_owned()],
            (Utility::Diskutil, TrayAction::Close) | (Utility::DrutilEject, TrayAction::Close) => {
                return None
            }
        };
        Some(args)
    }
}

/// Runs the platform's utilities in order until one of them succeeds. The
/// attempt is reported with the outcome of the last utility that ran.
pub struct TrayUtility<R: CommandRunner> {
    utilities: Vec<Utility>,
    runner: R,
}

impl<R: CommandRunner> TrayUtility<R> {
    pub fn new(utilities: Vec<Utility>, runner: R) -> Self {
        TrayUtility { utilities, runner }
    }

    fn run_one(&self, utility: Utility, args: Vec<String>) -> Outcome {
        let program = utility.program();
        let result = self.runner.run(program, &args);

        let mut command_line = program.to_owned();
        for a in &args {
            command_line.push(' ');
            command_line.push_str(a);
        }

        match result {
            Ok(()) => Outcome::success(Step::RunUtility, command_line),
            Err(RunFailure::NotStarted(code)) => Outcome::failure(Step::StartUtility, code, command_line),
            Err(RunFailure::Exited(code)) => Outcome::failure(Step::RunUtility, code, command_line),
        }
    }

    fn perform(&self, action: TrayAction, drive: &DriveId) -> Option<Outcome> {
        let mut last = None;
        for utility in &self.utilities {
            let args = match utility.args(action, drive) {
                Some(args) => args,
                None => continue,
            };

            let outcome = self.run_one(*utility, args);
            if outcome.succeeded {
                return Some(outcome);
            }

            tracing::debug!(
                command = %outcome.parameter,
                step = %outcome.step,
                code = ?outcome.code,
                "tray utility did not succeed"
            );
            last = Some(outcome);
        }
        last
    }
}

impl<R: CommandRunner> AccessStrategy for TrayUtility<R> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TrayUtility
    }

    fn open(&self, drive: &DriveId) -> Option<Outcome> {
        self.perform(TrayAction::Open, drive)
    }

    fn close(&self, drive: &DriveId) -> Option<Outcome> {
        self.perform(TrayAction::Close, drive)
    }
}
