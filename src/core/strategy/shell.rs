use super::*;

/// Shell level eject facility operating on a drive root.
pub trait ShellService {
    fn eject(&self, root_path: &str) -> RawResult<()>;
}

/// Open only: the shell has no documented way to close a tray.
pub struct ShellMediaService<S: ShellService> {
    shell: S,
}

impl<S: ShellService> ShellMediaService<S> {
    pub fn new(shell: S) -> Self {
        ShellMediaService { shell }
    }
}

impl<S: ShellService> AccessStrategy for ShellMediaService<S> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ShellMediaService
    }

    fn open(&self, drive: &DriveId) -> Option<Outcome> {
        let root = drive.root_path();
        let result = self.shell.eject(&root);
        Some(Outcome::from_result(Step::ShellEject, result, root))
    }
}
