use super::*;

/// Textual command layer of the legacy multimedia subsystem.
pub trait MediaCommands {
    fn send(&self, command: &str) -> RawResult<()>;
}

/// Works without elevation, but only for drives the command subsystem
/// recognizes. Every door command is wrapped in an open/close of an alias
/// scoped to the drive.
pub struct MediaCommandInterface<M: MediaCommands> {
    commands: M,
}

impl<M: MediaCommands> MediaCommandInterface<M> {
    pub fn new(commands: M) -> Self {
        MediaCommandInterface { commands }
    }

    fn perform(&self, drive: &DriveId, door: &str) -> Outcome {
        let alias = drive.alias();

        let open_alias = format!("open {} type cdaudio alias {}", drive.volume(), alias);
        if let Err(code) = self.commands.send(&open_alias) {
            return Outcome::failure(Step::AliasOpen, code, open_alias);
        }

        let door_command = format!("set {} door {} wait", alias, door);
        let result = self.commands.send(&door_command);

        // the alias stays registered until closed, whatever the door did
        let close_alias = format!("close {}", alias);
        if let Err(code) = self.commands.send(&close_alias) {
            tracing::debug!(command = %close_alias, code, "alias teardown failed");
        }

        Outcome::from_result(Step::DoorCommand, result, door_command)
    }
}

impl<M: MediaCommands> AccessStrategy for MediaCommandInterface<M> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::MediaCommandInterface
    }

    fn open(&self, drive: &DriveId) -> Option<Outcome> {
        Some(self.perform(drive, "open"))
    }

    fn close(&self, drive: &DriveId) -> Option<Outcome> {
        Some(self.perform(drive, "closed"))
    }
}
