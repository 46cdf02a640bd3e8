use crate::core::drive::DriveId;
use crate::core::strategy::*;

/// Diagnostic record of one strategy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub strategy: StrategyKind,
    pub action: TrayAction,
    pub drive: String,
    pub outcome: Outcome,
}

/// Sink for attempt records. Receiving a record can't influence the result
/// of the call.
pub trait AttemptReceiver {
    fn handle(&mut self, attempt: &Attempt) -> ();
}

pub struct NullReceiver;

impl AttemptReceiver for NullReceiver {
    fn handle(&mut self, _attempt: &Attempt) -> () {}
}

impl AttemptReceiver for Vec<Attempt> {
    fn handle(&mut self, attempt: &Attempt) -> () {
        self.push(attempt.clone());
    }
}

/// Forwards records to `tracing`.
pub struct TracingReceiver;

impl AttemptReceiver for TracingReceiver {
    fn handle(&mut self, attempt: &Attempt) -> () {
        let o = &attempt.outcome;
        if o.succeeded {
            tracing::info!(
                strategy = attempt.strategy.key(),
                action = %attempt.action,
                drive = %attempt.drive,
                step = %o.step,
                parameter = %o.parameter,
                "tray strategy succeeded"
            );
        } else {
            tracing::warn!(
                strategy = attempt.strategy.key(),
                action = %attempt.action,
                drive = %attempt.drive,
                step = %o.step,
                parameter = %o.parameter,
                code = ?o.code,
                "tray strategy failed"
            );
        }
    }
}

/// Runs the strategy chain, stopping at the first success.
///
/// The chain is always kept in priority order (see [`StrategyKind`]), no
/// matter the order strategies were handed in, and holds at most one
/// strategy of each kind.
pub struct TrayController {
    strategies: Vec<Box<dyn AccessStrategy>>,
}

impl TrayController {
    pub fn new(mut strategies: Vec<Box<dyn AccessStrategy>>) -> Self {
        strategies.sort_by_key(|s| s.kind());
        strategies.dedup_by_key(|s| s.kind());
        TrayController { strategies }
    }

    pub fn kinds(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn open_tray(&self, drive: &DriveId, receiver: &mut dyn AttemptReceiver) -> bool {
        self.run(TrayAction::Open, drive, receiver)
    }

    pub fn close_tray(&self, drive: &DriveId, receiver: &mut dyn AttemptReceiver) -> bool {
        self.run(TrayAction::Close, drive, receiver)
    }

    pub fn run(
        &self,
        action: TrayAction,
        drive: &DriveId,
        receiver: &mut dyn AttemptReceiver,
    ) -> bool {
        for strategy in &self.strategies {
            let outcome = match strategy.attempt(action, drive) {
                Some(o) => o,
                None => continue,
            };

            let succeeded = outcome.succeeded;
            receiver.handle(&Attempt {
                strategy: strategy.kind(),
                action,
                drive: drive.to_string(),
                outcome,
            });

            if succeeded {
                return true;
            }
        }

        false
    }
}
