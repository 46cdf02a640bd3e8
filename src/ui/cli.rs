use console::style;
use prettytable::format::FormatBuilder;
use prettytable::Table;
use trayctl::core::controller::{Attempt, AttemptReceiver};
use trayctl::core::strategy::StrategyKind;
use trayctl::core::system::System;

pub struct ConsoleFrontend {
    verbose: bool,
}

impl ConsoleFrontend {
    pub fn new(verbose: bool) -> Self {
        ConsoleFrontend { verbose }
    }

    pub fn tray_session(self) -> ConsoleTraySession {
        ConsoleTraySession {
            verbose: self.verbose,
            attempts: Vec::new(),
        }
    }
}

pub struct ConsoleTraySession {
    verbose: bool,
    attempts: Vec<Attempt>,
}

impl AttemptReceiver for ConsoleTraySession {
    fn handle(&mut self, attempt: &Attempt) -> () {
        let o = &attempt.outcome;
        if o.succeeded {
            println!("✔ {}", style(attempt.strategy).bold());
        } else if let Some(code) = o.code {
            eprintln!(
                "❌ {} failed at {}: {} ({})",
                attempt.strategy,
                o.step,
                System::describe_code(attempt.strategy, o.step, code),
                code
            );
        } else {
            eprintln!("❌ {} failed at {}", attempt.strategy, o.step);
        }
        self.attempts.push(attempt.clone());
    }
}

impl ConsoleTraySession {
    /// Table of every attempt, printed with `--verbose`.
    fn summary(&self) -> Option<Table> {
        if !self.verbose || self.attempts.is_empty() {
            return None;
        }

        let mut t = Table::new();
        let indent_table_format = FormatBuilder::new().padding(4, 1).build();
        t.set_format(indent_table_format);
        t.set_titles(row!["Strategy", "Step", "Parameter", "Code", "Result"]);
        for a in &self.attempts {
            t.add_row(row![
                a.strategy.key(),
                a.outcome.step,
                a.outcome.parameter,
                a.outcome.code.map(|c| c.to_string()).unwrap_or_default(),
                if a.outcome.succeeded { "ok" } else { "failed" }
            ]);
        }
        Some(t)
    }

    fn elevation_hint(&self, elevated: bool) -> Option<&'static str> {
        let device_control_failed = self
            .attempts
            .iter()
            .any(|a| a.strategy == StrategyKind::PrivilegedControl && !a.outcome.succeeded);

        if !device_control_failed || elevated {
            None
        } else if cfg!(windows) {
            Some("Make sure you run the application with Administrator permissions!")
        } else {
            Some("Device control may require root permissions.")
        }
    }

    pub fn finish(&self, drive: &str, action: &str, succeeded: bool) {
        if let Some(t) = self.summary() {
            print!("{}", t);
        }

        if succeeded {
            return;
        }

        eprintln!(
            "❌ Unable to {} the tray of {}.",
            action,
            style(drive).bold()
        );

        if self.attempts.is_empty() {
            eprintln!("No selected strategy supports this action.");
        }

        if let Some(hint) = self.elevation_hint(System::is_elevated()) {
            eprintln!("{}", hint);
        }
    }
}
