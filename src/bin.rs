#[macro_use]
extern crate anyhow;
use anyhow::{Context, Result};

extern crate clap;
use clap::{App, AppSettings, Arg, SubCommand};

#[macro_use]
extern crate prettytable;

use tracing_subscriber::EnvFilter;

use trayctl::core::api::{Tray, TrayConfig};
use trayctl::core::drive::DriveId;
use trayctl::core::strategy::TrayAction;

mod ui;
use ui::*;

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let strategies_explanation = explain_strategies();

    let drive_arg = Arg::with_name("drive")
        .required(true)
        .takes_value(true)
        .index(1)
        .help("Drive letter (D:) or device path (/dev/sr0)");

    let app = App::new("trayctl")
        .version(VERSION)
        .about("Open and close optical drive trays")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::VersionlessSubcommands)
        .after_help(strategies_explanation.as_str())
        .arg(
            Arg::with_name("strategies")
                .long("strategies")
                .short("s")
                .takes_value(true)
                .global(true)
                .help("Comma separated strategies to try (default: all available)"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .global(true)
                .help("Print every attempt and debug logs"),
        )
        .subcommand(
            SubCommand::with_name("open")
                .about("Open (eject) the tray")
                .arg(drive_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("close")
                .about("Close (load) the tray")
                .arg(drive_arg),
        )
        .subcommand(SubCommand::with_name("strategies").about("List access strategies"))
        .get_matches();

    let (action, cmd) = match app.subcommand() {
        ("open", Some(cmd)) => (TrayAction::Open, cmd),
        ("close", Some(cmd)) => (TrayAction::Close, cmd),
        ("strategies", _) => {
            println!("{}", strategies_explanation);
            return Ok(());
        }
        _ => {
            println!("{}", app.usage());
            std::process::exit(1)
        }
    };

    let verbose = app.is_present("verbose") || cmd.is_present("verbose");
    init_tracing(verbose);

    let config = match cmd.value_of("strategies").or(app.value_of("strategies")) {
        Some(s) => args::parse_strategies(s)?,
        None => TrayConfig::default(),
    };

    let drive = cmd
        .value_of("drive")
        .ok_or_else(|| anyhow!("Drive argument required"))?;
    let drive = DriveId::parse(drive).with_context(|| format!("Unable to {} the tray", action))?;

    let tray = Tray::system(&config).context("Unable to control optical drives")?;

    let mut session = cli::ConsoleFrontend::new(verbose).tray_session();
    let succeeded = tray.controller().run(action, &drive, &mut session);

    session.finish(&drive.to_string(), &action.to_string(), succeeded);

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "trayctl=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
