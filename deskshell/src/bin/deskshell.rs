//! Drives a window manager from newline-delimited text commands on stdin
//! and prints the render set as JSON after each change. This is the
//! stand-in for the browser shell during development and in scripts.
use anyhow::Result;
use clap::{arg, command};
use deskshell_core::{Command, Manager};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let matches = command!("Deskshell")
        .about("Runs the deskshell window manager against commands read from stdin")
        .args([
            arg!(-c --config <FILE> "Sets the config file to use. Uses the XDG default otherwise."),
            arg!(-q --quiet "Don't print the render set after each change."),
        ])
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match matches.get_one::<String>("config") {
        Some(path) => deskshell::load_from_file(path)?,
        None => deskshell::load()?,
    };
    let quiet = matches.get_flag("quiet");

    let mut manager = Manager::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Command::from_str(line) {
            Ok(command) => {
                if manager.command_handler(&command) && !quiet {
                    let state = serde_json::to_string(&manager.state.render_set())?;
                    writeln!(stdout, "{state}")?;
                }
            }
            Err(err) => {
                tracing::error!("An error occurred while parsing the command: {}", err);
            }
        }
    }
    Ok(())
}
