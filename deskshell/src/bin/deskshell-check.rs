//! Checks syntax of the configuration file.
use anyhow::Result;
use clap::{arg, command};
use deskshell::ShellConfig;
use deskshell_core::Config;

fn main() -> Result<()> {
    let matches = command!("Deskshell Check")
        .about("Checks syntax of the configuration file")
        .args([
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG default otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m Deskshell version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match check_config_file(config_file, verbose) {
        Ok(()) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            Ok(())
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
            Err(e)
        }
    }
}

fn check_config_file(config_file: Option<&str>, verbose: bool) -> Result<()> {
    let config = match config_file {
        Some(path) => deskshell::load_from_file(path)?,
        None => deskshell::load()?,
    };
    if verbose {
        dbg!(&config);
    }
    check_sanity(&config);
    Ok(())
}

// Nonsensical values still load; warn about the ones that will make every
// window fight its own clamps.
fn check_sanity(config: &ShellConfig) {
    let viewport = config.viewport();
    let min = config.min_window_size();
    if min.w <= 0 || min.h <= 0 {
        println!(
            "\x1b[1;93mWARN: minimum window size {}x{} is not positive.\x1b[0m",
            min.w, min.h
        );
    }
    if viewport.usable().h < min.h || viewport.usable().w < min.w {
        println!(
            "\x1b[1;93mWARN: the usable viewport is smaller than the minimum window size.\x1b[0m"
        );
    }
}
