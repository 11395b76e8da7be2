// src/main.rs

use std::io::{self, Write};
use std::process::ExitCode;

use scanline_fixtures::cli::{self, Command};
use scanline_fixtures::Result;

fn run(args: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli::parse_args(args)? {
        Command::Help(text) | Command::List(text) => {
            write!(out, "{}", text)?;
            out.flush()?;
        }
        Command::Generate(generator) => {
            let written = generator.generate(&mut out)?;
            log::info!("wrote {} fixture lines", written);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("scanline-fixtures: {}", e);
            ExitCode::FAILURE
        }
    }
}
