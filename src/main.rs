//! LC-2K Pipelined Simulator CLI.
//!
//! Loads a machine-code file (one hexadecimal 32-bit word per line),
//! simulates the 5-stage pipeline cycle by cycle, and writes the full
//! state trace to stdout. All failures are fatal and exit with status 1.

use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use lc2k_emulator::config::Config;
use lc2k_emulator::core::Machine;
use lc2k_emulator::sim::{self, loader};

/// Command-line arguments for the pipelined simulator.
#[derive(Parser, Debug)]
#[command(version, about = "LC-2K Cycle-Accurate Pipelined Simulator")]
struct Args {
    /// Machine-code file, one hexadecimal 32-bit word per line.
    file: String,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0.
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] FATAL: {}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let program = match loader::read_machine_code(Path::new(&args.file), &mut out) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("[!] FATAL: {}", e);
            process::exit(1);
        }
    };

    let machine = Machine::new(&program, &config);
    match sim::run(machine, &mut out) {
        Ok(final_state) => {
            let _ = out.flush();
            final_state.stats.print(final_state.cycles);
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {}", e);
            process::exit(1);
        }
    }
}
