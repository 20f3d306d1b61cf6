//! Hardware-in-the-loop tests for the LoRa mode controller.
//!
//! Run on the target board with the module attached.

mod device;

use clap::Parser;
use colored::Colorize;
use lora_mode_controller::config;
use lora_mode_controller::ModePins;

use device::{build_module, resolve_port};
use tests::{print_results, run_all_tests};

#[derive(Parser)]
#[command(name = "integration-tests")]
#[command(about = "Hardware tests for the LoRa mode controller")]
struct Args {
    /// Serial port for the module (use "auto" to auto-detect)
    #[arg(short, long, default_value = config::serial::DEVICE_PATH)]
    port: String,

    /// Baud rate
    #[arg(short, long, default_value_t = config::serial::BAUD_RATE)]
    baud: u32,

    /// Serial read timeout in milliseconds
    #[arg(long, default_value_t = config::serial::READ_TIMEOUT_MS)]
    timeout_ms: u64,

    /// GPIO line wired to MD0
    #[arg(long, default_value_t = config::mode_pins::MD0)]
    md0: u32,

    /// GPIO line wired to MD1
    #[arg(long, default_value_t = config::mode_pins::MD1)]
    md1: u32,

    /// Show controller log output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
    }

    let port = resolve_port(&args.port)?;
    let pins = ModePins {
        md0: args.md0,
        md1: args.md1,
    };

    println!("{}", "LoRa Mode Controller Hardware Tests".bold());
    println!("Port: {}", port);
    println!("Baud: {}", args.baud);
    println!("MD0/MD1: gpio{} / gpio{}", pins.md0, pins.md1);
    println!();

    let module = build_module(&port, args.baud, args.timeout_ms, pins);

    println!("Running tests...\n");

    let results = run_all_tests(module);
    print_results(&results);

    // Exit with error code if any tests failed
    let failed = results.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
