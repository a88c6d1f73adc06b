//! SeatBit Booking Binary
//!
//! Books or cancels seats and prints `SUCCESS` or `FAIL`.

use clap::error::ErrorKind;
use clap::Parser;
use seatbit::{Config, SeatCoordinator};
use tracing_subscriber::{fmt, EnvFilter};

/// SeatBit
#[derive(Parser, Debug)]
#[command(name = "seatbit")]
#[command(about = "Book or cancel seats in a fixed-size venue")]
#[command(version)]
struct Args {
    /// Seat data file
    #[arg(short, long, default_value = "seats.dat")]
    data_file: String,

    /// BOOK or CANCEL (case-insensitive)
    action: String,

    /// First seat, row letter followed by seat number (e.g. A1)
    seat: String,

    /// Number of consecutive seats
    #[arg(allow_hyphen_values = true)]
    count: String,
}

fn main() {
    // Logs go to stderr so stdout only carries the outcome
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::debug!("Rejected arguments: {}", e);
            println!("FAIL");
            return;
        }
    };

    let Ok(count) = args.count.parse::<i64>() else {
        println!("FAIL");
        return;
    };

    let config = Config::builder().data_path(&args.data_file).build();

    let coordinator = match SeatCoordinator::open(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to open seat store: {}", e);
            std::process::exit(1);
        }
    };

    let success = match args.action.to_uppercase().as_str() {
        "BOOK" => coordinator.book(&args.seat, count),
        "CANCEL" => coordinator.cancel(&args.seat, count),
        _ => false,
    };

    println!("{}", if success { "SUCCESS" } else { "FAIL" });
}
