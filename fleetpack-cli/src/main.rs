//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = fleetpack_cli::run() {
        eprintln!("fleetpack: {err}");
        std::process::exit(1);
    }
}
