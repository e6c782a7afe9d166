//! # Bistro Entry Point
//!
//! Single command, no flags. The actual setup is in lib.rs.

fn main() {
    if let Err(err) = bistro_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
