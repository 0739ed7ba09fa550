//! rdp-launcher CLI
//!
//! This is the main entry point for the Rust CLI binary.

fn main() {
    if let Err(err) = rdp_launcher::run() {
        rdp_launcher::show_error(&err);
        std::process::exit(1);
    }
}
