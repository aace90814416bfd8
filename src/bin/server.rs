//! Support relay server binary.
//! Run with: cargo run --bin support-relay-server

use std::process::ExitCode;

use support_relay::start_relay;

fn main() -> ExitCode {
    start_relay::run()
}
