//! Relay service that forwards customer-support conversations to an upstream
//! chat-completion endpoint and softens risky phrasing in the reply.

// No dangerous or non-idiomatic practices in this crate.
#![deny(unsafe_code)] // Unsafe code is forbidden
#![deny(missing_docs)] // Every public function, struct, enum or module must be documented
#![deny(unused_must_use)] // Result and Option must be handled explicitly
#![forbid(unsafe_op_in_unsafe_fn)]

// Clippy for strict discipline
#![deny(clippy::all)] // All standard Clippy lints
#![deny(clippy::unwrap_used)] // unwrap() is forbidden outside tests
#![deny(clippy::expect_used)] // expect() is forbidden outside tests
#![deny(clippy::panic)] // panic!() is forbidden
#![deny(clippy::print_stdout)] // println!() is forbidden in production code
#![deny(clippy::todo)] // No TODO markers in the code
#![deny(clippy::unimplemented)] // No unimplemented functions

/// Completion client for the upstream chat endpoint.
pub mod completion;
/// Reply sanitization (risky phrasing softener).
pub mod safety;
/// HTTP server and API routes.
pub mod server;
/// Entry helpers to start the relay server.
pub mod start_relay;
