// `main.rs` only declares modules and hands off to `app::run()`. Each step
// of the pipeline (options, input, publishing) lives in its own module so
// the core loop can be tested without a broker or a process exit.
mod app;
mod cli;
mod error;
mod input;
mod logger;
mod pipeline;
mod publisher;

use std::process::ExitCode;

/// Everything is sequential, so a single-threaded runtime is enough to drive
/// the async Pub/Sub client.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    app::run().await
}
