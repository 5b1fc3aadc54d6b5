// Top-level boundary. The steps below return `Result`s; `execute` is the only
// place that logs a fatal error and picks the exit code.
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing::{error, info};

use crate::cli::{self, Options};
use crate::error::CatError;
use crate::input;
use crate::logger;
use crate::pipeline;
use crate::publisher::{Publish, PubsubPublisher};

const EXIT_FAILURE: u8 = 1;

pub async fn run() -> ExitCode {
    logger::init();

    let code = execute(
        std::env::args_os(),
        io::stdin().lock(),
        &mut io::stdout(),
        |options| async move { PubsubPublisher::connect(&options).await },
    )
    .await;
    ExitCode::from(code)
}

/// Run the whole program against the given arguments and stdin. Help and
/// argument errors go to `out`; `connect` is only called once the options
/// are valid. Returns the process exit code.
pub async fn execute<I, T, R, W, C, F, P>(args: I, stdin: R, out: &mut W, connect: C) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: Read,
    W: Write,
    C: FnOnce(Options) -> F,
    F: Future<Output = anyhow::Result<P>>,
    P: Publish,
{
    // Stdin is buffered before the arguments are even looked at.
    let body = match input::read_all(stdin) {
        Ok(body) => body,
        Err(e) => return fatal(CatError::from(e)),
    };

    let options = match cli::parse(args) {
        Ok(options) => options,
        Err(e) => {
            let _ = writeln!(out, "{}", cli::usage_message(&e));
            return EXIT_FAILURE;
        }
    };

    let publisher = match connect(options.clone()).await {
        Ok(publisher) => publisher,
        Err(e) => return fatal(CatError::ClientInit(e)),
    };

    let result = pipeline::publish_lines(&publisher, &body).await;
    publisher.shutdown().await;

    match result {
        Ok(count) => {
            info!(count, topic = %options.topic, "done");
            0
        }
        Err(e) => fatal(e),
    }
}

fn fatal(err: CatError) -> u8 {
    error!("{err}");
    EXIT_FAILURE
}
