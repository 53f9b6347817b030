#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors enumerates the errors returned by this application.
#[derive(Error, Debug)]
pub enum Errors {
    /// Input parameter logging.
    #[error("greeter_server input parameters:\n{}", .0)]
    InputParms(String),

    /// Logger installation failure.
    #[error("Unable to initialize the log4rs console logger: {}", .0)]
    Log4rsInitialization(String),

    /// PORT environment value that does not name a TCP port.
    #[error("Unable to parse the PORT environment variable as a TCP port: {}", .0)]
    InvalidPort(String),
}
