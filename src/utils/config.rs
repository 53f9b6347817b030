#![forbid(unsafe_code)]

use anyhow::{Result, anyhow};
use log::{info, error, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;

// Greeter utilities
use crate::utils::errors::Errors;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Networking.
const ENV_HTTP_PORT        : &str = "PORT";
const DEFAULT_HTTP_ADDR    : &str = "0.0.0.0";
const DEFAULT_HTTP_PORT    : u16  = 3000;

// Logging.
const LOG_PATTERN          : &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// Parms:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct Parms {
    pub config: Config,
}

// ---------------------------------------------------------------------------
// RuntimeCtx:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct RuntimeCtx {
    pub parms: Parms,
}

// ---------------------------------------------------------------------------
// Config:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct Config {
    pub http_addr: String,
    pub http_port: u16,
}

impl Config {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Config::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs logging with a console appender on standard output.
 * Logging failures at this stage leave us with no way to report anything,
 * so they panic.
 */
pub fn init_log() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let logconfig = match log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info)) {
            Ok(c) => c,
            Err(e) => {
                println!("{}", e);
                let s = format!("{}", Errors::Log4rsInitialization(e.to_string()));
                panic!("{}", s);
            },
    };
    match log4rs::init_config(logconfig) {
        Ok(_) => (),
        Err(e) => {
            println!("{}", e);
            let s = format!("{}", Errors::Log4rsInitialization(e.to_string()));
            panic!("{}", s);
        },
    }
    info!("Log4rs initialized with a console appender at {} level.", LevelFilter::Info);
}

// ***************************************************************************
//                               Port Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// resolve_http_port:
// ---------------------------------------------------------------------------
/** Resolve the port the listener binds to.
 *
 * Order of precedence:
 *  1. Port passed in by the caller
 *  2. PORT environment variable
 *  3. Default port
 *
 * An unset or empty PORT resolves to the default.  A PORT value that does
 * not parse as a TCP port is a configuration error.
 */
pub fn resolve_http_port(explicit: Option<u16>) -> Result<u16> {
    if let Some(port) = explicit {
        return Ok(port);
    }
    match env::var(ENV_HTTP_PORT) {
        Ok(val) if val.trim().is_empty() => Ok(DEFAULT_HTTP_PORT),
        Ok(val) => parse_http_port(&val),
        Err(_) => Ok(DEFAULT_HTTP_PORT),
    }
}

// ---------------------------------------------------------------------------
// parse_http_port:
// ---------------------------------------------------------------------------
fn parse_http_port(val: &str) -> Result<u16> {
    match val.trim().parse::<u16>() {
        Ok(port) => Ok(port),
        Err(_) => {
            let msg = format!("{}", Errors::InvalidPort(val.to_string()));
            error!("{}", msg);
            Result::Err(anyhow!(msg))
        },
    }
}

// ***************************************************************************
//                             Parms Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_parms:
// ---------------------------------------------------------------------------
/** Construct the application parameters from the environment.  Parameters
 * are resolved exactly once at startup; request handlers receive the already
 * constructed configuration and never consult the environment themselves.
 */
fn get_parms() -> Result<Parms> {
    let http_port = resolve_http_port(None)?;
    let config = Config {
        http_addr: DEFAULT_HTTP_ADDR.to_string(),
        http_port,
    };
    Ok(Parms { config })
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_runtime_context:
// ---------------------------------------------------------------------------
pub fn init_runtime_context() -> RuntimeCtx {
    // If this fails the application aborts.
    let parms = get_parms().expect("FAILED to resolve server configuration.");
    RuntimeCtx { parms }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use crate::utils::config::{parse_http_port, resolve_http_port, Config};

    #[test]
    fn print_config() {
        println!("{:?}", Config::new());
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.http_addr, "0.0.0.0");
    }

    #[test]
    fn explicit_port_overrides_environment() {
        let port = resolve_http_port(Some(4000)).expect("explicit port resolves");
        assert_eq!(port, 4000);
    }

    #[test]
    fn numeric_port_values_parse() {
        assert_eq!(parse_http_port("8080").unwrap(), 8080);
        assert_eq!(parse_http_port(" 4000 ").unwrap(), 4000);
    }

    #[test]
    fn non_numeric_port_values_are_rejected() {
        assert!(parse_http_port("not-a-port").is_err());
        assert!(parse_http_port("70000").is_err());
        assert!(parse_http_port("-1").is_err());
    }
}
