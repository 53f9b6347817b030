#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use log::info;
use poem::listener::{Listener, TcpListener};
use poem::Server;

// Greeter utilities
use crate::routes::register_routes;
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx};
use crate::utils::errors::Errors;

// Modules
mod routes;
mod utils;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "GreeterServer"; // for poem logging

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the runtime context so that it has a 'static lifetime.
// The context resolves the server configuration from the environment exactly
// once; we exit if the configuration cannot be resolved.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // --------------- Initialize Greeter -------------
    // Announce ourselves.
    println!("Starting greeter_server!");

    // Initialize the server.
    greeter_init();

    // --------------- Main Loop Set Up ---------------
    // Create the routes and bind the listener.
    let addr = format!("{}:{}",
        RUNTIME_CTX.parms.config.http_addr,
        RUNTIME_CTX.parms.config.http_port);
    let app = register_routes();

    // Binding fails if the port is taken or privileged; that error is fatal
    // and propagates out of main.
    let acceptor = TcpListener::bind(addr).into_acceptor().await?;

    // Report the bound port only after the listener is live.
    println!("Server running on port {}", RUNTIME_CTX.parms.config.http_port);

    // ------------------ Main Loop -------------------
    Server::new_with_acceptor(acceptor)
        .name(SERVER_NAME)
        .run(app)
        .await
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// greeter_init:
// ---------------------------------------------------------------------------
/** Initialize all subsystems other than those needed to configure the main
 * loop processor.
 */
fn greeter_init() {
    // Configure our log.
    init_log();

    // Force the reading of input parameters and initialization of the
    // runtime context.
    info!("{}", Errors::InputParms(format!("{:#?}", *RUNTIME_CTX)));

    // Log build info.
    print_version_info();
}

// ---------------------------------------------------------------------------
// print_version_info:
// ---------------------------------------------------------------------------
fn print_version_info() {
    info!("*** Running greeter_server={}",
          option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"));
}
