#![forbid(unsafe_code)]

use poem::handler;
use poem::http::StatusCode;

// ***************************************************************************
//                                Constants
// ***************************************************************************
/// Body returned by the root endpoint.
pub const GREETING       : &str = "App is running successfully 🚀";

/// Body returned by the catch-all route.
pub const NOT_FOUND_BODY : &str = "Not Found";

// ***************************************************************************
//                                Handlers
// ***************************************************************************
// ---------------------------------------------------------------------------
// greeting:
// ---------------------------------------------------------------------------
/** Respond to GET / with the fixed greeting.  The handler is synchronous
 * and stateless; every invocation produces the identical response.
 */
#[handler]
pub fn greeting() -> &'static str {
    GREETING
}

// ---------------------------------------------------------------------------
// not_found:
// ---------------------------------------------------------------------------
/** Fixed not-found response for any path without a registered route. */
#[handler]
pub fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
