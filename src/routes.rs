#![forbid(unsafe_code)]

use poem::{get, Route};

pub mod root;

// ***************************************************************************
//                              Route Assembly
// ***************************************************************************
// ---------------------------------------------------------------------------
// register_routes:
// ---------------------------------------------------------------------------
/** Build the complete route table.  The catch-all route is registered after
 * the root route so every unmatched path takes the explicit not-found
 * response instead of the library's implicit fallback.
 */
pub fn register_routes() -> Route {
    Route::new()
        .at("/", get(root::greeting))
        .at("/*path", root::not_found)
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;

    use super::register_routes;
    use super::root;

    #[tokio::test]
    async fn get_root_returns_greeting() {
        let cli = TestClient::new(register_routes());
        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_header("content-type", "text/plain; charset=utf-8");
        resp.assert_text(root::GREETING).await;
    }

    #[tokio::test]
    async fn unregistered_path_returns_not_found() {
        let cli = TestClient::new(register_routes());
        let resp = cli.get("/foo").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_text(root::NOT_FOUND_BODY).await;
    }

    #[tokio::test]
    async fn nested_path_returns_not_found() {
        let cli = TestClient::new(register_routes());
        let resp = cli.get("/foo/bar/baz").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_path_returns_not_found() {
        let cli = TestClient::new(register_routes());
        let resp = cli.post("/foo").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_root_is_rejected() {
        let cli = TestClient::new(register_routes());
        let resp = cli.post("/").send().await;
        resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn repeated_root_requests_are_identical() {
        let cli = TestClient::new(register_routes());
        for _ in 0..3 {
            let resp = cli.get("/").send().await;
            resp.assert_status_is_ok();
            resp.assert_text(root::GREETING).await;
        }
    }
}
