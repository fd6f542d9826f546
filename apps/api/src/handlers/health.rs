//! Liveness endpoint.

/// `GET /ping`
///
/// Does not touch the store.
pub async fn ping() -> &'static str {
    "pong"
}
