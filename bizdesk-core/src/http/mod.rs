//! Hyper adapters for guard decisions
//!
//! Turns [`RouteDecision`](crate::routing::RouteDecision)s, [`Html`] views
//! and [`AccessError`](crate::error::AccessError)s into
//! `Response<Full<Bytes>>` values a hyper service can return.

mod error;
mod response;

pub use error::{json_error, status_for};
pub use response::{
    access_denied_response, html_response, loading_response, redirect_response, Resp,
};

#[cfg(test)]
pub(crate) async fn body_string(resp: Resp) -> String {
    use http_body_util::BodyExt;

    let bytes = resp.into_body().collect().await.map(|c| c.to_bytes()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}
