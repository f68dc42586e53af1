use crate::guard::Html;
use crate::routing::RouteDecision;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{header, Response, StatusCode};

pub type Resp = Response<Full<Bytes>>;

/// HTML response with the given status
pub fn html_response(status: StatusCode, html: Html) -> Result<Resp, http::Error> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(html.into_string())))
}

/// 302 to `location`, with a meta-refresh body for clients that ignore Location
pub fn redirect_response(location: &str) -> Result<Resp, http::Error> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-store")
        .body(Full::new(Bytes::from(Html::redirecting(location).into_string())))
}

/// 403 with the built-in Access Denied page
pub fn access_denied_response(home_path: &str) -> Result<Resp, http::Error> {
    html_response(StatusCode::FORBIDDEN, Html::access_denied(home_path))
}

/// 200 with the loading spinner, never cached
pub fn loading_response() -> Result<Resp, http::Error> {
    let mut resp = html_response(StatusCode::OK, Html::loading())?;
    resp.headers_mut().insert(header::CACHE_CONTROL, header::HeaderValue::from_static("no-store"));
    Ok(resp)
}

impl<V: Into<Html>> RouteDecision<V> {
    pub fn into_response(self) -> Result<Resp, http::Error> {
        match self {
            RouteDecision::Spinner => loading_response(),
            RouteDecision::Redirect(location) => redirect_response(&location),
            RouteDecision::Render(view) => html_response(StatusCode::OK, view.into()),
        }
    }
}
