use crate::agent::ProfileStore;
use crate::fetcher::ProfileFetcher;
use crate::model::ProfileRequest;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Error, Request, Response};
use tracing::{Instrument, error, info_span, warn};

/// Plain-text response carrying only the canonical reason phrase.
pub fn client_error(status: StatusCode) -> Result<Response<Body>, Error> {
    status_response(status)
}

/// Logs the detail and answers 500 without leaking it.
pub fn server_error(err: impl std::fmt::Display) -> Result<Response<Body>, Error> {
    error!(error = %err, "request failed");
    status_response(StatusCode::INTERNAL_SERVER_ERROR)
}

fn status_response(status: StatusCode) -> Result<Response<Body>, Error> {
    let reason = status.canonical_reason().unwrap_or_default();
    Ok(Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::Text(reason.to_string()))?)
}

/// Single entry point for the function; only `GET` is served.
pub async fn function_handler<S: ProfileStore>(
    fetcher: &ProfileFetcher<S>,
    event: Request,
) -> Result<Response<Body>, Error> {
    if event.method() != Method::GET {
        warn!(method = %event.method(), "method not allowed");
        return client_error(StatusCode::METHOD_NOT_ALLOWED);
    }

    let request = match ProfileRequest::from_body(event.body().as_ref()) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "rejecting request body");
            return client_error(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    let span = info_span!("get_profile", table = fetcher.table_for(&request));
    get_profile(fetcher, &request).instrument(span).await
}

async fn get_profile<S: ProfileStore>(
    fetcher: &ProfileFetcher<S>,
    request: &ProfileRequest,
) -> Result<Response<Body>, Error> {
    let profile = match fetcher.fetch(request).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return client_error(StatusCode::NOT_FOUND),
        Err(e) => return server_error(e),
    };

    let body = match profile.to_json() {
        Ok(body) => body,
        Err(e) => return server_error(e),
    };

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("content-type", "application/json")
        .body(Body::Text(body))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(resp: &Response<Body>) -> &str {
        match resp.body() {
            Body::Text(text) => text,
            other => panic!("expected text body, got {other:?}"),
        }
    }

    #[test]
    fn client_error_uses_reason_phrase() {
        let resp = client_error(StatusCode::METHOD_NOT_ALLOWED).unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(text(&resp), "Method Not Allowed");
    }

    #[test]
    fn server_error_hides_detail() {
        let resp = server_error("connection refused to dynamodb.us-east-2").unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(text(&resp), "Internal Server Error");
    }
}
