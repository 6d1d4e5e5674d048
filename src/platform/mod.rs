//! Adapter between the HTTP runtime and the event/context convention.
//!
//! `vercel_runtime` hands each function a raw HTTP request. Handlers in this
//! crate are written against [`FunctionEvent`] and [`InvocationContext`]
//! instead, so this module translates the request on the way in and the
//! [`FunctionResponse`] on the way out.

use std::collections::BTreeMap;

use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::error::{FunctionError, Result};
use crate::models::{FunctionEvent, FunctionResponse, InvocationContext};

/// Header carrying the platform request id.
pub const REQUEST_ID_HEADER: &str = "x-vercel-id";

/// Build the event for `req`.
///
/// Header values that are not visible ASCII are skipped. A repeated header
/// keeps its last value in `headers` and all values in `multi_value_headers`.
/// Binary bodies are carried as base64 with `is_base64_encoded` set.
pub fn event_from_request(req: &Request) -> FunctionEvent {
    let mut headers = BTreeMap::new();
    let mut multi_value_headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in req.headers() {
        let Ok(value) = value.to_str() else {
            continue;
        };
        headers.insert(name.as_str().to_string(), value.to_string());
        multi_value_headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(value.to_string());
    }

    let query_string_parameters = req
        .uri()
        .query()
        .and_then(|query| serde_urlencoded::from_str::<Vec<(String, String)>>(query).ok())
        .map(|pairs| pairs.into_iter().collect::<BTreeMap<_, _>>())
        .unwrap_or_default();

    let (body, is_base64_encoded) = match req.body() {
        Body::Empty => (None, false),
        Body::Text(text) => (Some(text.clone()), false),
        Body::Binary(bytes) => (Some(base64::encode(bytes)), true),
    };

    FunctionEvent {
        http_method: req.method().as_str().to_string(),
        path: req.uri().path().to_string(),
        headers,
        multi_value_headers,
        query_string_parameters,
        body,
        is_base64_encoded,
    }
}

/// Build the invocation context for `req`.
pub fn context_for_request(req: &Request) -> InvocationContext {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    InvocationContext::for_request(request_id)
}

impl FunctionResponse {
    /// Convert into the runtime's HTTP response.
    pub fn into_http(self) -> Result<Response<Body>> {
        let status = StatusCode::from_u16(self.status_code)
            .map_err(|_| FunctionError::InvalidStatus(self.status_code))?;

        let mut builder = Response::builder().status(status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        Ok(builder.body(Body::Text(self.body))?)
    }
}

/// Run `handler` for one HTTP request.
///
/// Every invocation is logged with its method, path and request id: at
/// `info` with the status on success, at `error` with the cause on failure.
pub fn invoke<F>(handler: F, req: &Request) -> Result<Response<Body>>
where
    F: Fn(&FunctionEvent, &InvocationContext) -> Result<FunctionResponse>,
{
    let event = event_from_request(req);
    let context = context_for_request(req);

    let outcome = handler(&event, &context).and_then(|response| {
        let status = response.status_code;
        response.into_http().map(|http| (status, http))
    });

    match outcome {
        Ok((status, http)) => {
            tracing::info!(
                method = %event.http_method,
                path = %event.path,
                request_id = %context.aws_request_id,
                status,
                "function invoked"
            );
            Ok(http)
        }
        Err(err) => {
            tracing::error!(
                method = %event.http_method,
                path = %event.path,
                request_id = %context.aws_request_id,
                error = %err,
                "function failed"
            );
            Err(err)
        }
    }
}

/// Runtime entry point: [`invoke`] with errors boxed for `vercel_runtime`.
pub async fn serve<F>(handler: F, req: Request) -> std::result::Result<Response<Body>, Error>
where
    F: Fn(&FunctionEvent, &InvocationContext) -> Result<FunctionResponse>,
{
    invoke(handler, &req).map_err(Error::from)
}
