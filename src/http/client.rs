use std::time::Instant;

use reqwest::{Client, Url};
use tracing::debug;

use crate::error::ProbeError;

use super::request::RequestInput;
use super::response::HttpResponse;

pub async fn send_request(
    client: &Client,
    base_url: &Url,
    request: &RequestInput,
) -> Result<HttpResponse, ProbeError> {
    let url = build_url(base_url, request)?;
    debug!(method = %request.method, %url, "sending probe");

    let started = Instant::now();
    let response = client
        .request(request.method.into(), url)
        .send()
        .await
        .map_err(ProbeError::Transport)?;
    let elapsed = started.elapsed().as_millis();

    let status = response.status();
    let bytes = response.bytes().await.map_err(ProbeError::ReadBody)?;
    let size_bytes = bytes.len();
    let body = String::from_utf8_lossy(&bytes).into_owned();

    debug!(
        status = %status,
        elapsed_ms = elapsed as u64,
        size_bytes,
        "probe answered"
    );

    Ok(HttpResponse {
        status: status.as_u16(),
        duration_ms: elapsed,
        body,
    })
}

/// Join the request path onto the base URL and append the query pairs,
/// form-urlencoded. A request without parameters gets no `?`.
pub fn build_url(base_url: &Url, request: &RequestInput) -> Result<Url, ProbeError> {
    let raw = format!("{}{}", base_url.as_str().trim_end_matches('/'), request.path);
    let mut url = Url::parse(&raw).map_err(|e| ProbeError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    if !request.query.is_empty() {
        let mut query_pairs = url.query_pairs_mut();
        for (key, value) in &request.query {
            query_pairs.append_pair(key, &value.to_string());
        }
    }

    Ok(url)
}
