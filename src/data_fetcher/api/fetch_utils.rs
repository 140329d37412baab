//! Request helpers shared by every endpoint: one attempt, status-code
//! classification, body decoding.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Converts a send failure into the matching error, logging it once.
fn classify_send_error(e: reqwest::Error, url: &str) -> AppError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Maps a non-success HTTP status to an error.
fn classify_status(status: reqwest::StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    error!("HTTP {} - {} (URL: {})", status_code, reason, url);

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Sends a prepared request and returns the body of a successful response.
async fn send_for_text(request: RequestBuilder, url: &str) -> Result<String, AppError> {
    let response: Response = request
        .send()
        .await
        .map_err(|e| classify_send_error(e, url))?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        return Err(classify_status(status, url));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", body.len());
    let preview: String = body.chars().take(512).collect();
    debug!("Response text (first 512 chars): {preview}");

    Ok(body)
}

/// GETs a resource and returns its body as text.
#[instrument(skip(client))]
pub(super) async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");
    send_for_text(client.get(url), url).await
}

/// POSTs a form-encoded body and returns the response text.
/// Field values are never logged.
#[instrument(skip(client, form))]
pub(super) async fn post_form_text(
    client: &Client,
    url: &str,
    form: &[(&str, &str)],
) -> Result<String, AppError> {
    info!("Posting form to URL: {url}");
    send_for_text(client.post(url).form(form), url).await
}

/// Parses a JSON body, telling apart empty bodies, non-JSON bodies and JSON
/// with an unexpected shape.
pub(super) fn parse_json<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );

        let trimmed = body.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

/// GETs a JSON resource and deserializes it.
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let body = fetch_text(client, url).await?;
    parse_json(&body, url)
}
