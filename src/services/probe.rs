use std::io::{self, Write};
use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{ProbeConfig, ERROR_SNIPPET_CHARS};
use crate::error::ProbeError;
use crate::model::json::{display_value, kind_of};
use crate::services::probe_types::ProbeOutcome;

const PROXY_HEADER: &str = "x-wc-proxy";

/// First `max` characters of `body`. Never splits a UTF-8 sequence.
pub fn snippet(body: &str, max: usize) -> String {
    body.chars().take(max).collect()
}

fn field_or_na(v: Option<&Value>) -> String {
    v.map(display_value).unwrap_or_else(|| "N/A".to_string())
}

fn classify(status: StatusCode, body: &str) -> Result<ProbeOutcome, ProbeError> {
    if status != StatusCode::OK {
        return Ok(ProbeOutcome::Failed {
            status: status.as_u16(),
            snippet: snippet(body, ERROR_SNIPPET_CHARS),
        });
    }

    let data: Value = serde_json::from_str(body)?;
    match data.as_array().and_then(|items| items.first()) {
        Some(first) if first.is_object() => Ok(ProbeOutcome::Found {
            name: first.get("name").cloned(),
            id: first.get("id").cloned(),
        }),
        Some(first) => Err(ProbeError::UnexpectedItem {
            found: kind_of(first),
        }),
        None => Ok(ProbeOutcome::Data(data)),
    }
}

/// Sends the single GET and reports what came back.
pub fn probe<W: Write>(cfg: &ProbeConfig, out: &mut W) -> Result<ProbeOutcome, ProbeError> {
    let params = cfg.params();

    writeln!(out, "Testing API: {}", cfg.endpoint)?;
    let rendered: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    writeln!(out, "Params: {}", rendered.join(", "))?;

    let client = Client::builder()
        .timeout(cfg.timeout)
        .build()
        .map_err(ProbeError::Client)?;

    let started = Instant::now();
    let resp = client
        .get(&cfg.endpoint)
        .query(&params)
        .send()
        .map_err(|source| ProbeError::Request {
            url: cfg.endpoint.clone(),
            source,
        })?;

    let status = resp.status();
    let proxy = resp
        .headers()
        .get(PROXY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    // Read as text first so a non-JSON error body is still shown.
    let text = resp.text().map_err(ProbeError::Body)?;
    info!(
        url = %cfg.endpoint,
        status = status.as_u16(),
        bytes = text.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "probe response"
    );

    writeln!(out, "Status Code: {}", status.as_u16())?;
    if let Some(p) = &proxy {
        writeln!(out, "Proxy: {p}")?;
    }

    let outcome = classify(status, &text)?;
    match &outcome {
        ProbeOutcome::Found { name, id } => {
            writeln!(out, "Response Type: array")?;
            writeln!(out, "Product Found: {}", field_or_na(name.as_ref()))?;
            writeln!(out, "Product ID: {}", field_or_na(id.as_ref()))?;
        }
        ProbeOutcome::Data(data) => {
            writeln!(out, "Response Type: {}", kind_of(data))?;
            writeln!(out, "Response Data: {data}")?;
        }
        ProbeOutcome::Failed { snippet, .. } => {
            writeln!(out, "Error Response: {snippet}")?;
        }
    }

    Ok(outcome)
}

/// Runs the probe. Any transport or decode failure becomes a single
/// `Exception:` line.
pub fn run<W: Write>(cfg: &ProbeConfig, out: &mut W) -> io::Result<()> {
    match probe(cfg, out) {
        Ok(_) => Ok(()),
        Err(ProbeError::Output(e)) => Err(e),
        Err(e) => {
            debug!(error = ?e, "probe failed");
            writeln!(out, "Exception: {e}")
        }
    }
}
