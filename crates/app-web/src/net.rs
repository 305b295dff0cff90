//! HTTP calls to the analysis server.
//!
//! All requests are fire-and-forget from the page's perspective: failures are
//! surfaced as toasts at the call site and never retried.

use anyhow::Result;
use app_core::{ApiResponse, PointDetail, PointsSnapshot};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::endpoints::{point_detail_url, CONFIG_URL, PDF_URL, POINTS_URL};

/// Failure message reported by the server inside an `{error}` payload,
/// distinguished from transport errors so callers can surface the server's
/// own wording.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ServerError(pub String);

/// Fetch the dataset snapshot behind the visualization.
pub async fn fetch_points() -> Result<PointsSnapshot> {
    let resp = Request::get(POINTS_URL).send().await?;
    // Error statuses carry an {error} body; decode the envelope either way.
    let body: ApiResponse<PointsSnapshot> = resp.json().await?;
    body.into_result()
        .map_err(|msg| anyhow::Error::new(ServerError(msg)))
}

/// Fetch the analysis details for one point.
pub async fn fetch_point_detail(point_id: u32) -> Result<PointDetail> {
    let resp = Request::get(&point_detail_url(point_id)).send().await?;
    let body: ApiResponse<PointDetail> = resp.json().await?;
    body.into_result()
        .map_err(|msg| anyhow::Error::new(ServerError(msg)))
}

/// Post the analysis configuration form. `Ok(false)` is a reachable server
/// that rejected the submission (non-2xx status).
pub async fn post_config(form: FormData) -> Result<bool> {
    let resp = Request::post(CONFIG_URL).body(form)?.send().await?;
    Ok(resp.ok())
}

/// Presence check before navigating to the PDF download. `Ok(false)` is a
/// reachable server that refused the export.
pub async fn probe_pdf() -> Result<bool> {
    let resp = Request::get(PDF_URL).send().await?;
    Ok(resp.ok())
}
