//! Wire types for the analysis server's JSON API.

use serde::Deserialize;

/// One measurement position as served by `/get_points_data`.
#[derive(Clone, Debug, Deserialize)]
pub struct PointRecord {
    pub point_id: u32,
    pub distance: f64,
    pub angle: f64,
}

/// Full dataset snapshot behind the visualization.
///
/// `angles_per_distance` is part of the payload but unused by the range map;
/// it is carried opaquely so decoding stays faithful to the wire.
#[derive(Clone, Debug, Deserialize)]
pub struct PointsSnapshot {
    pub points: Vec<PointRecord>,
    pub distances: Vec<f64>,
    #[serde(default)]
    pub angles_per_distance: serde_json::Value,
}

/// Per-point analysis details from `/get_point_data`.
///
/// All fields default to empty so a partial payload still renders.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PointDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub chart_url: String,
}

/// Either endpoint may answer `{"error": "..."}` instead of data.
///
/// The error variant is listed first: untagged deserialization tries in
/// order, and an error payload would otherwise satisfy an all-default `T`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Err { error: String },
    Ok(T),
}

impl<T> ApiResponse<T> {
    /// Collapse the envelope into a `Result` carrying the server's message.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResponse::Ok(value) => Ok(value),
            ApiResponse::Err { error } => Err(error),
        }
    }
}
