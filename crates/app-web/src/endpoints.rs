// Server endpoints; kept free of fetch machinery so the URL helpers are
// testable host-side.

pub const POINTS_URL: &str = "/get_points_data";
pub const CONFIG_URL: &str = "/config";
pub const PDF_URL: &str = "/download_pdf";
pub const INDEX_URL: &str = "/";

/// Detail endpoint for one point.
#[inline]
pub fn point_detail_url(point_id: u32) -> String {
    format!("/get_point_data?point_id={point_id}")
}
