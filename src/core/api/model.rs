// Wire types for the computation API.
//
// Field names must match the backend exactly; everything here crosses the
// HTTP boundary as-is.

use serde::{Deserialize, Serialize};

/// Reference shapes the backend can sample point clouds from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    #[serde(rename = "s1")]
    Circle,
    #[serde(rename = "s1vs1")]
    TwoCircles,
}

impl ShapeType {
    /// Get the display name for this shape
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::TwoCircles => "Two Circles",
        }
    }

    /// Query-string value for generate-data
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Circle => "s1",
            Self::TwoCircles => "s1vs1",
        }
    }

    /// Get all available shapes
    pub fn all() -> &'static [ShapeType] {
        &[Self::Circle, Self::TwoCircles]
    }
}

/// Parameters for sampling a noisy point cloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDataQuery {
    pub shape: ShapeType,
    #[serde(rename = "N")]
    pub n: u32,
    pub error: f64,
    pub seed: u64,
}

impl Default for GenerateDataQuery {
    fn default() -> Self {
        Self {
            shape: ShapeType::Circle,
            n: 1000,
            error: 0.1,
            seed: 42,
        }
    }
}

/// Point cloud as returned by generate-data: one inner list per axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<Vec<f64>>,
}

/// Request body for get-cubical-homology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubicalHomologyRequest {
    /// Sample points, one inner list per point
    pub points: Vec<Vec<f64>>,
    /// Grid resolution per axis
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Margin around the bounding box, as a fraction
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Resolution of the returned KDE evaluation grid
    #[serde(default = "default_kde_precision")]
    pub kde_precision: u32,
    /// KDE bandwidth; the backend picks one when absent
    #[serde(default)]
    pub kde_bw: Option<f64>,
}

fn default_precision() -> u32 {
    20
}

fn default_margin() -> f64 {
    0.5
}

fn default_kde_precision() -> u32 {
    100
}

impl CubicalHomologyRequest {
    pub fn new(points: Vec<Vec<f64>>) -> Self {
        Self {
            points,
            precision: default_precision(),
            margin: default_margin(),
            kde_precision: default_kde_precision(),
            kde_bw: None,
        }
    }
}

/// Request body for get-vr-homology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VietorisRipsRequest {
    pub points: Vec<Vec<f64>>,
}

/// One cell of a filtration, cubical or simplicial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltrationCell {
    /// Filtration value at which the cell appears
    pub value: f64,
    /// Vertex coordinates of the cell
    pub points: Vec<Vec<f64>>,
    pub dimension: usize,
}

/// A persistence interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hole {
    pub birth: f64,
    pub death: f64,
    pub lifetime: f64,
    pub dimension: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubicalHomologyResponse {
    pub filtration: Vec<FiltrationCell>,
    /// Axis mountings of the evaluation grid
    pub grid: Vec<Vec<f64>>,
    pub holes: Vec<Hole>,
    /// KDE evaluated over the grid
    pub kde: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VietorisRipsResponse {
    pub filtration: Vec<FiltrationCell>,
    pub holes: Vec<Hole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_wire_names() {
        assert_eq!(ShapeType::Circle.wire_name(), "s1");
        assert_eq!(ShapeType::TwoCircles.wire_name(), "s1vs1");
        for shape in ShapeType::all() {
            assert_eq!(
                serde_json::to_value(shape).unwrap(),
                shape.wire_name(),
                "serde rename must match wire_name"
            );
        }
    }

    #[test]
    fn test_generate_query_defaults() {
        let query = GenerateDataQuery::default();
        assert_eq!(query.shape, ShapeType::Circle);
        assert_eq!(query.n, 1000);
        assert!((query.error - 0.1).abs() < f64::EPSILON);
        assert_eq!(query.seed, 42);
    }

    #[test]
    fn test_cubical_request_fills_backend_defaults() {
        let request: CubicalHomologyRequest =
            serde_json::from_str(r#"{"points": [[0.0, 1.0]]}"#).unwrap();
        assert_eq!(request.precision, 20);
        assert!((request.margin - 0.5).abs() < f64::EPSILON);
        assert_eq!(request.kde_precision, 100);
        assert!(request.kde_bw.is_none());

        let built = CubicalHomologyRequest::new(vec![vec![0.0, 1.0]]);
        assert_eq!(built.precision, request.precision);
        assert_eq!(built.kde_precision, request.kde_precision);
    }

    #[test]
    fn test_homology_response_decodes() {
        let json = r#"{
            "filtration": [{"value": 0.3, "points": [[0.0, 0.1], [0.2, 0.1]], "dimension": 1}],
            "grid": [[0.0, 0.5, 1.0], [0.0, 0.5, 1.0]],
            "holes": [{"birth": 0.1, "death": 0.9, "lifetime": 0.8, "dimension": 1}],
            "kde": [[0.0, 0.2], [0.4, 0.0]]
        }"#;
        let response: CubicalHomologyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.filtration.len(), 1);
        assert_eq!(response.filtration[0].dimension, 1);
        assert_eq!(response.holes[0].dimension, 1);
        assert!((response.holes[0].lifetime - 0.8).abs() < f64::EPSILON);
    }
}
