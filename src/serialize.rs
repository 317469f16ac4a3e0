use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serialize a sequence of 2D points through the `Point2f64` remote definition, for use with
/// `#[serde(serialize_with = ...)]` on `Vec<Point2<f64>>` fields.
pub fn point_seq<S>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    #[derive(Serialize)]
    struct Wrap(#[serde(with = "Point2f64")] Point2<f64>);

    serializer.collect_seq(points.iter().map(|p| Wrap(*p)))
}
