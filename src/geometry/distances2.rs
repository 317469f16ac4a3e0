use ncollide2d::na::{Point2, RealField};

/// Return the distance between two 2D points
pub fn dist<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> N {
    (a - b).norm()
}

/// Return the point halfway between two 2D points
pub fn mid_point<N: RealField + Copy>(a: &Point2<N>, b: &Point2<N>) -> Point2<N> {
    Point2::from((a.coords + b.coords) * N::from_f64(0.5).unwrap())
}
