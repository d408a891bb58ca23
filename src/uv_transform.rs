//! Quad UV transform check
//!
//! Pushes the corners of the unit quad through a fixed display matrix, then
//! stretches the Y axis to undo the symmetric top/bottom crop the matrix
//! encodes.

/// A homogeneous 2D point `[u, v, 1, 0]`
pub type UvPoint = [f64; 4];

/// Row-major display matrix, as logged (not transposed)
pub const PROJECTION: [[f64; 4]; 4] = [
    [0.00000, -0.82051, 0.00000, 0.00000],
    [-1.00000, 0.00000, 0.00000, 0.00000],
    [1.00000, 0.91026, 1.00000, 0.00000],
    [0.00000, 0.00000, 0.00000, 1.00000],
];

/// Unit quad corners, counter-clockwise from the origin
pub const QUAD_UVS: [UvPoint; 4] = [
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 0.0],
    [1.0, 1.0, 1.0, 0.0],
    [0.0, 1.0, 1.0, 0.0],
];

/// `transpose(m) · p`
pub fn map_transposed(m: &[[f64; 4]; 4], p: &UvPoint) -> UvPoint {
    let mut out = [0.0; 4];
    for (j, value) in out.iter_mut().enumerate() {
        *value = (0..4).map(|i| m[i][j] * p[i]).sum();
    }
    out
}

/// Fraction cropped from each end of the Y axis, read from row 2, column 1.
pub fn top_crop(m: &[[f64; 4]; 4]) -> f64 {
    1.0 - m[2][1]
}

/// Stretch that maps `[top_crop, 1 - top_crop]` back onto `[0, 1]`.
///
/// Infinite when `top_crop` is 0.5.
pub fn scale_y(top_crop: f64) -> f64 {
    1.0 / (1.0 - 2.0 * top_crop)
}

pub fn crop_compensate(y: f64, top_crop: f64, scale_y: f64) -> f64 {
    (y - top_crop) * scale_y
}

/// Maps `points` through `m` and crop-compensates their Y, keeping order.
pub fn adjust_uvs(m: &[[f64; 4]; 4], points: &[UvPoint]) -> Vec<UvPoint> {
    let crop = top_crop(m);
    let scale = scale_y(crop);

    points
        .iter()
        .map(|p| {
            let mut mapped = map_transposed(m, p);
            mapped[1] = crop_compensate(mapped[1], crop, scale);
            mapped
        })
        .collect()
}

/// The fixed quad through the fixed matrix.
pub fn mapped_uvs() -> Vec<UvPoint> {
    adjust_uvs(&PROJECTION, &QUAD_UVS)
}
