//! Conversion between host and backend coordinate conventions.
//!
//! Three conventions meet here:
//!
//! - the host draws in screen space with the origin at the top-left and y
//!   pointing down, and stores matrices column-major (as `glam` does);
//! - the backend is a right-handed 3D renderer with the origin at the
//!   centre, y pointing up, and a row-vector matrix layout with the
//!   translation in the last row;
//! - effects are authored in the backend's native units, compensated for at
//!   spawn time by the coordinator's render scale.
//!
//! Every sign flip and index swap is confined to this module so it can be
//! unit-tested against known inputs instead of eyeballed on screen.

use glam::Mat4;

use crate::backend::BackendMatrix;

/// Rewrites a host (column-major) matrix into the backend's row-vector
/// layout.
///
/// Index mapping: host element (row `r`, column `c`) lands at
/// `Values[c][r]`, i.e. column `c` of the host matrix becomes row `c` of the
/// backend matrix. In particular the host translation column (column 3)
/// becomes the backend translation row (row 3). Since `glam` exposes the
/// matrix as an array of columns, the mapping is a direct copy of that
/// array.
pub fn to_backend_matrix(m: &Mat4) -> BackendMatrix {
    let host = m.to_cols_array_2d();
    let mut values = [[0.0f32; 4]; 4];
    for c in 0..4 {
        for r in 0..4 {
            values[c][r] = host[c][r];
        }
    }
    BackendMatrix(values)
}

/// Builds the screen-space projection for a `width` x `height` viewport.
///
/// Starts from a right-handed orthographic projection sized to the
/// viewport, then negates the vertical basis vector (host y points down)
/// and shifts the origin from the centre to the top-left corner, so host
/// pixel coordinates map straight onto the backend's view volume.
pub fn screen_projection(width: f32, height: f32, near: f32, far: f32) -> BackendMatrix {
    let mut m = [[0.0f32; 4]; 4];
    m[0][0] = 2.0 / width;
    m[1][1] = 2.0 / height;
    m[2][2] = 1.0 / (near - far);
    m[3][2] = near / (near - far);
    m[3][3] = 1.0;

    // Invert the y axis.
    m[1][1] = -m[1][1];

    // And move 0, 0 to the top-left.
    m[3][0] = -1.0;
    m[3][1] = 1.0;

    BackendMatrix(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_identity_converts_to_identity() {
        assert_eq!(to_backend_matrix(&Mat4::IDENTITY), BackendMatrix::IDENTITY);
    }

    #[test]
    fn test_translation_lands_in_last_row() {
        let m = to_backend_matrix(&Mat4::from_translation(Vec3::new(3.0, 5.0, 7.0)));
        assert_eq!(m.0[3][0], 3.0);
        assert_eq!(m.0[3][1], 5.0);
        assert_eq!(m.0[3][2], 7.0);
        assert_eq!(m.0[3][3], 1.0);
        // The basis rows stay untouched.
        assert_eq!(m.0[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_conversion_is_a_transpose() {
        let host = Mat4::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0, // column 0
            5.0, 6.0, 7.0, 8.0, // column 1
            9.0, 10.0, 11.0, 12.0, // column 2
            13.0, 14.0, 15.0, 16.0, // column 3
        ]);
        let converted = to_backend_matrix(&host);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(converted.0[c][r], host.col(c)[r]);
            }
        }
    }

    #[test]
    fn test_screen_projection_flips_y_and_moves_origin() {
        let proj = screen_projection(1280.0, 720.0, -128.0, 128.0);
        assert_eq!(proj.0[0][0], 2.0 / 1280.0);
        // Vertical basis vector is negated for the y-down host.
        assert_eq!(proj.0[1][1], -(2.0 / 720.0));
        // Origin shifted from the centre to the top-left.
        assert_eq!(proj.0[3][0], -1.0);
        assert_eq!(proj.0[3][1], 1.0);
        // Depth mapping of the orthographic base.
        assert_eq!(proj.0[2][2], 1.0 / (-128.0 - 128.0));
        assert_eq!(proj.0[3][2], -128.0 / (-128.0 - 128.0));
        assert_eq!(proj.0[3][3], 1.0);
    }

    #[test]
    fn test_screen_projection_maps_corners() {
        // Multiply a point row-vector style: v' = v * M.
        fn apply(m: &BackendMatrix, v: [f32; 4]) -> [f32; 4] {
            let mut out = [0.0f32; 4];
            for c in 0..4 {
                for r in 0..4 {
                    out[c] += v[r] * m.0[r][c];
                }
            }
            out
        }

        let proj = screen_projection(800.0, 600.0, -128.0, 128.0);
        // Host top-left pixel maps to the backend's top-left clip corner.
        let top_left = apply(&proj, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(&top_left[..2], &[-1.0, 1.0]);
        // Host bottom-right pixel maps to the bottom-right clip corner.
        let bottom_right = apply(&proj, [800.0, 600.0, 0.0, 1.0]);
        assert_eq!(&bottom_right[..2], &[1.0, -1.0]);
    }
}
