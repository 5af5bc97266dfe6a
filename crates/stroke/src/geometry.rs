use base::Vec2;

/// Stand-in denominator for zero-length vectors.
pub const EPSILON: f64 = 1e-6;

pub(crate) fn guarded(denom: f64) -> f64 {
    if denom == 0.0 { EPSILON } else { denom }
}

fn angle_between(u: Vec2<f64>, v: Vec2<f64>) -> f64 {
    let (u_length, v_length) = (u.length(), v.length());
    if u_length == 0.0 || v_length == 0.0 {
        // zero dot product over EPSILON
        return 90.0;
    }
    // normalize first so huge or tiny coordinates neither overflow nor underflow
    let cos_angle = (u / u_length).dot(v / v_length).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// Angle ABC in degrees, in [0, 180].
///
/// If either arm has zero length the result is finite but meaningless.
pub fn angle_at_vertex(a: Vec2<f64>, b: Vec2<f64>, c: Vec2<f64>) -> f64 {
    angle_between(a - b, c - b)
}

/// Angle in degrees between two direction vectors, in [0, 180].
pub fn line_rotation_angle(line1: Vec2<f64>, line2: Vec2<f64>) -> f64 {
    angle_between(line1, line2)
}

pub fn euclidean_distance_2d(p: Vec2<f64>, q: Vec2<f64>) -> f64 {
    p.distance_to(q)
}
