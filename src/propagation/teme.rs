pub const EARTH_ROTATION_RAD_S: f64 = 7.292_115e-5;

pub fn teme_to_ecef_position(pos_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let cos_gmst = gmst.cos();
    let sin_gmst = gmst.sin();
    [
        pos_teme[0] * cos_gmst + pos_teme[1] * sin_gmst,
        -pos_teme[0] * sin_gmst + pos_teme[1] * cos_gmst,
        pos_teme[2],
    ]
}

/// Same rotation for velocity, minus the frame's own rotation (ω × r).
pub fn teme_to_ecef_velocity(pos_teme: [f64; 3], vel_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let pos = teme_to_ecef_position(pos_teme, gmst);
    let rotated = teme_to_ecef_position(vel_teme, gmst);
    [
        rotated[0] + EARTH_ROTATION_RAD_S * pos[1],
        rotated[1] - EARTH_ROTATION_RAD_S * pos[0],
        rotated[2],
    ]
}
