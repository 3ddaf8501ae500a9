use crate::core::error::{ensure_finite, ensure_positive, ProjectileError};

pub const EARTH_GRAVITY_MPS2: f64 = 9.81; // m/s^2

// The stored launch angle is quantized to 0.01 rad. Of all buckets, only
// the one containing pi/2 has |cos| below this bound (~8e-4 there,
// ~9e-3 for its neighbors), so the check flags exactly vertical launch.
const VERTICAL_COS_BOUND: f64 = 5e-3;

/// Position and speed of a projectile at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstantState {
    pub distance_m: f64,
    pub height_m: f64,
    pub speed_mps: f64,
}

/// Trajectory in a vacuum. Aggregates are computed once at construction
/// and rounded to 4 decimal places.
#[derive(Clone, Copy, Debug)]
pub struct IdealProjectile {
    pub init_vel_mps: f64,
    /// Launch angle in radians, quantized to 2 decimal places.
    pub angle_rad: f64,
    pub accel_mps2: f64,
    pub range_m: f64,
    pub apex_height_m: f64,
    pub flight_time_s: f64,
}

impl IdealProjectile {
    pub fn new(init_vel_mps: f64, angle_deg: f64) -> Result<Self, ProjectileError> {
        Self::with_accel(init_vel_mps, angle_deg, EARTH_GRAVITY_MPS2)
    }

    pub fn with_accel(
        init_vel_mps: f64,
        angle_deg: f64,
        accel_mps2: f64,
    ) -> Result<Self, ProjectileError> {
        ensure_positive("initial velocity", init_vel_mps)?;
        ensure_positive("acceleration", accel_mps2)?;
        ensure_finite("launch angle", angle_deg)?;

        // Aggregates use the exact angle; only the angle kept for
        // instantaneous queries is quantized.
        let theta = angle_deg.to_radians();
        Ok(Self {
            init_vel_mps,
            angle_rad: round_places(theta, 2),
            accel_mps2,
            range_m: round_places(
                init_vel_mps.powi(2) * (2.0 * theta).sin() / accel_mps2,
                4,
            ),
            apex_height_m: round_places(
                (init_vel_mps * theta.sin()).powi(2) / accel_mps2,
                4,
            ),
            flight_time_s: round_places(2.0 * init_vel_mps * theta.sin() / accel_mps2, 4),
        })
    }

    /// State at `time_s` seconds after launch. No bounds check: times past
    /// the flight time describe the continued parabola below ground.
    pub fn state_at(&self, time_s: f64) -> Result<InstantState, ProjectileError> {
        state_with_accel(self.init_vel_mps, self.angle_rad, self.accel_mps2, time_s)
    }

    /// (distance, height) samples over [0, flight_time) at `step_s`.
    pub fn arc_points(&self, step_s: f64) -> Result<Vec<(f64, f64)>, ProjectileError> {
        sample_arc(self, self.flight_time_s, step_s)
    }
}

pub(crate) fn state_with_accel(
    init_vel_mps: f64,
    angle_rad: f64,
    accel_mps2: f64,
    time_s: f64,
) -> Result<InstantState, ProjectileError> {
    let cos_a = angle_rad.cos();
    if cos_a.abs() < VERTICAL_COS_BOUND {
        return Err(ProjectileError::VerticalLaunch);
    }

    let x = init_vel_mps * cos_a * time_s;
    let y = x * angle_rad.tan()
        - 0.5 * accel_mps2 * (x / cos_a).powi(2) / init_vel_mps.powi(2);
    let v = ((init_vel_mps * angle_rad.sin() - accel_mps2 * time_s).powi(2)
        + (init_vel_mps * cos_a).powi(2))
    .sqrt();

    Ok(InstantState {
        distance_m: round_places(x, 4),
        height_m: round_places(y, 4),
        speed_mps: round_places(v, 4),
    })
}

pub(crate) fn sample_arc(
    projectile: &IdealProjectile,
    flight_time_s: f64,
    step_s: f64,
) -> Result<Vec<(f64, f64)>, ProjectileError> {
    ensure_positive("sample step", step_s)?;

    let mut points = Vec::new();
    let mut t = 0.0;
    while t < flight_time_s {
        let state = state_with_accel(
            projectile.init_vel_mps,
            projectile.angle_rad,
            projectile.accel_mps2,
            t,
        )?;
        points.push((state.distance_m, state.height_m));
        t += step_s;
    }
    Ok(points)
}

pub(crate) fn round_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_aggregates() {
        let p = IdealProjectile::new(30.0, 45.0).expect("valid inputs");

        assert_close(p.range_m, 91.7431, 0.0001);
        assert_close(p.apex_height_m, 45.8716, 0.0001);
        assert_close(p.flight_time_s, 4.3248, 0.0001);
    }

    #[test]
    fn aggregates_are_positive_and_finite_below_vertical() {
        for angle_deg in [5.0, 20.0, 45.0, 60.0, 89.0] {
            let p = IdealProjectile::new(25.0, angle_deg).expect("valid inputs");
            assert!(p.range_m > 0.0 && p.range_m.is_finite());
            assert!(p.apex_height_m > 0.0 && p.apex_height_m.is_finite());
            assert!(p.flight_time_s > 0.0 && p.flight_time_s.is_finite());
        }
    }

    #[test]
    fn range_is_symmetric_about_45_degrees() {
        let low = IdealProjectile::new(30.0, 30.0).expect("valid inputs");
        let high = IdealProjectile::new(30.0, 60.0).expect("valid inputs");

        assert_close(low.range_m, high.range_m, 0.0001);
    }

    #[test]
    fn launch_state_is_origin_at_initial_speed() {
        let p = IdealProjectile::new(30.0, 45.0).expect("valid inputs");
        let state = p.state_at(0.0).expect("not vertical");

        assert_close(state.distance_m, 0.0, 0.0001);
        assert_close(state.height_m, 0.0, 0.0001);
        assert_close(state.speed_mps, 30.0, 0.0001);
    }

    #[test]
    fn returns_to_ground_at_flight_time() {
        // 57.29577951...° is exactly 1 rad, so the quantized angle equals
        // the exact one and the landing height closes to rounding error.
        let p = IdealProjectile::new(30.0, 57.295_779_513_082_32).expect("valid inputs");
        let state = p.state_at(p.flight_time_s).expect("not vertical");

        assert_close(state.height_m, 0.0, 0.001);
    }

    #[test]
    fn landing_height_drifts_with_angle_quantization() {
        // At 45° the stored angle rounds 0.7854 -> 0.79 rad, which shifts
        // the sampled parabola; the landing height is near zero only at
        // the scale of that quantization.
        let p = IdealProjectile::new(30.0, 45.0).expect("valid inputs");
        let state = p.state_at(p.flight_time_s).expect("not vertical");

        assert_close(state.height_m, 0.0, 0.5);
    }

    #[test]
    fn weaker_gravity_lengthens_the_flight() {
        let earth = IdealProjectile::new(30.0, 45.0).expect("valid inputs");
        let moon = IdealProjectile::with_accel(30.0, 45.0, 1.62).expect("valid inputs");

        assert!(moon.range_m > earth.range_m);
        assert!(moon.flight_time_s > earth.flight_time_s);
    }

    #[test]
    fn vertical_launch_state_is_undefined() {
        let p = IdealProjectile::new(30.0, 90.0).expect("construction still succeeds");

        assert_close(p.range_m, 0.0, 0.0001);
        assert_eq!(p.state_at(1.0), Err(ProjectileError::VerticalLaunch));
    }

    #[test]
    fn rejects_nonpositive_velocity() {
        assert!(matches!(
            IdealProjectile::new(0.0, 45.0),
            Err(ProjectileError::InvalidParameter { name: "initial velocity", .. })
        ));
        assert!(matches!(
            IdealProjectile::new(-3.0, 45.0),
            Err(ProjectileError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_and_zero_inputs() {
        assert!(IdealProjectile::new(f64::NAN, 45.0).is_err());
        assert!(IdealProjectile::new(30.0, f64::INFINITY).is_err());
        assert!(IdealProjectile::with_accel(30.0, 45.0, 0.0).is_err());
    }

    #[test]
    fn arc_starts_at_origin_and_moves_downrange() {
        let p = IdealProjectile::new(30.0, 45.0).expect("valid inputs");
        let points = p.arc_points(0.05).expect("valid step");

        assert_eq!(points[0], (0.0, 0.0));
        assert!(points.windows(2).all(|w| w[1].0 > w[0].0));
        assert_eq!(points.len(), (p.flight_time_s / 0.05).ceil() as usize);
    }
}
