use std::f64::consts::PI;

use crate::core::error::{ensure_positive, ProjectileError};
use crate::core::ideal::{
    round_places, sample_arc, state_with_accel, IdealProjectile, InstantState,
    EARTH_GRAVITY_MPS2,
};

/// Direction of spin imparted at launch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinDirection {
    Top,
    Back,
    Left,
    Right,
}

/// Magnus-force estimate paired with the spin that produces it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnusForce {
    pub newtons: f64,
    pub spin: SpinDirection,
}

/// Physical parameters of the projectile and the medium it flies through.
/// Defaults describe a football-sized ball in sea-level air.
#[derive(Clone, Copy, Debug)]
pub struct MediumParams {
    pub mass_kg: f64,
    pub diameter_m: f64,
    pub drag_coeff: f64,
    pub medium_density_kg_m3: f64,
}

impl Default for MediumParams {
    fn default() -> Self {
        Self {
            mass_kg: 0.45,
            diameter_m: 0.22,
            drag_coeff: 0.5,
            medium_density_kg_m3: 1.225,
        }
    }
}

/// Trajectory with quadratic air resistance, approximated by a constant
/// effective acceleration that blends gravity with the launch-speed drag.
/// Composes the vacuum model; `ideal` keeps its gravity-based aggregates
/// for side-by-side comparison.
#[derive(Clone, Copy, Debug)]
pub struct ProjectileInMedium {
    pub ideal: IdealProjectile,
    pub params: MediumParams,
    pub cross_sec_m2: f64,
    pub quadratic_drag_param: f64,
    /// Effective acceleration; always at least gravity.
    pub accel_mps2: f64,
    pub range_m: f64,
    pub apex_height_m: f64,
    pub flight_time_s: f64,
}

impl ProjectileInMedium {
    pub fn new(init_vel_mps: f64, angle_deg: f64) -> Result<Self, ProjectileError> {
        Self::with_params(init_vel_mps, angle_deg, MediumParams::default())
    }

    pub fn with_params(
        init_vel_mps: f64,
        angle_deg: f64,
        params: MediumParams,
    ) -> Result<Self, ProjectileError> {
        let ideal = IdealProjectile::new(init_vel_mps, angle_deg)?;
        ensure_positive("mass", params.mass_kg)?;
        ensure_positive("diameter", params.diameter_m)?;
        ensure_positive("drag coefficient", params.drag_coeff)?;
        ensure_positive("medium density", params.medium_density_kg_m3)?;

        let cross_sec_m2 = 0.25 * PI * params.diameter_m.powi(2);
        let quadratic_drag_param =
            0.5 * params.drag_coeff * params.medium_density_kg_m3 * cross_sec_m2;
        let accel_mps2 = (quadratic_drag_param.powi(2) * init_vel_mps.powi(4)
            + (EARTH_GRAVITY_MPS2 * params.mass_kg).powi(2))
        .sqrt()
            / params.mass_kg;

        let theta = angle_deg.to_radians();
        Ok(Self {
            ideal,
            params,
            cross_sec_m2,
            quadratic_drag_param,
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

    /// State at `time_s`, on the drag-flattened arc.
    pub fn state_at(&self, time_s: f64) -> Result<InstantState, ProjectileError> {
        state_with_accel(
            self.ideal.init_vel_mps,
            self.ideal.angle_rad,
            self.accel_mps2,
            time_s,
        )
    }

    /// (distance, height) samples over [0, flight_time) at `step_s`.
    pub fn arc_points(&self, step_s: f64) -> Result<Vec<(f64, f64)>, ProjectileError> {
        sample_arc(&self.flattened(), self.flight_time_s, step_s)
    }

    /// Drag force at launch speed. A static estimate only; it is not
    /// re-evaluated against the decaying in-flight velocity.
    pub fn drag_force_n(&self) -> f64 {
        round_places(
            self.quadratic_drag_param * self.ideal.init_vel_mps.powi(2),
            4,
        )
    }

    /// Strength of the vortex shed by a ball spinning at `revs_per_s`.
    pub fn vortex_strength(&self, revs_per_s: f64) -> f64 {
        (2.0 * PI * (self.params.diameter_m / 2.0) * 0.01).powi(2) * revs_per_s
    }

    /// Magnus side-force estimate at `time_s` for a ball spinning at
    /// `revs_per_s` in the given direction. The estimate is not fed back
    /// into the trajectory; the arc stays planar.
    pub fn magnus_force_at(
        &self,
        time_s: f64,
        revs_per_s: f64,
        spin: SpinDirection,
    ) -> Result<MagnusForce, ProjectileError> {
        let state = self.state_at(time_s)?;
        let force = self.vortex_strength(revs_per_s)
            * state.speed_mps
            * self.params.medium_density_kg_m3
            * self.params.diameter_m;
        Ok(MagnusForce {
            newtons: round_places(force, 4),
            spin,
        })
    }

    /// Position/velocity on a Magnus-curved arc. Declared for symmetry
    /// with `magnus_force_at` but not supported; the side force is never
    /// integrated into the trajectory.
    pub fn state_with_magnus_at(
        &self,
        _time_s: f64,
        _revs_per_s: f64,
        _spin: SpinDirection,
    ) -> Result<InstantState, ProjectileError> {
        Err(ProjectileError::Unsupported("Magnus-adjusted trajectory state"))
    }

    // The vacuum sampler with the effective acceleration swapped in.
    fn flattened(&self) -> IdealProjectile {
        IdealProjectile {
            accel_mps2: self.accel_mps2,
            ..self.ideal
        }
    }
}
