//! Projectile motion under two models: a vacuum trajectory and a
//! quadratic-drag approximation. All reported results are rounded to
//! 4 decimal places.

pub mod core;
