pub mod error;
pub mod ideal;
pub mod medium;
pub mod window;

pub use error::ProjectileError;
pub use ideal::{IdealProjectile, InstantState, EARTH_GRAVITY_MPS2};
pub use medium::{MagnusForce, MediumParams, ProjectileInMedium, SpinDirection};
