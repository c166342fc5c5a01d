//! Plane-stress transformation invariants (Mohr's circle).
//!
//! The circle is centred at the average normal stress with radius equal to the
//! maximum in-plane shear:
//!
//! ```text
//! avg = (σx + σy) / 2
//! R   = √(((σx − σy) / 2)² + τxy²)
//! σ1  = avg + R,  σ2 = avg − R,  τmax = R
//! θp  = ½ · atan2(2τxy, σx − σy)
//! ```

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constant;

/// Principal stresses and maximum shear of a 2D stress state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalStresses<T> {
    /// Major principal stress σ1.
    pub sigma_1: T,

    /// Minor principal stress σ2.
    pub sigma_2: T,

    /// Maximum in-plane shear stress (the circle radius).
    pub tau_max: T,

    /// Centre of the circle (average normal stress).
    pub center: T,

    /// Angle from the x axis to the σ1 direction, in radians.
    pub principal_angle: T,
}

/// Transform `(σx, σy, τxy)` into principal stresses.
pub fn principal_stresses<T: Float>(sigma_x: T, sigma_y: T, tau_xy: T) -> PrincipalStresses<T> {
    let half = constant::<T>(0.5);
    let center = (sigma_x + sigma_y) * half;
    let radius = ((sigma_x - sigma_y) * half).hypot(tau_xy);
    let principal_angle = half * (constant::<T>(2.0) * tau_xy).atan2(sigma_x - sigma_y);

    PrincipalStresses {
        sigma_1: center + radius,
        sigma_2: center - radius,
        tau_max: radius,
        center,
        principal_angle,
    }
}
