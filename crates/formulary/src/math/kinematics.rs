//! Planar two-link forward kinematics.
//!
//! The shoulder sits at the origin. `theta1` is measured from the x axis and
//! `theta2` is the elbow angle relative to the first link, both in radians.

// External dependencies
use num_traits::Float;

/// Joint positions of a two-link arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose<T> {
    /// Elbow position `(x, y)`.
    pub elbow: (T, T),

    /// End-effector position `(x, y)`.
    pub end_effector: (T, T),
}

impl<T: Float> ArmPose<T> {
    /// Straight-line distance from the shoulder to the end effector.
    pub fn reach(&self) -> T {
        self.end_effector.0.hypot(self.end_effector.1)
    }
}

/// Compute elbow and end-effector positions.
pub fn forward<T: Float>(l1: T, l2: T, theta1: T, theta2: T) -> ArmPose<T> {
    let (s1, c1) = theta1.sin_cos();
    let (s12, c12) = (theta1 + theta2).sin_cos();

    let elbow = (l1 * c1, l1 * s1);
    let end_effector = (elbow.0 + l2 * c12, elbow.1 + l2 * s12);

    ArmPose {
        elbow,
        end_effector,
    }
}
