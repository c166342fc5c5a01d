//! Moments of inertia about the centre of mass.
//!
//! ## Purpose
//!
//! Standard closed-form moments of inertia for five fixed shapes. Each shape
//! declares the dimension fields it reads so callers can request only those.
//!
//! | Shape           | Formula             | Dimensions     |
//! |-----------------|---------------------|----------------|
//! | Solid sphere    | 2/5 · m · r²        | radius         |
//! | Hollow sphere   | 2/3 · m · r²        | radius         |
//! | Solid cylinder  | 1/2 · m · r²        | radius         |
//! | Rod (centre)    | 1/12 · m · L²       | length         |
//! | Rect. plate     | 1/12 · m · (h²+w²)  | width, height  |

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constant;

/// A dimension input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Radius of a sphere or cylinder.
    Radius,

    /// Length of a rod.
    Length,

    /// Width of a plate.
    Width,

    /// Height of a plate.
    Height,
}

impl Dimension {
    /// Field name used in error messages.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Length => "length",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// Shape whose moment of inertia is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Solid sphere about a diameter.
    SolidSphere,

    /// Thin-walled hollow sphere about a diameter.
    HollowSphere,

    /// Solid cylinder about its axis.
    SolidCylinder,

    /// Thin rod about its centre, perpendicular to its length.
    RodCenter,

    /// Rectangular plate about the axis through its centre, normal to the plate.
    RectPlate,
}

impl Shape {
    /// All supported shapes.
    pub const ALL: [Shape; 5] = [
        Self::SolidSphere,
        Self::HollowSphere,
        Self::SolidCylinder,
        Self::RodCenter,
        Self::RectPlate,
    ];

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SolidSphere => "Solid sphere",
            Self::HollowSphere => "Hollow sphere",
            Self::SolidCylinder => "Solid cylinder",
            Self::RodCenter => "Rod (center)",
            Self::RectPlate => "Rectangular plate",
        }
    }

    /// Dimension fields the formula reads, in input order.
    pub const fn required_dimensions(&self) -> &'static [Dimension] {
        match self {
            Self::SolidSphere | Self::HollowSphere | Self::SolidCylinder => &[Dimension::Radius],
            Self::RodCenter => &[Dimension::Length],
            Self::RectPlate => &[Dimension::Width, Dimension::Height],
        }
    }
}

/// Dimension inputs; fields a shape does not need may be left `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions<T> {
    /// Radius (m).
    pub radius: Option<T>,

    /// Length (m).
    pub length: Option<T>,

    /// Width (m).
    pub width: Option<T>,

    /// Height (m).
    pub height: Option<T>,
}

impl<T: Copy> Dimensions<T> {
    /// Dimensions for spheres and cylinders.
    pub fn radius(r: T) -> Self {
        Self {
            radius: Some(r),
            length: None,
            width: None,
            height: None,
        }
    }

    /// Dimensions for a rod.
    pub fn length(l: T) -> Self {
        Self {
            radius: None,
            length: Some(l),
            width: None,
            height: None,
        }
    }

    /// Dimensions for a plate.
    pub fn plate(width: T, height: T) -> Self {
        Self {
            radius: None,
            length: None,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Value of a single field.
    #[inline]
    pub fn get(&self, dim: Dimension) -> Option<T> {
        match dim {
            Dimension::Radius => self.radius,
            Dimension::Length => self.length,
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    /// Overwrite a single field.
    #[inline]
    pub fn set(&mut self, dim: Dimension, value: Option<T>) {
        match dim {
            Dimension::Radius => self.radius = value,
            Dimension::Length => self.length = value,
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
        }
    }
}

/// Moment of inertia in kg·m², or `None` if a required dimension is absent.
pub fn moment_of_inertia<T: Float>(shape: Shape, mass: T, dims: &Dimensions<T>) -> Option<T> {
    let value = match shape {
        Shape::SolidSphere => constant::<T>(2.0 / 5.0) * mass * dims.radius?.powi(2),
        Shape::HollowSphere => constant::<T>(2.0 / 3.0) * mass * dims.radius?.powi(2),
        Shape::SolidCylinder => constant::<T>(0.5) * mass * dims.radius?.powi(2),
        Shape::RodCenter => constant::<T>(1.0 / 12.0) * mass * dims.length?.powi(2),
        Shape::RectPlate => {
            let (w, h) = (dims.width?, dims.height?);
            constant::<T>(1.0 / 12.0) * mass * (h.powi(2) + w.powi(2))
        }
    };
    Some(value)
}
