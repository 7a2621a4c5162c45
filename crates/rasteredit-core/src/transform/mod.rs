//! Geometric transforms: rotation and mirroring.
//!
//! Both operations keep the frame size and are cumulative: they act on the
//! current image, not the original.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Rotation pivots on the geometric center of the frame

mod flip;
mod rotation;

pub use flip::{flip, FlipAxis};
pub use rotation::{rotate, rotate_with_filter, InterpolationFilter};
