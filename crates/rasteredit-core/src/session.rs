//! Edit session: one loaded image, its pristine original and the working copy.
//!
//! Tone adjustments always start from the original so repeated slider moves
//! never compound. Geometry, color maps and filters act on the current image
//! and accumulate.

use serde::{Deserialize, Serialize};

use crate::adjustments::adjust;
use crate::color_map::{apply_color_map, ColorMap};
use crate::convolution::{apply_filter, AlphaMode, Filter};
use crate::error::EditError;
use crate::raster::RasterBuffer;
use crate::transform::{flip, rotate_with_filter, FlipAxis, InterpolationFilter};
use crate::AdjustmentParameters;

const LOG_TARGET: &str = "rasteredit::session";

/// Tunables applied to every operation of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Resampling kernel for non-quarter-turn rotations.
    pub interpolation: InterpolationFilter,
    /// Alpha policy for sharpen. Blur always keeps alpha.
    pub sharpen_alpha: AlphaMode,
}

/// A geometric transform of the current image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryOp {
    /// Rotate by the given degrees, positive = clockwise.
    Rotate(f32),
    /// Mirror along an axis.
    Flip(FlipAxis),
}

/// Any session operation, in a form collaborators can send as data.
///
/// Serialized with an `op` tag, e.g. `{"op": "rotate", "degrees": 90.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    Rotate { degrees: f32 },
    Flip { axis: FlipAxis },
    Adjust { params: AdjustmentParameters },
    ColorMap { map: ColorMap },
    Filter { filter: Filter },
    Reset,
}

impl From<GeometryOp> for EditOperation {
    fn from(op: GeometryOp) -> Self {
        match op {
            GeometryOp::Rotate(degrees) => EditOperation::Rotate { degrees },
            GeometryOp::Flip(axis) => EditOperation::Flip { axis },
        }
    }
}

/// Result of a successful operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditOutcome {
    pub operation: EditOperation,
    pub width: u32,
    pub height: u32,
    /// Cumulative rotation since the last load or reset, in degrees.
    pub rotation: f32,
}

#[derive(Debug)]
struct Loaded {
    original: RasterBuffer,
    current: RasterBuffer,
    rotation: f32,
}

/// Stateful editor over a single image.
///
/// Starts empty. Every transform either replaces the current image entirely
/// or, on error, leaves the session untouched.
#[derive(Debug, Default)]
pub struct EditSession {
    config: SessionConfig,
    state: Option<Loaded>,
}

impl EditSession {
    /// Create an empty session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given settings.
    pub fn with_config(config: SessionConfig) -> Self {
        Self { config, state: None }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Load a decoded image, replacing whatever was loaded before.
    ///
    /// # Errors
    /// `InvalidInput` if either dimension is zero. The session is unchanged.
    pub fn load(&mut self, buffer: RasterBuffer) -> Result<(), EditError> {
        if buffer.width() == 0 || buffer.height() == 0 {
            tracing::warn!(
                target: LOG_TARGET,
                width = buffer.width(),
                height = buffer.height(),
                "rejected empty image"
            );
            return Err(EditError::InvalidInput(format!(
                "image must have non-zero dimensions, got {}x{}",
                buffer.width(),
                buffer.height()
            )));
        }

        tracing::debug!(
            target: LOG_TARGET,
            width = buffer.width(),
            height = buffer.height(),
            "image loaded"
        );
        self.state = Some(Loaded {
            current: buffer.clone(),
            original: buffer,
            rotation: 0.0,
        });
        Ok(())
    }

    /// Drop the loaded image, returning the current one if there was any.
    pub fn unload(&mut self) -> Option<RasterBuffer> {
        let state = self.state.take()?;
        tracing::debug!(target: LOG_TARGET, "image unloaded");
        Some(state.current)
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    /// The image as loaded.
    pub fn original(&self) -> Option<&RasterBuffer> {
        self.state.as_ref().map(|s| &s.original)
    }

    /// The image with all edits applied.
    pub fn current(&self) -> Option<&RasterBuffer> {
        self.state.as_ref().map(|s| &s.current)
    }

    /// Cumulative rotation in degrees, 0 when nothing is loaded.
    pub fn rotation(&self) -> f32 {
        self.state.as_ref().map_or(0.0, |s| s.rotation)
    }

    /// Rotate or flip the current image.
    pub fn apply_geometry(&mut self, op: GeometryOp) -> Result<EditOutcome, EditError> {
        self.apply(op.into())
    }

    /// Replace the current image with the original adjusted by `params`.
    ///
    /// Edits made since load, including geometry, are discarded.
    pub fn apply_tone(&mut self, params: &AdjustmentParameters) -> Result<EditOutcome, EditError> {
        self.apply(EditOperation::Adjust { params: *params })
    }

    pub fn apply_color_map(&mut self, map: ColorMap) -> Result<EditOutcome, EditError> {
        self.apply(EditOperation::ColorMap { map })
    }

    pub fn apply_convolution(&mut self, filter: Filter) -> Result<EditOutcome, EditError> {
        self.apply(EditOperation::Filter { filter })
    }

    /// Restore the original image and zero the rotation.
    pub fn reset(&mut self) -> Result<EditOutcome, EditError> {
        self.apply(EditOperation::Reset)
    }

    /// Run any operation against the loaded image.
    ///
    /// # Errors
    /// `NotLoaded` if the session is empty. `InvalidInput` for a NaN or
    /// infinite rotation angle or tone parameter. On error the session is
    /// unchanged.
    pub fn apply(&mut self, operation: EditOperation) -> Result<EditOutcome, EditError> {
        let config = self.config;
        let Some(state) = self.state.as_mut() else {
            tracing::warn!(target: LOG_TARGET, ?operation, "no image loaded");
            return Err(EditError::NotLoaded);
        };
        if let Err(err) = validate(&operation) {
            tracing::warn!(target: LOG_TARGET, ?operation, "rejected operation");
            return Err(err);
        }

        match operation {
            EditOperation::Rotate { degrees } => {
                state.current = rotate_with_filter(&state.current, degrees, config.interpolation);
                state.rotation += degrees;
            }
            EditOperation::Flip { axis } => {
                state.current = flip(&state.current, axis);
            }
            EditOperation::Adjust { params } => {
                state.current = adjust(&state.original, &params);
            }
            EditOperation::ColorMap { map } => {
                state.current = apply_color_map(&state.current, map);
            }
            EditOperation::Filter { filter } => {
                state.current = apply_filter(&state.current, filter, config.sharpen_alpha);
            }
            EditOperation::Reset => {
                state.current = state.original.clone();
                state.rotation = 0.0;
            }
        }

        tracing::debug!(target: LOG_TARGET, ?operation, rotation = state.rotation, "applied");
        Ok(EditOutcome {
            operation,
            width: state.current.width(),
            height: state.current.height(),
            rotation: state.rotation,
        })
    }
}

/// Reject numeric arguments no transform can give a meaning to.
fn validate(operation: &EditOperation) -> Result<(), EditError> {
    match operation {
        EditOperation::Rotate { degrees } if !degrees.is_finite() => Err(
            EditError::InvalidInput(format!("rotation angle must be finite, got {degrees}")),
        ),
        EditOperation::Adjust { params } if !params.is_finite() => Err(EditError::InvalidInput(
            format!("tone parameters must be finite, got {params:?}"),
        )),
        _ => Ok(()),
    }
}
