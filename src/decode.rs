use crate::{
    error::Error,
    point::Point,
    pose::KeypointObservation,
};
use ndarray::ArrayView3;
use num_traits::cast::ToPrimitive;
use ordered_float::NotNan;

/// Decodes a `[height, width, joints]` confidence volume into one
/// observation per joint.
///
/// Pure and deterministic: each channel is scanned in row-major ascending
/// order and ties on the maximum are won by the first cell encountered.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeatmapDecoder {
    joint_count: usize,
    image_width: f32,
    image_height: f32,
}

impl HeatmapDecoder {
    pub(crate) fn new(joint_count: usize, image_width: f32, image_height: f32) -> Self {
        Self {
            joint_count,
            image_width,
            image_height,
        }
    }

    fn validate_channel_count(&self, channels: usize) -> Result<(), Error> {
        if channels != self.joint_count {
            Err(Error::HeatmapChannels {
                expected: self.joint_count,
                got: channels,
            })
        } else {
            Ok(())
        }
    }

    /// Decode one frame's heatmap into texture-space observations.
    ///
    /// `texture` is the current frame's display surface size. The y axis is
    /// flipped on the way out: the heatmap is top-down, the render surface
    /// bottom-up.
    pub(crate) fn decode(
        &self,
        heatmap: ArrayView3<'_, f32>,
        (texture_width, texture_height): (f32, f32),
    ) -> Result<Vec<KeypointObservation>, Error> {
        let (rows, cols, channels) = heatmap.dim();
        self.validate_channel_count(channels)?;

        let stride = self.image_height / rows.to_f32().ok_or(Error::ConvertToF32)?;
        let scale_x = texture_width / self.image_width;
        let scale_y = texture_height / self.image_height;

        let mut observations = Vec::with_capacity(channels);
        for channel in 0..channels {
            let mut best = NotNan::default();
            let (mut best_x, mut best_y) = (0, 0);
            for y in 0..rows {
                for x in 0..cols {
                    // NaN cells can never become the peak.
                    if let Ok(value) = NotNan::new(heatmap[(y, x, channel)]) {
                        if value > best {
                            best = value;
                            best_x = x;
                            best_y = y;
                        }
                    }
                }
            }

            let grid_x = best_x.to_f32().ok_or(Error::ConvertToF32)?;
            let grid_y = best_y.to_f32().ok_or(Error::ConvertToF32)?;
            observations.push(KeypointObservation {
                position: Point::new(
                    grid_x * stride * scale_x,
                    (self.image_height - grid_y * stride) * scale_y,
                ),
                confidence: best.into_inner(),
            });
        }
        Ok(observations)
    }
}
