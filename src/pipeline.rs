use crate::{
    config::Config,
    decode::HeatmapDecoder,
    error::Error,
    point::Point,
    skeleton::{Bone, BoneSegment, SkeletonGraph},
    track::{JointTracker, TrackedJoint},
};
use ndarray::ArrayView3;

/// Rendering collaborator boundary. Receives one call per joint and one per
/// bone every tick; the core itself never draws.
pub(crate) trait Renderer {
    fn place_joint(&mut self, joint: usize, position: Point);
    fn hide_joint(&mut self, joint: usize);
    fn draw_bone(&mut self, bone: &Bone, start: Point, end: Point);
    fn hide_bone(&mut self, bone: &Bone);
}

/// Ties decoder, tracker and skeleton graph into the per-frame cycle:
/// decode, track, publish.
pub(crate) struct Pipeline {
    decoder: HeatmapDecoder,
    tracker: JointTracker,
    skeleton: SkeletonGraph,
    frame_num: usize,
}

impl Pipeline {
    pub(crate) fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            decoder: HeatmapDecoder::new(
                config.joint_count,
                f32::from(config.image_width),
                f32::from(config.image_height),
            ),
            tracker: JointTracker::new(config.joint_count, config.threshold()),
            skeleton: SkeletonGraph::new(config.joint_count)?,
            frame_num: 0,
        })
    }

    /// Run one tick over a fully materialized heatmap.
    ///
    /// `texture` is the current frame's display surface size. A malformed
    /// heatmap fails this frame only: tracker state is untouched and the
    /// next frame proceeds from the same history.
    pub(crate) fn process_frame<R>(
        &mut self,
        heatmap: ArrayView3<'_, f32>,
        texture: (f32, f32),
        renderer: &mut R,
    ) -> Result<(), Error>
    where
        R: Renderer,
    {
        let observations = self.decoder.decode(heatmap, texture)?;
        let published = self.tracker.update(&observations);

        for (joint, tracked) in published.iter().enumerate() {
            match *tracked {
                TrackedJoint::Visible(position) => renderer.place_joint(joint, position),
                TrackedJoint::Hidden => renderer.hide_joint(joint),
            }
        }
        for (bone, segment) in self.skeleton.segments(&published) {
            match segment {
                BoneSegment::Visible { start, end } => renderer.draw_bone(&bone, start, end),
                BoneSegment::Hidden => renderer.hide_bone(&bone),
            }
        }

        self.frame_num += 1;
        Ok(())
    }

    pub(crate) fn frame_num(&self) -> usize {
        self.frame_num
    }
}
