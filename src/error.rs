#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("expected {expected} heatmap channels, got {got}")]
    HeatmapChannels { expected: usize, got: usize },

    #[error("confidence threshold must be within 0..=100 percent, got {0}")]
    ThresholdOutOfRange(u16),

    #[error("joint count must be nonzero")]
    ZeroJointCount,

    #[error("bone {bone} references joint {joint}, but only {joint_count} joints are configured")]
    BoneJointOutOfRange {
        bone: usize,
        joint: usize,
        joint_count: usize,
    },

    #[error("failed to convert keypoint variant to usize: {0:?}")]
    KeypointVariantToUSize(crate::pose::KeypointKind),

    #[error("failed to convert value to f32")]
    ConvertToF32,
}
