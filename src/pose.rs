use crate::{error::Error, point::Point};
use num_traits::{FromPrimitive, ToPrimitive};

/// The 17 COCO-style keypoints, in channel order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, num_derive::FromPrimitive, num_derive::ToPrimitive,
)]
pub(crate) enum KeypointKind {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

pub(crate) const NUM_KEYPOINTS: usize = 17;

impl KeypointKind {
    pub(crate) fn idx(self) -> Result<usize, Error> {
        self.to_usize().ok_or(Error::KeypointVariantToUSize(self))
    }

    /// The keypoint for a heatmap channel index, if the index names one of
    /// the canonical 17.
    pub(crate) fn from_idx(idx: usize) -> Option<Self> {
        Self::from_usize(idx)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

/// One joint's decoded location and confidence for a single frame.
#[derive(Debug, Copy, Clone)]
pub(crate) struct KeypointObservation {
    pub(crate) position: Point,
    pub(crate) confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::{KeypointKind, NUM_KEYPOINTS};

    #[test]
    fn indices_cover_channel_range() {
        for idx in 0..NUM_KEYPOINTS {
            let kind = KeypointKind::from_idx(idx).unwrap();
            assert_eq!(kind.idx().unwrap(), idx);
        }
        assert!(KeypointKind::from_idx(NUM_KEYPOINTS).is_none());
    }

    #[test]
    fn channel_order_matches_coco() {
        assert_eq!(KeypointKind::from_idx(0), Some(KeypointKind::Nose));
        assert_eq!(KeypointKind::from_idx(5), Some(KeypointKind::LeftShoulder));
        assert_eq!(KeypointKind::from_idx(11), Some(KeypointKind::LeftHip));
        assert_eq!(KeypointKind::from_idx(16), Some(KeypointKind::RightAnkle));
    }
}
