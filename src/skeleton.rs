use crate::{error::Error, point::Point, pose::KeypointKind, track::TrackedJoint};

/// Cosmetic grouping of bones; carries the draw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoneCategory {
    Face,
    Torso,
    Arm,
    Leg,
}

impl BoneCategory {
    pub(crate) fn color(self) -> [u8; 3] {
        match self {
            Self::Face => [255, 0, 255],
            Self::Torso => [255, 0, 0],
            Self::Arm => [0, 255, 0],
            Self::Leg => [0, 0, 255],
        }
    }
}

/// A drawn segment between two joints. References joint slots by kind; does
/// not own them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bone {
    pub(crate) start: KeypointKind,
    pub(crate) end: KeypointKind,
    pub(crate) category: BoneCategory,
}

impl Bone {
    const fn new(start: KeypointKind, end: KeypointKind, category: BoneCategory) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    pub(crate) fn name(&self) -> String {
        format!("{}_to_{}", self.start.name(), self.end.name())
    }
}

pub(crate) mod constants {
    use super::{Bone, BoneCategory::*};
    use crate::pose::KeypointKind::*;

    pub(crate) const BONES: [Bone; 18] = [
        Bone::new(Nose, LeftEye, Face),
        Bone::new(Nose, RightEye, Face),
        Bone::new(LeftEye, LeftEar, Face),
        Bone::new(RightEye, RightEar, Face),
        Bone::new(LeftShoulder, RightShoulder, Torso),
        Bone::new(LeftShoulder, LeftHip, Torso),
        Bone::new(RightShoulder, RightHip, Torso),
        Bone::new(LeftShoulder, RightHip, Torso),
        Bone::new(RightShoulder, LeftHip, Torso),
        Bone::new(LeftHip, RightHip, Torso),
        Bone::new(LeftShoulder, LeftElbow, Arm),
        Bone::new(LeftElbow, LeftWrist, Arm),
        Bone::new(RightShoulder, RightElbow, Arm),
        Bone::new(RightElbow, RightWrist, Arm),
        Bone::new(LeftHip, LeftKnee, Leg),
        Bone::new(LeftKnee, LeftAnkle, Leg),
        Bone::new(RightHip, RightKnee, Leg),
        Bone::new(RightKnee, RightAnkle, Leg),
    ];
}

/// Per-bone result for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum BoneSegment {
    Visible { start: Point, end: Point },
    Hidden,
}

/// The fixed bone topology with endpoint indices resolved and validated
/// once at construction.
pub(crate) struct SkeletonGraph {
    bones: Vec<(Bone, usize, usize)>,
}

impl SkeletonGraph {
    pub(crate) fn new(joint_count: usize) -> Result<Self, Error> {
        let mut bones = Vec::with_capacity(constants::BONES.len());
        for (index, bone) in constants::BONES.iter().enumerate() {
            let start = bone.start.idx()?;
            let end = bone.end.idx()?;
            for &joint in &[start, end] {
                if joint >= joint_count {
                    return Err(Error::BoneJointOutOfRange {
                        bone: index,
                        joint,
                        joint_count,
                    });
                }
            }
            bones.push((*bone, start, end));
        }
        Ok(Self { bones })
    }

    pub(crate) fn len(&self) -> usize {
        self.bones.len()
    }

    /// Per-bone segments for this frame. A bone is renderable iff both of
    /// its endpoint joints are visible; no partial bones.
    pub(crate) fn segments<'a>(
        &'a self,
        joints: &'a [TrackedJoint],
    ) -> impl Iterator<Item = (Bone, BoneSegment)> + 'a {
        self.bones.iter().map(move |&(bone, start, end)| {
            let segment = match (joints[start].position(), joints[end].position()) {
                (Some(start), Some(end)) => BoneSegment::Visible { start, end },
                _ => BoneSegment::Hidden,
            };
            (bone, segment)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{constants::BONES, BoneCategory, BoneSegment, SkeletonGraph};
    use crate::{
        error::Error,
        point::Point,
        pose::{KeypointKind, NUM_KEYPOINTS},
        track::TrackedJoint,
    };

    #[test]
    fn topology_closes_over_seventeen_joints() {
        let graph = SkeletonGraph::new(NUM_KEYPOINTS).unwrap();
        assert_eq!(graph.len(), 18);
        for bone in &BONES {
            assert!(bone.start.idx().unwrap() < NUM_KEYPOINTS);
            assert!(bone.end.idx().unwrap() < NUM_KEYPOINTS);
        }
    }

    #[test]
    fn category_grouping_matches_reference_topology() {
        let count = |category: BoneCategory| {
            BONES
                .iter()
                .filter(|bone| bone.category == category)
                .count()
        };
        assert_eq!(count(BoneCategory::Face), 4);
        assert_eq!(count(BoneCategory::Torso), 6);
        assert_eq!(count(BoneCategory::Arm), 4);
        assert_eq!(count(BoneCategory::Leg), 4);
    }

    #[test]
    fn undersized_joint_count_fails_construction() {
        match SkeletonGraph::new(11) {
            Err(Error::BoneJointOutOfRange {
                joint, joint_count, ..
            }) => {
                assert_eq!(joint, 11);
                assert_eq!(joint_count, 11);
            }
            other => panic!("expected out-of-range bone, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn bones_render_only_when_both_endpoints_are_visible() {
        let graph = SkeletonGraph::new(NUM_KEYPOINTS).unwrap();
        let mut joints = vec![TrackedJoint::Hidden; NUM_KEYPOINTS];
        joints[5] = TrackedJoint::Visible(Point::new(10.0, 20.0));
        joints[6] = TrackedJoint::Visible(Point::new(30.0, 20.0));

        for (bone, segment) in graph.segments(&joints) {
            let start = bone.start.idx().unwrap();
            let end = bone.end.idx().unwrap();
            if (start, end) == (5, 6) {
                assert_eq!(
                    segment,
                    BoneSegment::Visible {
                        start: Point::new(10.0, 20.0),
                        end: Point::new(30.0, 20.0),
                    }
                );
            } else {
                // Bones touching hidden joint 11 (or any other hidden
                // joint) must not draw, even with one visible endpoint.
                assert_eq!(segment, BoneSegment::Hidden);
            }
        }
    }

    #[test]
    fn bone_names_follow_endpoint_names() {
        let bone = BONES
            .iter()
            .find(|bone| {
                bone.start == KeypointKind::LeftShoulder && bone.end == KeypointKind::LeftElbow
            })
            .unwrap();
        assert_eq!(bone.name(), "left_shoulder_to_left_elbow");
    }
}
