use crate::{point::Point, pose::KeypointObservation};

/// Published per-joint result for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TrackedJoint {
    Visible(Point),
    Hidden,
}

impl TrackedJoint {
    pub(crate) fn position(self) -> Option<Point> {
        match self {
            Self::Visible(position) => Some(position),
            Self::Hidden => None,
        }
    }
}

/// Cross-frame memory for one joint.
///
/// `velocity` is `Some` only once it has been derived from two consecutive
/// confident observations; a single confident observation leaves it `None`.
#[derive(Debug, Clone, Copy)]
enum JointState {
    Cold,
    Warm {
        position: Point,
        velocity: Option<Point>,
    },
}

/// Gates decoded observations by confidence and fills gaps from per-joint
/// position/velocity history.
///
/// Owns all cross-frame state; `update` must see exactly one call per frame.
pub(crate) struct JointTracker {
    threshold: f32,
    states: Vec<JointState>,
}

impl JointTracker {
    pub(crate) fn new(joint_count: usize, threshold: f32) -> Self {
        Self {
            threshold,
            states: vec![JointState::Cold; joint_count],
        }
    }

    /// Advance one frame, consuming observations in joint-index order.
    ///
    /// A confident observation is published as-is and re-bases the joint's
    /// history. An unconfident one is covered by a one-step prediction from
    /// the last real observation: `position + velocity` when a velocity is
    /// known, the held position when it is not. The prediction never
    /// re-bases the state, so consecutive unconfident frames republish the
    /// same point. Only joints that were never confidently observed stay
    /// hidden.
    pub(crate) fn update(&mut self, observations: &[KeypointObservation]) -> Vec<TrackedJoint> {
        debug_assert_eq!(observations.len(), self.states.len());
        let threshold = self.threshold;
        self.states
            .iter_mut()
            .zip(observations)
            .map(|(state, observation)| {
                let confidence = observation.confidence.clamp(0.0, 1.0);
                if confidence >= threshold {
                    let velocity = match *state {
                        JointState::Warm { position, .. } => Some(observation.position - position),
                        JointState::Cold => None,
                    };
                    *state = JointState::Warm {
                        position: observation.position,
                        velocity,
                    };
                    TrackedJoint::Visible(observation.position)
                } else {
                    match *state {
                        JointState::Warm {
                            position,
                            velocity: Some(velocity),
                        } => TrackedJoint::Visible(position + velocity),
                        JointState::Warm {
                            position,
                            velocity: None,
                        } => TrackedJoint::Visible(position),
                        JointState::Cold => TrackedJoint::Hidden,
                    }
                }
            })
            .collect()
    }
}
