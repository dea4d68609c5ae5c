use ndarray::Array3;

/// Deterministic stand-in for the inference collaborator.
///
/// Each joint gets a single peak cell walking a fixed path across the grid,
/// and every joint's confidence dips below any reasonable threshold on a
/// staggered four-frame cycle, so the gate, extrapolation and hidden paths
/// all get exercised during a demo run.
pub(crate) struct SyntheticSource {
    rows: usize,
    cols: usize,
    joint_count: usize,
    frame: usize,
}

impl SyntheticSource {
    pub(crate) fn new(size: usize, joint_count: usize) -> Self {
        Self {
            rows: size,
            cols: size,
            joint_count,
            frame: 0,
        }
    }

    fn peak_cell(&self, joint: usize, frame: usize) -> (usize, usize) {
        let y = (joint + frame / 2) % self.rows;
        let x = (2 * joint + frame) % self.cols;
        (y, x)
    }

    fn confidence(&self, joint: usize, frame: usize) -> f32 {
        if (joint + frame) % 4 == 0 {
            0.4
        } else {
            0.9
        }
    }

    pub(crate) fn next_heatmap(&mut self) -> Array3<f32> {
        let frame = self.frame;
        self.frame += 1;

        let mut heatmap = Array3::zeros((self.rows, self.cols, self.joint_count));
        for joint in 0..self.joint_count {
            let (y, x) = self.peak_cell(joint, frame);
            heatmap[(y, x, joint)] = self.confidence(joint, frame);
        }
        heatmap
    }
}

#[cfg(test)]
mod tests {
    use super::SyntheticSource;

    #[test]
    fn peaks_land_on_the_scheduled_cells() {
        let mut source = SyntheticSource::new(16, 3);
        let heatmap = source.next_heatmap();
        assert_eq!(heatmap.dim(), (16, 16, 3));

        for joint in 0..3 {
            let (y, x) = source.peak_cell(joint, 0);
            assert_eq!(heatmap[(y, x, joint)], source.confidence(joint, 0));
        }
    }

    #[test]
    fn sources_with_the_same_parameters_agree() {
        let mut a = SyntheticSource::new(12, 5);
        let mut b = SyntheticSource::new(12, 5);
        for _ in 0..8 {
            assert_eq!(a.next_heatmap(), b.next_heatmap());
        }
    }

    #[test]
    fn every_joint_eventually_goes_unconfident() {
        let source = SyntheticSource::new(16, 17);
        for joint in 0..17 {
            assert!((0..4).any(|frame| source.confidence(joint, frame) < 0.7));
        }
    }
}
