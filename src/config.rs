use crate::error::Error;

const DEFAULT_JOINT_COUNT: &str = "17";
const DEFAULT_MIN_CONFIDENCE: &str = "70";
const DEFAULT_IMAGE_HEIGHT: &str = "352";
const DEFAULT_IMAGE_WIDTH: &str = "352";
const DEFAULT_LINE_WIDTH: &str = "5.0";

/// Tunable surface of the pose pipeline. Validated once at startup;
/// steady-state code assumes a valid config.
#[derive(Debug, Clone, Copy, structopt::StructOpt)]
pub(crate) struct Config {
    /// Number of joints (heatmap channels) produced by the network.
    #[structopt(short, long, default_value = DEFAULT_JOINT_COUNT)]
    pub(crate) joint_count: usize,

    /// Minimum confidence required to trust an observation, in percent.
    #[structopt(short, long, default_value = DEFAULT_MIN_CONFIDENCE)]
    pub(crate) min_confidence: u16,

    /// The height of the image the network expects.
    #[structopt(short = "-H", long, default_value = DEFAULT_IMAGE_HEIGHT)]
    pub(crate) image_height: u16,

    /// The width of the image the network expects.
    #[structopt(short, long, default_value = DEFAULT_IMAGE_WIDTH)]
    pub(crate) image_width: u16,

    /// Cosmetic width of drawn bones.
    #[structopt(long, default_value = DEFAULT_LINE_WIDTH)]
    pub(crate) line_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            joint_count: DEFAULT_JOINT_COUNT.parse().unwrap(),
            min_confidence: DEFAULT_MIN_CONFIDENCE.parse().unwrap(),
            image_height: DEFAULT_IMAGE_HEIGHT.parse().unwrap(),
            image_width: DEFAULT_IMAGE_WIDTH.parse().unwrap(),
            line_width: DEFAULT_LINE_WIDTH.parse().unwrap(),
        }
    }
}

impl Config {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.joint_count == 0 {
            return Err(Error::ZeroJointCount);
        }
        if self.min_confidence > 100 {
            return Err(Error::ThresholdOutOfRange(self.min_confidence));
        }
        Ok(())
    }

    /// The configured percentage as a threshold in [0, 1].
    pub(crate) fn threshold(&self) -> f32 {
        f32::from(self.min_confidence) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::error::Error;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.joint_count, 17);
        assert_eq!(config.image_height, 352);
        assert_eq!(config.image_width, 352);
        assert_approx_eq!(config.threshold(), 0.7);
        assert_approx_eq!(config.line_width, 5.0);
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        let mut config = Config::default();
        config.min_confidence = 0;
        config.validate().unwrap();
        config.min_confidence = 100;
        config.validate().unwrap();
    }

    #[test]
    fn overrange_threshold_is_rejected() {
        let mut config = Config::default();
        config.min_confidence = 101;
        match config.validate() {
            Err(Error::ThresholdOutOfRange(percent)) => assert_eq!(percent, 101),
            other => panic!("expected threshold rejection, got {:?}", other),
        }
    }

    #[test]
    fn zero_joint_count_is_rejected() {
        let mut config = Config::default();
        config.joint_count = 0;
        assert!(matches!(config.validate(), Err(Error::ZeroJointCount)));
    }
}
