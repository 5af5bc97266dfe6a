pub mod analysis;
pub mod error;
pub mod estimator;
pub mod feedback;
pub mod geometry;
pub mod metrics;
pub mod phases;
pub mod pose;
pub mod rules;

pub use analysis::{Analysis, Report, analyze, analyze_with};
pub use error::StrokeError;
pub use estimator::{PoseEstimator, collect_poses};
pub use feedback::{Feedback, generate_feedback};
pub use metrics::{Metric, MetricsBundle, PhaseMetrics, compute_metrics};
pub use phases::{Phase, PhaseIndices, detect_phases};
pub use pose::{
    DEFAULT_FRAME_COUNT, Handedness, Landmark, LandmarkIndex, POSE_LANDMARK_COUNT, Pose,
    PoseFrame, PoseSequence, read_sequence, sequence_from_json,
};
pub use rules::{Band, Condition, Outcome, Rule, RuleTable, Verdict};
