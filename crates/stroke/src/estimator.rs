use {
    crate::pose::{Pose, PoseFrame, PoseSequence},
    base::{log_debug, log_warn},
    std::fmt,
};

/// A pose model run on one sampled frame.
///
/// `Ok(None)` means the model ran and found nobody.
pub trait PoseEstimator {
    type Frame;
    type Error: fmt::Display;

    fn estimate(&mut self, frame: &Self::Frame) -> Result<Option<Pose>, Self::Error>;
}

/// Run the estimator over frames in order.
///
/// A frame the estimator fails on becomes [`PoseFrame::Missing`], so one
/// unreadable frame does not sink the clip.
pub fn collect_poses<E: PoseEstimator>(frames: &[E::Frame], estimator: &mut E) -> PoseSequence {
    let sequence: PoseSequence = frames
        .iter()
        .enumerate()
        .map(|(index, frame)| match estimator.estimate(frame) {
            Ok(pose) => PoseFrame::from(pose),
            Err(error) => {
                log_warn!("frame {index}: pose estimation failed: {error}");
                PoseFrame::Missing
            }
        })
        .collect();
    log_debug!(
        "collected {} poses from {} frames",
        sequence.iter().filter(|frame| frame.is_detected()).count(),
        sequence.len()
    );
    sequence
}
