#![allow(dead_code)]

use stroke::{Landmark, LandmarkIndex, POSE_LANDMARK_COUNT, Pose, PoseFrame};

/// Side-on standing player, right-handed, feet a hip-width apart.
pub fn standing() -> PoseBuilder {
    PoseBuilder::new()
        .set(LandmarkIndex::Nose, 0.50, 0.20)
        .set(LandmarkIndex::LeftShoulder, 0.45, 0.35)
        .set(LandmarkIndex::RightShoulder, 0.55, 0.35)
        .set(LandmarkIndex::LeftElbow, 0.43, 0.45)
        .set(LandmarkIndex::RightElbow, 0.57, 0.45)
        .set(LandmarkIndex::LeftWrist, 0.42, 0.55)
        .set(LandmarkIndex::RightWrist, 0.58, 0.55)
        .set(LandmarkIndex::LeftHip, 0.45, 0.60)
        .set(LandmarkIndex::RightHip, 0.55, 0.60)
        .set(LandmarkIndex::LeftKnee, 0.45, 0.75)
        .set(LandmarkIndex::RightKnee, 0.55, 0.75)
        .set(LandmarkIndex::LeftAnkle, 0.45, 0.90)
        .set(LandmarkIndex::RightAnkle, 0.55, 0.90)
}

pub struct PoseBuilder {
    landmarks: Vec<Landmark>,
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self {
            landmarks: vec![Landmark::new(0.5, 0.5); POSE_LANDMARK_COUNT],
        }
    }

    pub fn set(mut self, index: LandmarkIndex, x: f64, y: f64) -> Self {
        self.landmarks[usize::from(index)] = Landmark::new(x, y);
        self
    }

    pub fn truncate(mut self, len: usize) -> Self {
        self.landmarks.truncate(len);
        self
    }

    pub fn pose(self) -> Pose {
        Pose::new(self.landmarks)
    }

    pub fn frame(self) -> PoseFrame {
        PoseFrame::Detected(self.pose())
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

/// Six frames of a right-handed forehand:
/// coil at 1 (a bigger one at 4, outside the early half), full extension at 3,
/// a wrap-around finish at 5.
pub fn forehand_swing() -> Vec<PoseFrame> {
    let frame = |shoulder_dy: f64, wrist_x: f64, wrist_y: f64| {
        standing()
            .set(LandmarkIndex::RightShoulder, 0.55, 0.35 + shoulder_dy)
            .set(LandmarkIndex::RightWrist, wrist_x, wrist_y)
            .frame()
    };
    vec![
        frame(0.0, 0.58, 0.55),
        frame(0.05, 0.58, 0.55),
        frame(0.02, 0.58, 0.55),
        frame(0.0, 0.85, 0.40),
        frame(0.2, 0.60, 0.45),
        frame(0.0, 0.40, 0.20),
    ]
}
