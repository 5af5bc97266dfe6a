use {
    crate::StrokeError,
    base::Vec2,
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

/// Number of landmarks in a full body pose.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Number of frames sampled from a clip unless the caller asks otherwise.
pub const DEFAULT_FRAME_COUNT: usize = 6;

/// Body landmark indices of the 33-point pose model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl From<LandmarkIndex> for usize {
    fn from(index: LandmarkIndex) -> usize {
        index as usize
    }
}

/// A landmark position in normalized image coordinates (origin top-left, y down).
///
/// Detector output usually carries `z` and `visibility` too; those are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Vec2<f64> {
        Vec2::new(self.x, self.y)
    }
}

/// Landmarks of one detected pose, indexed by [`LandmarkIndex`].
///
/// The list is not forced to hold exactly [`POSE_LANDMARK_COUNT`] entries, so a
/// truncated detector result can still be represented and rejected per lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pose {
    landmarks: Vec<Landmark>,
}

impl Pose {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Position of a landmark, rejecting missing slots and non-finite coordinates.
    pub fn landmark(&self, index: LandmarkIndex) -> Result<Vec2<f64>, StrokeError> {
        let index = usize::from(index);
        let landmark = self.landmarks.get(index).ok_or(StrokeError::MissingLandmark {
            index,
            len: self.landmarks.len(),
        })?;
        let position = landmark.position();
        if !position.is_finite() {
            return Err(StrokeError::NonFinite { index });
        }
        Ok(position)
    }
}

/// Detector result for one sampled frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Pose>", into = "Option<Pose>")]
pub enum PoseFrame {
    Detected(Pose),
    Missing,
}

impl PoseFrame {
    pub fn pose(&self) -> Option<&Pose> {
        match self {
            PoseFrame::Detected(pose) => Some(pose),
            PoseFrame::Missing => None,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, PoseFrame::Detected(_))
    }
}

impl From<Option<Pose>> for PoseFrame {
    fn from(pose: Option<Pose>) -> Self {
        match pose {
            Some(pose) => PoseFrame::Detected(pose),
            None => PoseFrame::Missing,
        }
    }
}

impl From<PoseFrame> for Option<Pose> {
    fn from(frame: PoseFrame) -> Self {
        match frame {
            PoseFrame::Detected(pose) => Some(pose),
            PoseFrame::Missing => None,
        }
    }
}

/// Frames in sampling order. The index is temporal order, not wall-clock time.
pub type PoseSequence = Vec<PoseFrame>;

/// Parse a pose sequence document: a JSON array of `null` or landmark lists.
pub fn sequence_from_json(json: &str) -> Result<PoseSequence, StrokeError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_sequence(path: impl AsRef<Path>) -> Result<PoseSequence, StrokeError> {
    let json = fs::read_to_string(path)?;
    sequence_from_json(&json)
}

/// Which arm holds the racket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    pub fn from_right_handed(right_handed: bool) -> Self {
        if right_handed {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }

    pub fn hitting_shoulder(self) -> LandmarkIndex {
        match self {
            Handedness::Right => LandmarkIndex::RightShoulder,
            Handedness::Left => LandmarkIndex::LeftShoulder,
        }
    }

    pub fn hitting_wrist(self) -> LandmarkIndex {
        match self {
            Handedness::Right => LandmarkIndex::RightWrist,
            Handedness::Left => LandmarkIndex::LeftWrist,
        }
    }
}
