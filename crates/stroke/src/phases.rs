use {
    crate::{
        StrokeError,
        geometry::{euclidean_distance_2d, line_rotation_angle},
        pose::{Handedness, LandmarkIndex, Pose, PoseFrame},
    },
    base::log_warn,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// The four moments of a single swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Ready,
    UnitTurn,
    Contact,
    FollowThrough,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Ready,
        Phase::UnitTurn,
        Phase::Contact,
        Phase::FollowThrough,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::UnitTurn => "unit_turn",
            Phase::Contact => "contact",
            Phase::FollowThrough => "follow_through",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Frame index picked for each phase, `None` when it could not be determined.
///
/// Every present index refers to a detected frame. `follow_through` is always
/// later than `contact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseIndices {
    pub ready: Option<usize>,
    pub unit_turn: Option<usize>,
    pub contact: Option<usize>,
    pub follow_through: Option<usize>,
}

impl PhaseIndices {
    pub fn get(&self, phase: Phase) -> Option<usize> {
        match phase {
            Phase::Ready => self.ready,
            Phase::UnitTurn => self.unit_turn,
            Phase::Contact => self.contact,
            Phase::FollowThrough => self.follow_through,
        }
    }
}

/// Angle between the shoulder line and the hip line, in degrees.
pub fn shoulder_hip_rotation(pose: &Pose) -> Result<f64, StrokeError> {
    let hips = pose.landmark(LandmarkIndex::RightHip)? - pose.landmark(LandmarkIndex::LeftHip)?;
    let shoulders = pose.landmark(LandmarkIndex::RightShoulder)?
        - pose.landmark(LandmarkIndex::LeftShoulder)?;
    Ok(line_rotation_angle(shoulders, hips))
}

/// Distance from the hitting shoulder to the hitting wrist.
pub fn arm_extension(pose: &Pose, handedness: Handedness) -> Result<f64, StrokeError> {
    let shoulder = pose.landmark(handedness.hitting_shoulder())?;
    let wrist = pose.landmark(handedness.hitting_wrist())?;
    Ok(euclidean_distance_2d(shoulder, wrist))
}

fn score(index: usize, what: &str, result: Result<f64, StrokeError>) -> f64 {
    match result {
        Ok(value) => value,
        Err(error) => {
            log_warn!("frame {index}: cannot score {what} ({error}), using 0.0");
            0.0
        }
    }
}

/// Index with the highest score. Ties go to the earliest entry.
fn first_max(scores: impl IntoIterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in scores {
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index)
}

/// Pick representative frames for each swing phase.
pub fn detect_phases(sequence: &[PoseFrame], handedness: Handedness) -> PhaseIndices {
    let valid: Vec<(usize, &Pose)> = sequence
        .iter()
        .enumerate()
        .filter_map(|(index, frame)| frame.pose().map(|pose| (index, pose)))
        .collect();

    if valid.len() < 2 {
        return PhaseIndices {
            ready: valid.first().map(|(index, _)| *index),
            ..PhaseIndices::default()
        };
    }

    let ready = valid[0].0;

    let early = valid.len().div_ceil(2).max(1);
    let unit_turn = first_max(valid[..early].iter().map(|&(index, pose)| {
        (index, score(index, "shoulder rotation", shoulder_hip_rotation(pose)))
    }));

    let extensions: Vec<(usize, f64)> = valid
        .iter()
        .map(|&(index, pose)| {
            (index, score(index, "arm extension", arm_extension(pose, handedness)))
        })
        .collect();

    let contact = first_max(extensions.iter().copied());
    let follow_through = contact.and_then(|contact| {
        first_max(extensions.iter().copied().filter(|&(index, _)| index > contact))
    });

    PhaseIndices {
        ready: Some(ready),
        unit_turn,
        contact,
        follow_through,
    }
}
