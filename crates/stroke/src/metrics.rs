use {
    crate::{
        StrokeError,
        geometry::{angle_at_vertex, guarded},
        phases::{Phase, PhaseIndices, detect_phases, shoulder_hip_rotation},
        pose::{Handedness, LandmarkIndex, Pose, PoseFrame},
    },
    base::{log_debug, log_warn},
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, fmt},
};

/// Named body-geometry measurements taken at a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Horizontal hip separation, normalized to image width.
    StanceWidth,
    /// Hip-knee-ankle angle of the right leg.
    FrontKneeAngleDeg,
    /// Shoulder line against hip line.
    ShoulderTurnDeg,
    /// Hitting wrist height over body height, 0 at the ankle and growing upward.
    ContactHeightRel,
    /// Hitting wrist x minus hip-center x. Positive is further forward.
    ContactLateness,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::StanceWidth => "stance_width",
            Metric::FrontKneeAngleDeg => "front_knee_angle_deg",
            Metric::ShoulderTurnDeg => "shoulder_turn_deg",
            Metric::ContactHeightRel => "contact_height_rel",
            Metric::ContactLateness => "contact_lateness",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type PhaseMetrics = BTreeMap<Metric, f64>;

/// Phase picks plus the metrics measured at each phase.
///
/// An empty bundle (no detected poses at all) has no `phases` and no phase
/// entries and serializes as `{}`. Otherwise all four phases are present,
/// with an empty map for phases that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases: Option<PhaseIndices>,
    #[serde(flatten)]
    pub metrics: BTreeMap<Phase, PhaseMetrics>,
}

impl MetricsBundle {
    pub fn is_empty(&self) -> bool {
        self.phases.is_none() && self.metrics.is_empty()
    }

    pub fn phase(&self, phase: Phase) -> Option<&PhaseMetrics> {
        self.metrics.get(&phase)
    }

    pub fn get(&self, phase: Phase, metric: Metric) -> Option<f64> {
        self.phase(phase)?.get(&metric).copied()
    }

    pub fn insert(&mut self, phase: Phase, metric: Metric, value: f64) {
        self.metrics.entry(phase).or_default().insert(metric, value);
    }
}

pub fn stance_width(pose: &Pose) -> Result<f64, StrokeError> {
    let left = pose.landmark(LandmarkIndex::LeftHip)?;
    let right = pose.landmark(LandmarkIndex::RightHip)?;
    Ok((left.x - right.x).abs())
}

/// Knee angle of the right leg, whichever hand holds the racket.
pub fn front_knee_angle(pose: &Pose) -> Result<f64, StrokeError> {
    Ok(angle_at_vertex(
        pose.landmark(LandmarkIndex::RightHip)?,
        pose.landmark(LandmarkIndex::RightKnee)?,
        pose.landmark(LandmarkIndex::RightAnkle)?,
    ))
}

pub fn contact_height(pose: &Pose, handedness: Handedness) -> Result<f64, StrokeError> {
    let wrist = pose.landmark(handedness.hitting_wrist())?;
    let ankle = pose.landmark(LandmarkIndex::RightAnkle)?;
    let nose = pose.landmark(LandmarkIndex::Nose)?;
    // image y grows downward
    Ok((ankle.y - wrist.y) / guarded((nose.y - ankle.y).abs()))
}

pub fn contact_lateness(pose: &Pose, handedness: Handedness) -> Result<f64, StrokeError> {
    let wrist = pose.landmark(handedness.hitting_wrist())?;
    let hip_center = pose
        .landmark(LandmarkIndex::LeftHip)?
        .midpoint(pose.landmark(LandmarkIndex::RightHip)?);
    Ok(wrist.x - hip_center.x)
}

fn measure(
    phase: Phase,
    pose: &Pose,
    handedness: Handedness,
) -> Vec<(Metric, Result<f64, StrokeError>)> {
    match phase {
        Phase::Ready => vec![
            (Metric::StanceWidth, stance_width(pose)),
            (Metric::FrontKneeAngleDeg, front_knee_angle(pose)),
        ],
        Phase::UnitTurn | Phase::FollowThrough => {
            vec![(Metric::ShoulderTurnDeg, shoulder_hip_rotation(pose))]
        }
        Phase::Contact => vec![
            (Metric::FrontKneeAngleDeg, front_knee_angle(pose)),
            (Metric::ContactHeightRel, contact_height(pose, handedness)),
            (Metric::ContactLateness, contact_lateness(pose, handedness)),
        ],
    }
}

/// Detect phases and measure each one.
pub fn compute_metrics(sequence: &[PoseFrame], handedness: Handedness) -> MetricsBundle {
    if !sequence.iter().any(PoseFrame::is_detected) {
        return MetricsBundle::default();
    }

    let phases = detect_phases(sequence, handedness);
    log_debug!("detected phases: {phases:?}");

    let mut bundle = MetricsBundle {
        phases: Some(phases),
        metrics: BTreeMap::new(),
    };

    for phase in Phase::ALL {
        let mut measured = PhaseMetrics::new();
        let pose = phases
            .get(phase)
            .and_then(|index| sequence.get(index))
            .and_then(PoseFrame::pose);
        if let Some(pose) = pose {
            for (metric, result) in measure(phase, pose, handedness) {
                match result {
                    Ok(value) if value.is_finite() => {
                        measured.insert(metric, value);
                    }
                    Ok(value) => log_warn!("{phase}: skipping {metric} (non-finite value {value})"),
                    Err(error) => log_warn!("{phase}: skipping {metric} ({error})"),
                }
            }
        }
        bundle.metrics.insert(phase, measured);
    }

    bundle
}
