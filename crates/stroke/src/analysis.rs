use {
    crate::{
        feedback::Feedback,
        metrics::{MetricsBundle, compute_metrics},
        pose::{Handedness, PoseFrame},
        rules::RuleTable,
    },
    base::log_info,
    serde::Serialize,
};

/// Metrics and the coaching derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub metrics: MetricsBundle,
    pub suggestions: Feedback,
}

/// Full answer for one uploaded clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub student: String,
    pub stroke: String,
    /// Number of sampled frames, detected or not.
    pub frames: usize,
    #[serde(flatten)]
    pub analysis: Analysis,
}

impl Report {
    pub fn new(
        student: impl Into<String>,
        stroke: impl Into<String>,
        frames: usize,
        analysis: Analysis,
    ) -> Self {
        Self {
            student: student.into(),
            stroke: stroke.into(),
            frames,
            analysis,
        }
    }
}

/// Phase detection, metrics and coaching with the built-in forehand rules.
pub fn analyze(sequence: &[PoseFrame], handedness: Handedness, stroke_label: &str) -> Analysis {
    analyze_with(&RuleTable::forehand(), sequence, handedness, stroke_label)
}

pub fn analyze_with(
    table: &RuleTable,
    sequence: &[PoseFrame],
    handedness: Handedness,
    stroke_label: &str,
) -> Analysis {
    let metrics = compute_metrics(sequence, handedness);
    let suggestions = table.evaluate(&metrics, stroke_label);
    log_info!(
        "analyzed {} frames ({} detected): {} doing well, {} to work on",
        sequence.len(),
        sequence.iter().filter(|frame| frame.is_detected()).count(),
        suggestions.doing_well.len(),
        suggestions.work_on.len()
    );
    Analysis {
        metrics,
        suggestions,
    }
}
