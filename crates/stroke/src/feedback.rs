use {
    crate::{
        metrics::MetricsBundle,
        rules::{RuleTable, Verdict},
    },
    base::log_debug,
    serde::{Deserialize, Serialize},
    std::sync::LazyLock,
};

/// Coaching sentences split by verdict. Neither list holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub doing_well: Vec<String>,
    pub work_on: Vec<String>,
}

impl Feedback {
    /// Append a sentence unless the target list already has it.
    pub fn add(&mut self, verdict: Verdict, message: &str) {
        let list = match verdict {
            Verdict::DoingWell => &mut self.doing_well,
            Verdict::WorkOn => &mut self.work_on,
        };
        if !list.iter().any(|existing| existing == message) {
            list.push(message.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.doing_well.is_empty() && self.work_on.is_empty()
    }
}

static FOREHAND_RULES: LazyLock<RuleTable> = LazyLock::new(RuleTable::forehand);

impl RuleTable {
    /// Turn metrics into feedback. Always returns at least one sentence.
    pub fn evaluate(&self, metrics: &MetricsBundle, stroke_label: &str) -> Feedback {
        let mut feedback = Feedback::default();

        for rule in &self.rules {
            let Some(value) = metrics.get(rule.phase, rule.metric) else {
                continue;
            };
            if let Some(outcome) = rule.evaluate(value) {
                log_debug!("{}.{} = {value}: {:?}", rule.phase, rule.metric, outcome.verdict);
                feedback.add(outcome.verdict, outcome.message);
            }
        }

        let is_forehand = stroke_label.to_lowercase().contains("forehand");
        if !is_forehand && feedback.is_empty() {
            feedback.add(Verdict::WorkOn, &self.not_forehand_notice);
        }
        if feedback.is_empty() {
            feedback.add(Verdict::WorkOn, &self.clearer_clip_notice);
        }

        feedback
    }
}

/// Evaluate metrics against the built-in forehand table.
pub fn generate_feedback(metrics: &MetricsBundle, stroke_label: &str) -> Feedback {
    FOREHAND_RULES.evaluate(metrics, stroke_label)
}
