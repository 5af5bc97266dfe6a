use {
    crate::{StrokeError, metrics::Metric, phases::Phase},
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    DoingWell,
    WorkOn,
}

/// Value range a band covers. `Between` is closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Below(f64),
    Above(f64),
    Between(f64, f64),
}

impl Condition {
    pub fn matches(self, value: f64) -> bool {
        match self {
            Condition::Below(limit) => value < limit,
            Condition::Above(limit) => value > limit,
            Condition::Between(low, high) => low <= value && value <= high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub when: Condition,
    pub verdict: Verdict,
    pub message: String,
}

/// What a rule decided for one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<'a> {
    pub verdict: Verdict,
    pub message: &'a str,
}

/// Threshold bands for one metric at one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub phase: Phase,
    pub metric: Metric,
    pub bands: Vec<Band>,
}

impl Rule {
    /// First band containing `value`. A value no band contains (a gap between
    /// bands, or NaN) takes the last `WorkOn` band, or the last band if the
    /// rule has none.
    pub fn evaluate(&self, value: f64) -> Option<Outcome<'_>> {
        let band = self
            .bands
            .iter()
            .find(|band| band.when.matches(value))
            .or_else(|| {
                self.bands
                    .iter()
                    .rev()
                    .find(|band| band.verdict == Verdict::WorkOn)
            })
            .or_else(|| self.bands.last())?;
        Some(Outcome {
            verdict: band.verdict,
            message: &band.message,
        })
    }
}

pub const NOT_FOREHAND_NOTICE: &str = "This version of the analyzer is currently tuned for \
    forehands. Try selecting 'forehand' for more specific feedback.";

pub const CLEARER_CLIP_NOTICE: &str =
    "Upload a clear, single-stroke forehand clip from the side for more precise feedback.";

fn not_forehand_notice() -> String {
    NOT_FOREHAND_NOTICE.to_string()
}

fn clearer_clip_notice() -> String {
    CLEARER_CLIP_NOTICE.to_string()
}

/// Ordered coaching rules. Rule order is the order sentences are emitted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<Rule>,
    /// Sent when the stroke is not a forehand and no rule produced anything.
    #[serde(default = "not_forehand_notice")]
    pub not_forehand_notice: String,
    /// Sent when nothing else was produced.
    #[serde(default = "clearer_clip_notice")]
    pub clearer_clip_notice: String,
}

fn band(when: Condition, verdict: Verdict, message: &str) -> Band {
    Band {
        when,
        verdict,
        message: message.to_string(),
    }
}

fn rule(phase: Phase, metric: Metric, bands: Vec<Band>) -> Rule {
    Rule {
        phase,
        metric,
        bands,
    }
}

pub const STANCE_NARROW: &str =
    "Widen your stance in your ready position for more stability and quicker movement.";
pub const STANCE_GOOD: &str = "Nice, athletic stance width in your ready position.";
pub const STANCE_WIDE: &str = "Your stance is quite wide; make sure it still feels comfortable \
    and lets you move explosively.";

pub const READY_KNEE_STRAIGHT: &str = "Bend your knees a bit more in your ready position so you \
    stay lower and more explosive.";
pub const READY_KNEE_GOOD: &str =
    "Good knee bend in your ready position, helping balance and quick reactions.";
pub const READY_KNEE_DEEP: &str = "You are bending very low in your ready stance; make sure that \
    depth still feels efficient and not tiring.";

pub const TURN_LATE: &str = "Turn your shoulders earlier on the forehand so your body, not just \
    your arm, powers the stroke.";
pub const TURN_GOOD: &str = "Solid shoulder turn on your forehand preparation.";
pub const TURN_BIG: &str = "Great upper body coil on the forehand\u{2014}lots of stored power.";

pub const CONTACT_KNEE_STRAIGHT: &str = "Bend your front knee more as you move into contact to \
    use your legs for power and stability.";
pub const CONTACT_KNEE_GOOD: &str = "Good use of your legs into the ball at contact.";
pub const CONTACT_KNEE_DEEP: &str = "You are very low at contact; make sure the extra bend is \
    helping, not slowing, your recovery.";

pub const CONTACT_LOW: &str = "You're making contact very low; try to take the ball a bit \
    earlier or higher when possible.";
pub const CONTACT_HEIGHT_GOOD: &str = "Nice comfortable contact height on your forehand.";
pub const CONTACT_HIGH: &str = "You're contacting the ball quite high; make sure you are still \
    able to swing up and through comfortably.";

pub const CONTACT_LATE: &str = "The ball is getting a bit too far back on your forehand; aim to \
    meet it more out in front of your body.";
pub const CONTACT_POINT_GOOD: &str =
    "Good contact point relative to your body\u{2014}nicely in front.";
pub const CONTACT_EARLY: &str = "You're contacting the ball very far in front; make sure you're \
    not overreaching and losing balance.";

pub const FINISH_SHORT: &str = "Let your torso rotate more through the ball on the \
    follow-through so the swing finishes freely.";
pub const FINISH_GOOD: &str =
    "Nice, relaxed body rotation through your forehand follow-through.";
pub const FINISH_BIG: &str =
    "Big rotation through the shot\u{2014}great for power, as long as you stay balanced.";

impl RuleTable {
    /// Built-in thresholds for a side-on forehand clip.
    pub fn forehand() -> Self {
        use {
            Condition::{Above, Below, Between},
            Metric::{
                ContactHeightRel, ContactLateness, FrontKneeAngleDeg, ShoulderTurnDeg,
                StanceWidth,
            },
            Phase::{Contact, FollowThrough, Ready, UnitTurn},
            Verdict::{DoingWell, WorkOn},
        };

        let rules = vec![
            // thresholds depend on camera distance
            rule(
                Ready,
                StanceWidth,
                vec![
                    band(Below(0.07), WorkOn, STANCE_NARROW),
                    band(Between(0.07, 0.16), DoingWell, STANCE_GOOD),
                    band(Above(0.16), WorkOn, STANCE_WIDE),
                ],
            ),
            rule(
                Ready,
                FrontKneeAngleDeg,
                vec![
                    band(Above(165.0), WorkOn, READY_KNEE_STRAIGHT),
                    band(Between(135.0, 160.0), DoingWell, READY_KNEE_GOOD),
                    band(Below(120.0), WorkOn, READY_KNEE_DEEP),
                ],
            ),
            rule(
                UnitTurn,
                ShoulderTurnDeg,
                vec![
                    band(Below(20.0), WorkOn, TURN_LATE),
                    band(Between(20.0, 45.0), DoingWell, TURN_GOOD),
                    band(Above(45.0), DoingWell, TURN_BIG),
                ],
            ),
            rule(
                Contact,
                FrontKneeAngleDeg,
                vec![
                    band(Above(165.0), WorkOn, CONTACT_KNEE_STRAIGHT),
                    band(Between(135.0, 160.0), DoingWell, CONTACT_KNEE_GOOD),
                    band(Below(120.0), WorkOn, CONTACT_KNEE_DEEP),
                ],
            ),
            rule(
                Contact,
                ContactHeightRel,
                vec![
                    band(Below(0.3), WorkOn, CONTACT_LOW),
                    band(Between(0.3, 0.7), DoingWell, CONTACT_HEIGHT_GOOD),
                    band(Above(0.7), WorkOn, CONTACT_HIGH),
                ],
            ),
            rule(
                Contact,
                ContactLateness,
                vec![
                    band(Below(-0.02), WorkOn, CONTACT_LATE),
                    band(Between(-0.02, 0.04), DoingWell, CONTACT_POINT_GOOD),
                    band(Above(0.04), WorkOn, CONTACT_EARLY),
                ],
            ),
            rule(
                FollowThrough,
                ShoulderTurnDeg,
                vec![
                    band(Below(20.0), WorkOn, FINISH_SHORT),
                    band(Between(20.0, 50.0), DoingWell, FINISH_GOOD),
                    band(Above(50.0), DoingWell, FINISH_BIG),
                ],
            ),
        ];

        Self {
            rules,
            not_forehand_notice: not_forehand_notice(),
            clearer_clip_notice: clearer_clip_notice(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StrokeError> {
        let table: RuleTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StrokeError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), StrokeError> {
        for rule in &self.rules {
            if rule.bands.is_empty() {
                return Err(StrokeError::Parse(format!(
                    "rule {}.{} has no bands",
                    rule.phase, rule.metric
                )));
            }
            for band in &rule.bands {
                if let Condition::Between(low, high) = band.when
                    && (low.is_nan() || high.is_nan() || low > high)
                {
                    return Err(StrokeError::Parse(format!(
                        "rule {}.{} has an empty range [{low}, {high}]",
                        rule.phase, rule.metric
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::forehand()
    }
}
