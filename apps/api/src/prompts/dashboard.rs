//! Dashboard templates: short card copy rendered on the read-only project dashboard.
//!
//! The `_card` templates reference `{SURVEY_DATA}`. The marker tells the model
//! where the survey answers sit in its input; nothing in this service fills it.

use super::{Mode, PromptTable};

/// Delivery headline for the dashboard's top card.
pub const DASHBOARD_DELIVERY: &str = r#"You write the DELIVERY headline for a project status dashboard.

Rewrite the author's notes into one or two sentences describing what the team delivered:
- Lead with the delivered capability or outcome, not the activity.
- Keep product and feature names exactly as written.
- Past tense. No marketing language. No exclamation marks.
- Maximum 40 words.

Return ONLY the headline text."#;

pub const DASHBOARD_WINS_CARD: &str = r#"You write the content of the WINS card on a project status dashboard.

The survey answers for this project are provided as {SURVEY_DATA}. Treat the text after "Original text:" in your input as {SURVEY_DATA}.

Produce 2 to 4 bullet points:
- Each bullet starts with "- " and is at most 20 words.
- Each bullet names one concrete win: something shipped, a target met, a client compliment, a risk avoided.
- Keep numbers and names exactly as given. Do NOT invent wins.
- If {SURVEY_DATA} contains no wins, return a single bullet: "- No wins recorded yet."

Return ONLY the bullets."#;

pub const DASHBOARD_CHALLENGES_CARD: &str = r#"You write the content of the CHALLENGES card on a project status dashboard.

The survey answers for this project are provided as {SURVEY_DATA}. Treat the text after "Original text:" in your input as {SURVEY_DATA}.

Produce 2 to 4 bullet points:
- Each bullet starts with "- " and is at most 20 words.
- Each bullet names one challenge and, when the author gave it, how it was handled.
- Factual and neutral; no blame, no names of individuals.
- If {SURVEY_DATA} contains no challenges, return a single bullet: "- No challenges recorded."

Return ONLY the bullets."#;

pub const DASHBOARD_NEXT_STEPS_CARD: &str = r#"You write the content of the NEXT STEPS card on a project status dashboard.

The survey answers for this project are provided as {SURVEY_DATA}. Treat the text after "Original text:" in your input as {SURVEY_DATA}.

Produce 1 to 4 bullet points:
- Each bullet starts with "- " and begins with a verb ("Schedule ...", "Hand over ...").
- Include owner and date in parentheses only if {SURVEY_DATA} gives them.
- Do NOT invent follow-up work.
- If {SURVEY_DATA} lists no next steps, return a single bullet: "- No next steps recorded."

Return ONLY the bullets."#;

pub const DASHBOARD_SUMMARY: &str = r#"You write the SUMMARY paragraph shown at the top of a project status dashboard.

Rewrite the author's notes into one paragraph of 2 to 3 sentences:
- What the project is, where it stands, and the single most important thing a reader should know.
- Neutral tone readable by both the delivery team and the client.
- Keep every fact given; add none.

Return ONLY the paragraph."#;

pub fn table() -> PromptTable {
    PromptTable::new([
        (Mode::DashboardDelivery, DASHBOARD_DELIVERY),
        (Mode::DashboardWinsCard, DASHBOARD_WINS_CARD),
        (Mode::DashboardChallengesCard, DASHBOARD_CHALLENGES_CARD),
        (Mode::DashboardNextStepsCard, DASHBOARD_NEXT_STEPS_CARD),
        (Mode::DashboardSummary, DASHBOARD_SUMMARY),
    ])
}
