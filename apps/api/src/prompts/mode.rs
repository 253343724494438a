//! Rewrite modes, one variant per instruction template the service knows about.

use std::fmt;

/// Selects which instruction template governs a rewrite request.
///
/// Parsing never fails: any string outside the supported set becomes
/// `Mode::Unknown`, which no production table registers. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    // Legacy phase-agnostic modes, kept in the kickoff table.
    Internal,
    Client,

    KickoffInternal,
    KickoffClient,
    KickoffGoals,
    KickoffRisks,

    MidtermInternal,
    MidtermClient,
    MidtermProgress,
    MidtermBlockers,

    FinalInternal,
    FinalClientEmail,
    FinalLessons,
    FinalSummary,

    DashboardDelivery,
    DashboardWinsCard,
    DashboardChallengesCard,
    DashboardNextStepsCard,
    DashboardSummary,

    Unknown(String),
}

impl Mode {
    /// Every supported mode, in table order.
    pub const SUPPORTED: [Mode; 19] = [
        Mode::Internal,
        Mode::Client,
        Mode::KickoffInternal,
        Mode::KickoffClient,
        Mode::KickoffGoals,
        Mode::KickoffRisks,
        Mode::MidtermInternal,
        Mode::MidtermClient,
        Mode::MidtermProgress,
        Mode::MidtermBlockers,
        Mode::FinalInternal,
        Mode::FinalClientEmail,
        Mode::FinalLessons,
        Mode::FinalSummary,
        Mode::DashboardDelivery,
        Mode::DashboardWinsCard,
        Mode::DashboardChallengesCard,
        Mode::DashboardNextStepsCard,
        Mode::DashboardSummary,
    ];

    pub fn parse(raw: &str) -> Self {
        Self::SUPPORTED
            .iter()
            .find(|mode| mode.as_str() == raw)
            .cloned()
            .unwrap_or_else(|| Mode::Unknown(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::Internal => "internal",
            Mode::Client => "client",
            Mode::KickoffInternal => "kickoff_internal",
            Mode::KickoffClient => "kickoff_client",
            Mode::KickoffGoals => "kickoff_goals",
            Mode::KickoffRisks => "kickoff_risks",
            Mode::MidtermInternal => "midterm_internal",
            Mode::MidtermClient => "midterm_client",
            Mode::MidtermProgress => "midterm_progress",
            Mode::MidtermBlockers => "midterm_blockers",
            Mode::FinalInternal => "final_internal",
            Mode::FinalClientEmail => "final_client_email",
            Mode::FinalLessons => "final_lessons",
            Mode::FinalSummary => "final_summary",
            Mode::DashboardDelivery => "dashboard_delivery",
            Mode::DashboardWinsCard => "dashboard_wins_card",
            Mode::DashboardChallengesCard => "dashboard_challenges_card",
            Mode::DashboardNextStepsCard => "dashboard_next_steps_card",
            Mode::DashboardSummary => "dashboard_summary",
            Mode::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
