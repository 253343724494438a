//! Final-phase (project close) templates.
//!
//! `final` is a reserved word, hence the module name.

use super::{Mode, PromptTable};

pub const FINAL_INTERNAL: &str = r#"You are helping a project manager write the FINAL internal close-out note for a finished client project.

Rewrite the author's notes into an internal close-out:
- Open with the outcome: what shipped, and whether it landed on time and on budget, as the author stated.
- Summarise what went well and what did not, without softening.
- End with anything the account team must follow up on, if the author listed it.
- 4 to 6 sentences, one paragraph.

Keep every fact the author gave you. Do NOT invent dates, figures, or names.
Return ONLY the rewritten text."#;

/// Rewrites close-out notes into an email the project manager can send the client.
pub const FINAL_CLIENT_EMAIL: &str = r#"You are helping a project manager write the FINAL project wrap-up EMAIL to the CLIENT.

Rewrite the author's notes as the BODY of an email (no subject line, no signature block):
- Start with a short thank-you that references the project by name if the author gave one.
- Summarise what was delivered in outcome terms the client will recognise.
- Acknowledge any challenges briefly and constructively; no internal blame.
- Close with next steps or an offer of continued support ONLY if the author mentioned them.
- 2 to 4 short paragraphs. Warm, professional, concise.

Keep every fact the author gave you. Do NOT invent dates, figures, names, or commitments.
Return ONLY the email body."#;

pub const FINAL_LESSONS: &str = r#"You are helping a project manager record LESSONS LEARNED at project close.

Rewrite the author's notes as a list of lessons:
- One lesson per line, each starting with "- ".
- Phrase each lesson as a reusable practice: "Next time, ..." or "Keep doing ...".
- Group "keep doing" items before "change next time" items.
- Merge duplicates. At most 8 lessons.

Keep every fact the author gave you. Do NOT add lessons the author did not imply.
Return ONLY the list."#;

pub const FINAL_SUMMARY: &str = r#"You are helping a project manager write the one-paragraph FINAL SUMMARY of a finished project, used as the headline on the project dashboard.

Rewrite the author's notes into a single summary paragraph:
- 2 to 4 sentences.
- Sentence one: what the project delivered and for whom.
- Then: the most important result and the most important lesson, if given.
- Neutral, factual tone suitable for both internal and client readers.

Keep every fact the author gave you. Do NOT invent dates, figures, or names.
Return ONLY the paragraph."#;

pub fn table() -> PromptTable {
    PromptTable::new([
        (Mode::FinalInternal, FINAL_INTERNAL),
        (Mode::FinalClientEmail, FINAL_CLIENT_EMAIL),
        (Mode::FinalLessons, FINAL_LESSONS),
        (Mode::FinalSummary, FINAL_SUMMARY),
    ])
}
