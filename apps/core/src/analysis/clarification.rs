//! Clarifying-Question Generation.
//!
//! Turns completeness issues into follow-up questions for the student, in
//! Bengali when the question was Bengali and in English otherwise.

use serde::{Deserialize, Serialize};

use super::completeness::CompletenessIssue;
use super::language::Language;
use super::subject::Subject;

/// Never ask more than this many questions at once
pub const MAX_CLARIFYING_QUESTIONS: usize = 3;

/// What the generator needs from earlier analysis steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationRequest {
    pub language: Language,
    pub subject: Subject,
    /// Issues in the order the completeness checks reported them
    pub issues: Vec<CompletenessIssue>,
}

fn templates(issue: CompletenessIssue, language: Language, subject: Subject) -> Vec<String> {
    match (language, issue) {
        (Language::Bengali, CompletenessIssue::TooVague) => vec![
            format!("{} বিষয়ের কোন নির্দিষ্ট টপিকে আপনার সাহায্য দরকার?", subject),
            "আপনি কোন ধরনের সমস্যার সমাধান চান?".to_string(),
        ],
        (Language::Bengali, CompletenessIssue::MissingEquation) => vec![
            "দয়া করে সম্পূর্ণ সমীকরণ বা গাণিতিক রাশি দিন।".to_string(),
            "কোন নির্দিষ্ট সমস্যাটি সমাধান করতে হবে?".to_string(),
        ],
        (Language::Bengali, CompletenessIssue::MissingContext) => vec![
            "আপনি কোন নির্দিষ্ট সমস্যা বা উদাহরণের কথা বলছেন?".to_string(),
            "অনুগ্রহ করে সম্পূর্ণ প্রসঙ্গ বা রেফারেন্স দিন।".to_string(),
        ],
        (_, CompletenessIssue::TooVague) => vec![
            format!("Which specific topic in {} would you like help with?", subject),
            "What type of problem or concept do you need assistance with?".to_string(),
        ],
        (_, CompletenessIssue::MissingEquation) => vec![
            "Please provide the complete equation or mathematical expression.".to_string(),
            "What specific problem would you like me to solve?".to_string(),
        ],
        (_, CompletenessIssue::MissingContext) => vec![
            "Which specific problem or example are you referring to?".to_string(),
            "Please provide the complete context or reference material.".to_string(),
        ],
        // Length alone has no template; the suggestion covers it
        (_, CompletenessIssue::TooShort) => vec![],
    }
}

/// Narrowing question for a vague math or physics request
fn subject_follow_up(language: Language, subject: Subject) -> Option<&'static str> {
    match (subject, language) {
        (Subject::Math, Language::Bengali) => {
            Some("আপনার সমস্যাটি কি বীজগণিত, জ্যামিতি, নাকি অন্য কোন শাখার?")
        }
        (Subject::Math, _) => Some(
            "Is your question about algebra, geometry, trigonometry, or another area of math?",
        ),
        (Subject::Physics, Language::Bengali) => {
            Some("পদার্থবিজ্ঞানের কোন বিষয়ে সাহায্য চান - বল ও গতি, তাপ, আলো, নাকি বিদ্যুৎ?")
        }
        (Subject::Physics, _) => {
            Some("Which area of physics - mechanics, heat, light, electricity, or something else?")
        }
        _ => None,
    }
}

/// Generate at most three clarifying questions for an incomplete question.
///
/// Later issues may get no question at all once the limit is reached.
pub fn generate_clarifying_questions(request: &ClarificationRequest) -> Vec<String> {
    let mut questions: Vec<String> = request
        .issues
        .iter()
        .flat_map(|issue| templates(*issue, request.language, request.subject))
        .collect();

    if request.issues.contains(&CompletenessIssue::TooVague) {
        if let Some(follow_up) = subject_follow_up(request.language, request.subject) {
            questions.push(follow_up.to_string());
        }
    }

    questions.truncate(MAX_CLARIFYING_QUESTIONS);
    questions
}
