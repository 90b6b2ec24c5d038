//! Subject Classification.
//!
//! Scores a question against bilingual (Bengali + English) keyword lists for
//! the four science subjects. The score is the number of keywords found as
//! substrings of the lower-cased text; confidence is the share of the
//! winning subject's vocabulary that was matched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::expressions::extract_mathematical_expressions;

/// Subject area of a question.
///
/// Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
    Biology,
    /// No subject keyword matched
    General,
}

impl Subject {
    /// Subjects that own a keyword vocabulary
    pub const SCORED: [Subject; 4] = [
        Subject::Math,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::General => "general",
        }
    }

    /// Keyword vocabulary of the subject (empty for `General`)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Subject::Math => MATH_KEYWORDS,
            Subject::Physics => PHYSICS_KEYWORDS,
            Subject::Chemistry => CHEMISTRY_KEYWORDS,
            Subject::Biology => BIOLOGY_KEYWORDS,
            Subject::General => &[],
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

const MATH_KEYWORDS: &[&str] = &[
    "algebra",
    "geometry",
    "trigonometry",
    "calculus",
    "equation",
    "solve",
    "graph",
    "function",
    "derivative",
    "integral",
    "triangle",
    "circle",
    "square",
    "rectangle",
    "angle",
    "area",
    "volume",
    "perimeter",
    "quadratic",
    "linear",
    "polynomial",
    "matrix",
    "vector",
    // Bengali
    "বীজগণিত",
    "জ্যামিতি",
    "ত্রিকোণমিতি",
    "সমীকরণ",
    "সমাধান",
    "ত্রিভুজ",
    "বৃত্ত",
    "চতুর্ভুজ",
    "কোণ",
    "ক্ষেত্রফল",
    "আয়তন",
    "পরিসীমা",
    "দ্বিঘাত",
    "রৈখিক",
    "বহুপদী",
    "ম্যাট্রিক্স",
];

const PHYSICS_KEYWORDS: &[&str] = &[
    "force",
    "motion",
    "velocity",
    "acceleration",
    "energy",
    "power",
    "electricity",
    "magnetism",
    "light",
    "sound",
    "wave",
    "pressure",
    "temperature",
    "heat",
    "mechanics",
    "optics",
    "thermodynamics",
    // Bengali
    "বল",
    "গতি",
    "বেগ",
    "ত্বরণ",
    "শক্তি",
    "ক্ষমতা",
    "বিদ্যুৎ",
    "চুম্বক",
    "আলো",
    "শব্দ",
    "তরঙ্গ",
    "চাপ",
    "তাপমাত্রা",
    "তাপ",
    "বলবিদ্যা",
];

const CHEMISTRY_KEYWORDS: &[&str] = &[
    "atom",
    "molecule",
    "element",
    "compound",
    "reaction",
    "acid",
    "base",
    "salt",
    "chemical",
    "periodic",
    "bond",
    "electron",
    "ion",
    "catalyst",
    "organic",
    "inorganic",
    "oxidation",
    "reduction",
    // Bengali
    "পরমাণু",
    "অণু",
    "মৌল",
    "যৌগ",
    "বিক্রিয়া",
    "অ্যাসিড",
    "ক্ষার",
    "লবণ",
    "রাসায়নিক",
    "পর্যায়",
    "বন্ধন",
    "ইলেকট্রন",
    "আয়ন",
];

const BIOLOGY_KEYWORDS: &[&str] = &[
    "cell",
    "tissue",
    "organ",
    "system",
    "plant",
    "animal",
    "human",
    "genetics",
    "evolution",
    "ecosystem",
    "photosynthesis",
    "respiration",
    "protein",
    "dna",
    "rna",
    "chromosome",
    "enzyme",
    // Bengali
    "কোষ",
    "টিস্যু",
    "অঙ্গ",
    "তন্ত্র",
    "উদ্ভিদ",
    "প্রাণী",
    "মানুষ",
    "বংশগতি",
    "বিবর্তন",
    "বাস্তুতন্ত্র",
    "সালোকসংশ্লেষণ",
    "শ্বসন",
    "প্রোটিন",
    "ডিএনএ",
    "আরএনএ",
    "ক্রোমোজোম",
    "এনজাইম",
];

/// Confidence reported when nothing matched
pub const MIN_CONFIDENCE: f32 = 0.1;

/// Keyword score of one subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    /// Number of keywords found
    pub score: usize,
    /// Keywords found, in vocabulary order
    pub matched_keywords: Vec<String>,
}

/// Result of subject classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectClassification {
    /// Winning subject, `General` when nothing matched
    pub subject: Subject,
    /// Keyword coverage of the winning subject, clamped to [0.1, 1.0]
    pub confidence: f32,
    /// Keywords of the winning subject found in the text
    pub matched_keywords: Vec<String>,
    /// Scores of every scored subject
    pub all_scores: BTreeMap<Subject, SubjectScore>,
}

fn score_subject(subject: Subject, text_lower: &str) -> SubjectScore {
    let matched_keywords: Vec<String> = subject
        .keywords()
        .iter()
        .filter(|keyword| text_lower.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    SubjectScore {
        score: matched_keywords.len(),
        matched_keywords,
    }
}

/// Classify the subject area of a question
pub fn classify_subject(text: &str) -> SubjectClassification {
    let text_lower = text.to_lowercase();

    let all_scores: BTreeMap<Subject, SubjectScore> = Subject::SCORED
        .iter()
        .map(|subject| (*subject, score_subject(*subject, &text_lower)))
        .collect();

    let max_score = all_scores
        .values()
        .map(|s| s.score)
        .max()
        .unwrap_or(0);

    if max_score == 0 {
        return SubjectClassification {
            subject: Subject::General,
            confidence: MIN_CONFIDENCE,
            matched_keywords: vec![],
            all_scores,
        };
    }

    let top_subjects: Vec<Subject> = Subject::SCORED
        .iter()
        .copied()
        .filter(|subject| all_scores[subject].score == max_score)
        .collect();

    // Ties go to math, then physics, but only when the text carries math
    let primary = if top_subjects.len() > 1 && !extract_mathematical_expressions(text).is_empty() {
        [Subject::Math, Subject::Physics]
            .into_iter()
            .find(|preferred| top_subjects.contains(preferred))
            .unwrap_or(top_subjects[0])
    } else {
        top_subjects[0]
    };

    let vocabulary_size = primary.keywords().len() as f32;
    let confidence = (max_score as f32 / vocabulary_size).clamp(MIN_CONFIDENCE, 1.0);

    SubjectClassification {
        subject: primary,
        confidence,
        matched_keywords: all_scores[&primary].matched_keywords.clone(),
        all_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_general() {
        let result = classify_subject("");

        assert_eq!(result.subject, Subject::General);
        assert_eq!(result.confidence, 0.1);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.all_scores.len(), 4);
    }

    #[test]
    fn test_math_question() {
        let result = classify_subject("solve the quadratic equation using the triangle area formula");

        assert_eq!(result.subject, Subject::Math);
        for keyword in ["quadratic", "triangle", "area", "equation"] {
            assert!(
                result.matched_keywords.iter().any(|k| k == keyword),
                "missing keyword '{}'",
                keyword
            );
        }
    }

    #[test]
    fn test_biology_question() {
        let result = classify_subject("Explain the process of photosynthesis in plants");

        assert_eq!(result.subject, Subject::Biology);
        assert!(result.matched_keywords.contains(&"photosynthesis".to_string()));
        assert!(result.matched_keywords.contains(&"plant".to_string()));
    }

    #[test]
    fn test_bengali_keywords() {
        let result = classify_subject("ত্রিভুজের ক্ষেত্রফল কত?");

        assert_eq!(result.subject, Subject::Math);
    }

    #[test]
    fn test_tie_prefers_physics_with_expressions() {
        // "energy" (physics) vs "atom" (chemistry), one keyword each
        let result = classify_subject("atom energy e = 5");

        assert_eq!(result.subject, Subject::Physics);
        assert_eq!(result.all_scores[&Subject::Chemistry].score, 1);
    }

    #[test]
    fn test_tie_without_expressions_uses_declaration_order() {
        // chemistry ties biology, and Bengali-only text carries no expression
        let result = classify_subject("অ্যাসিড ও কোষ");

        assert_eq!(result.subject, Subject::Chemistry);
        assert_eq!(result.all_scores[&Subject::Biology].score, 1);
    }

    #[test]
    fn test_scores_are_keyword_counts() {
        let result = classify_subject("solve the quadratic equation");

        assert_eq!(result.all_scores[&Subject::Math].score, 3);
        assert_eq!(result.all_scores[&Subject::Physics].score, 0);

        let json = serde_json::to_value(&result.all_scores[&Subject::Math]).unwrap();
        assert_eq!(json["score"], 3);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let result = classify_subject("heat");

        assert_eq!(result.subject, Subject::Physics);
        // one keyword out of the physics vocabulary is below the floor
        assert_eq!(result.confidence, MIN_CONFIDENCE);
    }
}
