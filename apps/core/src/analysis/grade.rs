//! Grade-Level Assessment.
//!
//! Places a question in one of three school bands using subject-specific
//! level indicators, falling back to a length heuristic when no indicator
//! is present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::expressions::extract_mathematical_expressions;
use super::subject::Subject;

/// Coarse school-year grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "6-8")]
    Grades6To8,
    #[serde(rename = "9-10")]
    Grades9To10,
    #[serde(rename = "11-12")]
    Grades11To12,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 3] = [
        GradeLevel::Grades6To8,
        GradeLevel::Grades9To10,
        GradeLevel::Grades11To12,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Grades6To8 => "6-8",
            GradeLevel::Grades9To10 => "9-10",
            GradeLevel::Grades11To12 => "11-12",
        }
    }

    /// Level-indicating terms of this band for a subject
    pub fn indicators(&self, subject: Subject) -> &'static [&'static str] {
        match (self, subject) {
            (GradeLevel::Grades6To8, Subject::Math) => &[
                "addition",
                "subtraction",
                "multiplication",
                "division",
                "fraction",
                "decimal",
                "percentage",
                "basic",
                "simple",
                "যোগ",
                "বিয়োগ",
                "গুণ",
                "ভাগ",
                "ভগ্নাংশ",
                "দশমিক",
                "শতকরা",
            ],
            (GradeLevel::Grades6To8, Subject::Physics) => {
                &["basic", "simple", "elementary", "speed", "distance", "time"]
            }
            (GradeLevel::Grades6To8, Subject::Chemistry) => {
                &["basic", "simple", "states of matter", "mixture", "solution"]
            }
            (GradeLevel::Grades6To8, Subject::Biology) => {
                &["basic", "simple", "plant parts", "animal parts", "food chain"]
            }
            (GradeLevel::Grades9To10, Subject::Math) => &[
                "quadratic",
                "trigonometry",
                "logarithm",
                "coordinate",
                "দ্বিঘাত",
                "ত্রিকোণমিতি",
                "লগারিদম",
                "স্থানাঙ্ক",
            ],
            (GradeLevel::Grades9To10, Subject::Physics) => &[
                "force",
                "motion",
                "electricity",
                "light",
                "sound",
                "বল",
                "গতি",
                "বিদ্যুৎ",
                "আলো",
                "শব্দ",
            ],
            (GradeLevel::Grades9To10, Subject::Chemistry) => &[
                "atomic structure",
                "periodic table",
                "chemical bonding",
                "acid base",
                "পরমাণু গঠন",
                "পর্যায় সারণি",
            ],
            (GradeLevel::Grades9To10, Subject::Biology) => &[
                "cell",
                "tissue",
                "genetics",
                "evolution",
                "কোষ",
                "টিস্যু",
                "বংশগতি",
            ],
            (GradeLevel::Grades11To12, Subject::Math) => &[
                "calculus",
                "derivative",
                "integral",
                "limits",
                "matrix",
                "vector",
                "statistics",
                "ক্যালকুলাস",
                "অন্তরকরণ",
                "সমাকলন",
            ],
            (GradeLevel::Grades11To12, Subject::Physics) => &[
                "advanced",
                "quantum",
                "relativity",
                "electromagnetic",
                "thermodynamics",
                "modern physics",
            ],
            (GradeLevel::Grades11To12, Subject::Chemistry) => &[
                "organic",
                "physical chemistry",
                "chemical kinetics",
                "equilibrium",
                "জৈব রসায়ন",
            ],
            (GradeLevel::Grades11To12, Subject::Biology) => &[
                "molecular biology",
                "biotechnology",
                "ecology",
                "advanced genetics",
            ],
            (_, Subject::General) => &[],
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Indicator score of one band
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeScore {
    pub score: usize,
    pub matched_terms: Vec<String>,
}

/// Result of grade-level assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeAssessment {
    pub grade_level: GradeLevel,
    pub confidence: f32,
    /// Indicators of the chosen band found in the text
    pub matched_terms: Vec<String>,
    pub all_scores: BTreeMap<GradeLevel, GradeScore>,
}

/// Estimate the grade band from length when no indicator matched
fn heuristic_grade(text: &str) -> (GradeLevel, f32) {
    let word_count = text.split_whitespace().count();
    let expression_count = extract_mathematical_expressions(text).len();

    if word_count < 10 && expression_count <= 1 {
        (GradeLevel::Grades6To8, 0.3)
    } else if word_count < 20 && expression_count <= 2 {
        (GradeLevel::Grades9To10, 0.4)
    } else {
        (GradeLevel::Grades11To12, 0.5)
    }
}

/// Assess the grade band of a question about `subject`.
///
/// Only indicators of the given subject are considered. A tie between bands
/// resolves to 9-10.
pub fn assess_grade_level(text: &str, subject: Subject) -> GradeAssessment {
    let text_lower = text.to_lowercase();

    let all_scores: BTreeMap<GradeLevel, GradeScore> = GradeLevel::ALL
        .iter()
        .map(|grade| {
            let matched_terms: Vec<String> = grade
                .indicators(subject)
                .iter()
                .filter(|term| text_lower.contains(*term))
                .map(|term| term.to_string())
                .collect();
            let score = GradeScore {
                score: matched_terms.len(),
                matched_terms,
            };
            (*grade, score)
        })
        .collect();

    let max_score = all_scores.values().map(|s| s.score).max().unwrap_or(0);

    if max_score == 0 {
        let (grade_level, confidence) = heuristic_grade(text);
        return GradeAssessment {
            grade_level,
            confidence,
            matched_terms: vec![],
            all_scores,
        };
    }

    let top_grades: Vec<GradeLevel> = GradeLevel::ALL
        .iter()
        .copied()
        .filter(|grade| all_scores[grade].score == max_score)
        .collect();

    let grade_level = match top_grades.as_slice() {
        [single] => *single,
        _ => GradeLevel::Grades9To10,
    };
    let confidence = (max_score as f32 / 3.0).min(1.0);

    GradeAssessment {
        grade_level,
        confidence,
        matched_terms: all_scores[&grade_level].matched_terms.clone(),
        all_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculus_is_senior() {
        let result = assess_grade_level("calculus derivative problem", Subject::Math);

        assert_eq!(result.grade_level, GradeLevel::Grades11To12);
        assert_eq!(result.matched_terms, vec!["calculus", "derivative"]);
        assert!((result.confidence - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_is_secondary() {
        let result = assess_grade_level("Solve the quadratic x^2 - 4 = 0", Subject::Math);

        assert_eq!(result.grade_level, GradeLevel::Grades9To10);
    }

    #[test]
    fn test_other_subject_terms_are_ignored() {
        // "calculus" only counts for math
        let result = assess_grade_level("calculus", Subject::Biology);

        assert_eq!(result.grade_level, GradeLevel::Grades6To8);
        assert_eq!(result.confidence, 0.3);
        assert!(result.matched_terms.is_empty());
    }

    #[test]
    fn test_tie_defaults_to_middle_band() {
        // "simple" (6-8) vs "calculus" (11-12)
        let result = assess_grade_level("simple calculus", Subject::Math);

        assert_eq!(result.grade_level, GradeLevel::Grades9To10);
        assert!(result.matched_terms.is_empty());
        assert!((result.confidence - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_length_heuristic() {
        let medium = "please tell me everything that you know about this topic today ok";
        let result = assess_grade_level(medium, Subject::General);
        assert_eq!(result.grade_level, GradeLevel::Grades9To10);
        assert_eq!(result.confidence, 0.4);

        let long = "word ".repeat(25);
        let result = assess_grade_level(&long, Subject::General);
        assert_eq!(result.grade_level, GradeLevel::Grades11To12);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_grade_labels_serialize() {
        let json = serde_json::to_string(&GradeLevel::Grades11To12).unwrap();
        assert_eq!(json, "\"11-12\"");
    }
}
