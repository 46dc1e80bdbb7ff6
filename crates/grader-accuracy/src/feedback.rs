//! Deterministic accuracy feedback.
//!
//! Priority: `critical` for a rejected structure, `high` when the block has no
//! citations, otherwise the priority of the score's rubric band.

use grader_core::models::{BlockKind, EvaluationResult, Feedback, PriorityLevel};

/// Rubric band of an accuracy score, matching the grading prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Acceptable,
    Problematic,
    Critical,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 0.81 {
            Self::Excellent
        } else if score >= 0.61 {
            Self::Good
        } else if score >= 0.41 {
            Self::Acceptable
        } else if score >= 0.21 {
            Self::Problematic
        } else {
            Self::Critical
        }
    }

    pub fn priority(self) -> PriorityLevel {
        match self {
            Self::Excellent | Self::Good => PriorityLevel::Low,
            Self::Acceptable => PriorityLevel::Medium,
            Self::Problematic => PriorityLevel::High,
            Self::Critical => PriorityLevel::Critical,
        }
    }
}

pub fn generate_actionable_feedback(result: &EvaluationResult) -> Feedback {
    let kind = result.block_kind;
    let mut feedback = Feedback::default();

    if !result.structure_valid {
        feedback
            .areas_for_improvement
            .push("Invalid block structure detected".to_string());
        feedback.specific_recommendations = vec![
            "Ensure all required fields are present".to_string(),
            format!("Verify the {kind} follows the correct format specification"),
            "Check for any missing or malformed data entries".to_string(),
        ];
        feedback.priority_level = PriorityLevel::Critical;
        return feedback;
    }

    if !result.has_citations {
        feedback
            .areas_for_improvement
            .push("Missing citations".to_string());
        feedback
            .specific_recommendations
            .push("Add relevant citations to support the content".to_string());
    }

    let band = ScoreBand::of(result.content_score);
    let is_metric = kind == BlockKind::Metric;
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    match band {
        ScoreBand::Excellent => {
            feedback.strengths.extend([
                format!("High-quality {kind} content with excellent accuracy"),
                "Precise and well-supported information".to_string(),
                "Strong contextual alignment".to_string(),
                if is_metric {
                    "Accurate metric value with comprehensive description".to_string()
                } else {
                    "Well-structured table with accurate cell values".to_string()
                },
            ]);
        }
        ScoreBand::Good => {
            feedback
                .strengths
                .push(format!("Generally accurate {kind} content"));
            feedback
                .areas_for_improvement
                .push("Minor accuracy improvements needed".to_string());
            feedback.specific_recommendations.extend(if is_metric {
                owned(&[
                    "Add missing qualifiers to the description",
                    "Verify exact metric value against source",
                ])
            } else {
                owned(&[
                    "Review header clarity and precision",
                    "Check for minor data inconsistencies",
                ])
            });
        }
        ScoreBand::Acceptable => {
            feedback.areas_for_improvement.extend(owned(&[
                "Moderate accuracy issues detected",
                "Important details missing or imprecise",
            ]));
            feedback.specific_recommendations.extend(if is_metric {
                owned(&[
                    "Review and verify metric calculation",
                    "Add important contextual qualifiers",
                    "Strengthen citation support",
                ])
            } else {
                owned(&[
                    "Address data gaps in the table",
                    "Improve header clarity",
                    "Verify data relationships and groupings",
                ])
            });
        }
        ScoreBand::Problematic => {
            feedback.areas_for_improvement.extend(owned(&[
                "Significant accuracy concerns",
                "Major content issues identified",
            ]));
            feedback.specific_recommendations.extend(if is_metric {
                owned(&[
                    "Recalculate metric value from source data",
                    "Completely revise description for accuracy",
                    "Verify all citations and claims",
                ])
            } else {
                owned(&[
                    "Review and correct cell values throughout",
                    "Restructure table headers and organization",
                    "Fill in missing critical data",
                ])
            });
        }
        ScoreBand::Critical => {
            feedback.areas_for_improvement.extend(owned(&[
                "Critical accuracy issues detected",
                "Fundamental content problems present",
            ]));
            feedback.specific_recommendations.extend(if is_metric {
                owned(&[
                    "Complete metric value recalculation required",
                    "Full revision of description needed",
                    "Comprehensive citation review necessary",
                ])
            } else {
                owned(&[
                    "Complete table restructuring needed",
                    "Comprehensive data verification required",
                    "Full review of all relationships and groupings",
                ])
            });
        }
    }

    feedback.priority_level = if result.has_citations {
        band.priority()
    } else {
        PriorityLevel::High
    };
    feedback
}

/// Render feedback for display.
pub fn format_feedback(feedback: &Feedback) -> String {
    feedback.render()
}
