use std::fmt;

use serde::{Deserialize, Serialize};

/// How urgently a piece of content needs attention. Ordered low → critical.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Traffic-light marker shown next to the level in rendered feedback.
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable, actionable feedback for one axis or a whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub specific_recommendations: Vec<String>,
    pub priority_level: PriorityLevel,
}

impl Feedback {
    /// Fold `other` into `self`: entries are appended without duplicates
    /// (first occurrence wins) and the higher priority is kept.
    pub fn merge(&mut self, other: &Feedback) {
        extend_unique(&mut self.strengths, &other.strengths);
        extend_unique(&mut self.areas_for_improvement, &other.areas_for_improvement);
        extend_unique(
            &mut self.specific_recommendations,
            &other.specific_recommendations,
        );
        self.priority_level = self.priority_level.max(other.priority_level);
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
            && self.areas_for_improvement.is_empty()
            && self.specific_recommendations.is_empty()
    }

    /// Render as a priority line followed by bulleted sections. Empty sections are omitted.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Priority Level: {} {}\n",
            self.priority_level.indicator(),
            self.priority_level
        );
        render_section(&mut out, "✓ Strengths:", &self.strengths);
        render_section(&mut out, "⚠ Areas for Improvement:", &self.areas_for_improvement);
        render_section(
            &mut out,
            "📋 Specific Recommendations:",
            &self.specific_recommendations,
        );
        out
    }
}

fn extend_unique(target: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}

fn render_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(title);
    out.push('\n');
    for item in items {
        out.push_str("  • ");
        out.push_str(item);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_highest_priority_and_dedupes() {
        let mut a = Feedback {
            strengths: vec!["clear".into()],
            priority_level: PriorityLevel::Medium,
            ..Default::default()
        };
        let b = Feedback {
            strengths: vec!["clear".into(), "cited".into()],
            priority_level: PriorityLevel::Low,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.strengths, vec!["clear", "cited"]);
        assert_eq!(a.priority_level, PriorityLevel::Medium);
    }

    #[test]
    fn render_omits_empty_sections() {
        let fb = Feedback {
            areas_for_improvement: vec!["Missing citations".into()],
            priority_level: PriorityLevel::High,
            ..Default::default()
        };
        let text = fb.render();
        assert!(text.starts_with("Priority Level: 🟠 high\n"));
        assert!(text.contains("  • Missing citations\n"));
        assert!(!text.contains("Strengths"));
    }
}
