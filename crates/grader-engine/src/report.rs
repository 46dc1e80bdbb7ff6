//! Human-readable verdict report.

use std::fmt::Write;

use grader_core::models::{BiasReport, Verdict};

pub trait VerdictReport {
    /// Multi-section plain-text report: relevance, accuracy, bias, merged feedback.
    fn render(&self) -> String;
}

impl VerdictReport for Verdict {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "HEADER: {}", self.header);
        let _ = writeln!(out, "QUERY: {}", self.query);

        out.push_str("\nRELEVANCY EVALUATION:\n");
        let _ = writeln!(out, "- Relevance Score: {:.2}", self.relevance.relevance_score);
        let _ = writeln!(out, "- Coherence Score: {:.2}", self.relevance.coherence_score);
        let _ = writeln!(out, "- Overall Score: {:.2}", self.relevance.overall_score);
        out.push_str(&self.relevance_feedback.render());

        out.push_str("\nACCURACY EVALUATION:\n");
        match self.mean_accuracy() {
            Some(mean) => {
                let _ = writeln!(out, "- Mean Accuracy: {mean:.2}");
            }
            None => out.push_str("No metric or table blocks to score\n"),
        }
        for entry in &self.accuracy {
            let result = &entry.result;
            let _ = writeln!(
                out,
                "[block {}] {} score {:.2}",
                entry.block_index, result.block_kind, result.content_score
            );
            if let Some(error) = &result.error_message {
                let _ = writeln!(out, "  error: {error}");
            }
            out.push_str(&entry.feedback.render());
            let interventions = self
                .interventions
                .iter()
                .filter(|i| i.block_index == entry.block_index);
            for intervention in interventions {
                out.push_str(&intervention.correction.render());
            }
        }

        out.push_str("\nGENDER BIAS EVALUATION:\n");
        render_bias(&mut out, &self.bias);

        out.push_str("\nOVERALL FEEDBACK:\n");
        out.push_str(&self.feedback.render());
        out
    }
}

fn render_bias(out: &mut String, report: &BiasReport) {
    let metrics = &report.metrics;
    let stats = &report.stats;
    let _ = writeln!(
        out,
        "- Generic Representation Ratio: {:.2}",
        metrics.generic_representation_ratio
    );
    let _ = writeln!(
        out,
        "- Professional Association Ratio: {:.2}",
        metrics.professional_association_ratio
    );
    let _ = writeln!(
        out,
        "- Named Entities: {} ({} male, {} female)",
        stats.named_entity_references.len(),
        metrics.named_entities.male_count,
        metrics.named_entities.female_count
    );
    let _ = writeln!(
        out,
        "- Generic Mentions: {} male, {} female",
        stats.generic_mentions.male, stats.generic_mentions.female
    );
    for (name, reference) in &stats.named_entity_references {
        let gender = reference
            .gender
            .map_or_else(|| "unresolved".to_string(), |g| g.to_string());
        let _ = writeln!(out, "  {name}: {gender} [{}]", reference.pronouns.join(", "));
    }
    for indicator in &metrics.bias_indicators {
        let _ = writeln!(out, "- Flag: {indicator}");
    }
    if !report.recommendations.is_empty() {
        out.push_str("- Recommendations:\n");
        for rec in &report.recommendations {
            let _ = writeln!(out, "  • {rec}");
        }
    }
}
