//! Grading and correction prompts for metric and table blocks.
//!
//! Each grading prompt carries the content, its context, the citation
//! excerpts, a three-step methodology, and a five-tier rubric whose bands match
//! the feedback buckets in [`crate::feedback`].

use grader_core::models::{Cell, MetricBlock};

/// Role line opening every grading prompt.
pub const EVALUATOR_ROLE: &str = "You are an expert evaluator of factual accuracy in text.";

/// Role line opening every correction prompt.
pub const CORRECTOR_ROLE: &str =
    "You are an expert at correcting factual inaccuracies in content while maintaining citation integrity.";

const SCORE_INSTRUCTIONS: &str = "INSTRUCTIONS:
1. Follow methodology step by step
2. Apply scoring rubric precisely
3. Return single float between 0 and 1
4. No explanation text

RETURN ONLY THE NUMERICAL SCORE:";

pub fn metric_evaluation(metric: &MetricBlock, context: &str, citation_info: &str) -> String {
    format!(
        "{EVALUATOR_ROLE}

Task: Evaluate the accuracy of the following metric in the given context.

CONTENT TO EVALUATE:
Context: {context}
Metric: {value}
Description: {description}
{citation_info}

EVALUATION METHODOLOGY:
1. Value Accuracy
   - Match exact metric value against evidence
   - Verify all significant digits
   - Check unit conversions if present

2. Description Precision
   - Match description against source data
   - Verify temporal qualifiers (when/period)
   - Confirm statistical qualifiers (mean/median/mode)

3. Contextual Alignment
   - Check data timeframe matches context
   - Verify geographic/demographic scope
   - Validate any comparisons or trends

SCORING RUBRIC:
0.81-1.00: Excellent
- Value matches source exactly or within 1% margin
- Description is complete and precise with all qualifiers
- Strong citation support for all claims
- Perfect contextual alignment

0.61-0.80: Good
- Value within 5% margin of error
- Description accurate but missing minor qualifiers
- Citations support most major claims
- Minor contextual misalignments

0.41-0.60: Acceptable
- Value within 10-15% margin of error
- Description lacks some important qualifiers
- Partial citation support
- Some contextual gaps

0.21-0.40: Problematic
- Value off by 15-25%
- Description misrepresents key aspects
- Weak or contradictory citation support
- Major contextual issues

0.00-0.20: Critical Issues
- Value off by >25% or completely wrong
- Description fundamentally inaccurate
- Missing or irrelevant citations
- Severe contextual misalignment

{SCORE_INSTRUCTIONS}",
        value = metric.value.as_deref().unwrap_or_default(),
        description = metric.description.as_deref().unwrap_or_default(),
    )
}

pub fn table_evaluation(rows: &[Vec<Cell>], context: &str, citation_info: &str) -> String {
    format!(
        "{EVALUATOR_ROLE}

Task: Evaluate the accuracy of the following table in the given context.

CONTENT TO EVALUATE:
Context: {context}
Table:
{table}
{citation_info}

EVALUATION METHODOLOGY:
1. Cell Accuracy
   - Match each value against source
   - Verify units and conversions
   - Check significant digits

2. Structural Correctness
   - Validate column/row headers
   - Verify data relationships
   - Check categorical groupings

3. Completeness Check
   - Verify all required data present
   - Check for missing values
   - Validate data ranges

SCORING RUBRIC:
0.81-1.00: Excellent
- 95%+ cells match source exactly or within 1% error
- Headers perfectly labeled and organized
- Complete data coverage with no gaps
- All relationships and groupings correct

0.61-0.80: Good
- 85-94% cells within 5% error margin
- Headers clear but could be more precise
- Minor data gaps in non-critical areas
- Most relationships and groupings accurate

0.41-0.60: Acceptable
- 70-84% cells within 10% error margin
- Some header ambiguity present
- Several data gaps but core data intact
- Some grouping or relationship issues

0.21-0.40: Problematic
- 50-69% cells accurate within 15% error
- Headers unclear or misleading
- Significant data gaps affect understanding
- Major grouping or relationship problems

0.00-0.20: Critical Issues
- <50% cells accurate or completely wrong
- Headers missing or fundamentally wrong
- Critical data missing throughout
- Relationships and groupings invalid

{SCORE_INSTRUCTIONS}",
        table = table_json(rows),
    )
}

/// First guideline differs depending on whether sources are available.
fn alignment_guideline(has_citations: bool) -> &'static str {
    if has_citations {
        "Maintain exact alignment with citation content"
    } else {
        "Suggest corrections based on the context and your expertise"
    }
}

pub fn metric_correction(
    metric: &MetricBlock,
    context: &str,
    citation_info: &str,
    has_citations: bool,
) -> String {
    let preserve = if has_citations {
        "\n5. Preserve the original citation structure"
    } else {
        ""
    };
    format!(
        "{CORRECTOR_ROLE}

Task: Correct the following metric content to improve accuracy.

ORIGINAL CONTENT:
Context: {context}
Original Metric: {value}
Original Description: {description}
{citation_info}

CORRECTION GUIDELINES:
1. {guideline}
2. Include all necessary qualifiers (temporal, statistical, geographic)
3. Use precise language and specific values
4. Keep the same basic format but improve accuracy{preserve}

REQUIRED OUTPUT FORMAT:
Return a JSON object with corrected 'metric' and 'description' fields:
{{
    \"metric\": \"corrected metric value\",
    \"description\": \"corrected description\"
}}
ONLY RETURN JSON OBJECT
Generate the corrected content:",
        value = metric.value.as_deref().unwrap_or_default(),
        description = metric.description.as_deref().unwrap_or_default(),
        guideline = alignment_guideline(has_citations),
    )
}

pub fn table_correction(
    rows: &[Vec<Cell>],
    context: &str,
    citation_info: &str,
    has_citations: bool,
) -> String {
    format!(
        "{CORRECTOR_ROLE}

Task: Correct the following table content to improve accuracy.

ORIGINAL CONTENT:
Context: {context}
Original Table:
{table}
{citation_info}

CORRECTION GUIDELINES:
1. {guideline}
2. Preserve table structure and relationships
3. Correct any numerical inaccuracies
4. Ensure header clarity and precision
5. Keep the same format but improve accuracy

REQUIRED OUTPUT FORMAT:
Return a JSON object with the corrected table data:
{{
    \"table\": [corrected table rows]
}}
ONLY RETURN JSON OBJECT WITH CORRECTED TABLE DATA
Generate the corrected content:",
        table = table_json(rows),
        guideline = alignment_guideline(has_citations),
    )
}

fn table_json(rows: &[Vec<Cell>]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_default()
}
