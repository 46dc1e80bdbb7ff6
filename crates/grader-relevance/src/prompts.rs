//! Coherence and relevance grading prompts.

pub fn coherence(first: &str, second: &str) -> String {
    format!(
        "Task: Evaluate the coherence and logical flow between two consecutive content blocks.

CONTENT TO EVALUATE:
Block 1: {first}
Block 2: {second}

EVALUATION METHODOLOGY:
1. Logical Flow Assessment:
  - Evaluate the logical connection between blocks
  - Check for proper sequence of ideas
  - Assess if transitions are natural

2. Content Continuity:
  - Verify thematic consistency
  - Check for information gaps
  - Assess proper development of ideas

3. Structural Coherence:
  - Evaluate transition effectiveness
  - Check for appropriate segmentation
  - Assess paragraph-level organization

SCORING RUBRIC:
0.0-0.2: No coherence
- No logical connection between blocks
- Abrupt or jarring transitions
- Completely disconnected ideas

0.3-0.4: Weak coherence
- Minimal logical connection
- Poor transitions
- Significant gaps in flow

0.5-0.6: Moderate coherence
- Basic logical connection
- Functional transitions
- Some gaps in flow

0.7-0.8: Strong coherence
- Clear logical connection
- Smooth transitions
- Minor gaps in flow

0.9-1.0: Excellent coherence
- Perfect logical connection
- Seamless transitions
- Flawless flow of ideas

INSTRUCTIONS:
1. Follow the evaluation methodology step by step
2. Apply the scoring rubric rigorously
3. Return ONLY a single float number between 0 and 1 representing the coherence score
4. Do not provide any explanation or additional text

RETURN ONLY THE NUMERICAL SCORE:"
    )
}

pub fn relevance(query: &str, document: &str) -> String {
    format!(
        "Task: Evaluate the relevance and accuracy of the following complete response in relation to the query.

CONTENT TO EVALUATE:
Query: {query}
Complete Response: {document}

EVALUATION METHODOLOGY:
1. Query Alignment Assessment:
  - Evaluate how comprehensively the response addresses the query
  - Check if all aspects of the query are covered
  - Assess the depth and thoroughness of the response

2. Content Quality Assessment:
  - Verify accuracy and completeness of information
  - Check for logical consistency throughout the response
  - Evaluate clarity and effectiveness of explanations

3. Overall Response Effectiveness:
  - Assess if the response fully satisfies the query intent
  - Evaluate the balance of information provided
  - Check for any missing crucial information

SCORING RUBRIC:
0.0-0.2: Irrelevant or misleading
- Response fails to address the query
- Contains significant inaccuracies
- Missing crucial information

0.3-0.4: Minimally relevant
- Superficially addresses the query
- Contains notable gaps or inaccuracies
- Lacks necessary depth

0.5-0.6: Moderately relevant
- Partially addresses the query
- Generally accurate with some gaps
- Provides basic but incomplete coverage

0.7-0.8: Highly relevant
- Comprehensively addresses the query
- Accurate with minor gaps
- Provides thorough coverage

0.9-1.0: Exceptionally relevant
- Perfectly addresses all aspects of the query
- Completely accurate and comprehensive
- Provides exceptional depth and clarity

INSTRUCTIONS:
1. Follow the evaluation methodology step by step
2. Apply the scoring rubric rigorously
3. Return ONLY a single float number between 0 and 1 representing the relevance score
4. Do not provide any explanation or additional text

RETURN ONLY THE NUMERICAL SCORE:"
    )
}
