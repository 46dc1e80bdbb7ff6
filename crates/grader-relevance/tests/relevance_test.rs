//! Relevance and coherence scorer tests against a scripted oracle.

use std::sync::Arc;
use std::time::Duration;

use grader_core::config::RelevanceConfig;
use grader_core::models::{Block, PriorityLevel};
use grader_relevance::RelevanceEvaluator;
use test_fixtures::ScriptedOracle;

const COHERENCE: &str = "coherence and logical flow";
const RELEVANCE: &str = "relevance and accuracy";

fn evaluator(oracle: ScriptedOracle) -> (RelevanceEvaluator<ScriptedOracle>, Arc<ScriptedOracle>) {
    evaluator_with(oracle, RelevanceConfig::default())
}

fn evaluator_with(
    oracle: ScriptedOracle,
    config: RelevanceConfig,
) -> (RelevanceEvaluator<ScriptedOracle>, Arc<ScriptedOracle>) {
    let oracle = Arc::new(oracle);
    (RelevanceEvaluator::new(Arc::clone(&oracle), config), oracle)
}

fn paragraphs(n: usize) -> Vec<Block> {
    (0..n).map(|i| Block::paragraph(format!("paragraph {i}"))).collect()
}

// ─── Coherence ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn single_block_coherence_is_neutral_without_calls() {
    let (eval, oracle) = evaluator(ScriptedOracle::new("0.9"));
    assert_eq!(eval.evaluate_coherence(&paragraphs(1)).await, 0.5);
    assert_eq!(eval.evaluate_coherence(&[]).await, 0.5);
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn disconnected_pair_score_is_kept_verbatim() {
    let oracle = ScriptedOracle::new("0.9").when("Block 1: Volcanoes", "0.1");
    let (eval, _) = evaluator(oracle);
    let blocks = vec![
        Block::paragraph("Volcanoes erupt when magma rises."),
        Block::paragraph("Sourdough needs a mature starter."),
    ];
    assert_eq!(eval.evaluate_coherence(&blocks).await, 0.1);
}

#[tokio::test]
async fn coherence_is_mean_of_pairs() {
    let oracle = ScriptedOracle::new("1.0").when("Block 1: paragraph 0", "0.2");
    let (eval, oracle) = evaluator(oracle);
    let score = eval.evaluate_coherence(&paragraphs(3)).await;
    assert!((score - 0.6).abs() < 1e-12);
    assert_eq!(oracle.count_matching(COHERENCE), 2);
}

#[tokio::test]
async fn failed_pairs_fall_back_without_aborting() {
    let oracle = ScriptedOracle::new("1.0")
        .fail_when("Block 1: paragraph 1")
        .when("Block 1: paragraph 2", "not a number");
    let (eval, oracle) = evaluator(oracle);
    let score = eval.evaluate_coherence(&paragraphs(4)).await;
    // 1.0, 0.5, 0.5
    assert!((score - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(oracle.call_count(), 3);
}

#[tokio::test]
async fn out_of_range_pair_scores_are_clamped() {
    let (eval, _) = evaluator(ScriptedOracle::new("7"));
    assert_eq!(eval.evaluate_coherence(&paragraphs(2)).await, 1.0);
}

#[tokio::test]
async fn batches_bound_in_flight_calls() {
    let config = RelevanceConfig {
        coherence_batch_size: 3,
        ..Default::default()
    };
    let oracle = ScriptedOracle::new("0.8").with_delay(Duration::from_millis(5));
    let (eval, oracle) = evaluator_with(oracle, config);

    eval.evaluate_coherence(&paragraphs(11)).await;

    assert_eq!(oracle.call_count(), 10);
    assert_eq!(oracle.max_in_flight(), 3);
}

#[tokio::test]
async fn non_text_blocks_render_empty_in_pairs() {
    let (eval, oracle) = evaluator(ScriptedOracle::new("0.5"));
    eval.evaluate_coherence(&[Block::metric("5", "count"), Block::header("Next")])
        .await;
    let prompt = &oracle.prompts()[0];
    assert!(prompt.contains("Block 1: \n"));
    assert!(prompt.contains("Block 2: Next"));
}

// ─── Relevance ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn non_numeric_relevance_reply_falls_back() {
    let (eval, _) = evaluator(ScriptedOracle::new("Highly relevant!"));
    assert_eq!(eval.evaluate_relevance(&paragraphs(2), "q").await, 0.5);
}

#[tokio::test]
async fn relevance_sends_query_and_joined_document() {
    let (eval, oracle) = evaluator(ScriptedOracle::new("0.7"));
    let blocks = vec![Block::header("Title"), Block::paragraph("Body")];
    assert_eq!(eval.evaluate_relevance(&blocks, "What is it?").await, 0.7);
    let prompt = &oracle.prompts()[0];
    assert!(prompt.contains("Query: What is it?"));
    assert!(prompt.contains("Complete Response: Title\n\nBody"));
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn response_combines_axes_with_fixed_weights() {
    let oracle = ScriptedOracle::new("0.0")
        .when(RELEVANCE, "0.9")
        .when(COHERENCE, "0.4");
    let (eval, oracle) = evaluator(oracle);

    let metrics = eval.evaluate_response("q", &paragraphs(3)).await;

    assert_eq!(metrics.relevance_score, 0.9);
    assert_eq!(metrics.coherence_score, 0.4);
    assert!((metrics.overall_score - (0.6 * 0.9 + 0.4 * 0.4)).abs() < 1e-12);
    assert_eq!(oracle.call_count(), 3);
}

#[tokio::test]
async fn total_oracle_outage_yields_neutral_metrics() {
    let (eval, _) = evaluator(ScriptedOracle::failing());
    let metrics = eval.evaluate_response("q", &paragraphs(5)).await;
    assert_eq!(metrics.relevance_score, 0.5);
    assert_eq!(metrics.coherence_score, 0.5);
    assert!((metrics.overall_score - 0.5).abs() < 1e-12);
}

#[tokio::test]
async fn feedback_uses_configured_threshold() {
    let config = RelevanceConfig {
        strength_threshold: 0.5,
        ..Default::default()
    };
    let (eval, _) = evaluator_with(ScriptedOracle::new("0.6"), config);
    let metrics = eval.evaluate_response("q", &paragraphs(2)).await;
    let fb = eval.feedback(&metrics);
    assert_eq!(fb.priority_level, PriorityLevel::Low);
    assert_eq!(fb.strengths.len(), 2);
}
