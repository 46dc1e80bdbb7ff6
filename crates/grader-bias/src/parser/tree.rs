//! Rule-based head and role assignment for one sentence.
//!
//! Main verbs chain left to right: the first is the root, each later one is
//! a conjunct of its predecessor when a coordinator or comma separates them,
//! otherwise a clausal complement. Each verb takes the nominal right before it
//! as subject. Noun runs hang off their last noun, which in turn attaches to
//! the preceding preposition or the governing verb.

use std::ops::Range;

use grader_core::models::{DepRole, Span};

use super::tagger::Tag;

/// Dependency arcs for a sentence plus its noun chunks, in absolute token indices.
pub struct SentenceTree {
    pub arcs: Vec<(DepRole, usize)>,
    pub chunks: Vec<Span>,
}

/// A maximal `Det/Poss/Noun/'s` run with at least one noun.
struct NounRun {
    range: Range<usize>,
    head: usize,
}

/// `tags`, `lemmas` and `is_entity` cover the sentence only.
pub fn build(
    sentence: Range<usize>,
    tags: &[Tag],
    lemmas: &[String],
    is_entity: &[bool],
) -> SentenceTree {
    let base = sentence.start;
    let len = sentence.len();
    // Local index helpers; `tags` and `lemmas` are sentence-local.
    let tag = |i: usize| tags[i];

    let verbs = main_verbs(tags);
    let runs = noun_runs(tags, lemmas, is_entity);

    let root = match verbs.first() {
        Some(&v) => v,
        None => runs
            .first()
            .map(|r| r.head)
            .or_else(|| (0..len).find(|&i| tag(i) != Tag::Punct))
            .unwrap_or(0),
    };

    let mut arcs: Vec<(DepRole, usize)> = vec![(DepRole::Other, root); len];

    // Verb chain.
    for pair in verbs.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let coordinated = (prev + 1..next)
            .any(|k| matches!(lemmas[k].as_str(), "and" | "or" | "but" | "nor" | "yet" | ","));
        let role = if coordinated {
            DepRole::Conjunct
        } else {
            DepRole::Complement
        };
        arcs[next] = (role, prev);
    }

    // Subjects.
    let mut subjects = Vec::new();
    for (j, &verb) in verbs.iter().enumerate() {
        let floor = if j == 0 { 0 } else { verbs[j - 1] + 1 };
        if let Some(subject) = subject_of(verb, floor, tags, &runs) {
            arcs[subject] = (DepRole::Subject, verb);
            subjects.push(subject);
        }
    }

    let governor = |i: usize| -> usize {
        verbs
            .iter()
            .rev()
            .find(|&&v| v < i)
            .or_else(|| verbs.first())
            .copied()
            .unwrap_or(root)
    };

    // Noun runs.
    for run in &runs {
        for k in run.range.clone() {
            if k == run.head {
                continue;
            }
            arcs[k] = match tag(k) {
                Tag::PronPoss => (DepRole::Possessive, run.head),
                Tag::Clitic => (DepRole::Other, k.saturating_sub(1)),
                Tag::Noun if k + 1 < len && tag(k + 1) == Tag::Clitic => {
                    (DepRole::Possessive, run.head)
                }
                _ => (DepRole::Modifier, run.head),
            };
        }
        if !subjects.contains(&run.head) {
            arcs[run.head] = attach_nominal(run.range.start, tags, governor(run.head));
        }
    }

    // Everything else.
    let in_run = |i: usize| runs.iter().any(|r| r.range.contains(&i));
    for i in 0..len {
        if verbs.contains(&i) || subjects.contains(&i) || in_run(i) {
            continue;
        }
        arcs[i] = match tag(i) {
            Tag::Punct => (DepRole::Punct, root),
            Tag::Aux => match next_verb(i, tags) {
                Some(v) => (DepRole::Modifier, v),
                None => (DepRole::Other, governor(i)),
            },
            Tag::Conj => {
                let next = verbs.iter().find(|&&v| v > i).copied();
                (DepRole::Other, next.unwrap_or_else(|| governor(i)))
            }
            Tag::PronSubj | Tag::PronObj => attach_nominal(i, tags, governor(i)),
            _ => (DepRole::Other, governor(i)),
        };
    }

    arcs[root] = (DepRole::Root, root);
    // A head equal to its own index is reserved for the root.
    for (i, arc) in arcs.iter_mut().enumerate() {
        if i != root && arc.1 == i {
            *arc = (arc.0, root);
        }
    }

    let mut chunks: Vec<Span> = runs
        .iter()
        .map(|r| Span::new(base + r.range.start, base + r.range.end))
        .chain(
            (0..len)
                .filter(|&i| matches!(tag(i), Tag::PronSubj | Tag::PronObj))
                .map(|i| Span::new(base + i, base + i + 1)),
        )
        .collect();
    chunks.sort_by_key(|s| s.start);

    SentenceTree {
        arcs: arcs
            .into_iter()
            .map(|(role, head)| (role, base + head))
            .collect(),
        chunks,
    }
}

/// Verbs heading a clause. An auxiliary counts only when no verb follows it.
fn main_verbs(tags: &[Tag]) -> Vec<usize> {
    (0..tags.len())
        .filter(|&i| match tags[i] {
            Tag::Verb => true,
            Tag::Aux => next_verb(i, tags).is_none(),
            _ => false,
        })
        .collect()
}

/// The verb an auxiliary supports, skipping adverbs.
fn next_verb(aux: usize, tags: &[Tag]) -> Option<usize> {
    (aux + 1..tags.len())
        .find(|&k| tags[k] != Tag::Adv)
        .filter(|&k| tags[k] == Tag::Verb)
}

/// Runs split where a common noun meets a name in apposition: "her husband | Pierre Curie".
fn noun_runs(tags: &[Tag], lemmas: &[String], is_entity: &[bool]) -> Vec<NounRun> {
    let in_run = |t: Tag| matches!(t, Tag::Det | Tag::PronPoss | Tag::Noun | Tag::Clitic);
    let apposition = |k: usize| {
        is_entity[k]
            && k > 0
            && tags[k - 1] == Tag::Noun
            && !is_entity[k - 1]
            && !lemmas[k - 1].ends_with('.')
    };
    let mut runs = Vec::new();
    let mut i = 0;
    while i < tags.len() {
        if !in_run(tags[i]) || tags[i] == Tag::Clitic {
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        while i < tags.len() && in_run(tags[i]) && !apposition(i) {
            i += 1;
        }
        if let Some(head) = (start..i).rev().find(|&k| tags[k] == Tag::Noun) {
            runs.push(NounRun {
                range: start..i,
                head,
            });
        }
    }
    runs
}

/// Nominal immediately left of `verb` (past auxiliaries and adverbs), unless
/// it is the object of a preposition.
fn subject_of(verb: usize, floor: usize, tags: &[Tag], runs: &[NounRun]) -> Option<usize> {
    let candidate = (floor..verb)
        .rev()
        .find(|&k| !matches!(tags[k], Tag::Aux | Tag::Adv))?;
    match tags[candidate] {
        Tag::PronSubj | Tag::PronObj => Some(candidate),
        Tag::Noun => {
            let run = runs.iter().find(|r| r.head == candidate)?;
            let after_prep = run
                .range
                .start
                .checked_sub(1)
                .is_some_and(|p| tags[p] == Tag::Prep);
            (!after_prep).then_some(candidate)
        }
        _ => None,
    }
}

/// Object of the preposition right before the phrase, else of the governing verb.
fn attach_nominal(phrase_start: usize, tags: &[Tag], governor: usize) -> (DepRole, usize) {
    match phrase_start.checked_sub(1) {
        Some(p) if tags[p] == Tag::Prep => (DepRole::Object, p),
        _ => (DepRole::Object, governor),
    }
}
