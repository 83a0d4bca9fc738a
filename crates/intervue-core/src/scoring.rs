//! Heuristic evaluators for text, voice, and code answers.
//!
//! Every function here is a pure computation: no I/O, no hidden state, and
//! identical inputs always produce identical outputs. Percentages are kept
//! fractional internally and rounded to integers only at the boundary, and
//! every returned score lands in [0, 100].

use crate::model::Question;
use crate::results::{AnswerEvaluation, CodeEvaluation, Tone, VoiceAnalysis};

/// Minimum word count a full-credit answer is measured against.
pub const DEFAULT_MIN_WORD_COUNT: usize = 20;

/// Ideal speaking pace in words per minute.
pub const IDEAL_PACE_WPM: f64 = 150.0;

/// Hesitation markers that penalize spoken-answer clarity.
pub const FILLER_WORDS: [&str; 6] = ["um", "uh", "like", "you know", "basically", "actually"];

fn clamp_round(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

// ---------------------------------------------------------------------------
// Free-text answers
// ---------------------------------------------------------------------------

/// Score a free-text (or transcribed) answer against its expected keywords.
///
/// `min_word_count` is the length at which the depth heuristic grants half
/// credit; pass [`DEFAULT_MIN_WORD_COUNT`] unless the question says otherwise.
pub fn evaluate_answer(
    answer: &str,
    keywords: &[String],
    min_word_count: usize,
) -> AnswerEvaluation {
    let answer_lower = answer.to_lowercase();
    let word_count = answer.split_whitespace().count();

    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| answer_lower.contains(&k.to_lowercase()))
        .cloned()
        .collect();
    let missed_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| !answer_lower.contains(&k.to_lowercase()))
        .cloned()
        .collect();

    // An empty keyword list is valid and scores a neutral 50.
    let keyword_match = if keywords.is_empty() {
        50.0
    } else {
        matched_keywords.len() as f64 / keywords.len() as f64 * 100.0
    };

    let sentence_count = answer.split('.').count();
    let depth = f64::min(
        100.0,
        word_count as f64 / min_word_count.max(1) as f64 * 50.0
            + (sentence_count as f64 - 1.0) * 10.0,
    );

    let relevance = keyword_match * 0.7 + depth * 0.3;
    let score = keyword_match * 0.5 + depth * 0.3 + relevance * 0.2;

    let mut feedback = if score >= 80.0 {
        "Excellent answer! You covered the key points comprehensively."
    } else if score >= 60.0 {
        "Good answer, but could be more detailed in some areas."
    } else if score >= 40.0 {
        "Fair answer. Consider adding more specific examples and details."
    } else {
        "Your answer needs more depth and relevance to the question."
    }
    .to_string();

    if !missed_keywords.is_empty() {
        let suggestions: Vec<&str> = missed_keywords
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        feedback.push_str(&format!(" Consider mentioning: {}.", suggestions.join(", ")));
    }

    AnswerEvaluation {
        score: clamp_round(score),
        keyword_match: clamp_round(keyword_match),
        depth: clamp_round(depth),
        relevance: clamp_round(relevance),
        feedback,
        matched_keywords,
        missed_keywords,
    }
}

// ---------------------------------------------------------------------------
// Voice answers
// ---------------------------------------------------------------------------

/// Analyze the delivery of a transcribed spoken answer.
pub fn analyze_voice_response(transcript: &str, duration_secs: u32) -> VoiceAnalysis {
    let words: Vec<&str> = transcript.split_whitespace().collect();
    let word_count = words.len();

    let pace = if duration_secs > 0 {
        word_count as f64 / duration_secs as f64 * 60.0
    } else {
        0.0
    };

    let filler_count = words
        .iter()
        .filter(|w| FILLER_WORDS.contains(&w.to_lowercase().as_str()))
        .count();

    // An empty transcript has nothing to penalize; treat it as fully clear
    // rather than dividing by zero.
    let clarity = if word_count == 0 {
        100.0
    } else {
        f64::max(0.0, 100.0 - filler_count as f64 / word_count as f64 * 100.0)
    };

    let pace_score = 100.0 - (pace - IDEAL_PACE_WPM).abs() / IDEAL_PACE_WPM * 100.0;
    let confidence = clarity * 0.6 + pace_score * 0.4;

    // Classification order matters: pacing problems dominate, then a clean
    // confident delivery, then filler-heavy speech.
    let tone = if pace < 100.0 || pace > 180.0 {
        Tone::Nervous
    } else if clarity > 80.0 && (130.0..=170.0).contains(&pace) {
        Tone::Confident
    } else if filler_count as f64 > word_count as f64 * 0.1 {
        Tone::Casual
    } else {
        Tone::Professional
    };

    VoiceAnalysis {
        clarity: clamp_round(clarity),
        confidence: clamp_round(confidence),
        pace: pace.round() as u32,
        tone,
        word_count,
        duration_secs,
    }
}

// ---------------------------------------------------------------------------
// Code submissions
// ---------------------------------------------------------------------------

/// True when `needle` occurs at least twice within a single line.
fn repeats_on_one_line(line: &str, needle: &str) -> bool {
    match line.find(needle) {
        Some(pos) => line[pos + needle.len()..].contains(needle),
        None => false,
    }
}

/// Score a code submission.
///
/// Test execution is not this function's job: the caller supplies the
/// `(tests_passed, total_tests)` outcome, so a real sandboxed runner can be
/// substituted for the simulated one without touching scoring.
pub fn evaluate_code(source: &str, tests_passed: u32, total_tests: u32) -> CodeEvaluation {
    let correctness = if total_tests > 0 {
        tests_passed as f64 / total_tests as f64 * 100.0
    } else {
        0.0
    };

    let lines: Vec<&str> = source.split('\n').collect();
    let has_comments = lines
        .iter()
        .any(|l| l.trim_start().starts_with("//") || l.trim_start().starts_with("/*"));
    let avg_line_length =
        lines.iter().map(|l| l.len()).sum::<usize>() as f64 / lines.len() as f64;
    let has_function_syntax = source.contains("function") || source.contains("=>");
    let readability = f64::min(
        100.0,
        (if has_comments { 30.0 } else { 0.0 })
            + (if avg_line_length < 80.0 { 40.0 } else { 20.0 })
            + (if has_function_syntax { 30.0 } else { 20.0 }),
    );

    let has_nested_loops = lines
        .iter()
        .any(|l| repeats_on_one_line(l, "for") || repeats_on_one_line(l, "while"));
    let uses_builtin_methods = ["map", "filter", "reduce", "find", "some", "every"]
        .iter()
        .any(|m| source.contains(m));
    let efficiency = f64::min(
        100.0,
        (if uses_builtin_methods { 50.0 } else { 30.0 })
            + (if has_nested_loops { 20.0 } else { 50.0 }),
    );

    let uses_const = source.contains("const");
    let uses_let = source.contains("let");
    let avoids_var = !source.contains("var");
    let has_proper_naming = source.chars().any(|c| c.is_ascii_lowercase());
    let best_practices = (if uses_const { 25.0 } else { 0.0 })
        + (if uses_let { 15.0 } else { 0.0 })
        + (if avoids_var { 30.0 } else { 0.0 })
        + (if has_proper_naming { 30.0 } else { 0.0 });

    let score =
        correctness * 0.5 + efficiency * 0.2 + readability * 0.15 + best_practices * 0.15;

    let mut feedback = if tests_passed == total_tests {
        "\u{2713} All tests passed! ".to_string()
    } else {
        format!("{tests_passed}/{total_tests} tests passed. ")
    };
    feedback.push_str(if score >= 80.0 {
        "Excellent code quality!"
    } else if score >= 60.0 {
        "Good solution, but there's room for improvement."
    } else {
        "Consider improving code efficiency and readability."
    });
    if !has_comments && lines.len() > 10 {
        feedback.push_str(" Add comments for better clarity.");
    }
    if has_nested_loops {
        feedback.push_str(" Consider optimizing nested loops.");
    }

    CodeEvaluation {
        score: clamp_round(score),
        correctness: clamp_round(correctness),
        efficiency: clamp_round(efficiency),
        readability: clamp_round(readability),
        best_practices: clamp_round(best_practices),
        feedback,
        tests_passed,
        total_tests,
    }
}

// ---------------------------------------------------------------------------
// Multiple choice
// ---------------------------------------------------------------------------

/// Check a multiple-choice selection against the option flagged correct.
///
/// Returns the score and feedback; all-or-nothing.
pub fn score_multiple_choice(question: &Question, selected_option_id: &str) -> (u8, String) {
    match question.correct_option() {
        Some(correct) if correct.id == selected_option_id => (100, "Correct!".to_string()),
        Some(correct) => (
            0,
            format!("Incorrect. The correct answer is: {}", correct.text),
        ),
        // A catalog without a flagged correct option is caught by validation;
        // score defensibly rather than panic if one slips through.
        None => (0, "Incorrect.".to_string()),
    }
}
