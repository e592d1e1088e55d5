//! Depth-scaled arithmetic problem generation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Operation, Problem};
use crate::core::constants::{
    DIVISION_MIN_DEPTH, HINT_MAX_DEPTH, MULTIPLICATION_MIN_DEPTH, SUBTRACTION_MIN_DEPTH,
};

/// Distractor draws before falling back to probing upward from the last candidate.
const MAX_HINT_DRAWS: u32 = 32;

/// Operand multiplier for a math difficulty setting (1 = easy, 5 = hard).
pub fn difficulty_multiplier(setting: u8) -> f64 {
    match setting {
        1 => 0.6,
        2 => 0.8,
        3 => 1.0,
        4 => 1.25,
        5 => 1.5,
        _ => 1.0,
    }
}

/// Depth-derived problem difficulty. Never below 1.
pub fn difficulty_for_depth(depth: usize) -> u32 {
    ((depth / 10) as u32).max(1)
}

/// Operations unlocked at a given depth, in unlock order.
pub fn available_operations(depth: usize) -> Vec<Operation> {
    let mut ops = vec![Operation::Addition];
    if depth >= SUBTRACTION_MIN_DEPTH {
        ops.push(Operation::Subtraction);
    }
    if depth >= MULTIPLICATION_MIN_DEPTH {
        ops.push(Operation::Multiplication);
    }
    if depth >= DIVISION_MIN_DEPTH {
        ops.push(Operation::Division);
    }
    ops
}

/// Generates a problem for a mine row. Shallow rows also get three hints.
pub fn generate_problem<R: Rng>(depth: usize, difficulty_setting: u8, rng: &mut R) -> Problem {
    let ops = available_operations(depth);
    let operation = *ops.choose(rng).unwrap_or(&Operation::Addition);
    let mut problem = generate_with_operation(operation, depth, difficulty_setting, rng);

    if depth < HINT_MAX_DEPTH {
        problem.hints = Some(generate_hints(problem.answer, rng));
    }
    problem
}

/// Generates a problem of a fixed operation. Hints are not attached.
pub fn generate_with_operation<R: Rng>(
    operation: Operation,
    depth: usize,
    difficulty_setting: u8,
    rng: &mut R,
) -> Problem {
    let multiplier = difficulty_multiplier(difficulty_setting);
    // Multiplication and division feel the setting at half strength
    let damped = 1.0 + (multiplier - 1.0) * 0.5;
    let d = depth as i64;
    let difficulty = difficulty_for_depth(depth);

    match operation {
        Operation::Addition => {
            let low = 1 + d / 4;
            let high = 5 + (depth as f64 * 1.2).floor() as i64;
            let a = scale_operand(rng.gen_range(low..=high), multiplier, 1);
            let b = scale_operand(rng.gen_range(low..=high), multiplier, 1);
            Problem::new(operation, a, b, a + b, difficulty)
        }
        Operation::Subtraction => {
            let past = (d - SUBTRACTION_MIN_DEPTH as i64).max(0);
            let low = 5 + past / 2;
            let high = 10 + (past as f64 * 1.2).floor() as i64;
            let a = scale_operand(rng.gen_range(low..=high), multiplier, 2);
            let b = rng.gen_range(1..=a - 1);
            Problem::new(operation, a, b, a - b, difficulty)
        }
        Operation::Multiplication => {
            let past = (d - MULTIPLICATION_MIN_DEPTH as i64).max(0);
            let a = scale_operand(rng.gen_range(2..=2 + past / 4), damped, 2);
            let b = scale_operand(rng.gen_range(2..=3 + past / 3), damped, 2);
            Problem::new(operation, a, b, a * b, difficulty)
        }
        Operation::Division => {
            // Built backwards from the quotient so it always divides evenly
            let past = (d - DIVISION_MIN_DEPTH as i64).max(0);
            let divisor = scale_operand(rng.gen_range(2..=2 + past / 5), damped, 2);
            let quotient = scale_operand(rng.gen_range(2..=3 + past / 4), damped, 2);
            Problem::new(operation, divisor * quotient, divisor, quotient, difficulty)
        }
    }
}

fn scale_operand(value: i64, multiplier: f64, floor: i64) -> i64 {
    ((value as f64 * multiplier).round() as i64).max(floor)
}

/// Three shuffled, pairwise distinct choices containing `answer` exactly once.
/// Distractors are never negative.
pub fn generate_hints<R: Rng>(answer: i64, rng: &mut R) -> [i64; 3] {
    let spread = ((answer as f64 * 0.3).floor() as i64).max(5);
    let mut hints = vec![answer];
    let mut draws = 0;

    while hints.len() < 3 {
        let offset = rng.gen_range(1..=spread);
        let mut candidate = if rng.gen_bool(0.5) {
            answer + offset
        } else {
            answer - offset
        };
        if candidate < 0 || candidate == answer {
            candidate = answer + offset;
        }

        draws += 1;
        if draws > MAX_HINT_DRAWS {
            while hints.contains(&candidate) {
                candidate += 1;
            }
        }
        if !hints.contains(&candidate) {
            hints.push(candidate);
        }
    }

    hints.shuffle(rng);
    [hints[0], hints[1], hints[2]]
}
