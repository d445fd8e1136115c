//! Deterministic seeded name synthesis.
//!
//! One `(description, seed)` pair maps to exactly one [`NameRecord`] (or one
//! ordered batch of records). Every call builds a fresh [`SeededRandom`] from
//! the seed and performs a fixed sequence of draws against the static word
//! banks, so re-running with the same inputs reproduces the same names on any
//! platform. The draw order and the bank contents are load-bearing: changing
//! either silently remaps every existing seed.

pub mod banks;
pub mod keywords;
pub mod rng;

use chrono::{DateTime, Utc};
use serde::Serialize;

use banks::{COMPOUNDS, MIDDLES, PREFIXES, SUFFIXES};
use keywords::extract_keywords;
use rng::SeededRandom;

/// Batch size used when the caller does not ask for a specific count.
pub const DEFAULT_BATCH_COUNT: u32 = 12;

/// Upper bound on a single batch request.
pub const MAX_BATCH_COUNT: u32 = 50;

/// Give up redrawing a colliding batch slot after this many attempts.
/// The name space is large enough that the bound is never reached in practice.
const MAX_REDRAWS: u32 = 64;

/// Name style implied by the synthesis pattern that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Catchy,
    Tech,
    Professional,
    Creative,
    Innovative,
    Sophisticated,
    Modern,
    Premium,
    Advanced,
}

/// A generated name suggestion.
///
/// Immutable once produced. `generated_at` records wall-clock call time and is
/// the only field excluded from the determinism contract.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// Display/de-duplication key: the seed itself for single results,
    /// seed plus slot index within a batch.
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub relevance_score: u8,
    pub generated_at: DateTime<Utc>,
    pub seed: i64,
}

struct Draw {
    name: String,
    category: Category,
    three_word: bool,
}

/// One full draw sequence: keyword, prefix, suffix, middle, compound, pattern.
/// All five bank draws happen unconditionally, even though each pattern only
/// uses a subset, so the generator advances the same way for every pattern.
fn synthesize(rng: &mut SeededRandom, keywords: &[String]) -> Draw {
    let keyword = rng.choice(keywords).clone();
    let prefix = *rng.choice(PREFIXES);
    let suffix = *rng.choice(SUFFIXES);
    let middle = *rng.choice(MIDDLES);
    let compound = *rng.choice(COMPOUNDS);

    let pattern = rng.next_int(0, 9);
    let (name, category) = match pattern {
        // Two-word combinations
        0 => (format!("{keyword}{suffix}"), Category::Catchy),
        1 => (format!("{prefix}{keyword}"), Category::Tech),
        2 => (format!("{keyword}{compound}"), Category::Professional),
        3 => (
            format!("{compound}{}", keyword.to_lowercase()),
            Category::Creative,
        ),
        4 => (format!("{prefix}{suffix}"), Category::Catchy),
        // Three-word combinations
        5 => (format!("{prefix}{middle}{suffix}"), Category::Innovative),
        6 => (
            format!("{keyword}{middle}{suffix}"),
            Category::Sophisticated,
        ),
        7 => (
            format!(
                "{prefix}{}{}",
                middle.to_lowercase(),
                keyword.to_lowercase()
            ),
            Category::Modern,
        ),
        8 => (format!("{middle}{compound}{suffix}"), Category::Premium),
        _ => (
            format!("{prefix}{}{suffix}", compound.to_lowercase()),
            Category::Advanced,
        ),
    };

    Draw {
        name,
        category,
        three_word: pattern > 4,
    }
}

/// Generate a single name suggestion for a description and seed.
///
/// Same inputs, same `name`/`category`/`relevance_score`, always.
pub fn generate(description: &str, seed: i64) -> NameRecord {
    let mut rng = SeededRandom::new(seed);
    let keywords = extract_keywords(description, &mut rng);
    let draw = synthesize(&mut rng, &keywords);

    // Three-word constructions score from a higher floor.
    let floor = if draw.three_word { 88 } else { 85 };
    let relevance_score = rng.next_int(floor, 99) as u8;

    NameRecord {
        id: seed,
        name: draw.name,
        category: draw.category,
        relevance_score,
        generated_at: Utc::now(),
        seed,
    }
}

/// Generate an ordered batch of `count` suggestions from one seed.
///
/// A single generator is constructed once and drawn from sequentially, so the
/// whole batch is one deterministic sequence. A slot whose name collides with
/// an earlier slot is redrawn. Batch scoring uses a flat 70..=99 range.
pub fn generate_batch(description: &str, seed: i64, count: u32) -> Vec<NameRecord> {
    let mut rng = SeededRandom::new(seed);
    let keywords = extract_keywords(description, &mut rng);
    let generated_at = Utc::now();

    let mut records: Vec<NameRecord> = Vec::with_capacity(count as usize);
    for slot in 0..i64::from(count) {
        let mut draw = synthesize(&mut rng, &keywords);
        let mut relevance_score = rng.next_int(70, 99) as u8;

        let mut attempts = 0;
        while records.iter().any(|r| r.name == draw.name) && attempts < MAX_REDRAWS {
            draw = synthesize(&mut rng, &keywords);
            relevance_score = rng.next_int(70, 99) as u8;
            attempts += 1;
        }

        records.push(NameRecord {
            id: seed.wrapping_add(slot),
            name: draw.name,
            category: draw.category,
            relevance_score,
            generated_at,
            seed,
        });
    }

    records
}
