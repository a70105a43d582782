use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::Deserialize;

use crate::{Error, Question, Tier};

/// The set a question is drawn from: a single tier, or the blend of the full
/// easy tier with a fixed-size sample of the hard tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pool {
    Easy,
    Hard,
    Blended,
}

/// Serves questions to the turn engine. Implementations must be able to
/// satisfy every pool on every call; `Catalog` enforces that at
/// construction so a game can never stall mid-turn.
pub trait QuestionSource {
    fn draw(&self, pool: Pool, rng: &mut dyn RngCore) -> Question;
}

/// A pre-validated, immutable two-tier question catalog.
///
/// `from_path` loads a JSON document of the shape
/// `{"easy": [{"prompt": "...", "answer": "..."}], "hard": [...]}`.
#[derive(Clone, Debug)]
pub struct Catalog {
    easy: Vec<Question>,
    hard: Vec<Question>,
    hard_sample_size: usize,
}

impl Catalog {
    pub fn new(
        easy: Vec<Question>,
        hard: Vec<Question>,
        hard_sample_size: usize,
    ) -> Result<Self, Error> {
        if easy.is_empty() {
            return Err(Error::InsufficientQuestions {
                tier: Tier::Easy,
                have: 0,
                need: 1,
            });
        }

        let need = hard_sample_size.max(1);
        if hard.len() < need {
            return Err(Error::InsufficientQuestions {
                tier: Tier::Hard,
                have: hard.len(),
                need,
            });
        }

        Ok(Self {
            easy,
            hard,
            hard_sample_size,
        })
    }

    pub fn builtin(hard_sample_size: usize) -> Result<Self, Error> {
        Self::new(
            questions(BUILTIN_EASY, Tier::Easy),
            questions(BUILTIN_HARD, Tier::Hard),
            hard_sample_size,
        )
    }

    pub fn from_path(path: impl AsRef<Path>, hard_sample_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read the question catalog at {:?}", path))?;

        Self::from_json(&raw, hard_sample_size)
    }

    pub fn from_json(raw: &str, hard_sample_size: usize) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(raw).context("The question catalog is not valid JSON")?;

        let build = |entries: Vec<CatalogEntry>, tier| {
            entries
                .into_iter()
                .map(|entry| Question::new(entry.prompt, entry.answer, tier))
                .collect()
        };

        Ok(Self::new(
            build(file.easy, Tier::Easy),
            build(file.hard, Tier::Hard),
            hard_sample_size,
        )?)
    }

    pub fn tier_len(&self, tier: Tier) -> usize {
        match tier {
            Tier::Easy => self.easy.len(),
            Tier::Hard => self.hard.len(),
        }
    }

    fn blended(&self, rng: &mut dyn RngCore) -> Vec<&Question> {
        let mut pool: Vec<&Question> = self.easy.iter().collect();
        pool.extend(self.hard.choose_multiple(rng, self.hard_sample_size));
        pool
    }
}

impl QuestionSource for Catalog {
    fn draw(&self, pool: Pool, rng: &mut dyn RngCore) -> Question {
        match pool {
            Pool::Easy => self.easy.choose(rng).cloned(),
            Pool::Hard => self.hard.choose(rng).cloned(),
            Pool::Blended => {
                let pool = self.blended(rng);
                pool.choose(rng).map(|question| (*question).clone())
            }
        }
        .expect("catalog tiers are validated nonempty")
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    easy: Vec<CatalogEntry>,
    hard: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    prompt: String,
    answer: String,
}

fn questions(entries: &[(&str, &str)], tier: Tier) -> Vec<Question> {
    entries
        .iter()
        .map(|&(prompt, answer)| Question::new(prompt, answer, tier))
        .collect()
}

const BUILTIN_EASY: &[(&str, &str)] = &[
    ("What has hands but can't clap?", "clock"),
    ("What has to be broken before you can use it?", "egg"),
    (
        "What has a face and two hands but no arms or legs?",
        "clock",
    ),
    ("What has one eye but can't see?", "needle"),
    ("What can you catch but not throw?", "cold"),
    (
        "I'm tall when I'm young, and I'm short when I'm old. What am I?",
        "candle",
    ),
    ("What has a neck but no head?", "bottle"),
    (
        "The more you take, the more you leave behind. What am I?",
        "footsteps",
    ),
    ("What has many keys but can't open a single lock?", "piano"),
    ("What gets wetter the more it dries?", "towel"),
];

const BUILTIN_HARD: &[(&str, &str)] = &[
    (
        "an instrument for measuring atmospheric pressure",
        "barometer",
    ),
    (
        "a building where objects of historical, scientific, or artistic interest are kept",
        "museum",
    ),
    (
        "the branch of biology that studies heredity and variation in organisms",
        "genetics",
    ),
    ("a natural satellite that orbits a planet", "moon"),
    (
        "a person who makes and repairs wooden structures",
        "carpenter",
    ),
    (
        "molten rock that reaches the surface of the earth through a volcano",
        "lava",
    ),
    (
        "an optical instrument that makes distant objects appear nearer and larger",
        "telescope",
    ),
    (
        "a state of deep unconsciousness from which a person cannot be roused",
        "coma",
    ),
    (
        "the science of the composition and properties of substances",
        "chemistry",
    ),
    ("a journey to a sacred place", "pilgrimage"),
    ("an animal that feeds chiefly on plants", "herbivore"),
    ("a period of ten years", "decade"),
    ("the art of beautiful handwriting", "calligraphy"),
    (
        "a severe snowstorm with high winds and low visibility",
        "blizzard",
    ),
];
