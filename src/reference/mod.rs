//! Reference sequence sources.
//!
//! The simulator takes any [`ReferenceSequence`]; this module supplies two
//! ways to get one:
//! - [`SequenceGenerator`] - uniform random pages, optionally seeded
//! - [`parse_sequence`] - a user-written list such as `"1, 2 3,4"`

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::config::{DEFAULT_MAX_PAGE, DEFAULT_SEQUENCE_LEN};
use crate::common::{PageId, Result};
use crate::sim::ReferenceSequence;

/// Settings for random sequence generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of references to generate.
    pub length: usize,

    /// Largest page id (inclusive); pages are drawn from `0..=max_page`.
    pub max_page: u64,

    /// Seed for reproducible sequences; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SEQUENCE_LEN,
            max_page: DEFAULT_MAX_PAGE,
            seed: None,
        }
    }
}

/// Produces uniformly random reference sequences.
///
/// # Example
/// ```
/// use pagesim::reference::{GeneratorConfig, SequenceGenerator};
///
/// let config = GeneratorConfig { seed: Some(7), ..Default::default() };
/// let a = SequenceGenerator::new(&config).generate().unwrap();
/// let b = SequenceGenerator::new(&config).generate().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 20);
/// ```
#[derive(Debug)]
pub struct SequenceGenerator {
    rng: StdRng,
    pages: Uniform<u64>,
    length: usize,
}

impl SequenceGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            pages: Uniform::new_inclusive(0, config.max_page),
            length: config.length,
        }
    }

    /// Draw the next sequence.
    ///
    /// # Errors
    /// - `Error::EmptySequence` if the configured length is 0
    pub fn generate(&mut self) -> Result<ReferenceSequence> {
        let pages = (0..self.length)
            .map(|_| PageId::new(self.pages.sample(&mut self.rng)))
            .collect();
        ReferenceSequence::new(pages)
    }
}

/// Generate one sequence from `config`.
pub fn generate(config: &GeneratorConfig) -> Result<ReferenceSequence> {
    SequenceGenerator::new(config).generate()
}

/// Parse page ids separated by commas and/or whitespace.
///
/// # Errors
/// - `Error::InvalidPage` for a token that is not a non-negative integer
/// - `Error::EmptySequence` if there are no tokens
pub fn parse_sequence(input: &str) -> Result<ReferenceSequence> {
    let pages = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<PageId>)
        .collect::<Result<Vec<_>>>()?;
    ReferenceSequence::new(pages)
}
