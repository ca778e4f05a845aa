//! Randomised single-error trials.
//!
//! Each trial encodes a random word, flips one random bit, decodes and
//! records whether the word came back. Trials are independent and seeded
//! individually, so a parallel run reports exactly what a serial run does.

use crate::ecc::channel::inject_random_error;
use crate::ecc::gf2::Gf2Vector;
use crate::ecc::hamming::HammingCode;
use crate::ecc::Result;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Configuration for a batch of trials.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    /// Number of encode/corrupt/decode rounds
    pub trials: usize,
    /// Base seed; trial `i` uses `seed + i`
    pub seed: u64,
    /// Spread trials over the rayon thread pool
    pub parallel: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: 0x5eed,
            parallel: cfg!(feature = "parallel"),
        }
    }
}

/// Tally of a batch of trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialReport {
    pub trials: usize,
    /// Decoded word equal to the sent word
    pub recovered: usize,
    /// Syndrome equal to the flipped position
    pub syndrome_matches: usize,
    /// Flips that landed on a parity position
    pub parity_hits: usize,
    /// Flips that landed on a data position
    pub data_hits: usize,
}

impl TrialReport {
    pub fn all_recovered(&self) -> bool {
        self.recovered == self.trials && self.syndrome_matches == self.trials
    }

    fn record(mut self, outcome: TrialOutcome) -> Self {
        self.trials += 1;
        self.recovered += usize::from(outcome.recovered);
        self.syndrome_matches += usize::from(outcome.syndrome_matched);
        if outcome.parity_hit {
            self.parity_hits += 1;
        } else {
            self.data_hits += 1;
        }
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct TrialOutcome {
    recovered: bool,
    syndrome_matched: bool,
    parity_hit: bool,
}

fn run_trial(code: &HammingCode, seed: u64, trial: usize) -> Result<TrialOutcome> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(trial as u64));
    let word = Gf2Vector::random(code.data_bits(), &mut rng);
    let codeword = code.encode(&word)?;
    let (received, position) = inject_random_error(&codeword, &mut rng)?;
    let decoded = code.decode(&received)?;

    Ok(TrialOutcome {
        recovered: decoded.word == word,
        syndrome_matched: decoded.syndrome == position,
        parity_hit: code.is_parity_position(position),
    })
}

/// Runs `config.trials` single-error trials against `code`
pub fn run_trials(code: &HammingCode, config: &TrialConfig) -> Result<TrialReport> {
    let outcomes: Vec<TrialOutcome> = if config.parallel {
        (0..config.trials)
            .into_par_iter()
            .map(|trial| run_trial(code, config.seed, trial))
            .collect::<Result<_>>()?
    } else {
        (0..config.trials)
            .map(|trial| run_trial(code, config.seed, trial))
            .collect::<Result<_>>()?
    };

    let report = outcomes
        .into_iter()
        .fold(TrialReport::default(), TrialReport::record);
    debug!(
        "Hamming({}, {}): {}/{} trials recovered",
        code.total_bits(),
        code.data_bits(),
        report.recovered,
        report.trials
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_trials_recover() {
        for m in 2..=5 {
            let code = HammingCode::new(m).unwrap();
            let config = TrialConfig {
                trials: 500,
                seed: m as u64,
                parallel: false,
            };
            let report = run_trials(&code, &config).unwrap();
            assert_eq!(report.trials, 500);
            assert!(report.all_recovered(), "m = {}: {:?}", m, report);
            assert_eq!(report.parity_hits + report.data_hits, 500);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let code = HammingCode::new(4).unwrap();
        let serial = TrialConfig {
            trials: 256,
            seed: 99,
            parallel: false,
        };
        let parallel = TrialConfig {
            parallel: true,
            ..serial.clone()
        };
        assert_eq!(
            run_trials(&code, &serial).unwrap(),
            run_trials(&code, &parallel).unwrap()
        );
    }

    #[test]
    fn test_zero_trials() {
        let code = HammingCode::standard_7_4();
        let config = TrialConfig {
            trials: 0,
            ..TrialConfig::default()
        };
        let report = run_trials(&code, &config).unwrap();
        assert_eq!(report, TrialReport::default());
        assert!(report.all_recovered());
    }
}
