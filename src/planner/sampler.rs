use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::planner::constants::{DEFAULT_BETA_RANGE, DEFAULT_NUM_READS, DEFAULT_NUM_SWEEPS};
use crate::planner::model::BinaryQuadraticModel;

/// One assignment returned by a sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub state: Vec<bool>,
    pub energy: f64,
}

/// Samples ordered by ascending energy.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Order samples by energy. The sort is stable, so equal energies keep
    /// their input order.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        samples.sort_by(|a, b| a.energy.total_cmp(&b.energy));
        Self { samples }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Lowest-energy sample.
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }
}

/// Search strategy that turns a quadratic model into candidate assignments.
///
/// Decoding only relies on the assignment and its energy, so any strategy
/// can stand in here.
pub trait Sampler {
    fn name(&self) -> &str;

    fn sample(&self, bqm: &BinaryQuadraticModel) -> SampleSet;
}

/// Annealing run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Independent restarts.
    pub num_reads: usize,
    /// Full passes over all variables per read.
    pub num_sweeps: usize,
    /// Inverse temperature at the first and last sweep.
    pub beta_range: (f64, f64),
    /// Base seed; read `k` uses `seed + k`. `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            num_reads: DEFAULT_NUM_READS,
            num_sweeps: DEFAULT_NUM_SWEEPS,
            beta_range: DEFAULT_BETA_RANGE,
            seed: None,
        }
    }
}

/// Inverse temperature for each sweep, interpolated geometrically.
pub fn beta_schedule(num_sweeps: usize, (beta_start, beta_end): (f64, f64)) -> Vec<f64> {
    match num_sweeps {
        0 => Vec::new(),
        1 => vec![beta_end],
        n => {
            let ratio = beta_end / beta_start;
            (0..n)
                .map(|k| beta_start * ratio.powf(k as f64 / (n - 1) as f64))
                .collect()
        }
    }
}

/// Single-flip simulated annealing with parallel independent reads.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealingSampler {
    pub config: SamplerConfig,
}

impl SimulatedAnnealingSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    fn rng_for_read(&self, read: usize) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(read as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sampler for SimulatedAnnealingSampler {
    fn name(&self) -> &str {
        "Simulated Annealing"
    }

    fn sample(&self, bqm: &BinaryQuadraticModel) -> SampleSet {
        let adjacency = bqm.adjacency();
        let betas = beta_schedule(self.config.num_sweeps, self.config.beta_range);

        let samples: Vec<Sample> = (0..self.config.num_reads)
            .into_par_iter()
            .map(|read| {
                let mut rng = self.rng_for_read(read);
                anneal(bqm, &adjacency, &betas, &mut rng)
            })
            .collect();

        let set = SampleSet::from_samples(samples);
        debug!(
            sampler = self.name(),
            reads = set.len(),
            best_energy = set.first().map(|s| s.energy),
            "sampling finished"
        );
        set
    }
}

/// One read: random start, then one Metropolis sweep per beta.
fn anneal(
    bqm: &BinaryQuadraticModel,
    adjacency: &[Vec<(usize, f64)>],
    betas: &[f64],
    rng: &mut impl Rng,
) -> Sample {
    let n = bqm.num_variables();
    let mut state: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.5)).collect();

    // field[i] = h_i + Σ_j J_ij x_j, so flipping i changes energy by ±field[i].
    let mut field: Vec<f64> = bqm.linear_biases().to_vec();
    for (i, neighbors) in adjacency.iter().enumerate() {
        if state[i] {
            for &(j, bias) in neighbors {
                field[j] += bias;
            }
        }
    }

    for &beta in betas {
        for i in 0..n {
            let delta = if state[i] { -field[i] } else { field[i] };
            let accept = delta <= 0.0 || rng.gen_range(0.0..1.0) < (-beta * delta).exp();
            if accept {
                state[i] = !state[i];
                let sign = if state[i] { 1.0 } else { -1.0 };
                for &(j, bias) in &adjacency[i] {
                    field[j] += sign * bias;
                }
            }
        }
    }

    let energy = bqm.energy(&state);
    Sample { state, energy }
}
