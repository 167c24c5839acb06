//! Mendelian crossover and per-trait mutation.
//!
//! Offspring genes are drawn trait by trait in [`GeneKind::ALL`] order. For
//! each trait one probability draw decides between a freshly sampled
//! dominant gene and the crossover of both parents' genes.

use gridlife_data::{Gene, GeneKind, Genome};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Resolution of [`outcome_with_probability`]; probabilities are rounded to
/// the nearest thousandth.
pub const PROBABILITY_RESOLUTION: u32 = 1000;

const SPEED_RANGE: std::ops::RangeInclusive<u32> = 1..=10;
const SENSING_RADIUS_MEAN: f64 = 8.0;
const SENSING_RADIUS_SD: f64 = 1.2;
const TICKS_WITHOUT_FOOD_MEAN: f64 = 50.0;
const TICKS_WITHOUT_FOOD_SD: f64 = 1.5;
const HIGHEST_AGE_MEAN: f64 = 5000.0;
const HIGHEST_AGE_SD: f64 = 2.5;
const EXCESS_FAT_MEAN: f64 = 0.0;
const EXCESS_FAT_SD: f64 = 0.8;

/// Combines two parental genes.
///
/// Equal dominance flags keep the flag and pick either value with equal
/// odds. Differing flags copy the dominant gene outright.
pub fn merge_genes<R: Rng>(a: Gene, b: Gene, rng: &mut R) -> Gene {
    if a.is_dominant == b.is_dominant {
        let value = if rng.gen_bool(0.5) { a.value } else { b.value };
        Gene::new(value, a.is_dominant)
    } else if a.is_dominant {
        a
    } else {
        b
    }
}

/// Bernoulli draw at thousandth resolution.
///
/// `p <= 0` never succeeds and `p >= 1` always does.
pub fn outcome_with_probability<R: Rng>(probability: f64, rng: &mut R) -> bool {
    let threshold = (probability * f64::from(PROBABILITY_RESOLUTION)).round();
    f64::from(rng.gen_range(0..PROBABILITY_RESOLUTION)) < threshold
}

/// Normal draw mapped onto a positive integer trait value.
///
/// Negative draws become 1. Everything else is rounded up and then held at
/// `cap`, so a fractional cap is never exceeded by the rounding.
pub fn sample_normal_clamped<R: Rng>(cap: Option<f64>, mean: f64, sd: f64, rng: &mut R) -> f64 {
    let drawn = match Normal::new(mean, sd) {
        Ok(normal) => normal.sample(rng),
        Err(_) => mean,
    };
    if drawn < 0.0 {
        return 1.0;
    }
    let value = drawn.ceil();
    cap.map_or(value, |cap| value.min(cap))
}

/// Uniform value in `[0, 1]` kept to four decimals.
pub fn sample_probability<R: Rng>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() * 10_000.0).round() / 10_000.0
}

/// Upper bound for a mutated sensing radius on a `width x height` grid.
///
/// Half the shorter side, but never below 1 so single-cell-wide grids keep
/// a usable radius.
#[must_use]
pub fn sensing_radius_cap(width: i32, height: i32) -> f64 {
    (f64::from(width.min(height)) / 2.0).max(1.0)
}

/// Freshly sampled value for `kind`, without a dominance flag.
pub fn sample_trait_value<R: Rng>(kind: GeneKind, width: i32, height: i32, rng: &mut R) -> f64 {
    match kind {
        GeneKind::Speed => f64::from(rng.gen_range(SPEED_RANGE)),
        GeneKind::SensingRadius => sample_normal_clamped(
            Some(sensing_radius_cap(width, height)),
            SENSING_RADIUS_MEAN,
            SENSING_RADIUS_SD,
            rng,
        ),
        GeneKind::ChanceForMatingIncentive | GeneKind::ChanceOfMutationPerAttribute => {
            sample_probability(rng)
        }
        GeneKind::TicksAliveWithoutFood => {
            sample_normal_clamped(None, TICKS_WITHOUT_FOOD_MEAN, TICKS_WITHOUT_FOOD_SD, rng)
        }
        GeneKind::PotentialHighestAge => {
            sample_normal_clamped(None, HIGHEST_AGE_MEAN, HIGHEST_AGE_SD, rng)
        }
        GeneKind::MaxExcessFat => {
            sample_normal_clamped(None, EXCESS_FAT_MEAN, EXCESS_FAT_SD, rng)
        }
    }
}

/// A mutated gene: always dominant.
pub fn sample_mutation<R: Rng>(kind: GeneKind, width: i32, height: i32, rng: &mut R) -> Gene {
    Gene::dominant(sample_trait_value(kind, width, height, rng))
}

/// Average of both parents' per-attribute mutation chance.
#[must_use]
pub fn combined_mutation_chance(a: &Genome, b: &Genome) -> f64 {
    (a.chance_of_mutation_per_attribute.value + b.chance_of_mutation_per_attribute.value) / 2.0
}

/// Builds an offspring genome from two parents.
pub fn inherit_genome<R: Rng>(
    a: &Genome,
    b: &Genome,
    width: i32,
    height: i32,
    rng: &mut R,
) -> Genome {
    let chance = combined_mutation_chance(a, b);
    let mut child = *a;
    for kind in GeneKind::ALL {
        let gene = if outcome_with_probability(chance, rng) {
            let mutated = sample_mutation(kind, width, height, rng);
            tracing::trace!(trait_name = kind.name(), value = mutated.value, "Gene mutated");
            mutated
        } else {
            merge_genes(a.gene(kind), b.gene(kind), rng)
        };
        child.set_gene(kind, gene);
    }
    child
}

/// Genome for an agent with no parents: every trait sampled, dominance by
/// coin flip.
pub fn random_genome<R: Rng>(width: i32, height: i32, rng: &mut R) -> Genome {
    let mut genome = Genome::default();
    for kind in GeneKind::ALL {
        let value = sample_trait_value(kind, width, height, rng);
        genome.set_gene(kind, Gene::new(value, rng.gen_bool(0.5)));
    }
    genome
}
