use serde::{Deserialize, Serialize};
use std::fmt;

/// One heritable trait value with its Mendelian dominance flag.
///
/// `value` holds either a count (speed, radius, ticks, age, fat) or a
/// probability in `[0, 1]`, depending on the trait it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub value: f64,
    pub is_dominant: bool,
}

impl Gene {
    #[must_use]
    pub const fn new(value: f64, is_dominant: bool) -> Self {
        Self { value, is_dominant }
    }

    #[must_use]
    pub const fn dominant(value: f64) -> Self {
        Self::new(value, true)
    }

    #[must_use]
    pub const fn recessive(value: f64) -> Self {
        Self::new(value, false)
    }
}

/// The seven heritable traits, in the order offspring genes are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneKind {
    Speed,
    SensingRadius,
    ChanceForMatingIncentive,
    TicksAliveWithoutFood,
    PotentialHighestAge,
    ChanceOfMutationPerAttribute,
    MaxExcessFat,
}

impl GeneKind {
    pub const ALL: [GeneKind; 7] = [
        GeneKind::Speed,
        GeneKind::SensingRadius,
        GeneKind::ChanceForMatingIncentive,
        GeneKind::TicksAliveWithoutFood,
        GeneKind::PotentialHighestAge,
        GeneKind::ChanceOfMutationPerAttribute,
        GeneKind::MaxExcessFat,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GeneKind::Speed => "speed",
            GeneKind::SensingRadius => "sensing_radius",
            GeneKind::ChanceForMatingIncentive => "chance_for_mating_incentive",
            GeneKind::TicksAliveWithoutFood => "ticks_alive_without_food",
            GeneKind::PotentialHighestAge => "potential_highest_age",
            GeneKind::ChanceOfMutationPerAttribute => "chance_of_mutation_per_attribute",
            GeneKind::MaxExcessFat => "max_excess_fat",
        }
    }
}

impl fmt::Display for GeneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full set of heritable traits carried by an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    /// Action rounds per tick.
    pub speed: Gene,
    /// Exclusive half-width of the perception square.
    pub sensing_radius: Gene,
    /// Willingness to mate, also used as the partner's acceptance odds.
    pub chance_for_mating_incentive: Gene,
    /// Starvation tolerance in ticks.
    pub ticks_alive_without_food: Gene,
    pub potential_highest_age: Gene,
    pub chance_of_mutation_per_attribute: Gene,
    /// Measured in ticks that stored nutrition covers.
    pub max_excess_fat: Gene,
}

impl Genome {
    #[must_use]
    pub fn gene(&self, kind: GeneKind) -> Gene {
        match kind {
            GeneKind::Speed => self.speed,
            GeneKind::SensingRadius => self.sensing_radius,
            GeneKind::ChanceForMatingIncentive => self.chance_for_mating_incentive,
            GeneKind::TicksAliveWithoutFood => self.ticks_alive_without_food,
            GeneKind::PotentialHighestAge => self.potential_highest_age,
            GeneKind::ChanceOfMutationPerAttribute => self.chance_of_mutation_per_attribute,
            GeneKind::MaxExcessFat => self.max_excess_fat,
        }
    }

    pub fn set_gene(&mut self, kind: GeneKind, gene: Gene) {
        let slot = match kind {
            GeneKind::Speed => &mut self.speed,
            GeneKind::SensingRadius => &mut self.sensing_radius,
            GeneKind::ChanceForMatingIncentive => &mut self.chance_for_mating_incentive,
            GeneKind::TicksAliveWithoutFood => &mut self.ticks_alive_without_food,
            GeneKind::PotentialHighestAge => &mut self.potential_highest_age,
            GeneKind::ChanceOfMutationPerAttribute => &mut self.chance_of_mutation_per_attribute,
            GeneKind::MaxExcessFat => &mut self.max_excess_fat,
        };
        *slot = gene;
    }

    /// Builder-style variant of [`Genome::set_gene`].
    #[must_use]
    pub fn with_gene(mut self, kind: GeneKind, gene: Gene) -> Self {
        self.set_gene(kind, gene);
        self
    }
}

impl Default for Genome {
    fn default() -> Self {
        Self {
            speed: Gene::recessive(1.0),
            sensing_radius: Gene::recessive(8.0),
            chance_for_mating_incentive: Gene::recessive(0.5),
            ticks_alive_without_food: Gene::recessive(50.0),
            potential_highest_age: Gene::recessive(5000.0),
            chance_of_mutation_per_attribute: Gene::recessive(0.05),
            max_excess_fat: Gene::recessive(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_gene_touches_only_its_slot() {
        let base = Genome::default();
        let edited = base.with_gene(GeneKind::MaxExcessFat, Gene::dominant(4.0));
        for kind in GeneKind::ALL {
            if kind == GeneKind::MaxExcessFat {
                assert_eq!(edited.gene(kind), Gene::dominant(4.0));
            } else {
                assert_eq!(edited.gene(kind), base.gene(kind), "{kind} changed");
            }
        }
    }
}
