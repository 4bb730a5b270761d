// src/reduction/survey.rs

use log::info;
use rayon::prelude::*;
use serde::Serialize;
use crate::integer_math::quadratic_residue::QuadraticResidue;
use crate::reduction::engine::ReductionEngine;

/// Totals from reducing every `(top|p)` with p an odd prime of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyReport {
    pub pairs_checked: usize,
    pub max_generations: usize,
    /// Pairs whose answer disagrees with Euler's criterion.
    pub mismatches: Vec<(i64, i64)>,
    /// Pairs that hit the generation limit.
    pub failures: Vec<(i64, i64)>,
}

enum Outcome {
    Agrees(usize),
    Disagrees(usize),
    Failed,
}

pub fn survey(engine: &ReductionEngine) -> SurveyReport {
    let pairs: Vec<(i64, i64)> = engine
        .primes()
        .primes()
        .iter()
        .filter(|&&p| p > 2)
        .flat_map(|&p| (1..p).map(move |top| (top, p)))
        .collect();

    info!("{}", format!("Surveying {} pairs on {} rayon threads", pairs.len(), rayon::current_num_threads()));

    let outcomes: Vec<((i64, i64), Outcome)> = pairs
        .par_iter()
        .map(|&(top, p)| {
            let outcome = match engine.reduce(top, p) {
                Ok(evaluation) if evaluation.is_residue == QuadraticResidue::is_quadratic_residue(top, p) => {
                    Outcome::Agrees(evaluation.generations)
                }
                Ok(evaluation) => Outcome::Disagrees(evaluation.generations),
                Err(_) => Outcome::Failed,
            };
            ((top, p), outcome)
        })
        .collect();

    let mut report = SurveyReport { pairs_checked: outcomes.len(), ..SurveyReport::default() };
    for (pair, outcome) in outcomes {
        match outcome {
            Outcome::Agrees(generations) => {
                report.max_generations = report.max_generations.max(generations);
            }
            Outcome::Disagrees(generations) => {
                report.max_generations = report.max_generations.max(generations);
                report.mismatches.push(pair);
            }
            Outcome::Failed => report.failures.push(pair),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer_math::prime_table::PrimeTable;

    #[test]
    fn test_survey_small_table() {
        let table = PrimeTable::below(50);
        let engine = ReductionEngine::new(&table);
        let report = survey(&engine);
        // sum of (p - 1) over odd primes below 50
        let expected: i64 = table.primes().iter().filter(|&&p| p > 2).map(|p| p - 1).sum();
        assert_eq!(report.pairs_checked as i64, expected);
        assert!(report.mismatches.is_empty());
        assert!(report.failures.is_empty());
        assert!(report.max_generations >= 1);
    }

    #[test]
    fn test_survey_reports_failures() {
        let table = PrimeTable::below(20);
        let engine = ReductionEngine::with_limit(&table, 1);
        let report = survey(&engine);
        // (3|5) needs three generations
        assert!(report.failures.contains(&(3, 5)));
    }
}
