//! Sampling variability and unbiasedness of the proportion estimator

use sampling_confidence::ConfidenceLevel;
use sampling_core::Population;
use sampling_proportion::monte_carlo;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Sampling Variability ===\n");

    // 250 x 250 map with 1% of pixels changed
    let population = Population::with_proportion(62_500, 0.01)?;
    println!(
        "Population: N = {}, true proportion = {:.4}\n",
        population.len(),
        population.true_proportion()
    );

    let summaries = monte_carlo(2)
        .with_repetitions(2_000)
        .with_seed(42)
        .sweep(&population, &[100, 500, 1_000, 5_000, 20_000])?;

    println!(
        "{:>8} {:>12} {:>12} {:>12} {:>10}",
        "n", "mean p̂", "SD(p̂)", "mean SE", "coverage"
    );
    for summary in &summaries {
        println!(
            "{:>8} {:>12.5} {:>12.5} {:>12.5} {:>10.3}",
            summary.sample_size,
            summary.mean_estimate,
            summary.empirical_std_dev,
            summary.mean_standard_error,
            summary.coverage(ConfidenceLevel::NINETY_FIVE)?
        );
    }

    println!("\nThe mean estimate stays at the true proportion while both the");
    println!("empirical spread and the reported standard error shrink with n.");
    Ok(())
}
