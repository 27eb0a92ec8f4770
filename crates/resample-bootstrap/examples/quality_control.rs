//! Bootstrap a defect proportion from a quality-control sample

use resample_bootstrap::bootstrap_proportion;
use resample_statistics::StatisticDetail;

fn main() {
    // 40 inspected products, 1 = defective.
    let inspections = vec![
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ];

    let result = bootstrap_proportion(&inspections, 1000).expect("valid sample");

    if let StatisticDetail::Proportion { successes, trials } = result.detail {
        println!("defective: {successes}/{trials}");
    }
    println!(
        "proportion: {:.3} ({:.1}%)",
        result.original_statistic,
        result.original_statistic * 100.0
    );
    println!("bootstrap:  {:.3}", result.bootstrap_mean);
    println!("std error:  {:.3}", result.standard_error);
    println!("{}", result.ci_95);
}
