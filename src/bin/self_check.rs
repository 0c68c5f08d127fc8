//! Run the reference price comparisons and print PASS/FAIL for each
//! Usage: cargo run --bin self_check

use std::process::ExitCode;

use unit_price::tools::self_check::run_self_check;

fn main() -> ExitCode {
    println!("Running tests...\n");
    let report = run_self_check();

    for (index, scenario) in report.scenarios.iter().enumerate() {
        println!("Test {}: {}", index + 1, scenario.name);
        if let (Some(a), Some(b)) = (scenario.first_price_per_unit, scenario.second_price_per_unit) {
            println!("  Item 1 price per unit: {:.6}", a);
            println!("  Item 2 price per unit: {:.6}", b);
        }
        if let Some(error) = &scenario.error {
            println!("  Error: {}", error);
        }
        println!("  Result: {}\n", if scenario.passed { "PASS" } else { "FAIL" });
    }

    println!("{}", report.summary());

    if report.all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
