//! Compares two desk setups: two flat 24" 16:9 monitors against one curved
//! 34" 21:9 ultrawide, both viewed from 60 cm.
//!
//! ```text
//! cargo run --example compare
//! RUST_LOG=monitor_layout=debug cargo run --example compare
//! ```

use monitor_layout::config::monitor_from_controls;
use monitor_layout::sampling::DEFAULT_TOTAL_SEGMENTS;
use monitor_layout::{
    AlignmentMode, Length, LayoutError, SamplingParams, Setup, SetupComparison, SetupSummary,
};

fn main() -> Result<(), LayoutError> {
    // Default: WARN for everything, INFO for the engine.
    // Override with RUST_LOG env var (e.g. RUST_LOG=monitor_layout=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("monitor_layout=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let flat = monitor_from_controls(24.0, 16.0, 9.0, None)?;
    let ultrawide = monitor_from_controls(34.0, 21.0, 9.0, Some(1500.0))?;

    let setup_1 = Setup::new(&[flat, flat], Length::cm(60.0), AlignmentMode::Perpendicular)?;
    let setup_2 = Setup::new(&[ultrawide], Length::cm(60.0), AlignmentMode::Perpendicular)?;

    let comparison = SetupComparison::new(
        &[&setup_1, &setup_2],
        DEFAULT_TOTAL_SEGMENTS,
        SamplingParams::default(),
    )?;

    let (low, high) = comparison.angle_range;
    println!("viewing angle range: {low:.1}° .. {high:.1}°");
    println!();
    print_table(&comparison.summaries);
    Ok(())
}

fn print_table(summaries: &[SetupSummary]) {
    print!("{:27} |", "");
    for i in 1..=summaries.len() {
        print!(" {:>10}", format!("Setup {i}"));
    }
    println!();
    println!("{}+{}", "-".repeat(28), "-".repeat(11 * summaries.len()));

    let rows: [(&str, fn(&SetupSummary) -> f64); 3] = [
        ("Total screen width (cm)", |s| s.screen_width),
        ("Largest screen height (cm)", |s| s.max_height),
        ("Total screen area (cm^2)", |s| s.display_area),
    ];
    for (label, value) in rows {
        print!("{label:27} |");
        for summary in summaries {
            print!(" {:>10.2}", value(summary));
        }
        println!();
    }
}
