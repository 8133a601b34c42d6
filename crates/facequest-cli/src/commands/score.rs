use anyhow::Result;
use clap::Args;
use console::Style;
use facequest_core::consts::DEFAULT_PASS_THRESHOLD;
use facequest_core::exercise::scoring::evaluate;
use facequest_core::geometry::Point;

#[derive(Args)]
pub struct ScoreArgs {
    /// Horizontal displacement from the target, in viewport units
    #[arg(long)]
    pub dx: f32,

    /// Vertical displacement from the target, in viewport units
    #[arg(long)]
    pub dy: f32,

    /// Per-axis pass threshold
    #[arg(long, default_value_t = DEFAULT_PASS_THRESHOLD)]
    pub threshold: f32,
}

/// Author aid for tuning exercise thresholds: prints the score and verdict a
/// release at the given displacement would produce.
pub fn run(args: &ScoreArgs) -> Result<()> {
    let target = Point::new(0.0, 0.0);
    let overlay = Point::new(args.dx.abs(), args.dy.abs());
    let verdict = evaluate(overlay, target, args.threshold);

    let style = if verdict.matched {
        Style::new().green().bold()
    } else {
        Style::new().red().bold()
    };

    println!("Displacement: dx={}, dy={}", args.dx.abs(), args.dy.abs());
    println!("Score:        {}", verdict.score);
    println!(
        "Verdict:      {}",
        style.apply_to(if verdict.matched { "matched" } else { "unmatched" })
    );
    Ok(())
}
