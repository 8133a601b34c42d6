use console::Style;
use facequest_core::course::config::{CourseConfig, StepConfig};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    kind: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            kind: Style::new().green(),
            dim: Style::new().dim(),
        }
    }
}

pub fn print_course_summary(course: &CourseConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(&course.title));
    if !course.description.is_empty() {
        println!("  {}", s.dim.apply_to(&course.description));
    }
    println!();

    for (i, step) in course.steps.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            s.kind.apply_to(format!("[{}]", step.kind_name())),
            s.value.apply_to(step.title())
        );

        match step {
            StepConfig::FeatureMatch(fm) => {
                println!(
                    "      {} ({:.3}, {:.3})  {} {:.1}",
                    s.label.apply_to("target"),
                    fm.target.x,
                    fm.target.y,
                    s.label.apply_to("threshold"),
                    fm.threshold
                );
                println!(
                    "      {} x [{:.3}, {:.3}]  y [{:.3}, {:.3}]",
                    s.label.apply_to("bounds"),
                    fm.bounds.min_x,
                    fm.bounds.max_x,
                    fm.bounds.min_y,
                    fm.bounds.max_y
                );
            }
            StepConfig::Quiz(q) => {
                println!(
                    "      {} {}",
                    s.label.apply_to("options"),
                    q.options.len()
                );
            }
            StepConfig::PatternChoice(pc) => {
                println!(
                    "      {} {}",
                    s.label.apply_to("choices"),
                    pc.choices.len()
                );
            }
            StepConfig::Reading(_) => {}
        }
    }
    println!();
}
