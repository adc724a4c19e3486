use anyhow::Context;
use colored::*;

use rentr_common::{config::Config, success};
use rentr_core::scenario::{self, ScenarioOptions, ScenarioSummary};

use crate::terminal::{colors, format, print, reporter::TerminalReporter};

pub fn demo(opts: ScenarioOptions, cfg: &Config) -> anyhow::Result<()> {
    let summary: ScenarioSummary = scenario::run(cfg, &opts, &TerminalReporter)
        .with_context(|| format!("demo run for {} stopped", opts.customer))?;

    print_summary(&summary, cfg);
    Ok(())
}

fn print_summary(summary: &ScenarioSummary, cfg: &Config) {
    let customer: ColoredString = summary.customer.color(colors::CUSTOMER).bold();
    let model: ColoredString = summary.model.color(colors::MODEL);
    let output: &ColoredString = &format!(
        "{customer} paid {} for {model} over {} days",
        format::cost(summary.cost),
        summary.days
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::print("");
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        1 => {
            print::print("");
            success!("{}", output);
        }
        _ => {}
    }
}
