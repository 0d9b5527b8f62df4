//! Proposal System CLI
//!
//! Loads a proposal record from JSON, prints the computed scenario tables,
//! exports the LaTeX report, or requests the narrative text.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use proposal_system::format::{age_at, format_money, prepay_summary, rebate_summary, return_rate};
use proposal_system::proposal::{load_proposal, save_proposal, Horizon, ProposalRecord};
use proposal_system::render::{render_document, Language, Localizer};
use proposal_system::NarrativeClient;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "proposal_system", version, about = "Private-wealth proposal generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum LangArg {
    /// Simplified Chinese
    #[default]
    ZhCn,
    /// Traditional Chinese
    ZhHk,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::ZhCn => Language::ZhCn,
            LangArg::ZhHk => Language::ZhHk,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Write a default proposal record to edit by hand
    Init {
        /// Output JSON path
        path: PathBuf,
    },
    /// Print the computed scenario tables for a proposal
    Show {
        /// Proposal JSON path
        input: PathBuf,
    },
    /// Export the print-ready LaTeX report
    Render {
        /// Proposal JSON path
        input: PathBuf,
        /// Output .tex path
        #[arg(short, long, default_value = "proposal.tex")]
        out: PathBuf,
        /// Display language for canonical labels
        #[arg(long, value_enum, default_value_t = LangArg::ZhCn)]
        lang: LangArg,
    },
    /// Generate the narrative text via the external service
    Narrate {
        /// Proposal JSON path
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Init { path } => {
            save_proposal(&ProposalRecord::default(), &path)?;
            println!("Wrote default proposal to {}", path.display());
        }
        Command::Show { input } => {
            let record = load_proposal(&input)?;
            print_tables(&record);
        }
        Command::Render { input, out, lang } => {
            let record = load_proposal(&input)?;
            let localizer = Localizer::for_language(lang.into());
            let doc = render_document(&record, &localizer);
            fs::write(&out, doc)?;
            println!("Wrote report to {}", out.display());
        }
        Command::Narrate { input } => {
            let record = load_proposal(&input)?;
            let client = NarrativeClient::from_env()?;
            let narrative = client.generate(&record).await?;
            println!("{}", narrative);
        }
    }

    Ok(())
}

fn print_tables(record: &ProposalRecord) {
    println!("Proposal: {} ({})", record.plan_name, record.client.name);
    println!(
        "  Entry age: {}   Premium: USD {} ({})",
        record.client.age,
        format_money(record.premium.total),
        record.premium.payment_type
    );
    println!();

    println!("Scenario A - Capital Accumulation");
    println!("{:>4} {:>6} {:>14} {:>14} {:>8}", "Year", "Age", "Surrender", "Death", "Return");
    for horizon in Horizon::ALL {
        let value = record.scenario_a.get(horizon);
        println!(
            "{:>4} {:>6} {:>14} {:>14} {:>8}",
            horizon.years(),
            age_at(record.client.age, horizon.years()),
            format_money(value.surrender),
            format_money(value.death),
            return_rate(value.surrender, record.premium.total),
        );
    }
    println!();

    println!(
        "Scenario B - Passive Income (USD {}/yr from year {})",
        format_money(record.scenario_b.annual_withdrawal),
        record.scenario_b.withdrawal_start_year
    );
    println!("{:>4} {:>6} {:>14} {:>14} {:>8}", "Year", "Age", "Cumulative", "Remaining", "Return");
    for horizon in Horizon::ALL {
        let value = record.scenario_b.get(horizon);
        println!(
            "{:>4} {:>6} {:>14} {:>14} {:>8}",
            horizon.years(),
            age_at(record.client.age, horizon.years()),
            format_money(value.cumulative),
            format_money(value.remaining),
            return_rate(value.cumulative + value.remaining, record.premium.total),
        );
    }
    println!();

    println!("Scenario C - Life Goals ({} goals)", record.scenario_c.goals.len());
    println!(
        "{:>7} {:>7} {:>12} {:>12} {:>12}  {}",
        "Years", "Gen", "Annual", "Cumulative", "Remaining", "Purpose"
    );
    for goal in &record.scenario_c.goals {
        println!(
            "{:>3}-{:<3} {:>7} {:>12} {:>12} {:>12}  {}",
            goal.policy_year_start,
            goal.policy_year_end,
            goal.generation.as_str(),
            format_money(goal.amount),
            format_money(goal.cumulative),
            format_money(goal.remaining_value),
            goal.purpose,
        );
    }
    println!();

    println!("Promotions");
    println!("  Rebate:  {}", rebate_summary(&record.promo));
    println!("  Prepay:  {}", prepay_summary(&record.promo));
}
