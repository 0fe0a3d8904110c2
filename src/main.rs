use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lead_grade::output::{OutputFormat, ThemeMode};
use lead_grade::scoring::{Grade, QualificationDetails};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_LINT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Age bucket, e.g. "40-49"
    #[arg(long)]
    age_range: Option<String>,

    /// Occupation, e.g. "Diretor Comercial"
    #[arg(long)]
    profession: Option<String>,

    /// Goal tag, e.g. "hipertrofia"
    #[arg(long)]
    objective: Option<String>,

    /// Neighbourhood or city
    #[arg(long)]
    location: Option<String>,

    /// premium, alto, medio, ...
    #[arg(long)]
    budget: Option<String>,

    /// imediata, urgente, proximos_30_dias, ...
    #[arg(long)]
    urgency: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl From<&ScoreArgs> for QualificationDetails {
    fn from(args: &ScoreArgs) -> Self {
        QualificationDetails {
            age_range: args.age_range.clone(),
            profession: args.profession.clone(),
            objective: args.objective.clone(),
            location: args.location.clone(),
            budget: args.budget.clone(),
            urgency: args.urgency.clone(),
            has_trained_before: None,
            preferred_time: None,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the grade ladder and colours (default if no subcommand)
    Grades,
    /// Score a single lead from its qualification answers
    Score(ScoreArgs),
    /// Score, filter and rank leads from a JSON/YAML export ("-" reads JSON from stdin)
    Batch {
        file: PathBuf,

        /// Hide leads graded below this letter
        #[arg(long)]
        min_grade: Option<Grade>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Show at most this many leads
        #[arg(long, value_parser = lead_grade::config::parse_limit)]
        limit: Option<usize>,
    },
    /// Report answers that earn only fallback credit or no credit
    Check { file: PathBuf },
}

#[derive(Parser, Debug)]
#[command(name = "lead-grade")]
#[command(about = "Lead qualification scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-grade/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Colour theme for grade badges
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeMode>,

    /// Disable colours even on a terminal
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "lead_grade=debug" } else { "lead_grade=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match lead_grade::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = config.validate() {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = !cli.no_color && lead_grade::output::should_use_colors();
    let theme_mode = cli.theme.or(config.theme).unwrap_or_default();
    let theme = if use_colors {
        lead_grade::output::resolve_theme(theme_mode)
    } else {
        lead_grade::output::Theme::Dark
    };

    match cli.command.unwrap_or(Commands::Grades) {
        Commands::Grades => {
            println!("{}", lead_grade::output::format_grade_legend(theme, use_colors));
        }
        Commands::Score(args) => {
            let details = QualificationDetails::from(&args);
            let result = lead_grade::scoring::calculate_lead_score(&details);

            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                println!(
                    "{}",
                    lead_grade::output::format_lead_detail("Lead", &result, theme, use_colors)
                );
            }
        }
        Commands::Batch {
            file,
            min_grade,
            format,
            limit,
        } => {
            let leads = match lead_grade::batch::load_leads(&file) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let min_grade = min_grade.or(config.min_grade);
            let mut ranked = lead_grade::batch::score_and_rank(leads, min_grade);
            if let Some(limit) = limit.or(config.limit) {
                ranked.truncate(limit);
            }

            match format.or(config.format).unwrap_or_default() {
                OutputFormat::Table => {
                    if cli.verbose && !ranked.is_empty() {
                        for lead in &ranked {
                            println!(
                                "{}",
                                lead_grade::output::format_lead_detail(
                                    &lead.label,
                                    &lead.result,
                                    theme,
                                    use_colors
                                )
                            );
                            println!();
                        }
                    } else {
                        println!(
                            "{}",
                            lead_grade::output::format_scored_table(&ranked, theme, use_colors)
                        );
                    }
                }
                OutputFormat::Tsv => {
                    let output = lead_grade::output::format_tsv(&ranked);
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                OutputFormat::Json => match lead_grade::output::format_json(&ranked) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }
        }
        Commands::Check { file } => {
            let leads = match lead_grade::batch::load_leads(&file) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let mut flagged = 0;
            for (position, lead) in leads.iter().enumerate() {
                let details = &lead.qualification_details;
                if let Err(findings) = lead_grade::scoring::lint_details(details) {
                    flagged += 1;
                    println!("{}:", lead.label(position));
                    for finding in findings {
                        println!("  - {}", finding);
                    }
                }
            }

            if flagged > 0 {
                eprintln!("{} of {} leads have findings", flagged, leads.len());
                std::process::exit(EXIT_LINT);
            }
            println!("All {} leads clean", leads.len());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
