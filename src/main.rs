use anyhow::{Context, Result};
use chrono::{Duration, Local};
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::{Path, PathBuf};
use tracing::info;

use fitcoach::export::Report;
use fitcoach::logging::{self, DEFAULT_TAIL_LINES};
use fitcoach::{
    AppConfig, Coach, ExportFormat, FitnessLevel, GoalPolicy, HealthAnalyzer,
    InMemoryProfileStore, Intensity, ProgressTracker, UserProfile, WorkoutPlanner,
    WorkoutSession, WorkoutType,
};

/// FitCoach - Rule-based Fitness Coaching CLI
///
/// Analyzes a user's health profile, builds workout session plans and
/// tracks weight and training progress using fixed coaching rules.
#[derive(Parser)]
#[command(name = "fitcoach")]
#[command(author = "FitCoach Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Rule-based Fitness Coaching CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Report format (text, json); overrides the configured format
    #[arg(short = 'f', long, global = true)]
    format: Option<ExportFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a health profile (TOML or JSON file)
    Analyze {
        /// Profile file path
        #[arg(short, long)]
        profile: PathBuf,

        /// Leave out goals without dedicated guidance
        #[arg(long)]
        strict_goals: bool,
    },

    /// Create a workout session plan
    Plan {
        /// Fitness level (beginner, intermediate, advanced)
        #[arg(short, long)]
        level: String,

        /// Workout type (cardio, strength, flexibility, hiit)
        #[arg(short, long)]
        workout_type: Option<String>,

        /// Session duration in minutes
        #[arg(short, long)]
        duration: Option<u32>,

        /// Goal the session is for (repeatable)
        #[arg(short, long = "goal")]
        goals: Vec<String>,
    },

    /// Analyze weight and training progress
    Progress {
        /// Current weight in kg
        #[arg(long)]
        current: Decimal,

        /// Starting weight in kg
        #[arg(long)]
        initial: Option<Decimal>,

        /// Workouts completed in the period
        #[arg(long)]
        workouts: u32,

        /// Days in the period
        #[arg(long)]
        days: u32,
    },

    /// Run a full coaching session for a sample user
    Demo,

    /// Show the last lines of the log file
    Logs {
        /// Number of lines to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_TAIL_LINES)]
        lines: usize,
    },

    /// Configure application settings
    Config {
        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Print the active configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone();
    let mut config = AppConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?;
    let mut log_config = config.logging.clone();
    log_config.level = log_config.level.raised_by(cli.verbose);
    logging::init_logging(&log_config).context("Failed to initialize logging")?;
    info!(
        path = ?config_path,
        goal_policy = ?config.analysis.goal_policy,
        "Configuration loaded"
    );

    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Commands::Analyze {
            profile,
            strict_goals,
        } => {
            let profile = load_profile(&profile)?;
            let policy = if strict_goals {
                GoalPolicy::StrictDrop
            } else {
                config.analysis.goal_policy
            };
            let analysis = HealthAnalyzer::new(policy).analyze(&profile);
            print_report(Report::Analysis(&analysis), format)?;
        }

        Commands::Plan {
            level,
            workout_type,
            duration,
            goals,
        } => {
            let workout_type = workout_type
                .unwrap_or_else(|| config.planner.default_workout_type.label().to_string());
            let duration = duration.unwrap_or(config.planner.default_duration_minutes);

            let plan = WorkoutPlanner::create_plan_from_labels(&level, &workout_type, duration, &goals);
            print_report(Report::Plan(&plan), format)?;
        }

        Commands::Progress {
            current,
            initial,
            workouts,
            days,
        } => {
            let progress = ProgressTracker::analyze(current, initial, workouts, days);
            print_report(Report::Progress(&progress), format)?;
        }

        Commands::Demo => run_demo(&config, format)?,

        Commands::Logs { lines } => match &config.logging.file_path {
            Some(path) => {
                let tail = logging::tail_lines(path, lines)
                    .with_context(|| format!("Failed to read log file: {}", path.display()))?;
                if tail.is_empty() {
                    println!("{}", "No log entries".dimmed());
                }
                for line in tail {
                    println!("{}", line);
                }
            }
            None => println!(
                "{}",
                "No log file configured (set logging.file_path in the config)".yellow()
            ),
        },

        Commands::Config { init, show } => {
            println!("{}", "Managing configuration...".white().bold());
            if init {
                let path = match &config_path {
                    Some(path) => {
                        config.save_to_file(path)?;
                        path.clone()
                    }
                    None => config.save_default()?,
                };
                println!("{}", format!("✓ Configuration written to {}", path.display()).green());
            }
            if show || !init {
                let content = toml::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("{}", content);
            }
        }
    }

    Ok(())
}

/// Read a profile from TOML or JSON, chosen by file extension
fn load_profile(path: &Path) -> Result<UserProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile: {}", path.display()))?;

    let profile: UserProfile = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON profile: {}", path.display()))?,
        _ => toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML profile: {}", path.display()))?,
    };

    profile.validate()?;
    Ok(profile)
}

fn print_report(report: Report<'_>, format: ExportFormat) -> Result<()> {
    println!("{}", report.render(format)?);
    Ok(())
}

/// Register a sample user, analyze, plan, log a week of sessions and track
/// progress through the coach
fn run_demo(config: &AppConfig, format: ExportFormat) -> Result<()> {
    let mut coach = Coach::from_config(InMemoryProfileStore::new(), config);

    let profile = UserProfile::new("Ahmed", 28, dec!(80), dec!(175), FitnessLevel::Beginner)?
        .with_goals(["weight loss", "fitness improvement"])
        .with_preferred_workouts(vec![WorkoutType::Cardio, WorkoutType::Strength])
        .with_available_time(45);
    let user = coach.register(profile)?;
    println!("{}", format!("✓ Registered user {}", user).green());

    let analysis = coach.analyze_health(&user)?;
    print_report(Report::Analysis(&analysis), format)?;

    let plan = coach.create_workout_plan(&user, WorkoutType::Cardio, 45)?;
    print_report(Report::Plan(&plan), format)?;

    let today = Local::now().date_naive();
    for day in [6, 5, 3, 2, 0] {
        let exercises = plan
            .main_workout
            .exercises
            .iter()
            .map(|e| e.name.clone())
            .collect();
        coach.log_session(
            &user,
            WorkoutSession {
                date: today - Duration::days(day),
                workout_type: WorkoutType::Cardio,
                duration_minutes: plan.session_info.total_duration,
                exercises,
                calories_burned: 360,
                intensity: Intensity::Moderate,
                notes: String::new(),
            },
        )?;
    }

    let progress = coach.track_progress(&user, dec!(79.5), 5, 7)?;
    print_report(Report::Progress(&progress), format)?;

    let history = coach.track_progress_from_history(&user, dec!(79.5))?;
    println!(
        "{}",
        format!(
            "Logged sessions: {} on {} days, commitment {:.1}%",
            history.activity_stats.workouts_completed,
            history.activity_stats.days_active,
            history.activity_stats.commitment_score
        )
        .dimmed()
    );

    Ok(())
}
