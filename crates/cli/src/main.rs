//! VRidge CLI - production schedule calculator.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vridge_core::validate::parse_date;
use vridge_core::{
    Complexity, ComputedSchedule, ProjectType, ScheduleConstraints, ScheduleRequest, TeamSize,
    WorkingDays,
};
use vridge_schedule::{calendar_entries, DurationTable, ScheduleCalculator, ScheduleStrategy};
use vridge_server::ServerConfig;
use vridge_storage::{JsonStorage, ScheduleStore, StoredSchedule};

#[derive(Parser)]
#[command(name = "vridge")]
#[command(about = "Video production schedule calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Store the schedule and its calendar entries
    #[arg(long, requires = "project")]
    save: bool,

    /// Project id to store under
    #[arg(long)]
    project: Option<String>,

    /// Storage directory
    #[arg(long, default_value = ".vridge")]
    storage: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a business-day-aware schedule
    Calculate {
        /// Project type (corporate, marketing, education, entertainment)
        #[arg(long = "type")]
        project_type: ProjectType,
        /// Complexity (simple, medium, complex)
        #[arg(long, default_value = "medium")]
        complexity: Complexity,
        /// Team size (1-50)
        #[arg(long, default_value = "1")]
        team_size: TeamSize,
        /// First day of planning, YYYY-MM-DD (default: tomorrow)
        #[arg(long, value_parser = parse_date_arg)]
        start: Option<NaiveDate>,
        /// Cap on planning days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_planning: Option<u32>,
        /// Cap on shooting days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_shooting: Option<u32>,
        /// Cap on editing days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_editing: Option<u32>,
        /// Working weekdays, 0=Sunday..6=Saturday (default: 1,2,3,4,5)
        #[arg(long, value_delimiter = ',')]
        weekdays: Option<Vec<u8>>,
        /// TOML file overriding the duration table
        #[arg(long)]
        tables: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Lay out the fixed 7/1/14 calendar-day plan
    AutoSchedule {
        /// First day of planning, YYYY-MM-DD
        #[arg(long, value_parser = parse_date_arg)]
        start: NaiveDate,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show a stored schedule
    Show {
        /// Project id
        project_id: String,
        /// Storage directory
        #[arg(long, default_value = ".vridge")]
        storage: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP server
    Serve {
        /// Bind host (overrides VRIDGE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides VRIDGE_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Return internal error details to clients
        #[arg(long)]
        dev: bool,
        /// Enable schedule storage in this directory (overrides VRIDGE_STORAGE_DIR)
        #[arg(long)]
        storage: Option<PathBuf>,
        /// TOML duration table (overrides VRIDGE_TABLES)
        #[arg(long)]
        tables: Option<PathBuf>,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

fn init_logging(default_level: &str) {
    // Logs go to stderr so that --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            project_type,
            complexity,
            team_size,
            start,
            max_planning,
            max_shooting,
            max_editing,
            weekdays,
            tables,
            output,
        } => {
            init_logging("warn");

            let available_weekdays = weekdays
                .map(WorkingDays::new)
                .transpose()
                .map_err(|e| anyhow::anyhow!(e))?;
            let constraints = ScheduleConstraints {
                max_planning_days: max_planning,
                max_shooting_days: max_shooting,
                max_editing_days: max_editing,
                available_weekdays,
            };

            let mut request = ScheduleRequest::new(project_type)
                .with_complexity(complexity)
                .with_team_size(team_size);
            if let Some(start) = start {
                request = request.with_start_date(start);
            }
            if constraints != ScheduleConstraints::default() {
                request = request.with_constraints(constraints);
            }

            let table = match tables {
                Some(path) => DurationTable::from_path(path)?,
                None => DurationTable::default(),
            };
            let calculator = ScheduleCalculator::new(table);
            let schedule = ScheduleStrategy::Configurable(request).compute(&calculator, today())?;
            emit(schedule, &output).await?;
        }
        Commands::AutoSchedule { start, output } => {
            init_logging("warn");

            let schedule = ScheduleStrategy::Fixed { start_date: start }
                .compute(&ScheduleCalculator::default(), today())?;
            emit(schedule, &output).await?;
        }
        Commands::Show {
            project_id,
            storage,
            json,
        } => {
            init_logging("warn");

            let storage = JsonStorage::new(&storage).await?;
            let Some(stored) = storage.load_schedule(&project_id).await? else {
                println!("No schedule stored for {}", project_id);
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&stored)?);
            } else {
                println!(
                    "Project: {} (version {}, saved {})",
                    stored.project_id, stored.version, stored.saved_at
                );
                print_schedule(&stored.schedule);
            }
        }
        Commands::Serve {
            host,
            port,
            dev,
            storage,
            tables,
        } => {
            init_logging("info");

            let mut config = ServerConfig::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            config.dev_mode |= dev;
            if storage.is_some() {
                config.storage_dir = storage;
            }
            if tables.is_some() {
                config.tables_path = tables;
            }

            info!("Starting VRidge HTTP server");
            vridge_server::run(config).await?;
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

async fn emit(schedule: ComputedSchedule, output: &OutputArgs) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print_schedule(&schedule);
    }

    if output.save {
        let project_id = output
            .project
            .as_deref()
            .context("--save requires --project")?;
        let storage = JsonStorage::new(&output.storage).await?;
        let entries = calendar_entries(project_id, &schedule);
        let saved = storage
            .save_schedule(StoredSchedule::new(project_id, schedule, entries))
            .await?;
        println!("Saved schedule for {} (version {})", saved.project_id, saved.version);
    }

    Ok(())
}

fn print_schedule(schedule: &ComputedSchedule) {
    match schedule {
        ComputedSchedule::Configurable(result) => {
            let f = &result.calculation_factors;
            println!(
                "Schedule: {} / {} / team of {} (x{} complexity, x{} efficiency, working days {})",
                f.project_type,
                f.complexity,
                f.team_size,
                f.complexity_multiplier,
                f.team_efficiency,
                f.working_days,
            );
            for phase in result.phases.iter() {
                println!(
                    "  {:<9} {} .. {}  {:>2} days  {}",
                    phase.phase, phase.start_date, phase.end_date, phase.duration, phase.description
                );
            }
            println!(
                "  total: {} working days over {} calendar days",
                result.total_days,
                result.calendar_span()
            );
        }
        ComputedSchedule::Fixed(fixed) => {
            println!("Schedule: fixed 7/1/14 plan");
            for phase in fixed.iter() {
                println!(
                    "  {} {} .. {}  {:>2} days",
                    phase.name, phase.start_date, phase.end_date, phase.duration
                );
            }
            println!("  total: {} days", fixed.total_duration());
        }
    }
}
