use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use make_ten::solver::constants::{TARGET_MAX, TARGET_MIN};
use make_ten::{ExpressionSolver, SolutionSet, SolverConfig, parse_digit_string};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Make Ten - reach every number from 1 to 10 with four digits
#[derive(Parser, Debug)]
#[command(name = "make-ten")]
#[command(
    about = "Find every arithmetic expression over four digits that evaluates to 1 through 10"
)]
#[command(version)]
pub struct CliArgs {
    /// Four digits from 1 to 9, e.g. 1234
    pub digits: String,

    /// Only show solutions for this target
    #[arg(short, long)]
    pub target: Option<i64>,

    /// Only show the number of solutions per target
    #[arg(short, long)]
    pub summary: bool,

    /// Search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digits: [u32; 4],
    pub target: Option<i64>,
    pub summary: bool,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let digits = parse_digit_string(&args.digits).context("Invalid digits")?;

        if let Some(target) = args.target
            && !(TARGET_MIN..=TARGET_MAX).contains(&target)
        {
            bail!(
                "Target must be between {} and {}, got {}",
                TARGET_MIN,
                TARGET_MAX,
                target
            );
        }

        let solver = if args.sequential {
            SolverConfig::sequential()
        } else {
            SolverConfig::default()
        };

        Ok(Self {
            digits,
            target: args.target,
            summary: args.summary,
            solver,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Header line for one target, e.g. `7 (3 solutions)`
fn target_header(target: i64, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} ({} solution{})", target, count, plural)
}

/// Render solutions grouped by target, optionally restricted to one target
pub fn render(solutions: &SolutionSet, only: Option<i64>, summary: bool) -> String {
    let mut out = String::new();

    for (target, list) in solutions.iter() {
        if only.is_some_and(|t| t != target) {
            continue;
        }

        out.push_str(&target_header(target, list.len()));
        out.push('\n');
        if summary {
            continue;
        }

        if list.is_empty() {
            out.push_str("  (no solutions)\n");
        }
        for expr in list {
            out.push_str(&format!("  {}\n", expr));
        }
    }

    out
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    info!("Solving for digits {:?}", config.digits);

    let solver = ExpressionSolver::with_config(config.solver);
    let solutions = solver
        .solve(config.digits)
        .context("Failed to solve puzzle")?;

    let unsolved = solutions.unsolved_targets();
    if !unsolved.is_empty() {
        warn!("No solutions for targets {:?}", unsolved);
    }

    print!("{}", render(&solutions, config.target, config.summary));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Result<CliConfig> {
        let parsed = CliArgs::try_parse_from(std::iter::once("make-ten").chain(items.iter().copied()))?;
        CliConfig::from_args(parsed)
    }

    #[test]
    fn test_cli_args_parsing() {
        let config = args(&["1234"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.digits, [1, 2, 3, 4]);
            assert_eq!(config.target, None);
            assert!(!config.summary);
            assert!(config.solver.parallel);
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_flags() {
        let config = args(&["5555", "--target", "7", "--summary", "--sequential", "-l", "debug"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.target, Some(7));
            assert!(config.summary);
            assert!(!config.solver.parallel);
            assert!(matches!(config.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cli_rejects_invalid_input() {
        assert!(args(&["123"]).is_err());
        assert!(args(&["1203"]).is_err());
        assert!(args(&["12a4"]).is_err());
        assert!(args(&["1234", "--target", "11"]).is_err());
        assert!(args(&["1234", "--target", "0"]).is_err());
        assert!(args(&[]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_target_header_pluralization() {
        assert_eq!(target_header(1, 0), "1 (0 solutions)");
        assert_eq!(target_header(2, 1), "2 (1 solution)");
        assert_eq!(target_header(10, 12), "10 (12 solutions)");
    }

    #[test]
    fn test_render_empty_set() {
        let rendered = render(&SolutionSet::new(), None, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines.first(), Some(&"1 (0 solutions)"));
        assert_eq!(lines.get(1), Some(&"  (no solutions)"));
        assert_eq!(lines.last(), Some(&"  (no solutions)"));
    }

    #[test]
    fn test_render_solved_target() {
        let solutions = ExpressionSolver::new().solve([1, 2, 3, 4]);
        assert!(solutions.is_ok());
        if let Ok(solutions) = solutions {
            let rendered = render(&solutions, Some(10), false);
            let mut lines = rendered.lines();
            assert_eq!(
                lines.next().map(ToString::to_string),
                Some(target_header(10, solutions.count(10)))
            );
            assert_eq!(lines.next(), Some("  (1+(2+(3+4)))"));
            assert_eq!(rendered.lines().count(), solutions.count(10) + 1);
        }
    }

    #[test]
    fn test_render_summary() {
        let rendered = render(&SolutionSet::new(), None, true);
        assert_eq!(rendered.lines().count(), 10);
        assert!(rendered.lines().all(|line| line.ends_with("(0 solutions)")));
    }
}
