use std::path::PathBuf;

use clap::Parser;
use line_perceptron::prelude::*;
use tracing_subscriber::EnvFilter;

/// Train a single perceptron to separate random points by a line.
///
/// The line is `ax + by = c` (-a, -b, optional -c) or `y = mx + b`
/// (--slope, optional --intercept). Training stops after --correct
/// consecutive correct guesses.
#[derive(Parser, Debug)]
#[command(name = "line-perceptron", version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Coefficient of x
    #[arg(short = 'a')]
    a: Option<f64>,

    /// Coefficient of y
    #[arg(short = 'b')]
    b: Option<f64>,

    /// Constant term (default 0)
    #[arg(short = 'c')]
    c: Option<f64>,

    /// Slope of y = mx + b
    #[arg(long, conflicts_with_all = ["a", "b", "c"])]
    slope: Option<f64>,

    /// Intercept of y = mx + b (default 0)
    #[arg(long, conflicts_with_all = ["a", "b", "c"])]
    intercept: Option<f64>,

    /// Learning rate (default 0.005)
    #[arg(long)]
    learn: Option<f64>,

    /// Low end of the generated x and y values (default -10)
    #[arg(long)]
    lowrange: Option<f64>,

    /// High end of the generated x and y values (default 10)
    #[arg(long)]
    highrange: Option<f64>,

    /// Consecutive correct guesses needed to stop (default 100)
    #[arg(long)]
    correct: Option<i64>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many samples
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Initial weights: zeros or small-random
    #[arg(long, value_parser = parse_init)]
    init: Option<WeightInit>,

    /// TOML file with any of the options above; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Classify X,Y after training with both the line and the perceptron
    #[arg(long = "query", value_name = "X,Y", value_parser = parse_point)]
    queries: Vec<Point>,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn line_spec(&self) -> Option<LineSpec> {
        let spec = LineSpec {
            a: self.a,
            b: self.b,
            c: self.c,
            slope: self.slope,
            intercept: self.intercept,
        };
        (spec != LineSpec::default()).then_some(spec)
    }

    /// The config file, if any, with every given flag applied on top.
    fn build_config(&self) -> Result<TrainingConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TrainingConfig::load_from_file(path)?,
            None => TrainingConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut TrainingConfig) {
        if let Some(line) = self.line_spec() {
            config.line = line;
        }
        if let Some(learn) = self.learn {
            config.learn = learn;
        }
        if let Some(low) = self.lowrange {
            config.lowrange = low;
        }
        if let Some(high) = self.highrange {
            config.highrange = high;
        }
        if let Some(correct) = self.correct {
            config.correct = correct;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.max_iterations.is_some() {
            config.max_iterations = self.max_iterations;
        }
        if let Some(init) = self.init {
            config.init = init;
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_init(s: &str) -> Result<WeightInit, String> {
    match s {
        "zeros" => Ok(WeightInit::Zeros),
        "small-random" => Ok(WeightInit::SmallRandom),
        other => Err(format!("unknown init {other:?}, expected zeros or small-random")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("line_perceptron=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let settings = cli.build_config()?.validate()?;
    info!(line = %settings.line, seed = ?settings.seed, "starting training");

    let mut trainer = Trainer::from_settings(&settings);
    let summary = if cli.quiet {
        trainer.run(&mut Silent)
    } else {
        trainer.run(&mut |step: &Step| println!("{step}"))
    };

    match summary.outcome {
        Outcome::Converged => println!(
            "Predicted result correctly {} times in a row, after {} attempts",
            summary.correct_streak, summary.iterations
        ),
        Outcome::IterationCapReached => println!(
            "Stopped after {} attempts with a streak of {} (needed {})",
            summary.iterations, summary.correct_streak, settings.target_streak
        ),
    }
    println!("Actual  slope/intercept form : {}", settings.line);
    match summary.learned_line() {
        Some(line) => println!("Learned slope/intercept form : {line}"),
        None => println!("Learned slope/intercept form : undefined (zero weights)"),
    }

    let perceptron = trainer.perceptron();
    for point in &cli.queries {
        let actual = settings.line.classify_point(*point);
        let learned = perceptron.classify_point(*point);
        println!(
            "{point} actual: {actual} learned: {learned}{}",
            if actual == learned { "" } else { "  (mismatch)" }
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("line-perceptron").chain(args.iter().copied())).unwrap()
    }

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("line-perceptron-{}-{name}.toml", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn flags_build_a_config() {
        let cfg = parse(&["-a", "1.4", "-b", "-5", "-c", "13", "--learn", "0.01", "--lowrange", "-100", "--highrange=100"])
            .build_config()
            .unwrap();
        assert_eq!(cfg.line, LineSpec::general(1.4, -5.0, 13.0));
        assert_eq!(cfg.learn, 0.01);
        assert_eq!(cfg.lowrange, -100.0);
        assert_eq!(cfg.highrange, 100.0);
        assert_eq!(cfg.correct, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn flags_override_the_config_file() {
        let path = write_config("override", "a = 2.0\nb = 3.0\nlearn = 0.1\ncorrect = 40\nseed = 5\n");
        let cfg = parse(&["--config", path.to_str().unwrap(), "--learn", "0.02", "--init", "zeros"])
            .build_config()
            .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg.line, LineSpec { a: Some(2.0), b: Some(3.0), ..LineSpec::default() });
        assert_eq!(cfg.learn, 0.02);
        assert_eq!(cfg.correct, 40);
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.init, WeightInit::Zeros);
    }

    #[test]
    fn line_flags_replace_the_whole_file_line() {
        let path = write_config("line", "a = 2.0\nb = 3.0\nc = 1.0\n");
        let cfg = parse(&["--config", path.to_str().unwrap(), "--slope", "0.5"])
            .build_config()
            .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg.line, LineSpec { slope: Some(0.5), ..LineSpec::default() });
        assert_eq!(cfg.validate().unwrap().line, LineParameters::slope_intercept(0.5, 0.0).unwrap());
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let cli = parse(&["--config", "/nonexistent/line-perceptron.toml", "-a", "1", "-b", "1"]);
        assert!(matches!(cli.build_config(), Err(ConfigError::Io(_))));
    }

    #[test]
    fn forms_cannot_be_mixed_on_the_command_line() {
        let args = ["line-perceptron", "-a", "1", "-b", "1", "--slope", "2"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn query_points() {
        let cli = parse(&["--slope", "1", "--query", "1.5,-2", "--query", " 3 , 4 "]);
        assert_eq!(cli.queries, vec![Point::new(1.5, -2.0), Point::new(3.0, 4.0)]);

        for bad in ["1.5", "x,2", "1,", "1;2"] {
            assert!(parse_point(bad).is_err(), "{bad}");
            assert!(Cli::try_parse_from(["line-perceptron", "--slope", "1", "--query", bad]).is_err());
        }
    }

    #[test]
    fn init_names() {
        assert_eq!(parse_init("zeros"), Ok(WeightInit::Zeros));
        assert_eq!(parse_init("small-random"), Ok(WeightInit::SmallRandom));
        assert!(parse_init("ones").is_err());
    }
}
