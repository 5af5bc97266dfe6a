use {
    analyze::Args,
    anyhow::{Context, Result},
    base::{Level, log_info},
    std::env,
    stroke::{Report, RuleTable, analyze_with, read_sequence},
};

fn init_logging() -> Result<()> {
    let level = match env::var("STROKE_LOG_LEVEL") {
        Ok(level) => level.parse::<Level>()?,
        Err(_) => Level::Info,
    };
    match env::var("STROKE_LOG_DIR") {
        Ok(dir) => base::init_file_logger(&dir, level)
            .with_context(|| format!("cannot open log directory {dir}"))?,
        Err(_) => base::init_stderr_logger(level),
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse(env::args().skip(1))?;

    let table = match env::var("STROKE_RULES_PATH") {
        Ok(path) => {
            log_info!("loading rules from {path}");
            RuleTable::from_json_file(&path).with_context(|| format!("cannot load rules from {path}"))?
        }
        Err(_) => RuleTable::forehand(),
    };

    let sequence = read_sequence(&args.poses)
        .with_context(|| format!("cannot read poses from {}", args.poses.display()))?;
    log_info!(
        "{}: {} frames, {:?}-handed {}",
        args.student,
        sequence.len(),
        args.handedness,
        args.stroke
    );

    let analysis = analyze_with(&table, &sequence, args.handedness, &args.stroke);
    let report = Report::new(args.student, args.stroke, sequence.len(), analysis);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
