use std::error::Error;
use std::io::Write;

use plandag::config::{load_and_validate, load_from_path};
use plandag::errors::PlandagError;
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn loads_a_full_experiment_section() -> TestResult {
    let file = write_config(
        r#"
[experiment]
n_start = 6
n_steps = 2
trials = 5
edge_percent = 10
seed = 42
verbose = true
"#,
    )?;

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.experiment.n_start, 6);
    assert_eq!(cfg.experiment.n_steps, 2);
    assert_eq!(cfg.experiment.trials, 5);
    assert_eq!(cfg.experiment.edge_percent, 10);
    assert_eq!(cfg.experiment.seed, Some(42));
    assert!(cfg.experiment.verbose);
    Ok(())
}

#[test]
fn missing_fields_fall_back_to_defaults() -> TestResult {
    let file = write_config("[experiment]\ntrials = 3\n")?;

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.experiment.trials, 3);
    assert_eq!(cfg.experiment.n_steps, 5);
    assert_eq!(cfg.experiment.edge_percent, 3);
    assert_eq!(cfg.experiment.seed, None);
    Ok(())
}

#[test]
fn empty_file_yields_the_default_experiment() -> TestResult {
    let file = write_config("")?;

    let cfg = load_from_path(file.path())?;
    assert_eq!(cfg.experiment.n_start, 8);
    assert_eq!(cfg.experiment.trials, 20);
    Ok(())
}

#[test]
fn zero_trials_is_rejected() -> TestResult {
    let file = write_config("[experiment]\ntrials = 0\n")?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, PlandagError::Config(_)), "got {err:?}");
    Ok(())
}

#[test]
fn too_small_n_start_is_rejected() -> TestResult {
    // The generator draws maxFrontierSize from [3, n), so n must be >= 4.
    let file = write_config("[experiment]\nn_start = 3\n")?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, PlandagError::Config(_)), "got {err:?}");
    Ok(())
}

#[test]
fn edge_percent_above_100_is_rejected() -> TestResult {
    let file = write_config("[experiment]\nedge_percent = 101\n")?;

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, PlandagError::Config(_)), "got {err:?}");
    Ok(())
}

#[test]
fn invalid_toml_is_a_toml_error() -> TestResult {
    let file = write_config("[experiment\ntrials = 3\n")?;

    let err = load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, PlandagError::Toml(_)), "got {err:?}");
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_from_path("/nonexistent/Plandag.toml").unwrap_err();
    assert!(matches!(err, PlandagError::Io(_)), "got {err:?}");
}
