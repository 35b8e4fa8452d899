use std::fs;

use anyhow::Context;
use colored::Colorize;
use confguard_diff::{compare, render, DiffReport};
use confguard_loader::load_path;

use crate::cli::{Cli, OutputFormat};

pub fn run_compare(cli: Cli) -> anyhow::Result<()> {
    let left = load_path(&cli.file1)
        .with_context(|| format!("failed to load {}", cli.file1.display()))?;
    let right = load_path(&cli.file2)
        .with_context(|| format!("failed to load {}", cli.file2.display()))?;

    let report = compare(&left, &right);

    let rendered = match cli.format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
    };

    match cli.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => print!("{rendered}"),
    }

    if let Some(path) = &cli.output {
        fs::write(path, &rendered)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "diff report saved");
    }

    Ok(())
}

fn print_text(report: &DiffReport) {
    if report.is_empty() {
        println!("{} Configurations are consistent.", "✓".green().bold());
        return;
    }

    let sections = [
        ("Missing keys", &report.missing_keys),
        ("Extra keys", &report.extra_keys),
        ("Mismatched values", &report.mismatched_values),
    ];
    for (title, partition) in sections {
        println!("{}:", title.bold());
        if partition.is_empty() {
            println!("  {}", "None".dimmed());
        } else {
            print!("{}", render::partition_to_text(partition, 1));
        }
    }
    println!(
        "\n{} missing, {} extra, {} mismatched",
        report.missing_count().to_string().red(),
        report.extra_count().to_string().yellow(),
        report.mismatch_count().to_string().cyan(),
    );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn cli(file1: PathBuf, file2: PathBuf) -> Cli {
        Cli {
            file1,
            file2,
            format: OutputFormat::Text,
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn compares_yaml_against_ini() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_file(&dir, "a.yaml", "server:\n  host: web\n");
        let right = write_file(&dir, "b.ini", "[server]\nhost = web\n");
        run_compare(cli(left, right)).unwrap();
    }

    #[test]
    fn missing_file_fails_with_path_context() {
        let dir = tempfile::tempdir().unwrap();
        let present = write_file(&dir, "a.yaml", "k: 1\n");
        let absent = dir.path().join("absent.yaml");
        let err = run_compare(cli(present, absent.clone())).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn writes_text_report_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_file(&dir, "a.yaml", "k: 1\n");
        let right = write_file(&dir, "b.yaml", "k: 2\n");
        let out = dir.path().join("report.txt");

        let mut args = cli(left, right);
        args.output = Some(out.clone());
        run_compare(args).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("Mismatched values:"));
        assert!(written.contains("k: left = 1, right = 2"));
    }

    #[test]
    fn writes_json_report_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_file(&dir, "a.yaml", "k: 1\n");
        let right = write_file(&dir, "b.yaml", "k: 2\n");
        let out = dir.path().join("report.json");

        let mut args = cli(left, right);
        args.format = OutputFormat::Json;
        args.output = Some(out.clone());
        run_compare(args).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            json["mismatched_values"]["k"],
            serde_json::json!({"left": 1, "right": 2})
        );
    }

    #[test]
    fn malformed_file_aborts_before_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_file(&dir, "a.yaml", "k: 1\n");
        let right = write_file(&dir, "b.yaml", "a: [unclosed\n");
        assert!(run_compare(cli(left, right)).is_err());
    }
}
