use std::fs;
use std::process;

#[macro_use]
mod log;

use cli::{parse_args, Commands};
use env_logger::Env;
use models::Severity;
use report::template::format_date;
use report::{Palette, Preparer, ReportData, Snapshot};

fn main() {
    let args = parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args.command) {
        error!("{e}");
        process::exit(1);
    }
}

/// `RUST_LOG` still wins over `-v` when it is set.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Prepare { snapshot, palette, output, timezone, date_style } => {
            let palette = match palette {
                Some(path) => Palette::load(&path)?,
                None => Palette::default(),
            };

            let snapshot = Snapshot::load(&snapshot)?;
            info!(
                "Preparing {} vulnerability(ies) for {}",
                snapshot.vulnerabilities.len(),
                snapshot.assessment.name
            );

            let data = snapshot.into_report(&Preparer::new(palette));

            match output {
                Some(path) => {
                    fs::write(&path, serde_json::to_string_pretty(&data)?)?;
                    success!("Report data written to {path}");
                }
                None => {
                    if let Some(at) = &data.delivery_date_time {
                        info!("Delivery date: {}", format_date(at, timezone.as_deref(), date_style.as_deref()));
                    }
                    print_summary(&data);
                }
            }
        }

        Commands::Palette {} => {
            println!("{}", serde_json::to_string_pretty(&Palette::default())?);
        }
    }

    Ok(())
}

fn print_summary(data: &ReportData) {
    match data.max_version {
        Some(version) => info!("Max CVSS version: {version}"),
        None => info!("Max CVSS version: none enabled"),
    }

    for (version, vector) in &data.max_cvss {
        info!("CVSS {version}: max {:.1} [{}] {}", vector.score, vector.severity, vector.vector);
    }

    for (version, counts) in &data.vulnerabilities_overview {
        if !data.max_cvss.contains_key(version) {
            continue;
        }
        let row: Vec<String> = Severity::ALL
            .iter()
            .map(|s| format!("{s} {}", counts.get(s).copied().unwrap_or(0)))
            .collect();
        info!("CVSS {version} overview: {}", row.join(", "));
    }

    for (target, count) in &data.targets_category_counter {
        info!("Target {target}: {count} finding(s)");
    }

    for (source, counter) in &data.owasp_counter {
        info!("Source {source}: {} categor(ies)", counter.total);
    }

    let colored = data
        .vulnerabilities
        .iter()
        .flat_map(|v| &v.poc.items)
        .flat_map(|i| i.request_highlighted.iter().chain(&i.response_highlighted).chain(&i.text_highlighted))
        .filter(|run| run.is_highlighted())
        .count();
    info!("PoC highlights: {colored} colored run(s)");

    success!("Prepared {} vulnerability(ies)", data.vulnerabilities.len());
}
