use std::path::Path;

use pagesmith::config::Settings;
use pagesmith::output::{render_pages, write_pages};
use pagesmith::{Pipeline, RawProductRecord};
use tracing::debug;

use crate::BuildArgs;

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let mut settings = Settings::load_from_arg(args.config_file.as_deref())?;

    // Command line flags win over the config file and environment.
    let cwd = std::env::current_dir()?;
    if let Some(input) = &args.input {
        settings.input = cwd.join(input);
    }
    if let Some(output) = &args.output {
        settings.output = cwd.join(output);
    }
    if args.compact {
        settings.pretty = false;
    }
    debug!(?settings, "resolved settings");

    let content = tokio::fs::read_to_string(&settings.input)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", settings.input.display()))?;
    let raw = RawProductRecord::parse_for_path(&settings.input, &content)?;

    let pipeline = Pipeline::new();
    let pages = pipeline.run(raw)?;
    println!("{}", stage_summary(&pipeline, &settings.input));

    let rendered = render_pages(&pages, settings.pretty)?;
    let written = write_pages(&settings.output, &rendered)?;
    for path in &written {
        println!("  - {}", path.display());
    }

    let display_output = settings
        .output
        .canonicalize()
        .unwrap_or(settings.output.clone());
    println!(
        "Wrote {} page(s) to {} ({} questions)",
        written.len(),
        display_output.display(),
        pages.faq.content.total_questions
    );

    Ok(())
}

fn stage_summary(pipeline: &Pipeline, input: &Path) -> String {
    format!(
        "Ran {} stage(s) on {}",
        pipeline.stage_names().len(),
        input.display()
    )
}
