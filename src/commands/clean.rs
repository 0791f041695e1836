use std::path::Path;

use pagesmith::config::Settings;
use pagesmith::pipeline::FinalPages;

use crate::CleanArgs;

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let settings = Settings::load_from_arg(args.config_file.as_deref())?;
    let output = &settings.output;

    if !output.exists() {
        println!("Nothing to clean at {}", output.display());
        return Ok(());
    }

    // Only the generated pages are removed; the directory goes too once empty.
    for filename in FinalPages::FILENAMES {
        let page = output.join(filename);
        if !page.exists() {
            continue;
        }
        if args.dry_run {
            println!("Would delete {}", page.display());
        } else {
            tokio::fs::remove_file(&page).await?;
            println!("Deleted {}", page.display());
        }
    }

    if !args.dry_run && is_empty_dir(output).await? {
        tokio::fs::remove_dir(output).await?;
        println!("Deleted {}", output.display());
    }

    Ok(())
}

async fn is_empty_dir(dir: &Path) -> Result<bool, std::io::Error> {
    Ok(tokio::fs::read_dir(dir).await?.next_entry().await?.is_none())
}
