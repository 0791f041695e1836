use std::path::Path;

use pagesmith::RawProductRecord;
use pagesmith::config::{DEFAULT_CONFIG_FILE, Settings};

use crate::InitArgs;

const SAMPLE_PRODUCT: &str = r#"name: GlowBoost Vitamin C Serum
concentration: 10% Vitamin C
skin_type:
  - Oily
  - Combination
ingredients:
  - Vitamin C
  - Hyaluronic Acid
benefits:
  - Brightening
  - Fades dark spots
usage: Apply 2–3 drops in the morning before sunscreen
side_effects: Mild tingling for sensitive skin
price: ₹699
"#;

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    let settings = Settings::default();
    let config_file = path.join(DEFAULT_CONFIG_FILE);
    let product_file = path.join(&settings.input);

    for file in [&config_file, &product_file] {
        refuse_overwrite(file)?;
    }

    println!("Initializing project in {}", path.display());

    // The sample must stay loadable by `build`.
    RawProductRecord::from_yaml_str(SAMPLE_PRODUCT)?;

    let config_text = serde_yaml::to_string(&settings)?;
    tokio::fs::write(&config_file, config_text).await?;
    println!("Created config file {}", config_file.display());

    tokio::fs::write(&product_file, SAMPLE_PRODUCT).await?;
    println!("Created sample product {}", product_file.display());

    Ok(())
}

fn refuse_overwrite(file: &Path) -> Result<(), anyhow::Error> {
    if file.exists() {
        return Err(anyhow::anyhow!(
            "Refusing to overwrite existing file {}",
            file.display()
        ));
    }
    Ok(())
}
