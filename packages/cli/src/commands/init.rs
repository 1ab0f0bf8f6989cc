use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

pub const EXAMPLE_MANIFEST_NAME: &str = "example.types.json";

const EXAMPLE_MANIFEST: &str = r#"{
  "types": [
    {
      "namespace": "Sample",
      "name": "Clock",
      "kind": "class",
      "accessibility": "public",
      "members": [
        {
          "member": "property",
          "name": "Now",
          "type": { "kind": "named", "namespace": "System", "name": "DateTime" },
          "getter": "public",
          "accessibility": "public"
        },
        {
          "member": "method",
          "name": "Reset",
          "returnType": { "kind": "void" },
          "accessibility": "public"
        },
        {
          "member": "method",
          "name": "WaitAsync",
          "returnType": { "kind": "named", "namespace": "System.Threading.Tasks", "name": "Task" },
          "parameters": [
            { "name": "milliseconds", "type": { "kind": "named", "namespace": "System", "name": "int" } }
          ],
          "accessibility": "public"
        }
      ]
    },
    { "namespace": "Sample", "name": "Unit", "kind": "struct", "accessibility": "public" }
  ],
  "requests": [
    {
      "source": "Sample.Clock",
      "target": { "name": "ITimeSource", "namespace": "Sample" },
      "targetKind": "instance",
      "implement": true,
      "unitType": "Sample.Unit"
    },
    {
      "source": "Sample.Clock",
      "targetKind": "extract"
    }
  ]
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Autoface project...".bright_blue().bold());

    let config = Config::default();

    let src_dir = config.get_src_dir(cwd);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), config.src_dir);
    }

    let example_file = src_dir.join(EXAMPLE_MANIFEST_NAME);
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_MANIFEST)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_MANIFEST_NAME);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/{}", config.src_dir, EXAMPLE_MANIFEST_NAME);
    println!("  2. Run: autoface generate");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
