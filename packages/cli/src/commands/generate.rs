use crate::config::Config;
use crate::manifest::Project;
use anyhow::{anyhow, Result};
use autoface_classifier::{SynthesisRequest, WellKnownAwaitables};
use autoface_emitter::{GeneratedSource, Generator};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

pub fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    let config = Config::load(&root)?;
    let src_dir = config.get_src_dir(&root);

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    println!("{}", "🔨 Generating interfaces...".bright_blue().bold());

    let project = Project::load(&src_dir, &config.manifest_suffix)?;

    if project.requests.is_empty() {
        println!("{}", "⚠️  No synthesis requests found".yellow());
        return Ok(());
    }

    println!(
        "Found {} requests in {} manifests",
        project.requests.len(),
        project.manifests.len()
    );

    let out_dir = match &args.out_dir {
        Some(dir) => root.join(dir),
        None => config.get_out_dir(&root),
    };

    let shapes = WellKnownAwaitables::new();
    let generator = Generator::new(&project.catalog, &shapes).with_options(config.emit_options());

    let mut success_count = 0;
    let mut error_count = 0;

    for request in &project.requests {
        let result = generator
            .generate(request)
            .map_err(anyhow::Error::from)
            .and_then(|source| write_source(&source, &out_dir, args.stdout).map(|dest| (source, dest)));

        match result {
            Ok((source, dest)) => {
                success_count += 1;
                if !args.stdout {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        describe(request),
                        dest.display()
                    );
                }
                debug!(hint_name = %source.hint_name, "Request complete");
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    describe(request),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Generated {} interfaces successfully",
            "✅".green(),
            success_count
        );
        Ok(())
    } else {
        println!(
            "{} Generated {} interfaces, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
        Err(anyhow!(
            "{} of {} requests failed",
            error_count,
            project.requests.len()
        ))
    }
}

fn write_source(source: &GeneratedSource, out_dir: &Path, stdout: bool) -> Result<PathBuf> {
    if stdout {
        println!("// {}", source.hint_name);
        println!("{}", source.text);
        return Ok(PathBuf::from(&source.hint_name));
    }

    fs::create_dir_all(out_dir)?;
    let dest = out_dir.join(&source.hint_name);
    fs::write(&dest, &source.text)?;
    Ok(dest)
}

fn describe(request: &SynthesisRequest) -> String {
    match &request.target {
        Some(target) => format!("{} ({}) as {}", request.source, request.target_kind, target.name),
        None => format!("{} ({})", request.source, request.target_kind),
    }
}
