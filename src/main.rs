// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod document;
mod error;
mod params;
mod process;
mod render;
mod sanitize;
mod templatize;

#[cfg(test)]
mod tests;

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{anyhow, Context, Error};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    params::CollisionPolicy,
    process::{render_yaml_str, templatize_yaml_str},
    templatize::{TemplatizeOptions, DEFAULT_ELEMENTS_KEY, DEFAULT_SITES_KEY},
};

#[derive(Parser)]
#[command(name = "yaml-templatize")]
#[command(about = "Turn a site configuration export into a template and a parameter table", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace every value with a placeholder and write the parameters as CSV
    Templatize {
        /// Configuration export to templatize
        input: PathBuf,

        /// Template output path [default: <input stem>.jinja]
        #[arg(short, long)]
        template_out: Option<PathBuf>,

        /// Parameter table output path [default: <input stem>.csv]
        #[arg(short, long)]
        params_out: Option<PathBuf>,

        /// Blank out null values instead of turning them into parameters
        #[arg(long)]
        ignore_nulls: bool,

        /// Fail when two values would share a parameter name
        #[arg(long)]
        fail_on_collision: bool,

        /// Top-level key holding the sites
        #[arg(long, default_value = DEFAULT_SITES_KEY)]
        sites_key: String,

        /// Per-site key holding the elements
        #[arg(long, default_value = DEFAULT_ELEMENTS_KEY)]
        elements_key: String,
    },

    /// Fill a template from a parameter table, one document per row
    Render {
        /// Template produced by `templatize`
        template: PathBuf,

        /// CSV parameter table
        params: PathBuf,

        /// Output path [default: stdout]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yaml_templatize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Templatize {
            input,
            template_out,
            params_out,
            ignore_nulls,
            fail_on_collision,
            sites_key,
            elements_key,
        } => {
            let on_collision = if fail_on_collision {
                CollisionPolicy::Fail
            } else {
                CollisionPolicy::Overwrite
            };
            let options = TemplatizeOptions {
                ignore_nulls,
                on_collision,
                sites_key,
                elements_key,
            };
            let template_out = template_out.unwrap_or_else(|| input.with_extension("jinja"));
            let params_out = params_out.unwrap_or_else(|| input.with_extension("csv"));
            run_templatize(&input, &template_out, &params_out, &options)
        }
        Commands::Render {
            template,
            params,
            output,
        } => run_render(&template, &params, output.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_templatize(
    input: &Path,
    template_out: &Path,
    params_out: &Path,
    options: &TemplatizeOptions,
) -> Result<(), Error> {
    check_output_paths(input, template_out, params_out)?;

    let input_str = read_file(input)?;
    let output = templatize_yaml_str(&input_str, options)
        .with_context(|| format!("failed to templatize {}", input.display()))?;

    write_file(template_out, &output.template_yaml)?;
    write_file(params_out, &output.params_csv)?;
    info!(
        template = %template_out.display(),
        params = %params_out.display(),
        count = output.param_count,
        "wrote template and parameters"
    );
    Ok(())
}

fn run_render(template: &Path, params: &Path, output: Option<&Path>) -> Result<(), Error> {
    let template_str = read_file(template)?;
    let params_str = read_file(params)?;
    let rendered = render_yaml_str(&template_str, &params_str)
        .with_context(|| format!("failed to render {}", template.display()))?;

    match output {
        Some(output) => {
            write_file(output, &rendered)?;
            info!(output = %output.display(), "wrote rendered documents");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Refuses output paths that would overwrite the input or each other.
fn check_output_paths(input: &Path, template_out: &Path, params_out: &Path) -> Result<(), Error> {
    if same_file(template_out, input) {
        return Err(anyhow!("template output {} would overwrite the input", template_out.display()));
    }
    if same_file(params_out, input) {
        return Err(anyhow!("parameter output {} would overwrite the input", params_out.display()));
    }
    if same_file(template_out, params_out) {
        return Err(anyhow!("template and parameter outputs are both {}", template_out.display()));
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn read_file(filename: &Path) -> Result<String, Error> {
    fs::read_to_string(filename).with_context(|| format!("failed to read {}", filename.display()))
}

fn write_file(filename: &Path, contents: &str) -> Result<(), Error> {
    fs::write(filename, contents).with_context(|| format!("failed to write {}", filename.display()))
}
