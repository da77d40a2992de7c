// crates/ewp2cmake-cli/src/main.rs
//! Command line front end: converts one `.ewp` project into `CMakeLists.txt`.
//!
//! Usage:
//!   ewp2cmake path/to/project.ewp --toolchain iar --templates templates
//!
//! The IAR VS Code extension must have imported the project first, so that
//! `.vscode/iar-vsc.json` next to the descriptor names the workbench install.
//! Set `RUST_LOG=debug` to see how each option is routed.

use clap::Parser;
use ewp2cmake::{DirTemplateStore, ExtractOptions, Toolchain};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug, Clone)]
#[command(name = "ewp2cmake", version, about = "Converts IAR Embedded Workbench projects to CMake")]
struct Options {
    /// The `.ewp` project descriptor.
    descriptor: PathBuf,

    /// Target toolchain: `clang` or `iar`.
    #[arg(short, long, default_value = "iar")]
    toolchain: String,

    /// Directory holding the `CMakeLists*.tmpl` templates.
    #[arg(long, default_value = "templates")]
    templates: PathBuf,

    /// Build configuration to read (defaults to the first one).
    #[arg(short, long)]
    configuration: Option<String>,

    /// Print the extracted project settings before rendering.
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    match run(&options) {
        Ok(path) => {
            info!("Generated {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<PathBuf, ewp2cmake::EwpError> {
    // Reject the toolchain before touching any file.
    let toolchain: Toolchain = options.toolchain.parse()?;
    let extract_options = ExtractOptions {
        configuration: options.configuration.clone(),
    };

    let project = ewp2cmake::load_project(&options.descriptor, &extract_options)?;
    if options.summary {
        for line in project.to_string().lines() {
            info!("{}", line);
        }
    }

    let store = DirTemplateStore::new(&options.templates);
    let text = ewp2cmake::render_project(&project, toolchain, &store)?;
    ewp2cmake::write_output(&options.descriptor, &text)
}
