//! figwind - convert a design scene graph to utility-class markup
//!
//! Usage:
//!   figwind scene.json
//!   figwind --jsx --registry components.json --pretty scene.json -o Scene.jsx
//!   cat scene.json | figwind --instances placeholder
//!
//! Logs go to stderr and are controlled with `RUST_LOG` (default `warn`).

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use figwind_core::SceneNode;
use figwind_emit::{indent_markup, EmitOptions, InstanceMode, NodeMapper, DEFAULT_MAX_DEPTH};
use figwind_registry::{ComponentBuilder, ComponentRegistry};

#[derive(Parser, Debug)]
#[command(name = "figwind")]
#[command(version)]
#[command(about = "Convert design scene JSON to HTML or JSX with utility classes")]
struct Cli {
    /// Scene JSON file (reads stdin if absent or `-`)
    input: Option<PathBuf>,

    /// Write markup to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit JSX (`className`, object styles) instead of HTML
    #[arg(long)]
    jsx: bool,

    /// How component instances are rendered
    #[arg(long, value_enum, default_value = "registry")]
    instances: InstancesArg,

    /// Replace subtrees at this depth or deeper with a placeholder
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Indent nested elements, one per line
    #[arg(long)]
    pretty: bool,

    /// Component registry JSON file
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Register a component by name (repeatable)
    #[arg(long = "component", value_name = "NAME")]
    components: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum InstancesArg {
    /// Self-closing component tags for registered components
    Registry,
    /// Dashed placeholders sized like the instance
    Placeholder,
    /// Render instances as frames and visit their children
    Traverse,
}

impl From<InstancesArg> for InstanceMode {
    fn from(arg: InstancesArg) -> Self {
        match arg {
            InstancesArg::Registry => InstanceMode::Registry,
            InstancesArg::Placeholder => InstanceMode::Placeholder,
            InstancesArg::Traverse => InstanceMode::Traverse,
        }
    }
}

impl Cli {
    fn options(&self) -> EmitOptions {
        let options = if self.jsx {
            EmitOptions::jsx()
        } else {
            EmitOptions::default()
        };
        options
            .with_instances(self.instances.into())
            .with_max_depth(self.max_depth)
    }

    fn build_registry(&self) -> Result<ComponentRegistry> {
        let mut registry = match &self.registry {
            Some(path) => ComponentRegistry::load(path)
                .with_context(|| format!("Failed to load registry {}", path.display()))?,
            None => ComponentRegistry::new(),
        };
        for name in &self.components {
            registry
                .try_register(ComponentBuilder::new(name).build())
                .with_context(|| format!("Invalid --component {name}"))?;
        }
        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut names: Vec<&str> = registry.names().collect();
            names.sort_unstable();
            tracing::debug!(count = names.len(), components = ?names, "registry ready");
        }
        Ok(registry)
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Convert scene JSON text to markup.
fn render(cli: &Cli, text: &str) -> Result<String> {
    let registry = cli.build_registry()?;
    let node = SceneNode::from_json(text).context("Invalid JSON")?;
    let markup = NodeMapper::new(&registry)
        .with_options(cli.options())
        .emit(&node, None);
    Ok(if cli.pretty {
        indent_markup(&markup)
    } else {
        markup
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let text = read_input(cli.input.as_deref())?;
    let markup = render(&cli, &text)?;

    match &cli.output {
        Some(path) => fs::write(path, format!("{markup}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{markup}").context("Failed to write stdout")?;
        }
    }
    Ok(())
}
