use clap::{ArgAction, Parser, Subcommand};
use framehtml_codegen::ExportOptions;
use framehtml_scene::{locate, SceneGraph};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "framehtml")]
#[command(about = "framehtml — export linked design frames to static HTML")]
#[command(version)]
struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a frame of a scene snapshot to an .html file
    Build {
        /// Scene snapshot (.json)
        path: String,

        /// Output file (defaults to <stem>.html next to the input)
        #[arg(short, long)]
        output: Option<String>,

        /// Page index
        #[arg(long)]
        page: Option<usize>,

        /// Frame index within the page's exportable frames
        #[arg(long)]
        frame: Option<usize>,

        /// TOML file with export options
        #[arg(long)]
        config: Option<String>,
    },

    /// List the exportable frames of a scene snapshot
    List {
        /// Scene snapshot (.json)
        path: String,
    },

    /// Check that a scene snapshot loads and has an exportable frame
    Check {
        /// Scene snapshot (.json)
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Build {
            path,
            output,
            page,
            frame,
            config,
        } => cmd_build(&path, output.as_deref(), page, frame, config.as_deref()),
        Command::List { path } => cmd_list(&path),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_file(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_scene(path: &str) -> SceneGraph {
    let source = read_file(path);
    match SceneGraph::from_json(&source) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Scene error: {e}");
            std::process::exit(1);
        }
    }
}

fn load_options(config: Option<&str>) -> ExportOptions {
    let Some(path) = config else {
        return ExportOptions::default();
    };
    match toml::from_str(&read_file(path)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Config error in {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Command-line indices override the config file.
fn resolve_options(
    mut options: ExportOptions,
    page: Option<usize>,
    frame: Option<usize>,
) -> ExportOptions {
    if let Some(page) = page {
        options.page = page;
    }
    if let Some(frame) = frame {
        options.frame = frame;
    }
    options
}

fn output_path(input: &str, output: Option<&str>) -> PathBuf {
    if let Some(output) = output {
        return PathBuf::from(output);
    }
    let input = Path::new(input);
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("frame");
    let dir = input.parent().unwrap_or(Path::new("."));
    dir.join(format!("{stem}.html"))
}

fn cmd_build(
    path: &str,
    output: Option<&str>,
    page: Option<usize>,
    frame: Option<usize>,
    config: Option<&str>,
) {
    let graph = load_scene(path);
    let options = resolve_options(load_options(config), page, frame);
    log::debug!("export options: {options:?}");

    let html = match framehtml_codegen::export(&graph, &options) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Export error: {e}");
            std::process::exit(1);
        }
    };

    let html_path = output_path(path, output);
    if let Err(e) = std::fs::write(&html_path, &html) {
        eprintln!("Error writing {}: {e}", html_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {}", html_path.display());
}

fn cmd_list(path: &str) {
    let graph = load_scene(path);
    let frames = locate::exportable_frames(&graph);

    if frames.is_empty() {
        eprintln!("No exportable frames in {path}");
        return;
    }

    for f in frames {
        println!(
            "page {} ({}) frame {}: {} -> {}",
            f.page_index, f.page_name, f.frame_index, f.link.text, f.link.target
        );
    }
}

fn cmd_check(path: &str) {
    let graph = load_scene(path);

    if let Err(e) = framehtml_codegen::export_first_frame(&graph) {
        eprintln!("Export error: {e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}
