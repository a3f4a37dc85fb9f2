use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use studio_ui::{
    ActionSequence, AtlasSet, Diagnostic, Document, FontLibrary, LoaderOpts, MemorySink,
    TextureAtlas, UiLoader, UiScene, WidgetId,
};

#[derive(Parser, Debug)]
#[command(name = "studio-ui", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a UI export and print its widget tree, actions, and diagnostics.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input UI export JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Texture atlas file; repeat to search several atlases in order.
    #[arg(long = "atlas")]
    atlases: Vec<PathBuf>,

    /// TrueType font available to text widgets, as `NAME=PATH`.
    #[arg(long = "font", value_parser = parse_font)]
    fonts: Vec<(String, PathBuf)>,

    /// Font used when a text widget names none or an unknown one.
    #[arg(long)]
    default_font: Option<PathBuf>,

    /// Print a JSON summary instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log at debug level.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn parse_font(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got '{s}'")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    init_tracing(args.verbose);

    let doc = Document::from_path(&args.in_path)
        .with_context(|| format!("read ui export '{}'", args.in_path.display()))?;

    let mut atlases = AtlasSet::new();
    for path in &args.atlases {
        let atlas = TextureAtlas::load(path)
            .with_context(|| format!("load atlas '{}'", path.display()))?;
        atlases.push(atlas);
    }

    let mut fonts = FontLibrary::new();
    for (name, path) in args.fonts {
        fonts = fonts.with_ttf(name, path);
    }
    if let Some(path) = args.default_font {
        fonts = fonts.with_default_font(path);
    }

    let sink = MemorySink::new();
    let opts = LoaderOpts::default()
        .with_atlases(atlases)
        .with_fonts(fonts)
        .with_sink(sink.clone());
    let scene = UiLoader::new(opts)
        .build(&doc)
        .with_context(|| format!("build ui export '{}'", args.in_path.display()))?;

    let diagnostics = sink.entries();
    if args.json {
        let summary = Summary::new(&scene, &diagnostics);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_text(&scene, &diagnostics);
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct WidgetRow<'a> {
    id: usize,
    depth: usize,
    kind: &'a str,
    content: &'static str,
    name: &'a str,
    action_tag: i32,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(serde::Serialize)]
struct Summary<'a> {
    widgets: Vec<WidgetRow<'a>>,
    actions: BTreeMap<i32, &'a ActionSequence>,
    diagnostics: &'a [Diagnostic],
}

impl<'a> Summary<'a> {
    fn new(scene: &'a UiScene, diagnostics: &'a [Diagnostic]) -> Self {
        let widgets = match scene.root_id() {
            Some(root) => scene
                .tree()
                .descendants(root)
                .into_iter()
                .filter_map(|id| row(scene, id))
                .collect(),
            None => Vec::new(),
        };
        Self {
            widgets,
            actions: scene.actions().iter().map(|(k, v)| (*k, v)).collect(),
            diagnostics,
        }
    }
}

fn row(scene: &UiScene, id: WidgetId) -> Option<WidgetRow<'_>> {
    let w = scene.widget(id)?;
    let p = &w.placement;
    Some(WidgetRow {
        id: id.index(),
        depth: scene.tree().depth(id),
        kind: &w.kind,
        content: w.content.label(),
        name: &w.name,
        action_tag: w.action_tag,
        x: p.position.x,
        y: p.position.y,
        width: p.size.width,
        height: p.size.height,
        visible: w.visible,
        text: w.content.text(),
    })
}

fn print_text(scene: &UiScene, diagnostics: &[Diagnostic]) {
    let summary = Summary::new(scene, diagnostics);
    println!("widgets ({}):", summary.widgets.len());
    for r in &summary.widgets {
        let indent = "  ".repeat(r.depth + 1);
        let mut line = format!(
            "{indent}{} '{}' [{}] at ({}, {}) size {}x{}",
            r.kind, r.name, r.content, r.x, r.y, r.width, r.height
        );
        if r.action_tag != 0 {
            line.push_str(&format!(" action_tag={}", r.action_tag));
        }
        if let Some(text) = r.text {
            line.push_str(&format!(" text={text:?}"));
        }
        if !r.visible {
            line.push_str(" hidden");
        }
        println!("{line}");
    }

    println!("actions ({}):", summary.actions.len());
    for (tag, seq) in &summary.actions {
        println!(
            "  tag {tag}: {} steps, {:.3}s",
            seq.len(),
            seq.total_duration()
        );
    }

    println!("diagnostics ({}):", diagnostics.len());
    for d in diagnostics {
        println!("  {d}");
    }
}
