//! bench-annotate - prints source files with their benchmarks highlighted

use anyhow::{Context, Result};
use bench_annotate::editor::{SingleEditor, TabbedEditor};
use bench_annotate::settings::{create_annotator_settings_registry, AnnotatorOptions};
use bench_annotate::source::{load_sources, SourceBuffer};
use bench_annotate::term::{Size, TerminalSink};
use clap::Parser;
use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "bench-annotate", version, about)]
struct Cli {
    /// Benchmark names in reported order, comma separated
    #[arg(short, long, value_delimiter = ',')]
    names: Vec<String>,

    /// Option assignment such as `sentinel=Noop`; may be repeated
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    settings: Vec<String>,

    /// Source files; more than one opens them as tabs
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn terminal_size() -> Option<Size> {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, rows)| Size { rows, cols })
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let registry = create_annotator_settings_registry();
    let mut options = AnnotatorOptions::default();
    for assignment in &cli.settings {
        registry
            .apply_assignment(&mut options, assignment)
            .with_context(|| format!("invalid option `{assignment}`"))?;
    }

    let buffers = load_sources(&cli.files)?;
    let names: Arc<[String]> = cli.names.into();

    if let [buffer] = buffers.as_slice() {
        render_single(buffer, names, &options, &cli.files[0])
    } else {
        render_tabs(buffers, names, &options, &cli.files)
    }
}

fn render_single(
    buffer: &SourceBuffer,
    names: Arc<[String]>,
    options: &AnnotatorOptions,
    path: &Path,
) -> Result<()> {
    let mut editor: SingleEditor<TerminalSink<Stdout>> =
        SingleEditor::new(Arc::clone(&buffer.text), options);
    editor.mount(TerminalSink::new(stdout()));
    if let Some(size) = terminal_size() {
        editor.on_resize(size);
    }
    editor.on_identifiers_changed(names);

    let text = Arc::clone(&buffer.text);
    if let Some(sink) = editor.sink_mut() {
        sink.render(Some(&path.display().to_string()), &text)?;
    }
    editor.unmount();
    Ok(())
}

fn render_tabs(
    buffers: Vec<SourceBuffer>,
    names: Arc<[String]>,
    options: &AnnotatorOptions,
    paths: &[PathBuf],
) -> Result<()> {
    let mut editor: TabbedEditor<TerminalSink<Stdout>> =
        TabbedEditor::new(buffers.iter().map(|b| Arc::clone(&b.text)), options)?;
    editor.mount_with(|_| TerminalSink::new(stdout()));
    if let Some(size) = terminal_size() {
        editor.on_resize(size);
    }
    editor.on_identifiers_changed(names);

    for (index, path) in paths.iter().enumerate() {
        let Some(tab) = editor.tab_mut(index) else {
            continue;
        };
        let text = Arc::clone(&tab.buffer().text);
        if let Some(sink) = tab.sink_mut() {
            sink.render(Some(&path.display().to_string()), &text)?;
        }
    }
    editor.unmount();
    Ok(())
}
