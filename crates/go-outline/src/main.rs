use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use go_outline::outline::OutlineResult;
use go_outline::{LineIndex, outline, syntax};

#[derive(Parser, Debug)]
#[command(name = "go-outline", version, about)]
struct Args {
    /// Go source file to outline
    file: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("go_outline=debug")
    } else {
        EnvFilter::new("go_outline=warn")
    };

    // Logs go to stderr only; stdout carries exactly one JSON document.
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    let Some(path) = args.file else {
        emit(&OutlineResult::from_error("usage: go-outline <file.go>"));
        std::process::exit(1);
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            emit(&OutlineResult::from_error(format!("parse error: {err}")));
            std::process::exit(1);
        }
    };

    debug!("parsing {} ({} bytes)", path.display(), source.len());

    let file = match syntax::parse(&source) {
        Ok(file) => file,
        Err(err) => {
            emit(&OutlineResult::from_error(format!("parse error: {err}")));
            std::process::exit(1);
        }
    };

    let lines = LineIndex::new(&source);
    let result = outline::produce_outline(&file, &lines);
    emit(&result);
}

fn emit(result: &OutlineResult) {
    if let Ok(json) = serde_json::to_string(result) {
        println!("{json}");
    }
}
