use brook::{Arguments, Engine, FileLoader, Locale};
use clap::Parser;

/// brook renders locale-aware text templates from a per-locale template
/// root.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Logical template path, resolved as <root>/<locale>/<path>.
    template: String,

    /// Directory containing one sub-directory of templates per locale.
    #[arg(short, long, default_value = "templates")]
    root: String,

    /// Locale to render in. Defaults to the configured default locale.
    #[arg(short, long)]
    locale: Option<String>,

    /// Plain text argument, as key=value. May be repeated.
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Condition argument, as key=true or key=false. May be repeated.
    #[arg(short, long = "cond", value_name = "KEY=BOOL")]
    cond: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let mut arguments = Arguments::new();

    for pair in &args.set {
        let (key, value) = split_pair(pair);
        arguments.add(key, value);
    }

    for pair in &args.cond {
        let (key, value) = split_pair(pair);
        match value {
            "true" => arguments.add(key, true),
            "false" => arguments.add(key, false),
            other => {
                eprintln!("Condition '{key}' must be true or false, found '{other}'.");
                std::process::exit(1);
            },
        }
    }

    let engine = Engine::new(FileLoader::new(&args.root));
    let locale = args.locale
                     .as_deref()
                     .map_or_else(|| engine.configuration().default_locale().clone(), Locale::from);

    match engine.render_path(&args.template, &locale, &arguments) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or_else(|| {
                            eprintln!("Arguments must have the form key=value, found '{pair}'.");
                            std::process::exit(1);
                        })
}
