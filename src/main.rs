//! Infographic CLI
//!
//! Usage:
//!   infographic [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --theme <THEME>        light or dark
//!   -c, --scheme <SCHEME>      Color scheme name
//!   -s, --stylesheet <FILE>    Stylesheet file with extra or replaced schemes (TOML format)
//!   -a, --animations           Mark the output as animated
//!   -f, --fragment             Emit the HTML fragment without the document shell
//!       --data-url             Emit a base64 data URL instead of markup
//!   -l, --lint                 Report lint findings and exit
//!       --templates            List the known templates
//!   -g, --grammar              Show DSL reference
//!   -d, --debug                Log the visual tree to stderr
//!   -h, --help                 Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infographic::layout::lint;
use infographic::template::VALID_TEMPLATES;
use infographic::{
    parse, render_with_config, template_category, to_data_url, ColorScheme, HtmlConfig,
    RenderConfig, RenderError, RenderOptions, Stylesheet, ThemeMode,
};

#[derive(Parser)]
#[command(name = "infographic")]
#[command(about = "Render infographic DSL documents to HTML")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Light or dark theme
    #[arg(short, long, default_value = "light")]
    theme: ThemeMode,

    /// Color scheme (default, antv, catppuccin, github, dracula, nord)
    #[arg(short = 'c', long, default_value = "default")]
    scheme: ColorScheme,

    /// Stylesheet file for color schemes (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Add the animated class to the output
    #[arg(short, long)]
    animations: bool,

    /// Emit only the HTML fragment
    #[arg(short, long)]
    fragment: bool,

    /// Emit a base64 data URL
    #[arg(long)]
    data_url: bool,

    /// Report lint findings instead of rendering
    #[arg(short, long)]
    lint: bool,

    /// List the known templates by category
    #[arg(long)]
    templates: bool,

    /// Show DSL reference
    #[arg(short, long)]
    grammar: bool,

    /// Debug mode: log the visual tree
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug { "infographic=debug" } else { "infographic=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Handle documentation flags first
    if cli.grammar {
        print_grammar();
        return;
    }

    if cli.templates {
        print_templates();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.lint {
        run_lint(&source, &filename);
        return;
    }

    let config = RenderConfig::new()
        .with_options(
            RenderOptions::new()
                .with_theme(cli.theme)
                .with_animations(cli.animations)
                .with_color_scheme(cli.scheme),
        )
        .with_html(HtmlConfig::new().with_standalone(!cli.fragment))
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);

    match render_with_config(&source, &config) {
        Ok(html) if cli.data_url => println!("{}", to_data_url(&html, "text/html")),
        Ok(html) => println!("{}", html),
        Err(RenderError::Parse(e)) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

fn run_lint(source: &str, filename: &str) {
    let doc = match parse(source) {
        Ok(doc) => doc,
        Err(e) => {
            eprint!("{}", e.format(source, filename));
            std::process::exit(1);
        }
    };

    let warnings = lint::check(&doc);
    if warnings.is_empty() {
        println!("{}: no issues found", filename);
        return;
    }
    for warning in &warnings {
        println!("{}: {}", filename, warning);
    }
    std::process::exit(2);
}

fn print_intro() {
    println!(
        r#"Infographic - render infographic DSL documents to HTML

USAGE:
    infographic [OPTIONS] [FILE]
    cat chart.ig | infographic > chart.html

OPTIONS:
    -t, --theme        light or dark
    -c, --scheme       Color scheme (default, antv, catppuccin, github, dracula, nord)
    -s, --stylesheet   Extra color schemes (TOML file)
    -a, --animations   Mark the output as animated
    -f, --fragment     Emit the HTML fragment only
        --data-url     Emit a base64 data URL
    -l, --lint         Report lint findings
        --templates    List the known templates
    -g, --grammar      Show DSL reference
    -d, --debug        Log the visual tree
    -h, --help         Print help

QUICK START:
    printf 'infographic list-row-simple-horizontal-arrow\ndata\n  items\n    - Plan\n    - Build\n    - Ship\n' | infographic > steps.html

Run --grammar for syntax reference or --templates for the template list."#
    );
}

fn print_grammar() {
    println!(
        r#"INFOGRAPHIC DSL
===============

HEADER
------
The first non-empty line names the template:
    infographic <template-name>

ROOT
----
theme <scheme>       Color scheme override (root level only)
data                 Opens the data block

DATA BLOCK
----------
Lines indented at least as far as `data`:
    title <text>     Heading shown above the infographic
    items            Opens the item list

ITEMS
-----
Each entry starts with `- `, either form works:
    - <label>
    - label <label>

Properties, indented deeper than the entry:
    label <text>     Replace the label
    value <text>     Number if it parses as one, text otherwise
    desc <text>      Description
    icon <prefix:name>
    children         Nested items, one level deeper

Unknown lines are skipped.

EXAMPLE
-------
infographic chart-pie-plain-text
data
  title Traffic sources
  items
    - Search
      value 55
    - label Direct
      value 30
    - Social
      value 15"#
    );
}

fn print_templates() {
    println!("TEMPLATES");
    println!("=========");
    for name in VALID_TEMPLATES {
        println!("{:<12} {}", template_category(name).as_str(), name);
    }
    println!();
    println!("Other names with a known prefix use that category's default layout;");
    println!("anything else renders as a card grid.");
}
