//! hemline - render JSON document trees to HTML

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hemline::{Document, RenderOptions, render_html};

#[derive(Parser)]
#[command(name = "hemline")]
#[command(version, about = "Render JSON document trees to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    hemline doc.json                    Render a fragment to stdout
    hemline --toc --page doc.json -o out.html
                                        Render a complete page with a table of contents
    cat doc.json | hemline --safe-links Read from stdin, neutralize unsafe links")]
struct Cli {
    /// Input document (JSON); reads stdin when omitted
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file; writes stdout when omitted
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Build a table of contents and insert it at the top
    #[arg(long)]
    toc: bool,

    /// With --toc, emit only the table of contents
    #[arg(long, requires = "toc")]
    toc_only: bool,

    /// Wrap the output in a complete HTML page
    #[arg(long)]
    page: bool,

    /// Emit XHTML-style self-closing tags
    #[arg(long)]
    xhtml: bool,

    /// Page title (with --page)
    #[arg(long, default_value = "")]
    title: String,

    /// Stylesheet URL (with --page)
    #[arg(long, default_value = "")]
    css: String,

    /// Drop raw HTML
    #[arg(long)]
    skip_html: bool,

    /// Drop inline style tags
    #[arg(long)]
    skip_style: bool,

    /// Drop images
    #[arg(long)]
    skip_images: bool,

    /// Render every link as inert text
    #[arg(long)]
    skip_links: bool,

    /// Render links with unsafe targets as inert text
    #[arg(long)]
    safe_links: bool,

    /// Add rel="nofollow" to external links
    #[arg(long)]
    nofollow: bool,

    /// Add target="_blank" to external links
    #[arg(long)]
    target_blank: bool,

    /// Add return links to footnotes
    #[arg(long)]
    footnote_returns: bool,

    /// Prefix for relative link and image targets
    #[arg(long, value_name = "URL", default_value = "")]
    absolute_prefix: String,

    /// Prefix inserted into footnote anchors
    #[arg(long, value_name = "PREFIX", default_value = "")]
    footnote_prefix: String,

    /// Raw HTML label for footnote return links
    #[arg(long, value_name = "HTML")]
    return_label: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        let mut options = RenderOptions {
            skip_html: self.skip_html,
            skip_style: self.skip_style,
            skip_images: self.skip_images,
            skip_links: self.skip_links,
            safe_links_only: self.safe_links,
            nofollow_links: self.nofollow,
            href_target_blank: self.target_blank,
            toc: self.toc,
            omit_contents: self.toc_only,
            footnote_return_links: self.footnote_returns,
            complete_page: self.page,
            use_xhtml: self.xhtml,
            ..RenderOptions::default()
        }
        .with_title(self.title.as_str())
        .with_css(self.css.as_str())
        .with_absolute_prefix(self.absolute_prefix.as_str())
        .with_footnote_anchor_prefix(self.footnote_prefix.as_str());

        if let Some(label) = &self.return_label {
            options.parameters.footnote_return_link_contents = label.clone();
        }
        options
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> hemline::Result<()> {
    let doc = match &cli.input {
        Some(path) => Document::from_path(path)?,
        None => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            Document::from_json(&json)?
        }
    };

    tracing::info!(
        blocks = doc.blocks.len(),
        footnotes = doc.footnotes.len(),
        "rendering document"
    );
    let html = render_html(&doc, cli.options());

    match &cli.output {
        Some(path) => {
            fs::write(path, &html)?;
            if !cli.quiet {
                let input = cli.input.as_deref().unwrap_or("<stdin>");
                eprintln!("{input} -> {path} ({} bytes)", html.len());
            }
        }
        None => io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}
