use clap::Parser;
use sqlindent::{Config, Error, KeywordSet, Result, Settings, SqlScanner, indent_source};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sqlindent", version, about = "Indent SQL one line at a time")]
struct Cli {
    /// SQL files to indent. Reads stdin and writes stdout when omitted.
    files: Vec<PathBuf>,

    /// Columns per nesting level
    #[arg(long)]
    offset: Option<usize>,

    /// Column width of a tab in existing indentation
    #[arg(long)]
    tab_width: Option<usize>,

    /// Comma-separated keywords replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    keywords: Option<Vec<String>>,

    /// Log every indentation decision to stderr
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// TOML settings file
    #[arg(long, env = "SQLINDENT_CONFIG")]
    config: Option<PathBuf>,

    /// Rewrite files in place
    #[arg(long, short = 'w', default_value_t = false, conflicts_with = "check")]
    write: bool,

    /// List files that are not indented and exit with status 1
    #[arg(long, default_value_t = false)]
    check: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        self.apply(Settings::load(self.config.as_deref())?)
    }

    /// Settings file and environment first, flags on top.
    fn apply(&self, settings: Settings) -> Result<Config> {
        let mut config = Config::try_from(settings)?;
        if let Some(offset) = self.offset {
            config.indent_offset = offset;
        }
        if let Some(tab_width) = self.tab_width {
            config.tab_width = tab_width;
        }
        if let Some(keywords) = &self.keywords {
            config.recognized_keywords = KeywordSet::from_iter(keywords);
        }
        config.debug_logging |= self.debug;
        config.validate()
    }
}

fn init_tracing(debug: bool) {
    let fallback = if debug { "sqlindent=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result {
    std::fs::write(path, contents).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Indent every input. Returns how many inputs were not already indented.
fn run(cli: &Cli, config: &Config, mut input: impl Read, mut output: impl Write) -> Result<usize> {
    if cli.files.is_empty() {
        let mut source = String::new();
        input.read_to_string(&mut source)?;
        let indented = indent_source(source.as_str(), &SqlScanner, config);
        let unindented = usize::from(indented != source);
        if cli.check {
            if unindented > 0 {
                writeln!(output, "<stdin>")?;
            }
        } else {
            output.write_all(indented.as_bytes())?;
        }
        return Ok(unindented);
    }

    let mut unindented = 0;
    for path in &cli.files {
        let source = read(path)?;
        let indented = indent_source(source.as_str(), &SqlScanner, config);
        let changed = indented != source;
        unindented += usize::from(changed);
        if cli.check {
            if changed {
                writeln!(output, "{}", path.display())?;
            }
        } else if cli.write {
            if changed {
                write(path, &indented)?;
                info!(path = %path.display(), "rewrote");
            }
        } else {
            output.write_all(indented.as_bytes())?;
        }
    }
    Ok(unindented)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(cli.debug || config.as_ref().is_ok_and(|c| c.debug_logging));

    let result = config.and_then(|config| {
        debug!(?config, "Loaded configuration");
        run(&cli, &config, std::io::stdin().lock(), std::io::stdout().lock())
    });
    match result {
        Ok(unindented) if cli.check && unindented > 0 => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sqlindent: {e}");
            ExitCode::from(2)
        }
    }
}
