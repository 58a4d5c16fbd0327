//! Kaeng CLI - Georgian ⇄ English keyboard layout converter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use kaeng::{
    convert_with_direction, detect_direction,
    diagnostics::{check_text, format_diagnostics},
    share::{build_share_url, share_links, share_text_or_title},
    ConversionDirection, FileStore, SharePlatform, Theme, ThemeManager,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "kaeng")]
#[command(version)]
#[command(about = "Kaeng - Georgian ⇄ English keyboard layout converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
    direction: Direction,

    /// Detect and print the direction without converting
    #[arg(long)]
    detect: bool,

    /// Check mode - report input that converts unexpectedly
    #[arg(long)]
    check: bool,

    /// Disable colored output (for check mode)
    #[arg(long)]
    no_color: bool,

    /// Read the input from the system clipboard
    #[arg(long)]
    paste: bool,

    /// Copy the result to the system clipboard
    #[arg(long)]
    copy: bool,

    /// Quiet mode: suppress status output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check text for input that converts unexpectedly
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Convert a file (default action)
    Convert {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Conversion direction
        #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
        direction: Direction,
    },

    /// Batch convert all .txt files in a directory
    Batch {
        /// Input directory or single file
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Conversion direction
        #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
        direction: Direction,
    },

    /// Print share links for converted text
    Share {
        /// Platform name, or "all"
        #[arg(default_value = "all")]
        platform: String,

        /// Page URL to share
        #[arg(long, default_value = "https://lupusa87.github.io/ka-eng/")]
        url: String,

        /// Text to share (converted first; defaults to the page title)
        text: Option<String>,
    },

    /// Show or change the saved theme preference
    Theme {
        /// get, toggle, light or dark
        #[arg(default_value = "get")]
        action: String,

        /// Preference store path (defaults to the user config dir)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Report a visit to the visitor counter and print today/total
    #[cfg(feature = "telemetry")]
    Visit {
        /// Domain reported to the counter
        #[arg(long, default_value = "localhost")]
        domain: String,

        /// Page path reported to the counter
        #[arg(long, default_value = "/")]
        path: String,

        /// Counter service base URL
        #[arg(long, default_value = kaeng::constants::VISITOR_API_BASE)]
        api_base: String,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    /// Detect from content
    Auto,
    /// Latin keys to Georgian letters
    EnKa,
    /// Georgian letters to Latin keys
    KaEn,
}

#[cfg(feature = "cli")]
impl Direction {
    fn resolve(self, input: &str) -> ConversionDirection {
        match self {
            Direction::Auto => detect_direction(input),
            Direction::EnKa => ConversionDirection::LatinToGeorgian,
            Direction::KaEn => ConversionDirection::GeorgianToLatin,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = if cli.paste {
        match paste_from_system() {
            Some(text) => text,
            None => {
                eprintln!("Error: could not read from the clipboard");
                std::process::exit(1);
            }
        }
    } else {
        read_input(cli.input_file.as_deref())?
    };

    // If detect mode, just print direction and exit
    if cli.detect {
        println!("{}", detect_direction(&input));
        return Ok(());
    }

    // If check mode, analyze and report issues
    if cli.check {
        let result = check_text(&input);
        println!("{}", format_diagnostics(&result, !cli.no_color));
        return Ok(());
    }

    let direction = cli.direction.resolve(&input);
    let result = convert_with_direction(&input, direction);

    if cli.copy {
        if copy_to_system(&result) {
            if !cli.quiet {
                eprintln!("✓ {}", kaeng::constants::COPIED_TEXT);
            }
        } else {
            eprintln!("✗ could not copy to the clipboard");
        }
    }

    write_output(cli.output.as_deref(), &result, cli.quiet)
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Check { input, no_color } => {
            let content = read_input(input.as_deref())?;
            let result = check_text(&content);
            println!("{}", format_diagnostics(&result, !no_color));
        }

        Commands::Convert {
            input,
            output,
            direction,
        } => {
            let content = read_input(input.as_deref())?;
            let result = convert_with_direction(&content, direction.resolve(&content));
            write_output(output.as_deref(), &result, false)?;
        }

        Commands::Batch {
            input,
            output_dir,
            direction,
        } => {
            fs::create_dir_all(&output_dir)?;

            let input_path = Path::new(&input);
            let files: Vec<_> = if input_path.is_dir() {
                fs::read_dir(input_path)?
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("txt"))
                    .collect()
            } else {
                vec![input_path.to_path_buf()]
            };

            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in files {
                let filename = file_path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output.txt");
                let output_path = Path::new(&output_dir).join(filename);

                match fs::read_to_string(&file_path) {
                    Ok(content) => {
                        let result =
                            convert_with_direction(&content, direction.resolve(&content));
                        match fs::write(&output_path, &result) {
                            Ok(_) => {
                                eprintln!("✓ {}", output_path.display());
                                success_count += 1;
                            }
                            Err(e) => {
                                eprintln!("✗ {} - write error: {}", output_path.display(), e);
                                error_count += 1;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("✗ {} - read error: {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch conversion complete: {} succeeded, {} failed",
                success_count, error_count
            );

            if error_count > 0 {
                std::process::exit(1);
            }
        }

        Commands::Share {
            platform,
            url,
            text,
        } => {
            let converted = text.as_deref().map(kaeng::convert).unwrap_or_default();
            let share_text = share_text_or_title(&converted);

            if platform.eq_ignore_ascii_case("all") {
                for (platform, link) in share_links(share_text, &url) {
                    println!("{:<9} {}", platform.as_str(), link);
                }
            } else {
                let platform: SharePlatform = platform.parse().map_err(invalid_input)?;
                match build_share_url(platform, share_text, &url) {
                    Some(link) => println!("{}", link),
                    None => {
                        if copy_to_system(&url) {
                            eprintln!("✓ {}", kaeng::constants::COPIED_TEXT);
                        } else {
                            eprintln!("✗ {}", kaeng::constants::COPY_LINK_FAILED_TEXT);
                            std::process::exit(1);
                        }
                    }
                }
            }
        }

        Commands::Theme { action, store } => {
            let store = match store {
                Some(path) => FileStore::open(path),
                None => FileStore::open_default().map_err(invalid_input)?,
            };
            let mut manager = ThemeManager::load(store);
            match action.to_ascii_lowercase().as_str() {
                "get" => {}
                "toggle" => {
                    manager.toggle().map_err(invalid_input)?;
                }
                other => {
                    let theme: Theme = other.parse().map_err(invalid_input)?;
                    manager.set_theme(theme).map_err(invalid_input)?;
                }
            }
            println!("{} {}", manager.theme(), manager.theme().toggle_icon());
        }

        #[cfg(feature = "telemetry")]
        Commands::Visit {
            domain,
            path,
            api_base,
        } => {
            use kaeng::features::visitors::HttpTransport;
            use kaeng::{VisitPayload, VisitorCounter};

            let transport =
                HttpTransport::new(std::time::Duration::from_secs(10)).map_err(invalid_input)?;
            let counter = VisitorCounter::with_base_url(transport, &api_base);
            let payload = VisitPayload {
                domain,
                timezone: local_timezone(),
                page_path: path,
                page_title: kaeng::constants::PAGE_TITLE.to_string(),
                referrer: String::new(),
            };
            eprintln!("{}", kaeng::constants::VISITOR_LOADING_TEXT);
            println!("{}", counter.display_text(&payload));
        }

        Commands::Info => {
            use chrono::Datelike;

            println!("Kaeng - Georgian ⇄ English keyboard layout converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ English → Georgian conversion (Latin keys to Georgian letters)");
            println!("  ✓ Georgian → English conversion (letters back to keys)");
            println!("  ✓ Shift letters: S T R W C Z → შ თ ღ ჭ ჩ ძ");
            println!("  ✓ Auto-detection of direction");
            println!("  ✓ Mixed-script diagnostics");
            println!("  ✓ Batch file processing");
            println!(
                "  {} System clipboard",
                if cfg!(feature = "clipboard") { "✓" } else { "✗" }
            );
            println!(
                "  {} Visitor counter",
                if cfg!(feature = "telemetry") { "✓" } else { "✗" }
            );
            println!();
            println!("© {}", chrono::Local::now().year());
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn invalid_input(err: kaeng::KaengError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, result: &str, quiet: bool) -> io::Result<()> {
    match path {
        Some(path) => {
            write_converted(fs::File::create(path)?, result)?;
            if !quiet {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => write_converted(io::stdout().lock(), result)?,
    }
    Ok(())
}

/// Write converted text as is; the input's own line endings are kept
#[cfg(feature = "cli")]
fn write_converted<W: Write>(mut out: W, result: &str) -> io::Result<()> {
    out.write_all(result.as_bytes())?;
    out.flush()
}

#[cfg(all(feature = "cli", feature = "clipboard"))]
fn copy_to_system(text: &str) -> bool {
    kaeng::utils::copy_to_clipboard(&kaeng::utils::SystemClipboard::new(), text)
}

#[cfg(all(feature = "cli", feature = "clipboard"))]
fn paste_from_system() -> Option<String> {
    kaeng::utils::read_from_clipboard(&kaeng::utils::SystemClipboard::new())
}

#[cfg(all(feature = "cli", not(feature = "clipboard")))]
fn copy_to_system(_text: &str) -> bool {
    eprintln!("System clipboard not enabled. Build with --features clipboard");
    false
}

#[cfg(all(feature = "cli", not(feature = "clipboard")))]
fn paste_from_system() -> Option<String> {
    eprintln!("System clipboard not enabled. Build with --features clipboard");
    None
}

/// IANA name from `TZ` when set, otherwise the current UTC offset
#[cfg(all(feature = "cli", feature = "telemetry"))]
fn local_timezone() -> String {
    std::env::var("TZ")
        .ok()
        .filter(|tz| !tz.is_empty())
        .unwrap_or_else(|| chrono::Local::now().format("UTC%:z").to_string())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install kaeng --features cli");
    eprintln!("  kaeng [OPTIONS] [INPUT_FILE]");
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn run_convert(input: &str) -> String {
        let mut out = Vec::new();
        let result = convert_with_direction(input, Direction::Auto.resolve(input));
        write_converted(&mut out, &result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_output_adds_no_newline() {
        let once = run_convert("gamarjoba\n");
        assert_eq!(once, "გამარჯობა\n");
        assert_eq!(run_convert(&once), "gamarjoba\n");
        assert_eq!(run_convert("gza"), "გზა");
    }

    #[test]
    fn test_color_on_by_default() {
        let cli = Cli::parse_from(["kaeng", "--check"]);
        assert!(!cli.no_color);
        let cli = Cli::parse_from(["kaeng", "--check", "--no-color"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_check_subcommand_no_color() {
        let cli = Cli::parse_from(["kaeng", "check", "--no-color"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Check { no_color: true, .. })
        ));
    }
}
