//! `cayley` — render the Cayley table of the 4D algebra without a browser.
//!
//! Examples:
//!   cayley render -o table.svg
//!   cayley render --mode sign --theme light
//!   cayley render --toggles 3 --config grid.json
//!   cayley table --json
//!   cayley check
//!   cayley theme toggle

use std::cell::RefCell;
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use cayley::algebra::{validated_table, MultiplicationTable, BASIS};
use cayley::grid::{build_cells, Geometry, GridConfig};
use cayley::svg::SvgSurface;
use cayley::theme::{theme_from_store, ChangeOrigin, ThemeState};
use cayley::{ClickRelay, EncodingMode, EncodingToggle, Theme};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, Level};

mod error;
mod paths;
mod store;

use error::CliError;
use paths::AppPaths;
use store::FileStore;

#[derive(Parser)]
#[command(name = "cayley")]
#[command(about = "Cayley table of a 4D geometric algebra, as a colored grid")]
#[command(version = cayley::VERSION)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding preferences.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the grid as an SVG document
    Render(RenderArgs),

    /// Print the multiplication table
    Table {
        /// Emit JSON instead of an aligned text grid
        #[arg(long)]
        json: bool,
    },

    /// Validate the compiled-in table
    Check,

    /// Show or change the persisted theme
    Theme {
        action: Option<ThemeAction>,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct RenderArgs {
    /// Encoding to start from: element or sign
    #[arg(long, default_value = "element")]
    mode: EncodingMode,

    /// Simulated clicks on the grid after the initial paint
    #[arg(long, default_value_t = 0)]
    toggles: u32,

    /// Page theme (defaults to the stored preference)
    #[arg(long)]
    theme: Option<Theme>,

    /// JSON grid config: {"width", "height", "margins": {"top", "right", "bottom", "left"}}
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeAction {
    Dark,
    Light,
    Toggle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Only commands that touch preferences need a config dir.
    let paths = || AppPaths::new(cli.config_dir.as_deref());

    match cli.command {
        Commands::Render(args) => {
            let theme = render_theme(args.theme, paths)?;
            let config = match &args.config {
                Some(path) => load_grid_config(path)?,
                None => GridConfig::default(),
            };
            let svg = render_svg(&args, config, theme)?;
            match &args.output {
                Some(path) => {
                    fs::write(path, &svg).map_err(|e| CliError::io(path, e))?;
                    info!(path = %path.display(), bytes = svg.len(), "wrote svg");
                }
                None => std::io::stdout().write_all(svg.as_bytes())?,
            }
        }
        Commands::Table { json } => {
            let table = validated_table()?;
            let out = if json {
                table_json(table)
            } else {
                format_table(table)
            };
            println!("{out}");
        }
        Commands::Check => {
            validated_table()?;
            println!("ok: {} entries validated", BASIS.len() * BASIS.len());
        }
        Commands::Theme { action } => {
            let mut store = FileStore::open(paths()?.preferences_file())?;
            let (mut state, _) = ThemeState::initialize(&store);
            if let Some(action) = action {
                let change = match action {
                    ThemeAction::Toggle => state.toggle(),
                    ThemeAction::Dark => state.apply(Theme::Dark, ChangeOrigin::User),
                    ThemeAction::Light => state.apply(Theme::Light, ChangeOrigin::User),
                };
                change.commit(&mut store)?;
                info!(
                    from = %change.previous,
                    to = %change.theme,
                    path = %store.path().display(),
                    "theme saved"
                );
            }
            println!("{} {}", state.current().icon(), state.current().label());
        }
    }
    Ok(())
}

/// `--theme` wins; otherwise the stored preference.
fn render_theme(
    explicit: Option<Theme>,
    paths: impl FnOnce() -> Result<AppPaths, CliError>,
) -> Result<Theme, CliError> {
    match explicit {
        Some(theme) => Ok(theme),
        None => Ok(theme_from_store(&FileStore::open(paths()?.preferences_file())?)),
    }
}

fn load_grid_config(path: &Path) -> Result<GridConfig, CliError> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| CliError::json(path, e))
}

/// Mount the grid on an svg surface and replay the requested clicks through
/// the toggle controller.
fn render_svg(args: &RenderArgs, config: GridConfig, theme: Theme) -> Result<String, CliError> {
    let table = validated_table()?;
    let geometry = Geometry::new(config)?;
    let surface = SvgSurface::new(&geometry).with_background(theme.background());

    let toggle = Rc::new(RefCell::new(EncodingToggle::mount(
        surface,
        geometry,
        build_cells(table),
    )));
    let mut relay = ClickRelay::new();
    EncodingToggle::bind(&toggle, &mut relay);

    let clicks = args.toggles + u32::from(args.mode == EncodingMode::BySign);
    for _ in 0..clicks {
        relay.fire();
    }

    let toggle = toggle.borrow();
    info!(mode = %toggle.mode(), clicks, %theme, "rendered grid");
    Ok(toggle.renderer().surface().to_svg())
}

fn format_table(table: &MultiplicationTable) -> String {
    const W: usize = 6;
    let mut out = String::new();
    let _ = write!(out, "{:>W$} |", "");
    for e in BASIS {
        let _ = write!(out, "{:>W$}", e.label());
    }
    out.push('\n');
    out.push_str(&"-".repeat(W + 2 + W * BASIS.len()));
    for (row, e) in table.iter().zip(BASIS) {
        out.push('\n');
        let _ = write!(out, "{:>W$} |", e.label());
        for p in row {
            let _ = write!(out, "{:>W$}", p.to_string());
        }
    }
    out
}

fn table_json(table: &MultiplicationTable) -> String {
    serde_json::json!({
        "basis": BASIS,
        "table": table,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cayley::palette::{color_by_element, color_by_sign};
    use cayley::theme::THEME_KEY;
    use cayley::{BasisElement, PreferenceStore, Sign, TABLE};

    fn args(extra: &[&str]) -> RenderArgs {
        let mut argv = vec!["cayley", "render"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).expect("args parse").command {
            Commands::Render(a) => a,
            _ => unreachable!(),
        }
    }

    #[test]
    fn parses_render_flags() {
        let a = args(&["--mode", "sign", "--toggles", "2", "--theme", "light", "-o", "x.svg"]);
        assert_eq!(a.mode, EncodingMode::BySign);
        assert_eq!(a.toggles, 2);
        assert_eq!(a.theme, Some(Theme::Light));
        assert_eq!(a.output, Some(PathBuf::from("x.svg")));

        assert!(Cli::try_parse_from(["cayley", "render", "--mode", "colour"]).is_err());
    }

    #[test]
    fn default_render_is_by_element() {
        let svg = render_svg(&args(&[]), GridConfig::default(), Theme::Dark).unwrap();
        assert_eq!(svg.matches(r#"class="cell""#).count(), 256);
        assert!(svg.contains(&Theme::Dark.background().to_string()));
        assert!(svg.contains(&color_by_element(BasisElement::E23).to_string()));
    }

    fn dark_svg(extra: &[&str]) -> String {
        render_svg(&args(extra), GridConfig::default(), Theme::Dark).unwrap()
    }

    #[test]
    fn sign_mode_and_even_toggles() {
        let sign = dark_svg(&["--mode", "sign"]);
        assert_eq!(sign, dark_svg(&["--toggles", "3"]));
        assert!(!sign.contains(&color_by_element(BasisElement::E23).to_string()));
        assert!(sign.contains(&color_by_sign(Sign::Negative).to_string()));

        assert_eq!(dark_svg(&[]), dark_svg(&["--toggles", "2"]));
    }

    #[test]
    fn explicit_theme_needs_no_config_dir() {
        let theme = render_theme(Some(Theme::Light), || Err(CliError::NoConfigDir)).unwrap();
        assert_eq!(theme, Theme::Light);

        let err = render_theme(None, || Err(CliError::NoConfigDir)).unwrap_err();
        assert!(matches!(err, CliError::NoConfigDir));
    }

    #[test]
    fn render_theme_falls_back_to_stored_preference() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::new(Some(dir.path())).unwrap();
        let mut store = FileStore::open(paths.preferences_file()).unwrap();
        store.set(THEME_KEY, Theme::Light.as_attr()).unwrap();

        let theme = render_theme(None, || AppPaths::new(Some(dir.path()))).unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn check_and_table_run_without_preferences() {
        for argv in [["cayley", "check"], ["cayley", "table"]] {
            let cli = Cli::try_parse_from(argv).expect("args parse");
            assert!(run(cli).is_ok());
        }
    }

    #[test]
    fn bad_config_is_an_error() {
        let cfg = GridConfig {
            width: 10.0,
            ..GridConfig::default()
        };
        let err = render_svg(&args(&[]), cfg, Theme::Dark).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn text_table_has_header_and_rows() {
        let text = format_table(&TABLE);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 16);
        assert!(lines[0].trim_end().ends_with("03"));
        assert!(lines[10].trim_start().starts_with("123 |"));
        assert!(lines[10].contains("-0123"));
    }

    #[test]
    fn json_table_uses_labels() {
        let v: serde_json::Value = serde_json::from_str(&table_json(&TABLE)).unwrap();
        assert_eq!(v["basis"][1], "23");
        assert_eq!(v["table"][8][4]["element"], "0123");
        assert_eq!(v["table"][8][4]["sign"], "-ve");
        assert_eq!(v["table"].as_array().map(Vec::len), Some(16));
    }
}
