use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;

use crate::catalog::{self, PRODUCTS};
use crate::cli::args::{CliArgs, Command};
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::filter::{TempleFilter, TipFilter};
use crate::output::{self, OutputFormat, View};
use crate::pages::{
    self, ContactAction, ContactPage, HomePage, ReviewPage, TemplesPage, TipsAction, TipsPage,
};
use crate::render::escape_html;
use crate::storage::{FileStore, KeyValueStore};

const DEFAULT_TEMPERATURE_C: f64 = 10.0;
const DEFAULT_WIND_KMH: f64 = 5.0;

fn render_custom_help() -> String {
    let cmd = CliArgs::command();
    let mut out = String::new();

    if let Some(version) = cmd.get_version() {
        out.push_str(cmd.get_name());
        out.push(' ');
        out.push_str(version);
        out.push('\n');
    } else {
        out.push_str(cmd.get_name());
        out.push('\n');
    }

    if let Some(about) = cmd.get_about() {
        out.push_str(&about.to_string());
        out.push('\n');
    }

    if let Some(long_about) = cmd.get_long_about() {
        out.push('\n');
        out.push_str(&long_about.to_string());
        out.push('\n');
    }

    out.push('\n');
    out.push_str("Usage: ");
    out.push_str(cmd.get_name());
    out.push_str(" [OPTIONS] <COMMAND>\n\n");

    out.push_str("Commands:\n");
    for sub in cmd.get_subcommands() {
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        out.push_str(&format!("  {:<12} {}\n", sub.get_name(), about.trim()));
    }
    out.push('\n');

    let mut sections: Vec<(String, Vec<&clap::Arg>)> = Vec::new();
    let mut section_idx: HashMap<String, usize> = HashMap::new();

    for arg in cmd.get_arguments() {
        if arg.is_hide_set() {
            continue;
        }

        let heading = arg.get_help_heading().unwrap_or("Options").to_string();

        let idx = match section_idx.get(&heading).copied() {
            Some(i) => i,
            None => {
                sections.push((heading.clone(), Vec::new()));
                let i = sections.len() - 1;
                section_idx.insert(heading, i);
                i
            }
        };

        sections[idx].1.push(arg);
    }

    for (heading, args) in sections {
        out.push_str(&heading);
        out.push_str(":\n");

        for arg in args {
            let mut parts: Vec<String> = Vec::new();

            if let Some(short) = arg.get_short() {
                parts.push(format!("-{short}"));
            }

            if let Some(long) = arg.get_long() {
                parts.push(format!("--{long}"));
            }

            let mut flags = parts.join(", ");

            if arg.get_action().takes_values() {
                let value_name = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.as_str())
                    .unwrap_or("VALUE");
                flags.push_str(&format!(" <{value_name}>"));
            }

            out.push_str("  ");
            out.push_str(&flags);
            out.push('\n');

            if let Some(help) = arg.get_help() {
                let help = help.to_string();
                if !help.trim().is_empty() {
                    out.push_str("          ");
                    out.push_str(help.trim());
                    out.push('\n');
                }
            }

            out.push('\n');
        }
    }

    out
}

fn format_kv_line(verbose: u8, label: &str, value: &str) {
    if verbose > 0 {
        eprintln!("{} {:<10}: {}", "::".cyan(), label, value);
    }
}

fn warn(message: &str) {
    eprintln!("{} {}", "::".yellow(), message.yellow());
}

#[derive(Clone, Debug)]
struct RunConfig {
    command: Command,
    store_path: PathBuf,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
    verbose: u8,
    tip_filter: String,
    temple_filter: String,
    temperature: f64,
    wind_speed: f64,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);

    let store_path = args
        .store
        .or(cfg.store)
        .map(|p| config::expand_tilde(&p))
        .unwrap_or_else(config::default_store_path);

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));

    let output_format = match args.format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}'"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or_default(),
    };

    let tip_filter = cfg.tip_filter.unwrap_or_else(|| "all".to_string());
    let temple_filter = cfg.temple_filter.unwrap_or_else(|| "all".to_string());

    let (temperature, wind_speed) = match &args.command {
        Command::Home {
            temperature,
            wind_speed,
        } => (*temperature, *wind_speed),
        _ => (None, None),
    };
    let temperature = temperature
        .or(cfg.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE_C);
    let wind_speed = wind_speed.or(cfg.wind_speed).unwrap_or(DEFAULT_WIND_KMH);
    if wind_speed < 0.0 {
        return Err(format!("invalid wind_speed {wind_speed}, expected non-negative"));
    }

    Ok(RunConfig {
        command: args.command,
        store_path,
        output,
        output_format,
        no_color,
        verbose: args.verbose,
        tip_filter,
        temple_filter,
        temperature,
        wind_speed,
    })
}

fn render_home(home: &HomePage) -> String {
    format!(
        r#"<p id="greeting">{}</p>
<p id="randomTip">{}</p>
<p>Wind chill: <span id="windchill">{}</span></p>"#,
        escape_html(&home.greeting),
        escape_html(home.random_tip.as_deref().unwrap_or_default()),
        escape_html(&home.wind_chill),
    )
}

fn dispatch<S: KeyValueStore>(run: &RunConfig, store: &mut S) -> Result<View, String> {
    let storage_err = |e: crate::storage::StorageError| format!("storage error: {e}");

    match &run.command {
        Command::Home { .. } => {
            let home = HomePage::load(
                &*store,
                &mut rand::thread_rng(),
                run.temperature,
                run.wind_speed,
            );
            let weather = format!("{} °C, {} km/h", run.temperature, run.wind_speed);
            format_kv_line(run.verbose, "weather", &weather);
            let mut view = View::message("Home", "home", &home.greeting, &home);
            view.markup = render_home(&home);
            Ok(view)
        }
        Command::Tips {
            difficulty,
            favorites,
        } => {
            let mut page = TipsPage::load(&*store);
            let selector = difficulty.clone().unwrap_or_else(|| run.tip_filter.clone());
            format_kv_line(run.verbose, "difficulty", TipFilter::parse(&selector).as_str());
            page.dispatch(store, TipsAction::SelectDifficulty(selector))
                .map_err(storage_err)?;
            let title = if *favorites {
                page.dispatch(store, TipsAction::ShowFavorites)
                    .map_err(storage_err)?;
                "Favorite Tips"
            } else {
                "Tips"
            };
            Ok(View::from_container(title, page.container(), &page.visible()))
        }
        Command::Favorite { id, difficulty } => {
            if catalog::find_tip(*id).is_none() {
                warn(&format!("tip {id} is not in the catalog"));
            }
            let mut page = TipsPage::load(&*store);
            let selector = difficulty.clone().unwrap_or_else(|| run.tip_filter.clone());
            page.dispatch(store, TipsAction::SelectDifficulty(selector))
                .map_err(storage_err)?;
            page.dispatch(store, TipsAction::ToggleFavorite(*id))
                .map_err(storage_err)?;
            let favorites = crate::state::load_favorites(&*store);
            format_kv_line(run.verbose, "favorites", &format!("{favorites:?}"));
            Ok(View::from_container("Tips", page.container(), &page.visible()))
        }
        Command::Temples { filter } => {
            let selector = filter.clone().unwrap_or_else(|| run.temple_filter.clone());
            let mut page = TemplesPage::load();
            page.select(TempleFilter::parse(&selector));
            format_kv_line(run.verbose, "matches", &page.visible().len().to_string());
            Ok(View::from_container(page.title(), page.container(), &page.visible()))
        }
        Command::Contact { name, pref, clear } => {
            let mut page = ContactPage::load(&*store);
            if *clear {
                page.dispatch(store, ContactAction::Clear)
                    .map_err(storage_err)?;
            } else if let (Some(name), Some(pref)) = (name, pref) {
                page.dispatch(
                    store,
                    ContactAction::Submit {
                        name: name.clone(),
                        pref: pref.clone(),
                    },
                )
                .map_err(storage_err)?;
            }
            let message = page.message().unwrap_or_default();
            Ok(View::message("Contact", "formMessage", message, &page.saved()))
        }
        Command::Products => {
            let select = pages::product_select();
            Ok(View::from_container("Products", &select, &PRODUCTS))
        }
        Command::Review { query } => {
            let page = ReviewPage::load(store, query).map_err(storage_err)?;
            match page.confirmation().submission_count {
                Some(count) => format_kv_line(run.verbose, "reviews", &count.to_string()),
                None => format_kv_line(run.verbose, "reviews", "not counted (no product)"),
            }
            Ok(View::from_container(
                "Review Confirmation",
                page.container(),
                page.confirmation(),
            ))
        }
        Command::InitConfig => Err("init-config does not render a view".to_string()),
    }
}

fn write_output(run: &RunConfig, rendered: &[u8]) -> Result<(), String> {
    match run.output.as_deref() {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| format!("failed to write output file '{path}': {e}"))?;
            format_kv_line(run.verbose, "output", path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered)
                .map_err(|e| format!("failed to write to stdout: {e}"))?;
        }
    }
    Ok(())
}

fn run(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    let mut store = FileStore::open(&run.store_path);
    format_kv_line(run.verbose, "store", &store.path().display().to_string());

    let view = dispatch(&run, &mut store)?;
    let rendered = output::render(&view, run.output_format);
    write_output(&run, &rendered)
}

fn init_config(path: Option<String>) -> Result<(), String> {
    let path = match path {
        Some(p) => config::expand_tilde(&p),
        None => config::default_config_path()
            .ok_or_else(|| "could not determine home directory".to_string())?,
    };
    if config::ensure_default_config_file(&path)? {
        println!(":: wrote default config to {}", path.display());
    } else {
        println!(":: config already exists at {}", path.display());
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", render_custom_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.command == Command::InitConfig {
        return init_config(args.config);
    }

    let cfg = match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run_config = build_run_config(args, cfg)?;
    run(run_config)
}
