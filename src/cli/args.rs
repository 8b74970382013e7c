use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "sitekit",
    version,
    about = "render tips, temple galleries and review confirmations",
    long_about = "sitekit renders the dynamic parts of the tips, temples and product review pages as HTML fragments.\nFavorites, the saved profile and the review counter live in a local JSON storage file.\n\nExamples:\n  sitekit tips --difficulty beginner\n  sitekit favorite 3\n  sitekit temples --filter old -o gallery.html\n  sitekit review '?product=prd-002&rating=4&features=a&features=b'\n\nTip: Use --config to persist defaults and keep invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        long = "no-color",
        global = true,
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        global = true,
        help_heading = "Output",
        help = "Write the rendered view to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'F',
        long = "format",
        value_name = "FORMAT",
        global = true,
        help_heading = "Output",
        help = "Output format: fragment, html or json (inferred from --output when omitted)."
    )]
    pub format: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        global = true,
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.sitekit/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 's',
        long = "store",
        value_name = "FILE",
        global = true,
        help_heading = "Input",
        help = "Storage file (defaults to ~/.sitekit/storage.json)."
    )]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Greeting, a random tip and the wind chill.
    Home {
        #[arg(long = "temp", value_name = "CELSIUS", allow_hyphen_values = true)]
        temperature: Option<f64>,
        #[arg(long = "wind", value_name = "KMH")]
        wind_speed: Option<f64>,
    },

    /// List tips, optionally filtered by difficulty or limited to favorites.
    Tips {
        #[arg(short = 'd', long = "difficulty", value_name = "SEL")]
        difficulty: Option<String>,
        #[arg(long = "favorites", help = "Show favorite tips only.")]
        favorites: bool,
    },

    /// Toggle a tip in the favorites list and re-render the tips.
    Favorite {
        #[arg(value_name = "ID")]
        id: u32,
        #[arg(short = 'd', long = "difficulty", value_name = "SEL")]
        difficulty: Option<String>,
    },

    /// Temple gallery: all, old, new, large or small.
    Temples {
        #[arg(short = 'f', long = "filter", value_name = "SEL")]
        filter: Option<String>,
    },

    /// Save, show or clear the contact profile.
    Contact {
        #[arg(long = "name", value_name = "NAME", requires = "pref")]
        name: Option<String>,
        #[arg(long = "pref", value_name = "PREF", requires = "name")]
        pref: Option<String>,
        #[arg(long = "clear", conflicts_with_all = ["name", "pref"])]
        clear: bool,
    },

    /// Product options for the review form.
    Products,

    /// Review confirmation page for a query string.
    Review {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },

    /// Write a default config file if none exists.
    InitConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["sitekit", "tips", "-d", "beginner", "-vv", "--no-color"]);
        assert_eq!(args.verbose, 2);
        assert!(args.no_color);
        assert_eq!(
            args.command,
            Command::Tips {
                difficulty: Some("beginner".to_string()),
                favorites: false
            }
        );
    }

    #[test]
    fn contact_clear_conflicts_with_name() {
        let res = CliArgs::try_parse_from(["sitekit", "contact", "--clear", "--name", "A"]);
        assert!(res.is_err());
    }

    #[test]
    fn contact_name_requires_pref() {
        let res = CliArgs::try_parse_from(["sitekit", "contact", "--name", "A"]);
        assert!(res.is_err());
    }

    #[test]
    fn home_accepts_negative_temperature() {
        let args = CliArgs::parse_from(["sitekit", "home", "--temp", "-5", "--wind", "20"]);
        assert_eq!(
            args.command,
            Command::Home {
                temperature: Some(-5.0),
                wind_speed: Some(20.0)
            }
        );
    }

    #[test]
    fn review_query_defaults_to_empty() {
        let args = CliArgs::parse_from(["sitekit", "review"]);
        assert_eq!(
            args.command,
            Command::Review {
                query: String::new()
            }
        );
    }
}
