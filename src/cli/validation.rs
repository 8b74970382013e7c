use crate::cli::args::{CliArgs, Command};

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.format.as_deref() {
        crate::output::OutputFormat::parse(raw)
            .ok_or_else(|| format!("invalid --format '{raw}', expected fragment, html or json"))?;
    }
    if let Some(output) = args.output.as_deref() {
        if output.trim().is_empty() {
            return Err("invalid --output, expected a file path".to_string());
        }
    }
    if let Command::Home {
        temperature,
        wind_speed,
    } = &args.command
    {
        if let Some(t) = temperature {
            if !t.is_finite() {
                return Err("invalid --temp, expected a finite number".to_string());
            }
        }
        if let Some(w) = wind_speed {
            if !w.is_finite() || *w < 0.0 {
                return Err("invalid --wind, expected a non-negative number".to_string());
            }
        }
    }
    Ok(())
}
