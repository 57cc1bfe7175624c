//! Output formatting for the CLI.
//!
//! Every command renders through [`OutputFormat`]. Text output goes to stdout
//! with optional ANSI colour. The plain and Markdown route layouts come from
//! the library's [`RouteRenderMode`]. JSON and GeoJSON are pretty-printed and
//! never coloured so they can be piped into other tools.

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use flightpath_lib::{AircraftProfile, RouteRenderMode, RouteSummary, StopRole};

use crate::terminal::{format_with_separators, supports_color, supports_unicode, ColorPalette};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Uncoloured compact text.
    Plain,
    /// Markdown table (routes only; other commands fall back to plain text).
    Markdown,
    /// Pretty-printed JSON.
    Json,
    /// GeoJSON FeatureCollection (routes only; other commands fall back to JSON).
    Geojson,
}

impl OutputFormat {
    /// Whether decorative output (logo, footer) may be printed.
    pub fn is_text(self) -> bool {
        matches!(self, OutputFormat::Text)
    }

    /// Whether output is machine-readable JSON.
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Geojson)
    }

    pub fn render_route(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                RouteRenderer::new(ColorPalette::detect()).render(summary);
                Ok(())
            }
            OutputFormat::Plain => write_text(&summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Markdown => write_text(&summary.render(RouteRenderMode::Markdown)),
            OutputFormat::Json => write_json(summary),
            OutputFormat::Geojson => write_json(&summary.to_geojson()),
        }
    }

    pub fn render_aircraft(self, aircraft: &[&AircraftProfile]) -> io::Result<()> {
        if self.is_json() {
            let rows: Vec<AircraftRow> = aircraft.iter().map(|a| AircraftRow::from(*a)).collect();
            return write_json(&rows);
        }

        if aircraft.is_empty() {
            println!("No aircraft available in catalog.");
            return Ok(());
        }
        println!("Available aircraft ({}):", aircraft.len());
        println!(
            "{:<8} {:>12} {:>12} {:>14} {:>14}",
            "Model", "Burn (kg/h)", "Speed (kts)", "Max fuel (kg)", "Range (mi)"
        );
        for profile in aircraft {
            println!(
                "{:<8} {:>12} {:>12} {:>14} {:>14}",
                profile.model,
                format_with_separators(profile.fuel_burn_rate, 0),
                format_with_separators(profile.cruise_speed, 0),
                format_with_separators(profile.max_fuel_capacity, 0),
                format_with_separators(profile.max_range_miles(), 0),
            );
        }
        Ok(())
    }

    pub fn render_airports(self, airports: &[String], aircraft: Option<&str>) -> io::Result<()> {
        if self.is_json() {
            return write_json(&AirportList { aircraft, airports });
        }

        match aircraft {
            Some(model) => println!("Airports reachable by {} ({}):", model, airports.len()),
            None => println!("Selectable airports ({}):", airports.len()),
        }
        for chunk in airports.chunks(12) {
            println!("  {}", chunk.join(" "));
        }
        Ok(())
    }

    pub fn render_download(self, path: &Path) -> io::Result<()> {
        if !self.is_json() {
            println!("Airport dataset available at {}", path.display());
            return Ok(());
        }
        write_json(&DownloadOutput {
            dataset_path: path.display().to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct AircraftRow<'a> {
    #[serde(flatten)]
    profile: &'a AircraftProfile,
    max_range_miles: f64,
}

impl<'a> From<&'a AircraftProfile> for AircraftRow<'a> {
    fn from(profile: &'a AircraftProfile) -> Self {
        Self {
            profile,
            max_range_miles: profile.max_range_miles(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AirportList<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    aircraft: Option<&'a str>,
    airports: &'a [String],
}

#[derive(Debug, Serialize)]
struct DownloadOutput {
    dataset_path: String,
}

fn write_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Text renderer with role badges for each stop.
pub struct RouteRenderer {
    palette: ColorPalette,
}

impl RouteRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn render(&self, summary: &RouteSummary) {
        print!("{}", self.render_to_string(summary));
    }

    /// Build the text rendering without printing it.
    pub fn render_to_string(&self, summary: &RouteSummary) -> String {
        let p = &self.palette;
        let mut lines = Vec::new();

        lines.push(format!(
            "Route from {}{}{} to {}{}{} ({} {}; aircraft: {}):",
            p.white_bold,
            summary.start,
            p.reset,
            p.white_bold,
            summary.goal,
            p.reset,
            summary.hops,
            if summary.hops == 1 { "leg" } else { "legs" },
            summary.aircraft.model
        ));

        for stop in &summary.stops {
            let (tag_color, tag_text) = self.tag(stop.role);
            let mut line = format!(
                "{}{}{} {}{}{}",
                tag_color, tag_text, p.reset, p.white_bold, stop.code, p.reset
            );
            if stop.index > 0 {
                if let Some(leg) = summary.legs.get(stop.index - 1) {
                    line.push_str(&format!(
                        " ({} mi, {}{} kg{}, {:.2} h)",
                        format_with_separators(leg.distance, 0),
                        p.orange,
                        format_with_separators(leg.fuel_cost, 2),
                        p.reset,
                        leg.flight_time
                    ));
                }
            }
            lines.push(line);
        }

        lines.push(String::new());
        lines.push(format!(
            "{}───────────────────────────────────────{}",
            p.gray, p.reset
        ));
        lines.push(format!(
            "  {}Total fuel:{}     {}{} kg{}",
            p.orange,
            p.reset,
            p.white_bold,
            format_with_separators(summary.total_fuel, 2),
            p.reset
        ));
        lines.push(format!(
            "  {}Total time:{}     {}{:.2} hours{}",
            p.cyan, p.reset, p.white_bold, summary.total_time, p.reset
        ));
        lines.push(format!(
            "  {}Total distance:{} {}{} mi{}",
            p.green,
            p.reset,
            p.white_bold,
            format_with_separators(summary.total_distance, 0),
            p.reset
        ));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn tag(&self, role: StopRole) -> (&str, &str) {
        let p = &self.palette;
        match role {
            StopRole::Start => (p.tag_start, " DEPT "),
            StopRole::Transit => (p.tag_transit, " STOP "),
            StopRole::Destination => (p.tag_destination, " DEST "),
        }
    }
}

/// Print the CLI logo banner.
///
/// Falls back to plain ASCII when Unicode is not detected.
pub fn print_logo() {
    let palette = ColorPalette::detect();
    let (cyan, orange, reset) = (palette.cyan, palette.orange, palette.reset);

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────╮{reset}
{cyan}│{orange}   ✈  F L I G H T P A T H             {cyan}│{reset}
{cyan}│{orange}      fuel-constrained route planner  {cyan}│{reset}
{cyan}╰──────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+----------------------------------------+
|  FLIGHTPATH                            |
|  >> FUEL-CONSTRAINED ROUTE PLANNER     |
+----------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let gray = if supports_color() {
        crate::terminal::colors::GRAY
    } else {
        ""
    };
    let reset = if gray.is_empty() {
        ""
    } else {
        crate::terminal::colors::RESET
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {}{reset}", time_str);
}
