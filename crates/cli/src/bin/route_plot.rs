use std::fs;
use std::path::PathBuf;

use clap::Parser;
use csv::ReaderBuilder;
use flight_route_simulator::export::waypoints::Waypoint;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a waypoint CSV as a route image")]
struct Cli {
    /// Waypoint CSV produced by `simulate --csv`
    #[arg(long)]
    input: String,

    #[arg(long, default_value = "artifacts/route.png")]
    output: PathBuf,

    #[arg(long, default_value = "Great-circle route")]
    title: String,

    #[arg(long, default_value_t = 1024)]
    width: u32,

    #[arg(long, default_value_t = 768)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(&cli.input)?;
    let rows: Vec<Waypoint> = reader.deserialize().collect::<Result<_, _>>()?;
    if rows.is_empty() {
        return Err(anyhow::anyhow!("No waypoints in the provided CSV"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let (lon_range, lat_range) = padded_ranges(&rows);

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&cli.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(lon_range, lat_range)?;

    chart
        .configure_mesh()
        .x_desc("Longitude (deg)")
        .y_desc("Latitude (deg)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        rows.iter().map(|w| (w.lon_deg, w.lat_deg)),
        RGBColor(6, 182, 212).stroke_width(2),
    ))?;

    let first = &rows[0];
    let last = &rows[rows.len() - 1];
    chart.draw_series(std::iter::once(Circle::new(
        (first.lon_deg, first.lat_deg),
        6,
        GREEN.filled(),
    )))?;
    chart.draw_series(std::iter::once(Circle::new(
        (last.lon_deg, last.lat_deg),
        6,
        RED.filled(),
    )))?;

    root.present()?;
    println!("Wrote {}", cli.output.display());
    Ok(())
}

/// Axis ranges covering every waypoint with a little margin; degenerate
/// spans (single point or straight meridian) are widened so plotters gets a
/// non-empty range.
fn padded_ranges(rows: &[Waypoint]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut lon_min = f64::INFINITY;
    let mut lon_max = f64::NEG_INFINITY;
    let mut lat_min = f64::INFINITY;
    let mut lat_max = f64::NEG_INFINITY;

    for row in rows {
        lon_min = lon_min.min(row.lon_deg);
        lon_max = lon_max.max(row.lon_deg);
        lat_min = lat_min.min(row.lat_deg);
        lat_max = lat_max.max(row.lat_deg);
    }

    let lon_pad = ((lon_max - lon_min) * 0.05).max(1.0);
    let lat_pad = ((lat_max - lat_min) * 0.05).max(1.0);
    (
        (lon_min - lon_pad)..(lon_max + lon_pad),
        (lat_min - lat_pad)..(lat_max + lat_pad),
    )
}
