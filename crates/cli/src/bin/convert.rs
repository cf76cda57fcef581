use clap::{Parser, ValueEnum};
use flight_route_simulator::units::{
    DistanceUnit, SpeedUnit, TimeUnit, convert_distance, convert_speed, convert_time,
};

#[derive(Parser)]
#[command(author, version, about = "Convert speeds, distances, and times")]
struct Cli {
    /// Unit family to convert within
    #[arg(value_enum)]
    family: Family,

    /// Value in the source unit
    #[arg(long)]
    value: f64,

    /// Source unit (e.g. km/h, knots, km, nm, s, h)
    #[arg(long)]
    from: String,

    /// Target unit
    #[arg(long)]
    to: String,

    /// Also print the value in every unit of the family
    #[arg(long)]
    table: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Family {
    Speed,
    Distance,
    Time,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.family {
        Family::Speed => {
            let from: SpeedUnit = cli.from.parse()?;
            let to: SpeedUnit = cli.to.parse()?;
            println!("{:.2} {}", convert_speed(cli.value, from, to), to.label());
            if cli.table {
                for unit in SpeedUnit::ALL {
                    println!(
                        "  {:>12.2} {}",
                        convert_speed(cli.value, from, unit),
                        unit.label()
                    );
                }
            }
        }
        Family::Distance => {
            let from: DistanceUnit = cli.from.parse()?;
            let to: DistanceUnit = cli.to.parse()?;
            println!("{:.2} {}", convert_distance(cli.value, from, to), to.label());
            if cli.table {
                for unit in DistanceUnit::ALL {
                    println!(
                        "  {:>12.2} {}",
                        convert_distance(cli.value, from, unit),
                        unit.label()
                    );
                }
            }
        }
        Family::Time => {
            let from: TimeUnit = cli.from.parse()?;
            let to: TimeUnit = cli.to.parse()?;
            println!("{:.2} {}", convert_time(cli.value, from, to), to.label());
            if cli.table {
                for unit in TimeUnit::ALL {
                    println!(
                        "  {:>12.2} {}",
                        convert_time(cli.value, from, unit),
                        unit.label()
                    );
                }
            }
        }
    }

    Ok(())
}
