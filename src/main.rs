extern crate nbody;
extern crate clap;
use clap::{Arg, ArgAction, ArgMatches, Command};
use nbody::Method;
use nbody::output::{write_snapshot, restore_snapshot, write_trajectories_csv_file, trajectories};
use nbody::tools::{utc_timestamp, parse_duration, calculate_n_steps};
use std::path::Path;
use std::process;
use std::time::Instant;

fn cli() -> Command {
    Command::new("nbody")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solve the motion of N bodies interacting under Newtonian gravity with a fixed time step.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("solve")
                .about("Integrate a case and store the resulting system")
                .arg(Arg::new("case_filename")
                    .required(true)
                    .index(1)
                    .help("JSON case description"))
                .arg(Arg::new("snapshot_filename")
                    .required(true)
                    .index(2)
                    .help("Output snapshot filename (.json for JSON, binary otherwise)"))
                .arg(Arg::new("time")
                    .short('t')
                    .long("time")
                    .required(true)
                    .value_name("duration")
                    .help("Total simulated time, e.g. 1000y (units: s, h, d, y)"))
                .arg(Arg::new("time_step")
                    .long("time-step")
                    .visible_alias("dt")
                    .required(true)
                    .value_name("duration")
                    .help("Time step, e.g. 1h (units: s, h, d, y)"))
                .arg(Arg::new("method")
                    .short('m')
                    .long("method")
                    .default_value("leapfrog")
                    .help("Integration method: leapfrog or forward_euler"))
                .arg(Arg::new("csv_filename")
                    .long("csv")
                    .value_name("file")
                    .help("Also write the trajectories as CSV"))
                .arg(Arg::new("silent")
                    .short('s')
                    .long("silent")
                    .action(ArgAction::SetTrue)
                    .help("Only print WARNING/ERROR messages"))
                )
        .subcommand(Command::new("export")
                .about("Write the trajectories stored in a snapshot as CSV")
                .arg(Arg::new("snapshot_filename")
                    .required(true)
                    .index(1)
                    .help("Snapshot filename"))
                .arg(Arg::new("csv_filename")
                    .required(true)
                    .index(2)
                    .help("CSV output filename"))
                .arg(Arg::new("barycentric")
                    .long("barycentric")
                    .action(ArgAction::SetTrue)
                    .help("Express positions relative to the centre of mass"))
                )
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    // clap guarantees required arguments and defaults are present
    matches.get_one::<String>(id).map(|value| value.as_str()).unwrap_or_default()
}

fn solve(matches: &ArgMatches) -> nbody::Result<()> {
    let case_filename = required(matches, "case_filename");
    let snapshot_filename = required(matches, "snapshot_filename");
    let time = required(matches, "time");
    let time_step = required(matches, "time_step");
    let silent_mode = matches.get_flag("silent");

    // Everything is validated before integrating
    let method: Method = required(matches, "method").parse()?;
    let total_seconds = parse_duration(time)?;
    let time_step_seconds = parse_duration(time_step)?;
    let n_steps = calculate_n_steps(total_seconds, time_step_seconds)?;
    let mut system = nbody::case::load_case(Path::new(case_filename))?;

    if !silent_mode {
        println!("{}", "*".repeat(64));
        println!("{:^64}", "The N Body Problem");
        println!("{}", "*".repeat(64));
        println!("System Info:");
        println!("    N = {}", system.n_bodies());
        println!("    T = {}", time);
        println!("    dt = {}", time_step);
        println!("    Number of time steps = {}", n_steps);
        println!("{}", "*".repeat(64));
    }
    if n_steps == 0 {
        println!("[WARNING {} UTC] The total time is shorter than half a time step, nothing will be integrated.", utc_timestamp());
    }

    let initial_energy = system.compute_total_energy();
    let initial_angular_momentum = system.compute_total_angular_momentum();
    let t1 = Instant::now();
    system.solve(time_step_seconds, n_steps, method)?;
    let execution_time = t1.elapsed().as_secs_f64();

    if !silent_mode {
        println!("[INFO {} UTC] System solved in {:.1} seconds using the {} method.", utc_timestamp(), execution_time, method);
        let final_energy = system.compute_total_energy();
        let final_angular_momentum = system.compute_total_angular_momentum();
        println!("[INFO {} UTC] Relative energy error: {:e}", utc_timestamp(), (final_energy - initial_energy) / initial_energy);
        if initial_angular_momentum != 0. {
            println!("[INFO {} UTC] Relative angular momentum error: {:e}", utc_timestamp(), (final_angular_momentum - initial_angular_momentum) / initial_angular_momentum);
        }
    }
    if system.bodies().iter().any(|body| !body.position().is_finite()) {
        println!("[WARNING {} UTC] Non-finite positions found, two bodies probably occupied the same position.", utc_timestamp());
    }

    write_snapshot(Path::new(snapshot_filename), &system)?;
    if !silent_mode {
        println!("[INFO {} UTC] Snapshot written to '{}'.", utc_timestamp(), snapshot_filename);
    }
    if let Some(csv_filename) = matches.get_one::<String>("csv_filename") {
        write_trajectories_csv_file(Path::new(csv_filename), &trajectories(&system))?;
        if !silent_mode {
            println!("[INFO {} UTC] Trajectories written to '{}'.", utc_timestamp(), csv_filename);
        }
    }
    Ok(())
}

fn export(matches: &ArgMatches) -> nbody::Result<()> {
    let snapshot_filename = required(matches, "snapshot_filename");
    let csv_filename = required(matches, "csv_filename");
    let system = restore_snapshot(Path::new(snapshot_filename))?;
    let trajectories = if matches.get_flag("barycentric") {
        system.barycentric_trajectories()
    } else {
        trajectories(&system)
    };
    write_trajectories_csv_file(Path::new(csv_filename), &trajectories)?;
    println!("[INFO {} UTC] Trajectories written to '{}'.", utc_timestamp(), csv_filename);
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => solve(solve_matches),
        Some(("export", export_matches)) => export(export_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("[ERROR {} UTC] {}", utc_timestamp(), e);
        process::exit(1);
    }
}
