use std::fs;
use std::fs::File;
use std::io::{Write, BufWriter};
use std::io::{Read, BufReader};
use std::path::Path;
use super::super::bodies::{Axes, System};
use super::super::constants::BACKUP_TIMESTAMP_FORMAT;
use super::super::error::{Error, Result};
use super::super::tools::{format_utc_now, utc_timestamp};


////////////////////////////////////////////////////////////////////////////////
//- Dump and restore functions
////////////////////////////////////////////////////////////////////////////////

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |extension| extension == "json")
}

/// Store the whole system (bodies, final states and trajectories).
///
/// JSON if the file extension is `json`, bincode otherwise. An existing file is
/// renamed first to `<stem>.<YYYYMMDDTHH>.bak`.
pub fn write_snapshot(snapshot_path: &Path, system: &System) -> Result<()> {
    if snapshot_path.exists() {
        let backup_stamp = format_utc_now(BACKUP_TIMESTAMP_FORMAT);
        let new_extension = format!("{0}.bak", backup_stamp);
        fs::rename(snapshot_path, snapshot_path.with_extension(new_extension))?;
    }

    let mut writer = BufWriter::new(File::create(snapshot_path)?);
    if is_json(snapshot_path) {
        let json_encoded = serde_json::to_string_pretty(system)?;
        writer.write_all(json_encoded.as_bytes())?;
    } else {
        bincode::serialize_into(&mut writer, system)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn restore_snapshot(snapshot_path: &Path) -> Result<System> {
    if !snapshot_path.exists() {
        return Err(Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, format!("File '{}' does not exist", snapshot_path.display()))));
    }

    let system: System = if is_json(snapshot_path) {
        let mut json_encoded = String::new();
        File::open(snapshot_path)?.read_to_string(&mut json_encoded)?;
        serde_json::from_str(&json_encoded)?
    } else {
        let mut reader = BufReader::new(File::open(snapshot_path)?);
        bincode::deserialize_from(&mut reader)?
    };

    if system.n_bodies() != system.bodies().len() {
        return Err(Error::InvalidCase(format!("snapshot '{}' declares {} bodies but holds {}", snapshot_path.display(), system.n_bodies(), system.bodies().len())));
    }
    if let Some(i) = system.bodies().iter().position(|body| !(body.mass() > 0.)) {
        return Err(Error::InvalidCase(format!("snapshot '{}' holds body #{} with a non-positive mass", snapshot_path.display(), i)));
    }
    println!("[INFO {} UTC] Restored {} bodies from '{}'.", utc_timestamp(), system.n_bodies(), snapshot_path.display());
    Ok(system)
}

#[derive(Debug, Serialize)]
struct TrajectoryRecord {
    body: usize,
    step: usize,
    x: f64,
    y: f64,
    z: f64,
}

/// One row per body and step: `body,step,x,y,z`. Steps start at 1, as the
/// trajectories do not hold the initial position.
pub fn write_trajectories_csv<W: Write>(writer: W, trajectories: &[Vec<Axes>]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for (body, trajectory) in trajectories.iter().enumerate() {
        for (i, position) in trajectory.iter().enumerate() {
            writer.serialize(TrajectoryRecord {
                body: body,
                step: i+1,
                x: position.x,
                y: position.y,
                z: position.z,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_trajectories_csv_file(csv_path: &Path, trajectories: &[Vec<Axes>]) -> Result<()> {
    write_trajectories_csv(BufWriter::new(File::create(csv_path)?), trajectories)
}

pub fn trajectories(system: &System) -> Vec<Vec<Axes>> {
    system.bodies().iter().map(|body| body.trajectory().to_vec()).collect()
}
