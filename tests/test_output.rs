extern crate nbody;
extern crate assert_approx_eq;

mod common;
use std::env;
use std::fs;
use std::path::PathBuf;
use assert_approx_eq::assert_approx_eq;
use nbody::Method;
use nbody::output::{write_snapshot, restore_snapshot, write_trajectories_csv, trajectories};

fn temporary_path(filename: &str) -> PathBuf {
    let dirname = env::temp_dir().join(format!("nbody-tests-{}", std::process::id()));
    let _ = fs::create_dir_all(&dirname);
    let path = dirname.join(filename);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn json_snapshot_round_trip() {
    let mut system = common::systems::four_bodies();
    system.solve(0.01, 50, Method::LeapFrog).unwrap();
    let snapshot_path = temporary_path("four_bodies.json");
    write_snapshot(&snapshot_path, &system).unwrap();
    let restored = restore_snapshot(&snapshot_path).unwrap();

    assert_eq!(restored.n_bodies(), system.n_bodies());
    assert_eq!(restored.gravitational_constant(), system.gravitational_constant());
    for (restored_body, body) in restored.bodies().iter().zip(system.bodies().iter()) {
        assert_eq!(restored_body.colour(), body.colour());
        assert_eq!(restored_body.trajectory().len(), 50);
        assert_approx_eq!(restored_body.position().x, body.position().x, 1e-12);
        assert_approx_eq!(restored_body.velocity().y, body.velocity().y, 1e-12);
    }
}

#[test]
fn binary_snapshot_round_trip_is_exact() {
    let mut system = common::systems::four_bodies();
    system.solve(0.01, 50, Method::ForwardEuler).unwrap();
    let snapshot_path = temporary_path("four_bodies.bin");
    write_snapshot(&snapshot_path, &system).unwrap();
    let restored = restore_snapshot(&snapshot_path).unwrap();
    assert_eq!(restored, system);
}

#[test]
fn existing_snapshot_is_kept_as_backup() {
    let system = common::systems::two_body_circular_orbit();
    let snapshot_path = temporary_path("backup.bin");
    write_snapshot(&snapshot_path, &system).unwrap();
    write_snapshot(&snapshot_path, &system).unwrap();
    let n_backups = fs::read_dir(snapshot_path.parent().unwrap()).unwrap()
                        .filter_map(|entry| entry.ok())
                        .filter(|entry| {
                            let filename = entry.file_name().to_string_lossy().to_string();
                            // backup.<YYYYMMDDTHH>.bak
                            filename.starts_with("backup.") && filename.ends_with(".bak")
                                && filename.len() == "backup.20240131T12.bak".len()
                        })
                        .count();
    assert!(n_backups >= 1);
    assert!(snapshot_path.exists());
}

#[test]
fn restoring_a_missing_snapshot_fails() {
    let snapshot_path = temporary_path("does_not_exist.bin");
    assert!(restore_snapshot(&snapshot_path).is_err());
}

#[test]
fn trajectories_as_csv() {
    let mut system = common::systems::two_body_circular_orbit();
    system.solve(0.001, 7, Method::LeapFrog).unwrap();
    let mut buffer = Vec::new();
    write_trajectories_csv(&mut buffer, &trajectories(&system)).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "body,step,x,y,z");
    assert_eq!(lines.len(), 1 + 2*7);
    assert!(lines[1].starts_with("0,1,"));
    assert!(lines[2*7].starts_with("1,7,"));
}

#[test]
fn barycentric_trajectories_are_centred() {
    let mut system = common::systems::four_bodies();
    system.solve(0.01, 30, Method::LeapFrog).unwrap();
    let barycentric = system.barycentric_trajectories();
    let masses = system.masses();
    let total_mass: f64 = masses.iter().sum();

    assert_eq!(barycentric.len(), 4);
    for step in 0..30 {
        let mut center = nbody::Axes::zero();
        for (trajectory, mass) in barycentric.iter().zip(masses.iter()) {
            center = center.add(trajectory[step].scale(*mass / total_mass));
        }
        assert_approx_eq!(center.x, 0., 1e-12);
        assert_approx_eq!(center.y, 0., 1e-12);
        assert_approx_eq!(center.z, 0., 1e-12);
    }
}

#[test]
fn center_of_mass_moves_uniformly() {
    let mut system = common::systems::four_bodies();
    let (initial_position, initial_velocity) = system.calculate_center_of_mass();
    let time_step = 0.01;
    let n_steps = 200;
    system.solve(time_step, n_steps, Method::LeapFrog).unwrap();
    let (final_position, final_velocity) = system.calculate_center_of_mass();

    // Internal forces only: the centre of mass drifts at constant velocity
    let elapsed = time_step * n_steps as f64;
    assert_approx_eq!(final_velocity.x, initial_velocity.x, 1e-10);
    assert_approx_eq!(final_velocity.y, initial_velocity.y, 1e-10);
    assert_approx_eq!(final_position.x, initial_position.x + elapsed * initial_velocity.x, 1e-9);
    assert_approx_eq!(final_position.y, initial_position.y + elapsed * initial_velocity.y, 1e-9);
}
