use std::{fs, path::PathBuf};

use swing_pendulum::{Error, MethodKind, Point, Scenario, SimulationConfig, Trajectory, run, sink};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("swing-sink-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn two_points() -> Trajectory {
    [
        Point {
            time: 0.0,
            angle: 0.2,
            angular_velocity: 0.0,
        },
        Point {
            time: 0.01,
            angle: 0.2002,
            angular_velocity: 0.039_999_996,
        },
    ]
    .into_iter()
    .collect()
}

#[test]
fn second_row_has_eight_decimals() {
    let dir = scratch_dir("rows");
    let path = dir.join("two.csv");

    sink::write_csv(&two_points(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "t,theta,omega\n0.00000000,0.20000000,0.00000000\n0.01000000,0.20020000,0.04000000\n"
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn writing_twice_is_byte_identical() {
    let dir = scratch_dir("idempotent");
    let path = dir.join("pendulum.csv");
    let trajectory = run(
        &SimulationConfig::default(),
        MethodKind::Romberg,
        Scenario::WithForce,
    )
    .unwrap();

    sink::write_csv(&trajectory, &path).unwrap();
    let first = fs::read(&path).unwrap();
    sink::write_csv(&trajectory, &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = scratch_dir("missing");
    let path = dir.join("absent").join("pendulum.csv");

    match sink::write_csv(&two_points(), &path) {
        Err(Error::Write { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!path.exists());

    fs::remove_dir_all(&dir).unwrap();
}
