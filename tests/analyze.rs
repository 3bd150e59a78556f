use std::{
    fs,
    path::{Path, PathBuf},
};

use dfa::{
    report, stats::TextureUsage, CompanionPolicy, Error, FileKind, Level, LevelPaths, MetricKind,
    ReportFormat, Value,
};
use pretty_assertions::assert_eq;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// A fresh directory holding only the given fixtures.
fn scratch(name: &str, fixtures: &[&str]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dfa-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    for fixture in fixtures {
        fs::copy(data(fixture), dir.join(fixture)).unwrap();
    }

    dir
}

fn text(stats: &dfa::Statistics, kind: MetricKind) -> String {
    stats.get(kind).unwrap().to_string()
}

#[test]
fn secbase() {
    let level = Level::load(
        &LevelPaths::from_geometry(data("secbase.lev")),
        CompanionPolicy::Require,
    )
    .unwrap();

    assert_eq!(level.geometry.sectors.len(), 3);
    assert_eq!(level.geometry.walls.len(), 10);

    let sector_walls: usize = level.geometry.sectors.iter().map(|s| s.wall_count).sum();
    assert_eq!(sector_walls, level.geometry.walls.len());

    let stats = level.statistics();
    let expected = [
        (MetricKind::SectorCount, "3"),
        (MetricKind::WallCount, "10"),
        (MetricKind::TextureCount, "3"),
        (MetricKind::MaxSectorWalls, "4"),
        (MetricKind::MeanSectorWalls, "3.333333"),
        (MetricKind::MeanAmbientLight, "20.0"),
        (MetricKind::HighestCeiling, "24.0"),
        (MetricKind::LowestFloor, "-2.0"),
        (MetricKind::MeanFloorAltitude, "0.666667"),
        (MetricKind::MeanCeilingAltitude, "16.0"),
        (MetricKind::TallestRoom, "20.0"),
        (MetricKind::ShortestRoom, "10.0"),
        (MetricKind::MeanRoomHeight, "15.333333"),
        (MetricKind::FloorTexture, "BRICK.BM (in 2 sectors)"),
        (MetricKind::CeilingTexture, "DEFAULT.BM (in 2 sectors)"),
        (MetricKind::SignShare, "0.2"),
        (MetricKind::ScriptEntries, "3"),
        (MetricKind::Elevators, "2"),
        (MetricKind::ElevatorStops, "4"),
        (MetricKind::MeanStopsPerElevator, "2.0"),
        (MetricKind::Triggers, "1"),
        (MetricKind::ScriptEntriesPerSector, "1.0"),
        (MetricKind::Objects, "4"),
        (MetricKind::Sprites, "2"),
        (MetricKind::Frames, "1"),
        (MetricKind::MeanObjectsPerSector, "1.333333"),
        (MetricKind::MaxSectorObjects, "2"),
        (MetricKind::VertexCount, "10"),
        (MetricKind::LayerCount, "2"),
    ];

    for (kind, value) in expected {
        assert_eq!((kind, text(&stats, kind)), (kind, value.to_owned()));
    }

    assert_eq!(
        stats.get(MetricKind::FloorTexture),
        Some(&Value::Texture(TextureUsage {
            index: 1,
            name: Some("BRICK.BM".to_owned()),
            sectors: 2,
        }))
    );
}

#[test]
fn missing_geometry_file() {
    let dir = scratch("missing-geometry", &[]);

    let error = Level::load(
        &LevelPaths::from_geometry(dir.join("secbase.lev")),
        CompanionPolicy::Degrade,
    )
    .unwrap_err();

    assert!(matches!(
        error,
        Error::PrimaryFileMissing {
            kind: FileKind::Geometry,
            ..
        }
    ));
}

#[test]
fn missing_companion_is_required_by_default() {
    let dir = scratch("missing-companion", &["secbase.lev", "secbase.o"]);

    let error = Level::load(
        &LevelPaths::from_geometry(dir.join("secbase.lev")),
        CompanionPolicy::default(),
    )
    .unwrap_err();

    match error {
        Error::CompanionFileMissing { kind, path, .. } => {
            assert_eq!(kind, FileKind::Script);
            assert_eq!(path, dir.join("secbase.inf"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_objects_file_is_required_by_default() {
    let dir = scratch("missing-objects", &["secbase.lev", "secbase.inf"]);

    let error = Level::load(
        &LevelPaths::from_geometry(dir.join("secbase.lev")),
        CompanionPolicy::default(),
    )
    .unwrap_err();

    match error {
        Error::CompanionFileMissing { kind, path, .. } => {
            assert_eq!(kind, FileKind::Objects);
            assert_eq!(path, dir.join("secbase.o"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_companions_degrade_to_empty() {
    let dir = scratch("degrade", &["secbase.lev"]);

    let level = Level::load(
        &LevelPaths::from_geometry(dir.join("secbase.lev")),
        CompanionPolicy::Degrade,
    )
    .unwrap();

    assert_eq!(level.geometry.sectors.len(), 3);
    assert_eq!(level.script, Default::default());
    assert_eq!(level.objects, Default::default());

    let stats = level.statistics();
    assert_eq!(text(&stats, MetricKind::ScriptEntries), "0");
    assert_eq!(text(&stats, MetricKind::MeanStopsPerElevator), "N/A");
    assert_eq!(text(&stats, MetricKind::MeanObjectsPerSector), "0.0");
    assert_eq!(text(&stats, MetricKind::MaxSectorObjects), "N/A");
}

#[test]
fn malformed_geometry_aborts() {
    let dir = scratch("malformed", &["secbase.inf", "secbase.o"]);
    fs::write(dir.join("secbase.lev"), "SECTOR 0\n  AMBIENT bright\n").unwrap();

    let error = Level::load(
        &LevelPaths::from_geometry(dir.join("secbase.lev")),
        CompanionPolicy::Require,
    )
    .unwrap_err();

    match error {
        Error::Format(format) => {
            assert_eq!(format.file, FileKind::Geometry);
            assert_eq!(format.line, 2);
            assert_eq!(format.text, "AMBIENT bright");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn save_reports() {
    let dir = scratch("reports", &[]);
    let stats = Level::load(
        &LevelPaths::from_geometry(data("secbase.lev")),
        CompanionPolicy::Require,
    )
    .unwrap()
    .statistics();

    let text = ReportFormat::Text.render(&stats).unwrap();
    report::save(&dir.join("dfa.txt"), &text).unwrap();

    let saved = fs::read_to_string(dir.join("dfa.txt")).unwrap();
    assert_eq!(saved, text);
    assert_eq!(saved.lines().count(), MetricKind::ALL.len());
    assert!(saved.starts_with("Number of sectors: 3\nTotal number of walls: 10\n"));

    let toml = ReportFormat::Toml.render(&stats).unwrap();
    report::save(&dir.join("dfa.toml"), &toml).unwrap();

    let table: toml::Table = fs::read_to_string(dir.join("dfa.toml"))
        .unwrap()
        .parse()
        .unwrap();
    let metrics = table["metric"].as_array().unwrap();
    let sign_share = metrics
        .iter()
        .find(|m| m["key"].as_str() == Some("sign_share"))
        .unwrap();

    assert_eq!(sign_share["value"].as_str(), Some("0.2"));
    assert_eq!(sign_share["number"].as_float(), Some(0.2));

    let sectors = metrics
        .iter()
        .find(|m| m["key"].as_str() == Some("sectors"))
        .unwrap();

    assert_eq!(sectors["number"].as_integer(), Some(3));
}
