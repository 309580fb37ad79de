//! Writing generated declarations to disk.

use std::fs;

use matchable_maker::{Artifact, MakerError, MatchableMaker};

fn maker() -> MatchableMaker {
	let mut maker = MatchableMaker::new();
	let day = maker.grab("DayOfWeek");
	for name in ["Monday", "Tuesday", "Wednesday"] {
		day.add_variant(name);
	}
	maker
}

#[test]
fn test_save_forward_and_full() {
	let dir = tempfile::tempdir().unwrap();
	let fwd = dir.path().join("day_fwd.rs");
	let full = dir.path().join("day.rs");

	let maker = maker();
	maker.save_as(&fwd, Artifact::Forward).unwrap();
	maker.save_as(&full, Artifact::Full).unwrap();

	let fwd_source = fs::read_to_string(&fwd).unwrap();
	assert!(fwd_source.contains("matchable_fwd::declare_matchable!(pub DayOfWeek);"));
	assert!(!fwd_source.contains("Monday"));

	let full_source = fs::read_to_string(&full).unwrap();
	assert!(full_source.contains("pub DayOfWeek {"));
	assert!(full_source.contains("\t\tTuesday,\n"));
}

#[test]
fn test_save_leaves_unchanged_file_alone() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("day.rs");
	let maker = maker();

	maker.save_as(&path, Artifact::Full).unwrap();
	let first = fs::metadata(&path).unwrap().modified().unwrap();
	maker.save_as(&path, Artifact::Full).unwrap();
	let second = fs::metadata(&path).unwrap().modified().unwrap();
	assert_eq!(first, second);
}

#[test]
fn test_save_no_content() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("empty.rs");
	let err = MatchableMaker::new().save_as(&path, Artifact::Forward).unwrap_err();
	assert!(matches!(err, MakerError::NoContent));
	assert!(!path.exists());
}

#[test]
fn test_save_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing").join("day.rs");
	let err = maker().save_as(&path, Artifact::Forward).unwrap_err();
	assert!(matches!(err, MakerError::Io { ref path, .. } if path.ends_with("day.rs")));
}

#[test]
fn test_from_path() {
	let dir = tempfile::tempdir().unwrap();
	let config = dir.path().join("matchables.toml");
	fs::write(
		&config,
		"[[matchable]]\nname = \"Unit\"\npayload = \"f64\"\nvariants = [{ name = \"Second\", payload = \"1.0\" }]\n",
	)
	.unwrap();

	let maker = MatchableMaker::from_path(&config).unwrap();
	let source = maker.render(Artifact::Full).unwrap();
	assert!(source.contains("pub Unit: f64 {"));
	assert!(source.contains("\t\tSecond = 1.0,\n"));

	let missing = MatchableMaker::from_path(dir.path().join("nope.toml")).unwrap_err();
	assert!(matches!(missing, MakerError::Read(_)));
}
