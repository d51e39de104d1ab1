use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

const EXPECTED_TABLE: &str = "\
setnum,p1,p2,OF_AET,OF_SWE,rank,soln_num,gennum
1,0.10,0.20,0.30,0.40,1,00001,0
3,0.15,0.25,0.35,0.45,1,00003,0
1,0.11,0.21,0.31,0.41,1,00001,1
2,0.16,0.26,0.36,0.46,1,00002,1
1,0.12,0.22,0.32,0.42,1,00001,2
1,0.13,0.23,0.33,0.43,1,00001,3
2,0.17,0.27,0.37,0.47,2,00002,3
";

#[test]
fn converts_a_run_log_into_optim_fixed() {
    let optimdir = tempfile::tempdir().expect("tempdir");
    let workdir = optimdir.path().join("runs").join("2016-04-06_1609");
    fs::create_dir_all(&workdir).expect("run workdir");
    fs::copy(fixture_path("optim.log"), workdir.join("optim.log")).expect("stage log");

    let mut cmd = cargo_bin_cmd!("optlog");
    cmd.arg("2016-04-06_1609")
        .arg(fixture_path("basin.cfg"))
        .arg(optimdir.path())
        .arg("optim.log");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total generations: 2"))
        .stdout(predicate::str::contains("Excluded rows: 1"));

    let table = fs::read_to_string(workdir.join("optim_fixed.log")).expect("output table");
    assert_eq!(table, EXPECTED_TABLE);
}

#[test]
fn missing_basin_config_fails() {
    let optimdir = tempfile::tempdir().expect("tempdir");
    let workdir = optimdir.path().join("runs").join("run-1");
    fs::create_dir_all(&workdir).expect("run workdir");
    fs::copy(fixture_path("optim.log"), workdir.join("optim.log")).expect("stage log");

    let mut cmd = cargo_bin_cmd!("optlog");
    cmd.arg("run-1")
        .arg(optimdir.path().join("no-such.cfg"))
        .arg(optimdir.path())
        .arg("optim.log");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("loading basin configuration"));
}

#[test]
fn missing_log_file_fails() {
    let optimdir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(optimdir.path().join("runs").join("run-2")).expect("run workdir");

    let mut cmd = cargo_bin_cmd!("optlog");
    cmd.arg("run-2")
        .arg(fixture_path("basin.cfg"))
        .arg(optimdir.path())
        .arg("optim.log");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading optimization log"));
}
