#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stockroom_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("stockroom"));
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("--config-dir")
        .arg(temp.path().join("config"));
    cmd
}

fn seed_catalog(temp: &TempDir) {
    fs::write(
        temp.path().join("db_products.csv"),
        "id,name,desc,price,quantity\n\
         a,Cable,USB-C cable,9.99,5\n\
         b,Mouse,Wireless mouse,249,12\n",
    )
    .unwrap();
}

#[test]
fn test_lists_catalog_and_saves() {
    let temp = TempDir::new().unwrap();
    seed_catalog(&temp);

    stockroom_cmd(&temp)
        .write_stdin("S\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) (#1) Cable – 9,99 kr (5 i lager)"))
        .stdout(predicate::str::contains("2) (#2) Mouse – 249,00 kr (12 i lager)"))
        .stdout(predicate::str::contains("Ändringar har sparats."));
}

#[test]
fn test_add_remove_and_save_workflow() {
    let temp = TempDir::new().unwrap();
    seed_catalog(&temp);

    stockroom_cmd(&temp)
        .write_stdin("L\nAdapter\nUSB-A, to C\n19,90\n7\n\nT\n1\n\nS\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Produkten 'Adapter' har lagts till."))
        .stdout(predicate::str::contains("Produkten 'Cable' har tagits bort."));

    let raw = fs::read_to_string(temp.path().join("db_products.csv")).unwrap();
    let lines: Vec<_> = raw.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,name,desc,price,quantity");
    assert!(lines[1].starts_with("b,Mouse,"));
    assert!(lines[2].contains("Adapter,\"USB-A, to C\",19.9,7"));
}

#[test]
fn test_missing_catalog_is_created_on_save() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(&temp)
        .write_stdin("S\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hittades inte"));

    let raw = fs::read_to_string(temp.path().join("db_products.csv")).unwrap();
    assert_eq!(raw.trim_end(), "id,name,desc,price,quantity");
}

#[test]
fn test_closed_input_discards_changes() {
    let temp = TempDir::new().unwrap();
    seed_catalog(&temp);

    stockroom_cmd(&temp)
        .write_stdin("T\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Avslutar utan att spara."));

    let raw = fs::read_to_string(temp.path().join("db_products.csv")).unwrap();
    assert!(raw.contains("a,Cable"));
}

#[test]
fn test_file_flag_and_config_currency() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{"currency": {"symbol": "$", "symbol_position": "before", "symbol_spaced": false,
            "decimal_separator": ".", "grouping_separator": ","}}"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("shop.csv"),
        "id,name,desc,price,quantity\nx,Screen,24 inch,1999.5,1\n",
    )
    .unwrap();

    stockroom_cmd(&temp)
        .args(["--file", "shop.csv"])
        .write_stdin("S\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) (#1) Screen – $1,999.50 (1 i lager)"));
}

#[test]
fn test_corrupt_catalog_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("db_products.csv"),
        "id,name,desc,price,quantity\na,Cable,x,cheap,5\n",
    )
    .unwrap();

    stockroom_cmd(&temp)
        .write_stdin("S\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
