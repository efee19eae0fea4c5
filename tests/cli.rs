use std::process::{Command, Output};

use serde_json::Value;

fn packages(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_packages"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run packages")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn prints_every_package() {
    let output = packages(&[]);

    assert!(output.status.success());
    let rows: Vec<Vec<String>> = stdout(&output)
        .lines()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect();

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == 4));
    assert_eq!(rows[0], ["bike", "Bike", "car", "Affordable solo rides"]);
    assert_eq!(rows[2], ["sedan", "Sedan", "bus", "Comfortable rides for up to 4 people"]);
}

#[test]
fn prints_json_table() {
    let output = packages(&["--json"]);

    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let slugs: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["slug"].as_str().unwrap())
        .collect();

    assert_eq!(slugs, ["bike", "auto", "sedan", "suv"]);
    assert_eq!(value[1]["name"], "Auto");
    assert_eq!(value[1]["icon"], "truck");
    assert_eq!(value[1]["description"], "Affordable rides for 2-3 people");
}

#[test]
fn prints_single_package() {
    let output = packages(&[" suv "]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "suv\tSUV\tcrown\tSpacious rides for up to 6 people\n"
    );
}

#[test]
fn rejects_unknown_slug() {
    let output = packages(&["SUV"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("unknown package slug: \"SUV\""));
}

#[test]
fn rejects_empty_slug() {
    let output = packages(&[""]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("no package slug provided"));
}
