#![allow(deprecated)]

use assert_cmd::Command;

fn trackgrades(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("trackgrades").expect("binary exists");
    cmd.env("CLICOLOR", "0")
        .env("NO_COLOR", "1")
        .env_remove("TRACKGRADES_FORMAT")
        .env_remove("TRACKGRADES_LOG")
        .args(args);
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let assert = trackgrades(args).assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

#[test]
fn calc_prints_table_and_summary() {
    let stdout = stdout_of(&[
        "calc", "-p", "10", "-p", "10", "-p", "10", "-p", "10", "-x", "11", "-x", "11",
    ]);

    assert!(stdout.contains("Resultado Final"));
    assert!(stdout.contains("Permanentes"));
    assert!(stdout.contains("4.0 pts"));
    assert!(stdout.contains("6.6 pts"));
    assert!(stdout.contains("Total: 10.6 / 20"));
    assert!(stdout.contains("Aprobado"));
    assert!(stdout.contains("Curso aprobado"));
    assert!(stdout.contains("Progreso hacia la aprobación: 100%"));
}

#[test]
fn calc_without_scores_fails_the_course() {
    let stdout = stdout_of(&["calc"]);
    assert!(stdout.contains("Total: 0.0 / 20"));
    assert!(stdout.contains("Reprobado"));
    assert!(stdout.contains("Progreso hacia la aprobación: 0%"));
}

#[test]
fn calc_coerces_bad_input() {
    let stdout = stdout_of(&["calc", "--json", "-x", "25", "-x", "abc"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["grades"]["parciales"], serde_json::json!([20.0, 0.0]));
    assert_eq!(value["result"]["parcialesAverage"], 10.0);
}

fn json_of(args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&stdout_of(args)).unwrap()
}

#[test]
fn calc_clamps_negative_scores() {
    let value = json_of(&["calc", "--json", "-p", "-5", "-x", "12"]);
    assert_eq!(value["grades"]["permanentes"][0], 0.0);
    assert_eq!(value["grades"]["parciales"][0], 12.0);

    let value = json_of(&["calc", "--json", "--permanente", "-3", "--permanente", "8"]);
    assert_eq!(value["grades"]["permanentes"], serde_json::json!([0.0, 8.0, 0.0, 0.0]));
}

#[test]
fn calc_sets_single_slots() {
    let value = json_of(&["calc", "--json", "-x", "10", "--score", "parcial:2=18", "-s", "p:4=25"]);
    assert_eq!(value["grades"]["parciales"], serde_json::json!([10.0, 18.0]));
    assert_eq!(value["grades"]["permanentes"][3], 20.0);
}

#[test]
fn calc_rejects_unknown_category() {
    let assert = trackgrades(&["calc", "--score", "final:1=10"]).assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Unknown category `final`"));
}

#[test]
fn calc_json_perfect_scores() {
    let stdout = stdout_of(&[
        "calc",
        "--json",
        "--permanente",
        "20",
        "--permanente",
        "20",
        "--permanente",
        "20",
        "--permanente",
        "20",
        "--parcial",
        "20",
        "--parcial",
        "20",
    ]);

    insta::assert_snapshot!(stdout, @r#"
    {
      "grades": {
        "permanentes": [
          20.0,
          20.0,
          20.0,
          20.0
        ],
        "parciales": [
          20.0,
          20.0
        ]
      },
      "result": {
        "permanentesAverage": 20.0,
        "parcialesAverage": 20.0,
        "finalGrade": 20.0,
        "isPassing": true,
        "status": "Excelente",
        "permanentesPoints": 8.0,
        "parcialesPoints": 12.0,
        "passingProgress": 100.0
      }
    }
    "#);
}

#[test]
fn format_env_selects_json() {
    let assert = trackgrades(&["calc", "-p", "14"])
        .env("TRACKGRADES_FORMAT", "json")
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["result"]["permanentesAverage"], 3.5);
}

#[test]
fn too_many_parciales_is_rejected() {
    let assert = trackgrades(&["calc", "-x", "12", "-x", "13", "-x", "14"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Invalid parciales scores"));
    assert!(stderr.contains("at most 2 scores, 3 were given"));
}

#[test]
fn bands_lists_system_and_ranges() {
    let stdout = stdout_of(&["bands"]);

    insta::assert_snapshot!(stdout, @r"
    Sistema de Calificación
      • Permanentes: 4 evaluaciones (40% del total)
      • Parciales: 2 exámenes (60% del total)
      • Nota mínima para aprobar: 10.5
      • Escala: 0 - 20 puntos

    Rangos de Calificación
      • 16 - 20: Excelente
      • 14 - 15.9: Muy Bueno
      • 10.5 - 13.9: Aprobado
      • 0 - 10.4: Reprobado
    ");
}
