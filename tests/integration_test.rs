use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pixkey() -> Command {
    let mut cmd = Command::cargo_bin("pixkey").unwrap();
    cmd.env_remove("PIXKEY_LOG");
    cmd
}

/// Command running inside an empty directory, so no stray pixkey.toml is picked up.
fn pixkey_in(dir: &TempDir) -> Command {
    let mut cmd = pixkey();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_version() {
    pixkey()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pixkey"));
}

#[test]
fn test_help() {
    pixkey()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PIX key"));
}

#[test]
fn test_check_valid_cpf() {
    let temp = TempDir::new().unwrap();
    pixkey_in(&temp)
        .args(["check", "--type", "CPF", "52998224725"])
        .assert()
        .success()
        .stdout(predicate::str::contains("529.982.247-25"))
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_check_invalid_cpf_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    pixkey_in(&temp)
        .args(["check", "-t", "cpf", "52998224726"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid"));
}

#[test]
fn test_check_json_output() {
    let temp = TempDir::new().unwrap();
    let output = pixkey_in(&temp)
        .args(["check", "-t", "CELULAR", "-f", "json", "(11) 98765-4321"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "CELULAR");
    assert_eq!(json["canonical"], "+5511987654321");
    assert_eq!(json["valid"], true);
}

#[test]
fn test_check_unknown_type() {
    let temp = TempDir::new().unwrap();
    pixkey_in(&temp)
        .args(["check", "-t", "RG", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key type 'RG'"));
}

#[test]
fn test_check_uses_config_country_code() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pixkey.toml"),
        "[field]\ncountry_code = \"+351\"\n",
    )
    .unwrap();

    pixkey_in(&temp)
        .args(["check", "-t", "CELULAR", "11987654321"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+35111987654321"));
}

#[test]
fn test_mask_partial_and_full() {
    pixkey()
        .args(["mask", "-t", "CNPJ", "11222333000181"])
        .assert()
        .success()
        .stdout("11.222.333/0001-81\n");

    pixkey()
        .args(["mask", "-t", "CNPJ", "112"])
        .assert()
        .success()
        .stdout("112\n");
}

#[test]
fn test_types_lists_all() {
    pixkey()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("CPF"))
        .stdout(predicate::str::contains("CNPJ"))
        .stdout(predicate::str::contains("CELULAR"))
        .stdout(predicate::str::contains("EMAIL"))
        .stdout(predicate::str::contains("ALEATORIA"));
}

#[test]
fn test_receipt_written() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("payees.json"),
        r#"[
  {"referencia": "Janeiro", "valor": "12.50", "pix": "00020126360014BR.GOV.BCB.PIX"},
  {"referencia": "Fevereiro", "valor": "30.00", "pix": "00020126360014BR.GOV.BCB.PIX2"}
]"#,
    )
    .unwrap();

    pixkey_in(&temp)
        .args([
            "receipt", "-t", "EMAIL", "-k", "Fulano@Banco.com", "-n", "Fulano", "-p",
            "payees.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 QR code(s)"));

    let html = fs::read_to_string(temp.path().join("recibo.html")).unwrap();
    assert!(html.contains("fulano@banco.com"));
    assert!(html.contains("R$ 12,50"));
    assert_eq!(html.matches("data:image/svg+xml;base64,").count(), 2);
}

#[test]
fn test_receipt_rejects_invalid_key() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("payees.json"), "[]").unwrap();

    pixkey_in(&temp)
        .args([
            "receipt", "-t", "CPF", "-k", "123", "-n", "Fulano", "-p", "payees.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CPF key"));
    assert!(!temp.path().join("recibo.html").exists());
}

#[test]
fn test_receipt_missing_payload_aborts() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("payees.json"),
        r#"[{"referencia": "sem pix", "valor": "1.00"}]"#,
    )
    .unwrap();

    pixkey_in(&temp)
        .args([
            "receipt", "-t", "CPF", "-k", "529.982.247-25", "-n", "Fulano", "-p",
            "payees.json",
        ])
        .assert()
        .failure();
    assert!(!temp.path().join("recibo.html").exists());
}

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();
    pixkey_in(&temp).arg("init").assert().success();

    let content = fs::read_to_string(temp.path().join("pixkey.toml")).unwrap();
    assert!(content.contains("country_code"));

    pixkey_in(&temp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pixkey_in(&temp).args(["init", "--force"]).assert().success();
}

#[test]
fn test_completions() {
    pixkey()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixkey"));
}
