use assert_cmd::Command;
use predicates::prelude::*;

fn scrip() -> Command {
    Command::cargo_bin("scrip").unwrap()
}

fn write_text(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_suggest_known_merchant() {
    scrip()
        .args(["suggest", "Shell Gas Station"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gas"));
}

#[test]
fn test_suggest_unknown_merchant() {
    scrip()
        .args(["suggest", "Unknown Biz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other-expense"));
}

#[test]
fn test_detect_modes() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_text(
        &dir,
        "history.txt",
        "Date Amount Description\n01/02/2024 Coffee 4.50\n",
    );
    let receipt = write_text(&dir, "receipt.txt", "Receipt\nTotal $10.00\n");

    scrip()
        .args(["detect", history.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("history"));
    scrip()
        .args(["detect", receipt.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("receipt"));
}

#[test]
fn test_detect_reads_stdin() {
    scrip()
        .args(["detect", "-"])
        .write_stdin("Transaction Date Amount\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_extract_receipt_table_output() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_text(
        &dir,
        "joes.txt",
        "Joe's Diner\nBurger 8.50\nFries 3.00\nTAX 0.90\nTOTAL 12.40\n",
    );
    scrip()
        .args(["extract", receipt.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Joe's Diner"))
        .stdout(predicate::str::contains("$12.40"))
        .stdout(predicate::str::contains("$0.90"))
        .stdout(predicate::str::contains("Burger"))
        .stdout(predicate::str::contains("food-dining"));
}

#[test]
fn test_extract_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let receipt = write_text(&dir, "joes.txt", "Joe's Diner\nTOTAL $45.00\n");
    scrip()
        .args(["extract", receipt.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"merchant_name\": \"Joe's Diner\""))
        .stdout(predicate::str::contains("\"total_amount\": 45.0"))
        .stdout(predicate::str::contains("\"txn_type\": \"expense\""));
}

#[test]
fn test_history_parse_and_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let statement = write_text(
        &dir,
        "statement.txt",
        "Date Description Amount\n\
         01/05/2024 Salary Deposit +2000.00\n\
         03/05/2024 Shell Fuel 40.00\n\
         bad row without a date 5.00\n",
    );
    let csv_path = dir.path().join("out.csv");

    scrip()
        .args([
            "history",
            statement.to_str().unwrap(),
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary Deposit"))
        .stdout(predicate::str::contains("1 income"))
        .stdout(predicate::str::contains("1 expense"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("date,description,type,category,amount,payment_method"));
    assert!(csv.contains("2024-05-01,Salary Deposit,income,other-income,2000.00,bank-transfer"));
    assert!(csv.contains("2024-05-03,Shell Fuel,expense,gas,40.00,bank-transfer"));
}

#[test]
fn test_history_empty_input() {
    scrip()
        .args(["history", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No parseable rows."));
}

#[test]
fn test_categories_lists_taxonomy() {
    scrip()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("bills-utilities"))
        .stdout(predicate::str::contains("freelance"));
}

#[test]
fn test_keywords_add_rejects_unknown_category() {
    let home = tempfile::tempdir().unwrap();
    scrip()
        .env("HOME", home.path())
        .args(["keywords", "add", "not-a-category", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_keywords_add_changes_suggestions() {
    let home = tempfile::tempdir().unwrap();
    scrip()
        .env("HOME", home.path())
        .args(["keywords", "add", "education", "coursera"])
        .assert()
        .success();
    scrip()
        .env("HOME", home.path())
        .args(["suggest", "COURSERA SUBSCRIPTION"])
        .assert()
        .success()
        .stdout(predicate::str::contains("education"));
}

#[test]
fn test_demo_runs_all_branches() {
    scrip()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Joe's Diner"))
        .stdout(predicate::str::contains("Salary Deposit"))
        .stdout(predicate::str::contains("Manual entry required"));
}
