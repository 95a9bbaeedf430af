use std::io::Write;

use anyhow::Result;
use dnd_table::data::{load_payments, payment_columns, PaymentStatus};
use dnd_table::table::TableController;
use tempfile::{Builder, NamedTempFile};

fn temp_file(suffix: &str, contents: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_csv() -> Result<()> {
    let file = temp_file(
        ".csv",
        "id,amount,status,email,city,country\n\
         a1, 10.5, success, a@example.com, Lisbon, Portugal\n\
         b2,20,failed,b@example.com,Oslo,Norway\n",
    )?;

    let payments = load_payments(file.path())?;
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].id, "a1");
    assert_eq!(payments[0].amount, 10.5);
    assert_eq!(payments[0].status, PaymentStatus::Success);
    assert_eq!(payments[1].city, "Oslo");
    Ok(())
}

#[test]
fn test_load_json() -> Result<()> {
    let file = temp_file(
        ".json",
        r#"[
            {"id": "x", "amount": 1, "status": "pending", "email": "x@example.com", "city": "Rome", "country": "Italy"}
        ]"#,
    )?;

    let payments = load_payments(file.path())?;
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].status, PaymentStatus::Pending);

    let table = TableController::new(payment_columns(), payments)?;
    let instance = table.instance();
    let rows = instance.row_model();
    let texts: Vec<&str> = rows.rows[0]
        .visible_cells()
        .iter()
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(texts, vec!["x", "pending", "x@example.com", "Rome", "Italy", "1"]);
    Ok(())
}

#[test]
fn test_bad_csv_row_reports_line() -> Result<()> {
    let file = temp_file(
        ".csv",
        "id,amount,status,email,city,country\n\
         a1,not-a-number,success,a@example.com,Lisbon,Portugal\n",
    )?;

    let err = load_payments(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("line 2"));
    Ok(())
}

#[test]
fn test_unknown_extension_is_rejected() -> Result<()> {
    let file = temp_file(".txt", "whatever")?;
    assert!(load_payments(file.path()).is_err());
    Ok(())
}

#[test]
fn test_missing_file() {
    assert!(load_payments("/definitely/not/here.csv").is_err());
}

#[test]
fn test_extension_match_ignores_case() -> Result<()> {
    let file = temp_file(
        ".CSV",
        "id,amount,status,email,city,country\nzz999999,5,failed,z@example.com,Bern,Switzerland\n",
    )?;

    let payments = load_payments(file.path())?;
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, "zz999999");
    Ok(())
}
