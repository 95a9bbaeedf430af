use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::column::{CellValue, ColumnDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Success,
    Failed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// One row of the demo table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    pub email: String,
    pub city: String,
    pub country: String,
}

/// Built-in rows used when no data file is given
pub fn sample_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "728ed52f".to_string(),
            amount: 100.0,
            status: PaymentStatus::Pending,
            email: "m@example.com".to_string(),
            city: "Amsterdam".to_string(),
            country: "Netherlands".to_string(),
        },
        Payment {
            id: "489e1d42".to_string(),
            amount: 125.0,
            status: PaymentStatus::Processing,
            email: "example@gmail.com".to_string(),
            city: "A Coruña".to_string(),
            country: "Spain".to_string(),
        },
    ]
}

/// Column definitions in their initial order
pub fn payment_columns() -> Vec<ColumnDef<Payment>> {
    vec![
        ColumnDef::accessor("id", |p: &Payment| p.id.as_str().into()).header("Id"),
        ColumnDef::accessor("status", |p: &Payment| p.status.to_string().into()).header("Status"),
        ColumnDef::accessor("email", |p: &Payment| p.email.as_str().into()).header("Email"),
        ColumnDef::accessor("city", |p: &Payment| p.city.as_str().into()).header("City"),
        ColumnDef::accessor("country", |p: &Payment| p.country.as_str().into()).header("Country"),
        ColumnDef::accessor("amount", |p: &Payment| CellValue::Float(p.amount)).header("Amount"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_read_matching_fields() {
        let payments = sample_payments();
        let columns = payment_columns();

        let headers: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| c.render_header(i))
            .collect();
        assert_eq!(headers, vec!["Id", "Status", "Email", "City", "Country", "Amount"]);

        let values: Vec<String> = columns
            .iter()
            .map(|c| c.value(&payments[1]).to_string())
            .collect();
        assert_eq!(
            values,
            vec!["489e1d42", "processing", "example@gmail.com", "A Coruña", "Spain", "125"]
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Success).unwrap();
        assert_eq!(json, "\"success\"");
    }
}
