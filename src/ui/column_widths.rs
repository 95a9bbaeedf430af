/// Largest number of rows inspected when sizing columns
const MAX_ROWS_TO_CHECK: usize = 100;
const PADDING: usize = 2;
const MIN_WIDTH: usize = 4;
const MAX_WIDTH: usize = 50;

/// Content-based widths in visual order: the widest of the header and the
/// sampled cells, plus padding, clamped to a sane range.
pub fn calculate_column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<u16> {
    let total_rows = rows.len();

    // For large datasets, sample evenly distributed rows
    let rows_to_check: Vec<usize> = if total_rows <= MAX_ROWS_TO_CHECK {
        (0..total_rows).collect()
    } else {
        let step = total_rows / MAX_ROWS_TO_CHECK;
        (0..MAX_ROWS_TO_CHECK)
            .map(|i| (i * step).min(total_rows - 1))
            .collect()
    };

    headers
        .iter()
        .enumerate()
        .map(|(col_idx, header)| {
            let widest_cell = rows_to_check
                .iter()
                .filter_map(|&row_idx| rows.get(row_idx)?.get(col_idx))
                .map(|value| display_width(value))
                .max()
                .unwrap_or(0);

            let width = display_width(header).max(widest_cell) + PADDING;
            width.clamp(MIN_WIDTH, MAX_WIDTH) as u16
        })
        .collect()
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_widths_use_widest_content() {
        let headers = s(&["Id", "City"]);
        let rows = vec![s(&["728ed52f", "Amsterdam"]), s(&["1", "A Coruña"])];

        // "728ed52f" = 8 + 2, "Amsterdam" = 9 + 2
        assert_eq!(calculate_column_widths(&headers, &rows), vec![10, 11]);
    }

    #[test]
    fn test_widths_are_clamped() {
        let headers = s(&["x", "long"]);
        let rows = vec![s(&["", &"y".repeat(80)])];
        assert_eq!(calculate_column_widths(&headers, &rows), vec![4, 50]);
    }

    #[test]
    fn test_widths_without_rows() {
        let headers = s(&["Amount"]);
        assert_eq!(calculate_column_widths(&headers, &[]), vec![8]);
    }

    #[test]
    fn test_multibyte_counts_chars() {
        let headers = s(&["ñññññ"]);
        assert_eq!(calculate_column_widths(&headers, &[]), vec![7]);
    }
}
