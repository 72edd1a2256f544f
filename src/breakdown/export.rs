//! CSV export of breakdown tables

use std::io::Write;

use super::rows::{MonthRow, YearlyEntry};

/// Write the yearly ledger with a camelCase header row
pub fn write_breakdown_csv<W: Write>(entries: &[YearlyEntry], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_monthly_csv<W: Write>(rows: &[MonthRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_csv_layout() {
        let entries = vec![
            YearlyEntry::new(1, 12, 1200.0, 1250.5),
            YearlyEntry::new(2, 3, 1500.0, 1580.25),
        ];
        let mut buf = Vec::new();
        write_breakdown_csv(&entries, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,monthsInYear,contributedToDate,accruedReturn,balance");
        assert_eq!(lines[1], "1,12,1200.0,50.5,1250.5");
        assert_eq!(lines[2], "2,3,1500.0,80.25,1580.25");
        assert_eq!(lines.len(), 3);
    }
}
