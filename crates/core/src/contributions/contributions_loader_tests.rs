//! Tests for register loading and the primary-row filter.

#[cfg(test)]
mod tests {
    use crate::contributions::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    const HEADER: &str =
        "Date,Total,Decrease,Balance,Category,Bank,Account,Shareholder,ID,Unit price,Units,Content\n";

    fn register(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text.into_bytes()
    }

    #[test]
    fn test_parses_primary_rows() {
        let bytes = register(&[
            "01/01/2024,\"1,000,000\",,,Contribution,ACB,111,Nguyen Van A,NGUYENVANA111,\"10,000\",100,first",
            "15/02/2024,\"2,000,000\",,,Contribution,ACB,111,Nguyen Van A,NGUYENVANA111,\"11,000\",181.818,second",
        ]);
        let table = parse_contributions(&bytes).unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(first.date_raw, "01/01/2024");
        assert_eq!(first.amount, dec!(1000000));
        assert_eq!(first.unit_price, dec!(10000));
        assert_eq!(first.units, dec!(100));
        assert_eq!(first.bank, "ACB");
        assert_eq!(first.shareholder_id, "NGUYENVANA111");
    }

    #[test]
    fn test_detail_rows_are_dropped() {
        // Detail rows carry a leading '-' in the date cell; rows missing
        // identity cells belong to the same multi-row transfer format.
        let bytes = register(&[
            "01/01/2024,1000,,,C,B,A,Alice,AL1,10,100,ok",
            "-01/01/2024,9999,,,C,B,A,Alice,AL1,10,100,detail",
            ",500,,,C,B,A,Alice,AL1,10,50,no date",
            "02/01/2024,,,,C,B,A,Alice,AL1,10,50,no amount",
            "03/01/2024,700,,,C,B,A,,AL1,10,70,no name",
            "04/01/2024,800,,,C,B,A,Alice,,10,80,no id",
        ]);
        let table = parse_contributions(&bytes).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].content, "ok");
    }

    #[test]
    fn test_only_detail_rows_is_no_valid_rows() {
        let bytes = register(&["-01/01/2024,1000,,,C,B,A,Alice,AL1,10,100,detail"]);
        assert!(matches!(
            parse_contributions(&bytes),
            Err(LoadError::NoValidRows)
        ));
    }

    #[test]
    fn test_bad_numeric_cells_become_zero() {
        let bytes = register(&["01/01/2024,not-money,,,C,B,A,Alice,AL1,bad,also bad,x"]);
        let table = parse_contributions(&bytes).unwrap();

        let record = &table.records()[0];
        assert_eq!(record.amount, dec!(0));
        assert_eq!(record.unit_price, dec!(0));
        assert_eq!(record.units, dec!(0));
    }

    #[test]
    fn test_bad_date_survives_as_null() {
        let bytes = register(&["99/99/2024,1000,,,C,B,A,Alice,AL1,10,100,x"]);
        let table = parse_contributions(&bytes).unwrap();

        let record = &table.records()[0];
        assert_eq!(record.date, None);
        assert_eq!(record.date_raw, "99/99/2024");
        assert_eq!(record.amount, dec!(1000));
    }

    #[test]
    fn test_nine_column_register_is_accepted() {
        let bytes =
            b"Date,Total,Decrease,Balance,Category,Bank,Account,Shareholder,ID\n01/01/2024,1000,,,C,B,A,Alice,AL1\n"
                .to_vec();
        let table = parse_contributions(&bytes).unwrap();

        let record = &table.records()[0];
        assert_eq!(record.amount, dec!(1000));
        assert_eq!(record.unit_price, dec!(0));
        assert_eq!(record.units, dec!(0));
        assert_eq!(record.content, "");
    }

    #[test]
    fn test_eight_columns_is_insufficient() {
        let bytes = b"a,b,c,d,e,f,g,h\n1,2,3,4,5,6,7,8\n".to_vec();
        assert!(matches!(
            parse_contributions(&bytes),
            Err(LoadError::InsufficientColumns { found: 8 })
        ));
    }

    #[test]
    fn test_utf8_bom_register() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(&register(&["01/01/2024,1000,,,C,B,A,Alice,AL1,10,100,x"]));
        let table = parse_contributions(&bytes).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_windows_1252_register() {
        let mut bytes = register(&[]);
        // "Qu\xFD" is "Quý" in windows-1252 and invalid UTF-8.
        bytes.extend_from_slice(b"01/01/2024,1000,,,C,B,A,Qu\xFD,AL1,10,100,x\n");
        let table = parse_contributions(&bytes).unwrap();
        assert_eq!(table.records()[0].shareholder_name, "Quý");
    }

    #[test]
    fn test_latin1_register() {
        let mut bytes = register(&[]);
        // 0x81 forces the decode past the strict windows-1252 step.
        bytes.extend_from_slice(b"01/01/2024,1000,,,C,B,A,A\x81B,AL1,10,100,x\n");
        let table = parse_contributions(&bytes).unwrap();
        assert_eq!(table.records()[0].shareholder_name, "A\u{81}B");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_contributions(std::path::Path::new("/no/such/register.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_load_from_disk() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&register(&["01/01/2024,1000,,,C,B,A,Alice,AL1,10,100,x"]))
            .unwrap();
        file.flush().unwrap();

        let table = load_contributions(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }
}
