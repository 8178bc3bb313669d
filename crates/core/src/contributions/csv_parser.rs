//! Raw CSV decoding and parsing for the contribution register.
//!
//! Register exports arrive in a handful of encodings depending on which tool
//! produced them. Decoding tries UTF-8 (byte-order mark tolerated), then
//! Windows-1252, then Latin-1; the first clean decode wins.

use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;

use super::contributions_errors::LoadError;
use crate::constants::MIN_COLUMNS;

/// The five bytes cp1252 leaves undefined. `encoding_rs` maps them to C1
/// controls instead of erroring, so a strict decode has to reject them
/// itself for the Latin-1 fallback to ever apply.
const WINDOWS_1252_UNMAPPED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Header plus raw data rows, cells addressed by column index.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Decodes register bytes to a string. Infallible: Latin-1 maps every byte.
pub fn decode_bytes(content: &[u8]) -> String {
    // UTF-8 BOM (EF BB BF)
    let body = content
        .strip_prefix(&[0xEF, 0xBB, 0xBF][..])
        .unwrap_or(content);

    if let Ok(text) = std::str::from_utf8(body) {
        return text.to_string();
    }

    if !body.iter().any(|b| WINDOWS_1252_UNMAPPED.contains(b)) {
        log::debug!("register is not valid UTF-8, decoding as windows-1252");
        let (decoded, _had_errors) = WINDOWS_1252.decode_without_bom_handling(body);
        return decoded.into_owned();
    }

    log::debug!("register is not valid UTF-8 or windows-1252, decoding as latin-1");
    body.iter().map(|&b| b as char).collect()
}

/// Parses decoded register text into a header row and raw data rows.
///
/// Rows are normalized to the header width: short rows are padded with blank
/// cells, long rows truncated. Fully blank rows are dropped.
pub fn parse_rows(text: &str) -> Result<RawTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(row);
    }

    // A header alone is still an empty register.
    if records.len() < 2 {
        return Err(LoadError::Empty);
    }

    let mut rows = records.into_iter();
    let headers: Vec<String> = rows
        .next()
        .unwrap_or_default()
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < MIN_COLUMNS {
        return Err(LoadError::InsufficientColumns {
            found: headers.len(),
        });
    }

    let width = headers.len();
    let rows: Vec<Vec<String>> = rows
        .enumerate()
        .map(|(index, mut row)| {
            if row.len() > width {
                log::warn!(
                    "row {} has {} cells, expected {}; extra cells ignored",
                    index + 2,
                    row.len(),
                    width
                );
            }
            row.resize(width, String::new());
            row
        })
        .collect();

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_bytes("Ngân hàng".as_bytes()), "Ngân hàng");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"date,amount");
        assert_eq!(decode_bytes(&bytes), "date,amount");
    }

    #[test]
    fn test_decode_windows_1252() {
        // 0xE9 is 'e acute' in windows-1252 and invalid as a UTF-8 start of
        // sequence continuation.
        let bytes = [b'c', b'a', b'f', 0xE9];
        assert_eq!(decode_bytes(&bytes), "café");
    }

    #[test]
    fn test_decode_falls_back_to_latin1() {
        // 0x81 is undefined in cp1252; latin-1 maps it to U+0081.
        let bytes = [b'a', 0x81, b'b'];
        assert_eq!(decode_bytes(&bytes), "a\u{81}b");
    }

    #[test]
    fn test_parse_rows_basic() {
        let text = "a,b,c,d,e,f,g,h,i\n1,2,3,4,5,6,7,8,9\n";
        let table = parse_rows(text).unwrap();
        assert_eq!(table.headers.len(), 9);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][8], "9");
    }

    #[test]
    fn test_parse_rows_pads_short_rows() {
        let text = "a,b,c,d,e,f,g,h,i\n1,2,3\n";
        let table = parse_rows(text).unwrap();
        assert_eq!(table.rows[0].len(), 9);
        assert_eq!(table.rows[0][3], "");
    }

    #[test]
    fn test_parse_rows_truncates_long_rows() {
        let text = "a,b,c,d,e,f,g,h,i\n1,2,3,4,5,6,7,8,9,10,11\n";
        let table = parse_rows(text).unwrap();
        assert_eq!(table.rows[0].len(), 9);
    }

    #[test]
    fn test_parse_rows_skips_blank_rows() {
        let text = "a,b,c,d,e,f,g,h,i\n,,,,,,,,\n1,2,3,4,5,6,7,8,9\n";
        let table = parse_rows(text).unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_header_only_register_is_empty() {
        let text = "a,b,c,d,e,f,g,h,i\n";
        assert!(matches!(parse_rows(text), Err(LoadError::Empty)));
    }

    #[test]
    fn test_empty_register() {
        assert!(matches!(parse_rows(""), Err(LoadError::Empty)));
    }

    #[test]
    fn test_too_few_columns() {
        let text = "a,b,c\n1,2,3\n";
        assert!(matches!(
            parse_rows(text),
            Err(LoadError::InsufficientColumns { found: 3 })
        ));
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let text = "a,b,c,d,e,f,g,h,i\n\"1,000,000\",2,3,4,5,6,7,8,9\n";
        let table = parse_rows(text).unwrap();
        assert_eq!(table.rows[0][0], "1,000,000");
    }
}
