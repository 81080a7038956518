//! Conversions between Excel-style cell references (e.g. `B3`) and
//! zero-based row/column indexes.

// Excel grid bounds: columns A..=XFD, rows 1..=1048576
const COLUMN_LIMIT: usize = 16_384;
const ROW_LIMIT: usize = 1_048_576;

/// Parses column letters to a zero-based column index.
/// Letter runs naming a column past `XFD` are rejected.
pub(crate) fn column_to_index(letters: &str) -> Option<usize> {
    if letters.len() > 3 || !letters.bytes().all(|letter| letter.is_ascii_alphabetic()) {
        return None;
    }
    letters
        .to_ascii_uppercase()
        .chars()
        .map(|letter| letter as usize - 'A' as usize + 1)
        .reduce(|index, digit| index * 26 + digit)
        .map(|column| column - 1)
        .filter(|column| *column < COLUMN_LIMIT)
}

/// Parses a one-based row number string to a zero-based row index.
/// Rows past the bottom of the grid are rejected.
pub(crate) fn row_to_index(number: &str) -> Option<usize> {
    number
        .parse()
        .ok()
        .filter(|row| *row > 0 && *row <= ROW_LIMIT)
        .map(|row: usize| row - 1)
}

/// Converts zero-based row/column indexes to an Excel-style cell reference.
pub(crate) fn index_to_reference(row: usize, column: usize) -> String {
    let row = (row + 1).to_string();
    let mut column: u32 = column as u32 + 1;
    let mut reference = String::from("");
    while column > 0 {
        column -= 1;
        let digit = char::from_u32(65 + column % 26).expect("Hardcode letters");
        column /= 26;
        reference.insert(0, digit)
    }
    reference.push_str(row.as_str());
    reference
}

/// Parses an Excel-style cell reference into zero-based (row, column) indexes.
/// References outside the grid yield `None`.
pub(crate) fn reference_to_index(reference: &str) -> Option<(usize, usize)> {
    let position = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, number) = reference.split_at(position);
    let column = column_to_index(letters)?;
    let row = row_to_index(number)?;
    Some((row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_index() {
        assert_eq!(column_to_index("A"), Some(0));
        assert_eq!(column_to_index("Z"), Some(25));
        assert_eq!(column_to_index("AA"), Some(26));
        assert_eq!(column_to_index("ZZ"), Some(701));
        assert_eq!(column_to_index("AAA"), Some(702));
        assert_eq!(column_to_index("XFD"), Some(16_383));
        assert_eq!(column_to_index("b"), Some(1));
        assert_eq!(column_to_index(""), None);
        assert_eq!(column_to_index("A1"), None);
    }

    #[test]
    fn test_column_to_index_rejects_columns_past_the_grid() {
        assert_eq!(column_to_index("XFE"), None);
        assert_eq!(column_to_index("ZZZ"), None);
        assert_eq!(column_to_index("AAAA"), None);
        assert_eq!(column_to_index("AAAAAAAAAAAAAAAA"), None);
    }

    #[test]
    fn test_row_to_index() {
        assert_eq!(row_to_index("1"), Some(0));
        assert_eq!(row_to_index("42"), Some(41));
        assert_eq!(row_to_index("1048576"), Some(1_048_575));
        assert_eq!(row_to_index("1048577"), None);
        assert_eq!(row_to_index("0"), None);
        assert_eq!(row_to_index("x"), None);
        assert_eq!(row_to_index(""), None);
    }

    #[test]
    fn test_index_to_reference() {
        assert_eq!(index_to_reference(0, 0), "A1");
        assert_eq!(index_to_reference(2, 1), "B3");
        assert_eq!(index_to_reference(0, 25), "Z1");
        assert_eq!(index_to_reference(0, 26), "AA1");
        assert_eq!(index_to_reference(9, 701), "ZZ10");
    }

    #[test]
    fn test_reference_to_index() {
        assert_eq!(reference_to_index("A1"), Some((0, 0)));
        assert_eq!(reference_to_index("B3"), Some((2, 1)));
        assert_eq!(reference_to_index("AA10"), Some((9, 26)));
        assert_eq!(reference_to_index("XFD1048576"), Some((1_048_575, 16_383)));
        assert_eq!(reference_to_index("XFE1"), None);
        assert_eq!(reference_to_index("ZZZZZZ1"), None);
        assert_eq!(reference_to_index("AAAAAAAAAAAAAAAA1"), None);
        assert_eq!(reference_to_index("A9999999999"), None);
        assert_eq!(reference_to_index("1A"), None);
        assert_eq!(reference_to_index("A0"), None);
        assert_eq!(reference_to_index(""), None);
    }
}
