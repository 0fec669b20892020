use crate::tle::TleError;

pub fn split_tle_lines(tle: &str) -> Result<(Option<String>, String, String), TleError> {
    let lines: Vec<String> = tle
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    match lines.as_slice() {
        [] => Err(TleError::Empty),
        [_] => Err(TleError::MissingLines(1)),
        [first, second, ..] if first.starts_with("1 ") => {
            Ok((None, first.clone(), second.clone()))
        }
        [name, first, second, ..] => Ok((Some(name.clone()), first.clone(), second.clone())),
        [first, second] => Ok((None, first.clone(), second.clone())),
    }
}

/// Modulo-10 checksum over the first 68 columns: digits count their value,
/// minus signs count one, everything else zero.
pub fn checksum(line: &str) -> u32 {
    line.chars()
        .take(68)
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum::<u32>()
        % 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tle::{ISS_LINE1, ISS_LINE2};

    #[test]
    fn splits_two_lines() {
        let text = format!("{ISS_LINE1}\n{ISS_LINE2}");
        let (name, l1, l2) = split_tle_lines(&text).unwrap();
        assert_eq!(name, None);
        assert_eq!(l1, ISS_LINE1);
        assert_eq!(l2, ISS_LINE2);
    }

    #[test]
    fn tolerates_crlf_and_padding() {
        let text = format!("  {ISS_LINE1}  \r\n\r\n{ISS_LINE2}\r\n");
        let (_, l1, l2) = split_tle_lines(&text).unwrap();
        assert_eq!(l1, ISS_LINE1);
        assert_eq!(l2, ISS_LINE2);
    }

    #[test]
    fn keeps_name_line() {
        let text = format!("ISS (ZARYA)\n{ISS_LINE1}\n{ISS_LINE2}");
        let (name, l1, _) = split_tle_lines(&text).unwrap();
        assert_eq!(name.as_deref(), Some("ISS (ZARYA)"));
        assert_eq!(l1, ISS_LINE1);
    }

    #[test]
    fn rejects_blank_and_single_line() {
        assert_eq!(split_tle_lines(""), Err(TleError::Empty));
        assert_eq!(split_tle_lines(" \n\t\r\n"), Err(TleError::Empty));
        assert_eq!(split_tle_lines(ISS_LINE1), Err(TleError::MissingLines(1)));
    }

    #[test]
    fn checksum_matches_published_lines() {
        assert_eq!(checksum(ISS_LINE1), 5);
        assert_eq!(checksum(ISS_LINE2), 5);
    }
}
