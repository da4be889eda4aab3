//! Column extraction from rows

/// Element `index` of each of the first `limit` rows
///
/// `None` or `Some(0)` means every row; a limit past the end is capped. Rows
/// too short to have `index` give `None`.
pub fn pluck<T, R>(rows: &[R], index: usize, limit: Option<usize>) -> Vec<Option<T>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let limit = limit.filter(|&l| l > 0).unwrap_or(rows.len()).min(rows.len());
    rows[..limit].iter().map(|row| row.as_ref().get(index).cloned()).collect()
}
