//! Cartesian product

/// Cartesian product of `sets`, first set varying slowest
///
/// `product(&[vec![9, 8], vec![1, 2]])` is `[[9, 1], [9, 2], [8, 1], [8, 2]]`.
/// No sets give a single empty tuple; any empty set gives no tuples.
pub fn product<T: Clone, S: AsRef<[T]>>(sets: &[S]) -> Vec<Vec<T>> {
    sets.iter().fold(vec![Vec::new()], |acc, set| {
        let set = set.as_ref();
        let mut next = Vec::with_capacity(acc.len() * set.len());
        for prefix in &acc {
            for item in set {
                let mut tuple = Vec::with_capacity(prefix.len() + 1);
                tuple.extend_from_slice(prefix);
                tuple.push(item.clone());
                next.push(tuple);
            }
        }
        next
    })
}
