//! List views shared by every feature module.
//!
//! Goals are grouped by category and status, events by timing, friends by
//! status and routines by weekday. All of them go through the helpers here so
//! ordering rules stay identical everywhere: items keep their list order, and
//! groups come out in the order the caller asks for (or first-seen order for
//! `sum_by_key`).

/// Items matching `predicate`, in list order
pub fn filter_by<'a, T, P>(items: &'a [T], predicate: P) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).collect()
}

/// Group `items` under each of `values` by `key_fn`.
///
/// Every requested value gets an entry, empty if nothing matches. Items whose
/// key is not among `values` are left out.
pub fn partition_by<'a, T, K, F>(items: &'a [T], key_fn: F, values: &[K]) -> Vec<(K, Vec<&'a T>)>
where
    K: PartialEq + Clone,
    F: Fn(&T) -> K,
{
    values
        .iter()
        .map(|value| {
            let members = items.iter().filter(|item| key_fn(item) == *value).collect();
            (value.clone(), members)
        })
        .collect()
}

/// Sum `value_fn` per key, keys in first-seen order
pub fn sum_by_key<T, K, KF, VF>(items: &[T], key_fn: KF, value_fn: VF) -> Vec<(K, f64)>
where
    K: PartialEq,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    let mut totals: Vec<(K, f64)> = Vec::new();
    for item in items {
        let key = key_fn(item);
        let value = value_fn(item);
        match totals.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, total)) => *total += value,
            None => totals.push((key, value)),
        }
    }
    totals
}
