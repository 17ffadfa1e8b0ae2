use std::cmp::Ordering;

/// Sorts the list in place in ascending order using insertion sort.
///
/// Each element is held as a key while every preceding element greater than it is
/// shifted one slot to the right. Equal elements are never moved past each other.
pub fn insertion_sort<T>(list: &mut [T])
where
    T: PartialOrd + Copy,
{
    for i in 1..list.len() {
        let key = list[i];
        let mut j = i;

        while j > 0 && list[j - 1] > key {
            list[j] = list[j - 1];
            j -= 1;
        }

        list[j] = key;
    }

    debug_assert!(is_sorted(list));
}

/// Sorts numbers in ascending order.
pub fn sort(numbers: &mut [f64]) {
    insertion_sort(numbers);
}

/// Checks that no adjacent pair is decreasing. Incomparable pairs (NaN) are skipped.
pub fn is_sorted<T: PartialOrd>(list: &[T]) -> bool {
    list.windows(2)
        .all(|pair| pair[0].partial_cmp(&pair[1]) != Some(Ordering::Greater))
}
