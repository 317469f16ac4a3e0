use ncollide2d::na::RealField;

/// Binary search on a sorted slice returning the index of the last element which is less than or
/// equal to the test value. Values below the first element return 0, values beyond the last
/// element return the final index.
pub fn preceding_index_search<N: RealField + Copy>(slice: &[N], test_value: N) -> usize {
    if slice.len() <= 1 || slice[1] > test_value {
        return 0;
    }

    let mut a = 1;
    let mut b = slice.len() - 1;
    if slice[b] <= test_value {
        return b;
    }

    while b > a + 1 {
        let check = (a + b) / 2;
        if test_value >= slice[check] {
            a = check;
        } else {
            b = check;
        }
    }
    a
}

/// Generate `n` uniformly spaced values from `a` to `b` inclusive. A count of one yields just
/// `a`, a count of zero yields an empty vector.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| a + (b - a) * (i as f64 / last)).collect()
        }
    }
}
