pub type Coordinates = Vec<Vec<f64>>;

/// `len` evenly spaced positions from (-180, -90) to (180, 90), both ends included exactly.
pub fn diagonal(len: usize) -> Coordinates {
    assert!(len >= 2, "a diagonal needs at least two positions");
    let last_idx = (len - 1) as f64;
    (0..len)
        .map(|idx| {
            let idx = idx as f64;
            vec![-180.0 + 360.0 * idx / last_idx, -90.0 + 180.0 * idx / last_idx]
        })
        .collect()
}

#[test]
fn diagonal_endpoints() {
    let coordinates = diagonal(3);
    assert_eq!(
        coordinates,
        vec![vec![-180.0, -90.0], vec![0.0, 0.0], vec![180.0, 90.0]]
    );
}
