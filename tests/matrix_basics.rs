//! Basic tests for matrix construction, block movement, and arithmetic

use blockmul::{add, extract_quadrant, split_quadrants, sub, write_quadrant, DenseMatrix};

#[test]
fn test_matrix_creation() {
    let matrix = DenseMatrix::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert_eq!(matrix.n_rows, 3);
    assert_eq!(matrix.n_cols, 3);
    assert_eq!(matrix.n(), 3);
    assert!(matrix.is_square());

    assert_eq!(matrix.get(0, 0), 1);
    assert_eq!(matrix.get(1, 1), 5);
    assert_eq!(matrix.get(2, 0), 7);
}

#[test]
fn test_identity_structure() {
    let identity = DenseMatrix::<i32>::identity(4);

    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1 } else { 0 };
            assert_eq!(identity.get(i, j), expected);
        }
    }
}

#[test]
fn test_quadrant_offsets() {
    // Each quadrant of a 4x4 comes from the expected offsets
    let matrix = DenseMatrix::from_rows(vec![
        vec![1, 1, 2, 2],
        vec![1, 1, 2, 2],
        vec![3, 3, 4, 4],
        vec![3, 3, 4, 4],
    ]);

    let [tl, tr, bl, br] = split_quadrants(&matrix);

    assert!(tl.data.iter().all(|&v| v == 1));
    assert!(tr.data.iter().all(|&v| v == 2));
    assert!(bl.data.iter().all(|&v| v == 3));
    assert!(br.data.iter().all(|&v| v == 4));
}

#[test]
fn test_extract_does_not_mutate_source() {
    let matrix = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
    let before = matrix.clone();

    let _ = extract_quadrant(&matrix, 0, 0, 1);
    assert_eq!(matrix, before);
}

#[test]
fn test_write_quadrant_only_touches_target_block() {
    let mut dest = DenseMatrix::from_rows(vec![
        vec![9, 9, 9, 9],
        vec![9, 9, 9, 9],
        vec![9, 9, 9, 9],
        vec![9, 9, 9, 9],
    ]);
    let block = DenseMatrix::from_rows(vec![vec![0, 0], vec![0, 0]]);

    write_quadrant(&block, &mut dest, 0, 2);

    // Top-right quadrant cleared, everything else untouched
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i < 2 && j >= 2 { 0 } else { 9 };
            assert_eq!(dest.get(i, j), expected);
        }
    }
}

#[test]
fn test_add_sub_inverse() {
    let a = DenseMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
    let b = DenseMatrix::from_rows(vec![vec![10, 20], vec![30, 40]]);

    assert_eq!(sub(&add(&a, &b), &b), a);
}
