use blockmul::{multiply, Algorithm, DenseMatrix};

fn main() {
    println!("blockmul: dense matrix multiplication three ways");

    // Create a simple example pair
    let a = DenseMatrix::from_rows(vec![
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 16],
    ]);

    let b = DenseMatrix::from_rows(vec![
        vec![1, 0, 2, 0],
        vec![0, 1, 0, 2],
        vec![2, 0, 1, 0],
        vec![0, 2, 0, 1],
    ]);

    // Display the matrices
    println!("\nMatrix A:");
    println!("{:?}", a);

    println!("\nMatrix B:");
    println!("{:?}", b);

    // Run all three strategies on the same inputs
    for algorithm in [
        Algorithm::Classic,
        Algorithm::DivideConquer,
        Algorithm::Strassen,
    ] {
        let c = multiply(&a, &b, algorithm);
        println!("\n{:?} result:", algorithm);
        println!("{:?}", c);
    }
}
