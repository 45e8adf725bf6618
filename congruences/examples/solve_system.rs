use congruences::solve;
use num_bigint::BigInt;

// Solve a system of congruences with non-coprime moduli.
fn main() {
    let pairs = [(2, 3), (3, 5), (2, 7), (23, 15)]
        .map(|(a, m)| (BigInt::from(a), BigInt::from(m)));

    match solve(&pairs, true).unwrap() {
        None => println!("No solution"),
        Some(sol) => println!("{sol}"),
    }
}
