use congruences::{Solution, combine};
use num_bigint::BigInt;

// Find the positions common to the strided patterns 1 + 4k and 3 + 6k.
fn main() {
    let moduli = [4, 6].map(BigInt::from);
    let offsets = [1, 3].map(BigInt::from);

    match combine(&moduli, &offsets, true).unwrap() {
        None => println!("The patterns never overlap"),
        Some(Solution { value, modulus }) => {
            println!("Common positions: {value} + {modulus}k");
        }
    }
}
