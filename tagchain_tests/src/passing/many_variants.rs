use tagchain::{chain, family, Family};

/// Families are not limited to two alternatives.
#[family]
enum Digit {
    Zero,
    One,
    Two,
    Three,
}

fn main() {
    assert_eq!(Digit::CANDIDATES.len(), 4);

    let mut out: Vec<u8> = Vec::new();
    let accumulated = chain![Digit => "Three", Digit => "Zero"].run(&mut out).unwrap();

    assert_eq!(accumulated.tags().collect::<Vec<_>>(), ["Three", "Zero"]);
}
