use tagchain::family;

#[family]
enum Dup {
    A,
    #[tag = "A"]
    B,
}

fn main() {}
