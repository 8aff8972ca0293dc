use tagchain::family;

#[family]
enum Numbered {
    #[tag = 1]
    One,
}

fn main() {}
