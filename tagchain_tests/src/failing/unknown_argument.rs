use tagchain::family;

#[family(label = "A")]
enum Letters {
    A,
}

fn main() {}
