use tagchain::family;

#[family]
enum Nothing {}

fn main() {}
