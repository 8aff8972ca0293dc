use tagchain::family;

#[family]
enum Wrapper<T> {
    Only,
}

fn main() {}
