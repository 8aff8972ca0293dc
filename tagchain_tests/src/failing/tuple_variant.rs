use tagchain::family;

#[family]
enum Shape {
    Circle(u8),
    Square,
}

fn main() {}
