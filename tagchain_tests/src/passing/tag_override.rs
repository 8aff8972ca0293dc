use tagchain::{family, resolve, Family, Variant};

#[family(name = "Planet")]
pub enum Planets {
    #[tag = "earth"]
    Earth,
    #[tag = "mars"]
    Mars,
}

fn main() {
    assert_eq!(Planets::NAME, "Planet");
    assert_eq!(resolve::<Planets>("mars"), Ok(&Planets::Mars));
    assert!(resolve::<Planets>("Mars").is_err());
    assert_eq!(Planets::Earth.family(), "Planet");
}
