mod families {
    use tagchain::family;

    /// Doc comments and visibility survive expansion.
    #[family(name = "Switch")]
    pub(crate) enum Switch {
        /// Switched on.
        On,
        Off,
    }
}

use families::Switch;
use tagchain::Variant;

fn main() {
    let state = Switch::On;
    let copied = state;

    assert_eq!(state, copied);
    assert_eq!(format!("{:?}", Switch::Off), "Off");
    assert_eq!(copied.tag(), "On");
}
