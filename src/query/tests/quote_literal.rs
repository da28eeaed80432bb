use super::*;

/// Expected: embedded quotes are doubled inside the literal
#[test]
fn doubles_single_quotes() {
    assert_eq!(quote_literal("Des'ree"), "'Des''ree'");
    assert_eq!(quote_literal("plain"), "'plain'");
}
