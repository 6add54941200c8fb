use crate::cursor::Cursor;

const WS: &[char] = &[' ', '\n', '\t', '\r'];

#[test]
fn plain_mode_consumes_in_order() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.next(), Some('a'));
    assert_eq!(cursor.next(), Some('b'));
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
}

#[test]
fn plain_mode_handles_multibyte_characters() {
    let mut cursor = Cursor::new("Ü日x");
    assert_eq!(cursor.next(), Some('Ü'));
    assert_eq!(cursor.next(), Some('日'));
    assert_eq!(cursor.next(), Some('x'));
    assert_eq!(cursor.next(), None);
}

#[test]
fn skip_mode_returns_first_character_outside_the_set() {
    let mut cursor = Cursor::new(" \n\t\rx y");
    assert_eq!(cursor.next_skipping(WS), Some('x'));
    assert_eq!(cursor.next_skipping(WS), Some('y'));
    assert_eq!(cursor.next_skipping(WS), None);
}

#[test]
fn skip_mode_discards_skipped_characters_permanently() {
    let mut cursor = Cursor::new("  ab");
    assert_eq!(cursor.next_skipping(WS), Some('a'));
    // The spaces are gone; only `b` remains.
    assert_eq!(cursor.next(), Some('b'));
    assert_eq!(cursor.next(), None);
}

#[test]
fn skip_mode_exhausts_on_all_skipped_input() {
    let mut cursor = Cursor::new("   ");
    assert_eq!(cursor.next_skipping(WS), None);
}

#[test]
fn until_mode_consumes_through_the_terminator() {
    let mut cursor = Cursor::new("abc:def");
    assert_eq!(cursor.next_until(&[':']), Some(':'));
    assert_eq!(cursor.next(), Some('d'));
}

#[test]
fn until_mode_discards_everything_without_terminator() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.next_until(&[':']), None);
    assert_eq!(cursor.next(), None);
}

#[test]
fn pushback_is_redelivered_first() {
    let mut cursor = Cursor::new("bc");
    let b = cursor.next().unwrap();
    cursor.push_back(b);
    assert_eq!(cursor.next(), Some('b'));
    assert_eq!(cursor.next(), Some('c'));
}

#[test]
fn pushback_is_subject_to_skip_mode() {
    let mut cursor = Cursor::new("x");
    cursor.push_back(' ');
    assert_eq!(cursor.next_skipping(WS), Some('x'));
}

#[test]
fn pushback_can_be_an_until_terminator() {
    let mut cursor = Cursor::new("rest");
    cursor.push_back(':');
    assert_eq!(cursor.next_until(&[':']), Some(':'));
    assert_eq!(cursor.next(), Some('r'));
}

#[test]
fn pushback_at_end_of_input_is_still_delivered() {
    let mut cursor = Cursor::new("z");
    let z = cursor.next().unwrap();
    assert_eq!(cursor.next(), None);
    cursor.push_back(z);
    assert_eq!(cursor.next(), Some('z'));
    assert_eq!(cursor.next(), None);
}
