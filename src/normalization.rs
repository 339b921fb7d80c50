/// Remove every character that is not an ASCII digit, keeping the digits in order.
///
/// An input without digits cleans to an empty string, which every caller treats as
/// an invalid document.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
