/// Keeps the first and last character of the local part; short local parts
/// are fully masked. Input without `@` is masked as a whole.
pub fn mask_email(email: &str) -> String {
    let mut parts = email.split('@');
    let user = parts.next().unwrap_or_default();
    match parts.next() {
        Some(domain) => format!("{}@{domain}", mask_local_part(user)),
        None => mask_local_part(email),
    }
}

fn mask_local_part(user: &str) -> String {
    let chars: Vec<char> = user.chars().collect();
    if chars.len() <= 2 {
        "*".repeat(chars.len())
    } else {
        format!(
            "{}{}{}",
            chars[0],
            "*".repeat(chars.len() - 2),
            chars[chars.len() - 1]
        )
    }
}

/// Keeps the last four digits, or only the last one for four digits or fewer.
/// Non-digit characters are dropped.
pub fn mask_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let visible = if digits.len() <= 4 {
        digits.len().min(1)
    } else {
        4
    };
    let hidden = digits.len() - visible;
    format!("{}{}", "*".repeat(hidden), &digits[hidden..])
}
