//! Валидация данных нового SSH-аккаунта.
//!
//! - username: 3-32 символа, латиница, цифры, `_` и `-`
//! - password: 6-64 символа, минимум одна строчная, одна заглавная буква и одна цифра

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 32;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 64;

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+$").expect("username regex is valid")
});

/// Ошибки по полям формы: имя поля -> список сообщений.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Есть ли ошибка для поля.
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Проверенные данные аккаунта.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInput {
    pub username: String,
    pub password: String,
}

/// Проверить username, дописав ошибки в `errors`.
pub fn check_username(username: &str, errors: &mut FieldErrors) {
    let len = username.chars().count();
    if len < USERNAME_MIN {
        errors.add("username", format!("Username минимум {USERNAME_MIN} символа"));
    }
    if len > USERNAME_MAX {
        errors.add("username", format!("Username максимум {USERNAME_MAX} символа"));
    }
    if !USERNAME_RE.is_match(username) {
        errors.add(
            "username",
            "Username может содержать только буквы, цифры, underscore и дефис",
        );
    }
}

/// Проверить password, дописав ошибки в `errors`.
pub fn check_password(password: &str, errors: &mut FieldErrors) {
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        errors.add("password", format!("Password минимум {PASSWORD_MIN} символов"));
    }
    if len > PASSWORD_MAX {
        errors.add("password", format!("Password максимум {PASSWORD_MAX} символа"));
    }

    // Классы символов ищутся только в первой строке пароля
    let first_line = password
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .next()
        .unwrap_or_default();
    let has_lower = first_line.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = first_line.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = first_line.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        errors.add(
            "password",
            "Password должен содержать минимум 1 строчную букву, 1 заглавную букву и 1 цифру",
        );
    }
}

/// Проверить пару username/password целиком.
pub fn validate_account(username: &str, password: &str) -> Result<AccountInput, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_username(username, &mut errors);
    check_password(password, &mut errors);

    if errors.is_empty() {
        Ok(AccountInput {
            username: username.to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_length_bounds() {
        assert!(validate_account("ab", "Valid123").is_err());
        assert!(validate_account("abc", "Valid123").is_ok());
        assert!(validate_account(&"a".repeat(32), "Valid123").is_ok());

        let errors = validate_account(&"a".repeat(33), "Valid123").unwrap_err();
        assert!(errors.has("username"));
        assert!(!errors.has("password"));
    }

    #[test]
    fn username_rejects_symbols() {
        let errors = validate_account("bad name!", "Valid123").unwrap_err();
        assert_eq!(errors.messages("username").len(), 1);
        assert!(validate_account("user_name-01", "Valid123").is_ok());
    }

    #[test]
    fn password_character_classes() {
        assert!(validate_account("abc", "alllower1").is_err());
        assert!(validate_account("abc", "ALLUPPER1").is_err());
        assert!(validate_account("abc", "NoDigitsHere").is_err());
        assert!(validate_account("abc", "Valid123").is_ok());
        // Спецсимволы допустимы
        assert!(validate_account("abc", "Va1!@# ok").is_ok());
    }

    #[test]
    fn password_length_bounds() {
        assert!(validate_account("abc", "Ab1").is_err());
        assert!(validate_account("abc", "Abcde1").is_ok());
        assert!(validate_account("abc", &format!("Ab1{}", "x".repeat(61))).is_ok());

        let long = format!("Ab1{}", "x".repeat(62));
        let errors = validate_account("abc", &long).unwrap_err();
        assert_eq!(errors.messages("password").len(), 1);
    }

    #[test]
    fn password_classes_counted_before_line_break() {
        let errors = validate_account("abc", "abcdef\nA1").unwrap_err();
        assert_eq!(errors.messages("password").len(), 1);
        assert!(validate_account("abc", "abcdef\r\nA1").is_err());
        // Перевод строки после всех нужных классов допустим
        assert!(validate_account("abc", "Valid123\nrest").is_ok());
    }

    #[test]
    fn collects_errors_for_both_fields() {
        let errors = validate_account("", "").unwrap_err();
        // пустой username: длина + формат; пустой password: длина + классы символов
        assert_eq!(errors.messages("username").len(), 2);
        assert_eq!(errors.messages("password").len(), 2);
        assert!(errors.to_string().contains("username:"));
    }
}
