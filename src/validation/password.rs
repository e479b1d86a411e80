use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::None => "None",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 密码强度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    /// Number of character-class checks that passed, 0..=5.
    pub checks_passed: u8,
    /// Meter level, 0 for empty input and 1..=4 otherwise.
    pub level: u8,
    pub label: StrengthLabel,
}

/// Scores a password against five checks: length of at least 8, an ASCII
/// lowercase letter, an ASCII uppercase letter, an ASCII digit and any
/// other character.
pub fn get_password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            checks_passed: 0,
            level: 0,
            label: StrengthLabel::None,
        };
    }

    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let checks_passed = checks.iter().filter(|passed| **passed).count() as u8;

    let (level, label) = match checks_passed {
        0..=2 => (1, StrengthLabel::Weak),
        3 => (2, StrengthLabel::Fair),
        4 => (3, StrengthLabel::Good),
        _ => (4, StrengthLabel::Strong),
    };

    PasswordStrength {
        checks_passed,
        level,
        label,
    }
}
