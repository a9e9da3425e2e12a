//! Validation for the sign-in and sign-up form fields

/// Minimum password length accepted on sign-up
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum display name length
pub const MAX_NAME_LENGTH: usize = 64;

/// Form field validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Name must be less than {max} characters")]
    NameTooLong { max: usize },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Check an email address has a local part and a dotted domain
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::Required("Email"));
    }

    let (local, domain) = email.split_once('@').ok_or(FieldError::InvalidEmail)?;
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');

    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let name = name.trim();
    if name.is_empty() {
        Err(FieldError::Required("Name"))
    } else if name.chars().count() > MAX_NAME_LENGTH {
        Err(FieldError::NameTooLong {
            max: MAX_NAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Sign-in only requires a password to be present
pub fn validate_login_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        Err(FieldError::Required("Password"))
    } else {
        Ok(())
    }
}

pub fn validate_new_password(password: &str) -> Result<(), FieldError> {
    validate_login_password(password)?;
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        Err(FieldError::Required("Password confirmation"))
    } else if password != confirm {
        Err(FieldError::PasswordMismatch)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.example.co").is_ok());
        assert!(validate_email("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(FieldError::Required("Email")));
        assert_eq!(validate_email("no-at-sign"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("user@localhost"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("user@.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("user@example."), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("a@b@c.com"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_email("us er@example.com"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert_eq!(validate_name("   "), Err(FieldError::Required("Name")));
        assert_eq!(
            validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)),
            Err(FieldError::NameTooLong {
                max: MAX_NAME_LENGTH
            })
        );
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_login_password("x").is_ok());
        assert_eq!(
            validate_login_password(""),
            Err(FieldError::Required("Password"))
        );

        assert!(validate_new_password("longenough").is_ok());
        assert_eq!(
            validate_new_password("short"),
            Err(FieldError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH
            })
        );
    }

    #[test]
    fn test_password_confirmation() {
        assert!(validate_password_confirmation("secret123", "secret123").is_ok());
        assert_eq!(
            validate_password_confirmation("secret123", "secret124"),
            Err(FieldError::PasswordMismatch)
        );
        assert!(matches!(
            validate_password_confirmation("secret123", ""),
            Err(FieldError::Required(_))
        ));
    }

    #[test]
    fn test_field_error_display() {
        assert_eq!(FieldError::Required("Email").to_string(), "Email is required");
        assert_eq!(
            FieldError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
