//! Utility functions

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        match local.chars().count() {
            0 => format!("***{}", domain),
            1 | 2 => format!("{}***{}", local.chars().take(1).collect::<String>(), domain),
            _ => format!("{}***{}", local.chars().take(2).collect::<String>(), domain),
        }
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("pgray@email.com"), "pg***@email.com");
        assert_eq!(mask_email("ab@email.com"), "a***@email.com");
        assert_eq!(mask_email("@email.com"), "***@email.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
