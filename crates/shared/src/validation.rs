use crate::constants::*;

/// Trims a reply and checks it can be sent. Returns the trimmed text.
pub fn validate_reply_text(text: &str) -> Result<String, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Message is required".into());
    }
    if trimmed.chars().count() > MAX_REPLY_LENGTH {
        return Err(format!(
            "Message must be at most {} characters",
            MAX_REPLY_LENGTH
        ));
    }
    Ok(trimmed.to_string())
}

pub fn validate_password_input(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".into());
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err("Password too long".into());
    }
    Ok(())
}

pub fn validate_thread_id(id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err("Conversation id is required".into());
    }
    Ok(())
}
