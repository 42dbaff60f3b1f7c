use azure_core::credentials::Secret;

/// Shown instead of tokens that are too short to partially reveal.
pub const TOO_SHORT_PLACEHOLDER: &str = "***token too short to mask safely***";

const MIN_MASKABLE_LEN: usize = 21;
const VISIBLE_PREFIX: usize = 10;
const VISIBLE_SUFFIX: usize = 5;

/// Render a token for display, keeping only its first 10 and last 5
/// characters.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len < MIN_MASKABLE_LEN {
        return TOO_SHORT_PLACEHOLDER.to_owned();
    }
    let prefix: String = token.chars().take(VISIBLE_PREFIX).collect();
    let suffix: String = token.chars().skip(len - VISIBLE_SUFFIX).collect();
    format!("{prefix}...{suffix}")
}

#[must_use]
pub fn mask_secret(secret: &Secret) -> String {
    mask_token(secret.secret())
}
