//! Onboarding parameters read from the invitation link.

use crate::security::SecretString;

/// Query parameter carrying the one-time onboarding token.
pub const TOKEN_PARAM: &str = "onboarding_token";
/// Query parameter carrying the invited email (display only).
pub const EMAIL_PARAM: &str = "email";
/// Query parameter carrying the suggested company name (pre-fill).
pub const SUGGESTED_NAME_PARAM: &str = "suggested_name";

/// Parameters of one onboarding page activation.
///
/// Immutable for the lifetime of the page.
#[derive(Debug)]
pub struct OnboardingContext {
    token: SecretString,
    email: String,
    suggested_company_name: String,
}

impl OnboardingContext {
    pub fn new(
        token: impl Into<SecretString>,
        email: impl Into<String>,
        suggested_company_name: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
            suggested_company_name: suggested_company_name.into(),
        }
    }

    /// Build the context from decoded query pairs.
    ///
    /// Absent parameters default to an empty string. When a key repeats,
    /// the first occurrence wins; unknown keys are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut token: Option<String> = None;
        let mut email: Option<String> = None;
        let mut suggested: Option<String> = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                TOKEN_PARAM => &mut token,
                EMAIL_PARAM => &mut email,
                SUGGESTED_NAME_PARAM => &mut suggested,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        Self::new(
            token.unwrap_or_default(),
            email.unwrap_or_default(),
            suggested.unwrap_or_default(),
        )
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn suggested_company_name(&self) -> &str {
        &self.suggested_company_name
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}
