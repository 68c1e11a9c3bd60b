//! Invitation link parsing.

use url::Url;
use wl_core::onboarding::OnboardingContext;

#[derive(Debug, thiserror::Error)]
pub enum InvitationError {
    #[error("invalid invitation link: {0}")]
    InvalidLink(#[from] url::ParseError),
}

/// Build the onboarding context from an invitation link.
///
/// Accepts absolute links (`https://app.worklog.it/onboarding?...`) and
/// bare paths (`/onboarding?...`). Query values are percent-decoded.
pub fn parse_invitation_link(link: &str) -> Result<OnboardingContext, InvitationError> {
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/")?.join(link)?
        }
        Err(err) => return Err(err.into()),
    };

    Ok(OnboardingContext::from_query_pairs(url.query_pairs()))
}
