//! User records created by onboarding and by the dataset builder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// A private person.
    Individual,
    /// A company or other organisation.
    Organization,
    /// A school.
    School,
    /// A government body.
    Government,
    /// A nonprofit.
    Nonprofit,
}

impl UserType {
    /// Returns the snake_case label used in exports and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Organization => "organization",
            Self::School => "school",
            Self::Government => "government",
            Self::Nonprofit => "nonprofit",
        }
    }
}

/// Channel through which a user signed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupSource {
    /// The web application.
    Web,
    /// The mobile application.
    Mobile,
    /// A partner campaign.
    PartnerCampaign,
    /// A social media link.
    SocialMedia,
    /// A referral from another user.
    Referral,
    /// The onboarding pipeline.
    ManualOnboarding,
}

impl SignupSource {
    /// Returns the snake_case label used in exports and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::PartnerCampaign => "partner_campaign",
            Self::SocialMedia => "social_media",
            Self::Referral => "referral",
            Self::ManualOnboarding => "manual_onboarding",
        }
    }
}

/// A user ready for insertion into the `users` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier for the user.
    pub user_id: Uuid,
    /// Contact email.
    pub email: String,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
    /// Most recent login, if any.
    pub last_login: Option<DateTime<Utc>>,
    /// Postal code, when supplied.
    pub zip_code: Option<String>,
    /// Home latitude in degrees.
    pub latitude: f64,
    /// Home longitude in degrees.
    pub longitude: f64,
    /// Kind of account holder.
    pub user_type: UserType,
    /// Signup channel.
    pub source: SignupSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_snake_case() {
        let source = serde_json::to_string(&SignupSource::PartnerCampaign).expect("serialize");
        let user_type = serde_json::to_string(&UserType::Nonprofit).expect("serialize");
        assert_eq!(source, "\"partner_campaign\"");
        assert_eq!(user_type, "\"nonprofit\"");
    }

    #[test]
    fn labels_match_serialized_names() {
        for source in [SignupSource::PartnerCampaign, SignupSource::ManualOnboarding] {
            let json = serde_json::to_string(&source).expect("serialize");
            assert_eq!(json, format!("\"{}\"", source.as_str()));
        }
        let json = serde_json::to_string(&UserType::School).expect("serialize");
        assert_eq!(json, format!("\"{}\"", UserType::School.as_str()));
    }
}
