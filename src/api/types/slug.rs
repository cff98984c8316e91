//! Wire types for the slug endpoints

use serde::{Deserialize, Serialize};

use crate::domain::SlugRecord;

/// Body returned by a successful lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugResponse {
    pub user: String,
    pub user_type: String,
    pub action: String,
}

impl From<SlugRecord> for SlugResponse {
    fn from(record: SlugRecord) -> Self {
        Self {
            user: record.user,
            user_type: record.user_type.to_string(),
            action: record.action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConsentAction, UserType};

    #[test]
    fn test_response_from_record() {
        let record = SlugRecord::new("u123", UserType::Resident, ConsentAction::SmsConsent);
        let response = SlugResponse::from(record);

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"user":"u123","userType":"resident","action":"smsConsent"}"#
        );
    }
}
