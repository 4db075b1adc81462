//! Wire types for `POST /api/generate_ideas`.

use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const MISSING_PARAMETERS: &str = "Missing required parameters (niche, platform_type)";

/// Inbound body. `null` and absent fields deserialize to `None`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct IdeaRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub niche: Option<String>,

    #[serde(default)]
    pub successful_content_types: Option<String>,

    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub platform_type: Option<String>,
}

/// A request that passed validation; the only input the prompt builder accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBrief {
    pub niche: String,
    pub successful_content_types: String,
    pub platform_type: String,
}

impl IdeaRequest {
    pub fn into_brief(self) -> Result<ContentBrief, AppError> {
        self.validate()
            .map_err(|_| AppError::BadRequest(anyhow::anyhow!(MISSING_PARAMETERS)))?;

        match (self.niche, self.platform_type) {
            (Some(niche), Some(platform_type)) => Ok(ContentBrief {
                niche,
                successful_content_types: self.successful_content_types.unwrap_or_default(),
                platform_type,
            }),
            _ => Err(AppError::BadRequest(anyhow::anyhow!(MISSING_PARAMETERS))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdeaResponse {
    pub ideas: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> IdeaRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn complete_request_becomes_brief() {
        let brief = parse(
            r#"{"niche":"vegan cooking","successful_content_types":"recipe videos","platform_type":"Instagram Reels"}"#,
        )
        .into_brief()
        .unwrap();

        assert_eq!(brief.niche, "vegan cooking");
        assert_eq!(brief.successful_content_types, "recipe videos");
        assert_eq!(brief.platform_type, "Instagram Reels");
    }

    #[test]
    fn successful_content_types_defaults_to_empty() {
        let brief = parse(r#"{"niche":"chess","platform_type":"YouTube","successful_content_types":null}"#)
            .into_brief()
            .unwrap();
        assert_eq!(brief.successful_content_types, "");
    }

    #[test]
    fn missing_or_empty_required_fields_are_rejected() {
        for body in [
            r#"{"platform_type":"TikTok"}"#,
            r#"{"niche":"","platform_type":"TikTok"}"#,
            r#"{"niche":null,"platform_type":"TikTok"}"#,
            r#"{"niche":"gardening"}"#,
            r#"{"niche":"gardening","platform_type":""}"#,
            r#"{}"#,
        ] {
            let err = parse(body).into_brief().unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest(ref e) if e.to_string() == MISSING_PARAMETERS),
                "body {} gave {:?}",
                body,
                err
            );
        }
    }

    #[test]
    fn whitespace_values_are_kept_verbatim() {
        let brief = parse(r#"{"niche":"  ","platform_type":" Blog "}"#)
            .into_brief()
            .unwrap();
        assert_eq!(brief.niche, "  ");
        assert_eq!(brief.platform_type, " Blog ");
    }
}
