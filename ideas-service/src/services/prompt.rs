//! Prompt template for content idea generation.

use crate::models::ContentBrief;
use crate::services::providers::GenerationParams;

pub const IDEA_TEMPERATURE: f32 = 0.8;
pub const IDEA_MAX_OUTPUT_TOKENS: i32 = 500;

/// Fixed generation settings sent with every idea request.
pub fn idea_generation_params() -> GenerationParams {
    GenerationParams {
        temperature: Some(IDEA_TEMPERATURE),
        max_tokens: Some(IDEA_MAX_OUTPUT_TOKENS),
    }
}

/// Fields are interpolated verbatim.
pub fn build_prompt(brief: &ContentBrief) -> String {
    format!(
        "\nYou are an expert social media content strategist.\n\
         Given the niche '{niche}' and recent successful content types '{types}',\n\
         generate 5 unique and engaging content ideas for a {platform}.\n\
         Provide a catchy title for each idea and a brief description.\n\
         \n\
         Format your output like this:\n\
         Idea 1: [Catchy Title]\n\
         Description: [Brief description of the content idea]\n\
         \n\
         Idea 2: [Catchy Title]\n\
         Description: [Brief description of the content idea]\n\
         \n\
         ...and so on for 5 ideas.\n",
        niche = brief.niche,
        types = brief.successful_content_types,
        platform = brief.platform_type,
    )
}
