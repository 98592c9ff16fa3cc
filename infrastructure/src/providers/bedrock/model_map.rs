//! Bedrock model ID mapping
//!
//! Maps configured tier model identifiers to the ID sent to Bedrock,
//! with optional cross-region inference profile prefix.

/// Region groups used as inference profile prefixes.
const PROFILE_PREFIXES: [&str; 4] = ["us", "us-gov", "eu", "apac"];

/// Convert a configured model identifier to the Bedrock model ID string.
///
/// - ARNs and IDs that already carry a profile prefix are passed through.
/// - When `cross_region` is true, other IDs get the region-group prefix
///   (`us.`, `eu.`, `apac.`…) so Bedrock routes them through an inference profile.
pub fn to_bedrock_model_id(model_id: &str, cross_region: bool, region: &str) -> String {
    if !cross_region || is_qualified(model_id) {
        return model_id.to_string();
    }
    format!("{}.{}", inference_profile_prefix(region), model_id)
}

fn is_qualified(model_id: &str) -> bool {
    if model_id.starts_with("arn:") {
        return true;
    }
    match model_id.split_once('.') {
        Some((head, _)) => PROFILE_PREFIXES.contains(&head),
        None => false,
    }
}

/// Derive the inference profile region group from an AWS region string.
///
/// `us-east-1` → `us`, `us-gov-west-1` → `us-gov`, `eu-west-1` → `eu`,
/// `ap-northeast-2` → `apac`.
fn inference_profile_prefix(region: &str) -> &'static str {
    if region.starts_with("us-gov-") {
        return "us-gov";
    }
    match region.split('-').next() {
        Some("eu") => "eu",
        Some("ap") => "apac",
        _ => "us", // safe fallback
    }
}
