//! Provider response parsing
//!
//! Best-effort structured extraction of the five recommendation fields
//! from free-text model output. Parsing never fails the call: anything
//! unusable degrades to the fallback result, with a basic keyword-based
//! urgency assessment of the original symptoms.

use crate::consultation::types::{ConsultationResult, Specialty, Urgency};
use serde::Deserialize;
use tracing::warn;

/// Symptom keywords that force the fallback urgency to High
const HIGH_URGENCY_KEYWORDS: [&str; 14] = [
    "chest pain",
    "difficulty breathing",
    "shortness of breath",
    "severe pain",
    "bleeding",
    "unconscious",
    "seizure",
    "stroke",
    "heart attack",
    "emergency",
    "severe headache",
    "high fever",
    "vomiting blood",
    "severe abdominal pain",
];

/// Symptom keywords that allow the fallback urgency to drop to Low
const LOW_URGENCY_KEYWORDS: [&str; 8] = [
    "mild",
    "occasional",
    "minor",
    "slight",
    "small rash",
    "dry skin",
    "minor headache",
    "light cough",
];

/// Recommendation fields as the model emits them, before normalization
#[derive(Debug, Deserialize)]
struct RawRecommendation {
    #[serde(default)]
    specialist: String,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    urgency: String,
    #[serde(default)]
    alternative: Option<String>,
    #[serde(default)]
    additional_notes: Option<String>,
}

/// Parse raw provider output into a well-formed result.
///
/// `symptoms` is the validated input text, used only to pick a fallback
/// urgency when the response itself is unusable.
pub fn parse_response(raw: &str, symptoms: &str) -> ConsultationResult {
    let Some(json_block) = extract_json_block(raw) else {
        warn!("no JSON object found in provider response, using fallback");
        return ConsultationResult::fallback(assess_basic_urgency(symptoms));
    };

    let parsed: RawRecommendation = match serde_json::from_str(json_block) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "provider response is not valid JSON, using fallback");
            return ConsultationResult::fallback(assess_basic_urgency(symptoms));
        }
    };

    if parsed.reasoning.trim().is_empty() {
        warn!("provider response missing reasoning, using fallback");
        return ConsultationResult::fallback(assess_basic_urgency(symptoms));
    }

    let Some(specialist) = Specialty::parse_loose(&parsed.specialist) else {
        warn!(specialist = %parsed.specialist, "unrecognized specialist, using fallback");
        return ConsultationResult::fallback(Urgency::Medium);
    };

    let urgency = Urgency::parse_loose(&parsed.urgency).unwrap_or_else(|| {
        warn!(urgency = %parsed.urgency, "unrecognized urgency, defaulting to Medium");
        Urgency::Medium
    });

    let alternative = parsed
        .alternative
        .as_deref()
        .and_then(Specialty::parse_loose);

    ConsultationResult {
        specialist,
        urgency,
        reasoning: parsed.reasoning.trim().to_string(),
        alternative,
        notes: parsed
            .additional_notes
            .map(|n| n.trim().to_string())
            .unwrap_or_default(),
        fallback: false,
    }
}

/// Slice out the outermost `{...}` block, if any.
///
/// Model output routinely wraps the JSON in prose or a markdown fence;
/// everything outside the braces is discarded.
fn extract_json_block(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Keyword scan of the symptom text for the fallback urgency
fn assess_basic_urgency(symptoms: &str) -> Urgency {
    let lower = symptoms.to_lowercase();

    if HIGH_URGENCY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Urgency::High;
    }
    if LOW_URGENCY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Urgency::Low;
    }
    Urgency::Medium
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "specialist": "Cardiologist",
        "reasoning": "Chest pain with dyspnea points to a cardiac cause",
        "urgency": "High",
        "alternative": "Emergency Medicine",
        "additional_notes": "Seek emergency care if symptoms worsen"
    }"#;

    #[test]
    fn test_parses_all_five_fields_exactly() {
        let result = parse_response(FULL_RESPONSE, "chest pain");
        assert_eq!(result.specialist, Specialty::Cardiologist);
        assert_eq!(result.urgency, Urgency::High);
        assert_eq!(result.reasoning, "Chest pain with dyspnea points to a cardiac cause");
        assert_eq!(result.alternative, Some(Specialty::EmergencyMedicine));
        assert_eq!(result.notes, "Seek emergency care if symptoms worsen");
        assert!(!result.fallback);
    }

    #[test]
    fn test_missing_alternative_is_absent_rest_intact() {
        let raw = r#"{
            "specialist": "Dermatologist",
            "reasoning": "Persistent itchy rash needs a skin examination",
            "urgency": "Low",
            "additional_notes": "Avoid scratching"
        }"#;
        let result = parse_response(raw, "itchy rash on arms");
        assert_eq!(result.specialist, Specialty::Dermatologist);
        assert_eq!(result.urgency, Urgency::Low);
        assert_eq!(result.alternative, None);
        assert_eq!(result.notes, "Avoid scratching");
        assert!(!result.fallback);
    }

    #[test]
    fn test_json_wrapped_in_prose_still_parses() {
        let raw = format!("Sure! Here is my recommendation:\n```json\n{}\n```\nTake care.", FULL_RESPONSE);
        let result = parse_response(&raw, "chest pain");
        assert_eq!(result.specialist, Specialty::Cardiologist);
        assert!(!result.fallback);
    }

    #[test]
    fn test_unknown_specialist_falls_back_to_general_physician() {
        let raw = r#"{
            "specialist": "Alchemist",
            "reasoning": "Humours are imbalanced",
            "urgency": "Low"
        }"#;
        let result = parse_response(raw, "mild fatigue");
        assert_eq!(result.specialist, Specialty::GeneralPhysician);
        assert_eq!(result.urgency, Urgency::Medium);
        assert!(result.fallback);
        assert!(result.reasoning.to_lowercase().contains("parsing"));
    }

    #[test]
    fn test_unrecognized_urgency_defaults_to_medium() {
        let raw = r#"{
            "specialist": "Neurologist",
            "reasoning": "Recurrent migraines warrant neurological review",
            "urgency": "URGENT!!!"
        }"#;
        let result = parse_response(raw, "migraines");
        assert_eq!(result.urgency, Urgency::Medium);
        assert!(!result.fallback);
    }

    #[test]
    fn test_garbage_uses_symptom_keywords_for_urgency() {
        let result = parse_response("I cannot help with that.", "crushing chest pain");
        assert!(result.fallback);
        assert_eq!(result.specialist, Specialty::GeneralPhysician);
        assert_eq!(result.urgency, Urgency::High);

        let result = parse_response("not json at all", "mild itch on one finger");
        assert_eq!(result.urgency, Urgency::Low);

        let result = parse_response("{broken json", "stomach discomfort after meals");
        assert_eq!(result.urgency, Urgency::Medium);
    }

    #[test]
    fn test_empty_reasoning_falls_back() {
        let raw = r#"{"specialist": "Cardiologist", "reasoning": "  ", "urgency": "High"}"#;
        let result = parse_response(raw, "palpitations");
        assert!(result.fallback);
    }

    #[test]
    fn test_non_specialty_alternative_is_dropped() {
        let raw = r#"{
            "specialist": "General Physician",
            "reasoning": "A broad initial evaluation is the right starting point",
            "urgency": "Low",
            "alternative": "Dentist"
        }"#;
        let result = parse_response(raw, "tooth sensitivity when drinking cold water");
        assert_eq!(result.alternative, None);
        assert!(!result.fallback);
    }

    #[test]
    fn test_null_alternative_is_absent() {
        let raw = r#"{
            "specialist": "Gastroenterologist",
            "reasoning": "Chronic reflux needs endoscopic evaluation",
            "urgency": "Medium",
            "alternative": null,
            "additional_notes": null
        }"#;
        let result = parse_response(raw, "heartburn");
        assert_eq!(result.alternative, None);
        assert_eq!(result.notes, "");
    }
}
