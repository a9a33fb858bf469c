//! Consultation prompt template
//!
//! Fixed instructional template asking the model for a JSON object with
//! the five recommendation fields, plus few-shot examples to anchor the
//! output shape. The specialist list is generated from the `Specialty`
//! enumeration so prompt and parser can never disagree on the set.

use crate::consultation::types::Specialty;

/// Output contract section of the prompt
const OUTPUT_FORMAT: &str = r#"Respond in the following JSON format:
{
    "specialist": "Primary recommended specialist from the list",
    "reasoning": "Clear explanation for why this specialist is recommended",
    "urgency": "High/Medium/Low - urgency level based on symptoms",
    "alternative": "Alternative specialist if applicable (optional)",
    "additional_notes": "Any extra guidance or recommendations (optional)"
}"#;

/// Few-shot examples covering a high, low and medium urgency case
const EXAMPLES: &str = r#"Here are some examples of good responses:

Example 1:
Symptoms: "I have been experiencing chest pain and shortness of breath for the past few days"
Response:
{
    "specialist": "Cardiologist",
    "reasoning": "Chest pain and shortness of breath are classic cardiovascular symptoms that require cardiac evaluation to rule out heart conditions",
    "urgency": "High",
    "alternative": "Emergency Medicine",
    "additional_notes": "If symptoms are severe or worsening, seek immediate emergency care"
}

Example 2:
Symptoms: "I have a persistent rash on my arms that's been itchy for two weeks"
Response:
{
    "specialist": "Dermatologist",
    "reasoning": "Persistent skin rash with itching indicates a dermatological condition that requires specialized skin examination",
    "urgency": "Low",
    "alternative": "General Physician",
    "additional_notes": "Avoid scratching and consider over-the-counter antihistamines for temporary relief"
}

Example 3:
Symptoms: "I've been having severe headaches with nausea and sensitivity to light"
Response:
{
    "specialist": "Neurologist",
    "reasoning": "Severe headaches combined with nausea and photophobia suggest possible neurological conditions like migraines or other brain-related issues",
    "urgency": "Medium",
    "alternative": "General Physician",
    "additional_notes": "Keep a headache diary noting triggers, duration, and severity"
}"#;

/// Comma-separated canonical specialist names for the prompt header
pub fn specialist_list() -> String {
    Specialty::ALL
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the full consultation prompt for one symptom description.
///
/// The symptom text must already be validated; this function only does
/// substitution.
pub fn build_prompt(symptoms: &str) -> String {
    format!(
        "You are a medical consultation AI assistant that helps users identify which \
         medical specialist they should consult based on their symptoms.\n\n\
         Available specialists: {}\n\n\
         Your task is to analyze the provided symptoms and recommend the most \
         appropriate specialist, along with reasoning and urgency level.\n\n\
         {}\n\n\
         {}\n\n\
         Now analyze these symptoms and provide your recommendation:\n\n\
         Symptoms: {}\n\n\
         Response:",
        specialist_list(),
        OUTPUT_FORMAT,
        EXAMPLES,
        symptoms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialist_list_contains_all_twelve() {
        let list = specialist_list();
        for specialty in Specialty::ALL {
            assert!(list.contains(specialty.name()), "missing {}", specialty);
        }
        assert_eq!(list.matches(", ").count(), 11);
    }

    #[test]
    fn test_prompt_substitutes_symptoms() {
        let prompt = build_prompt("persistent lower back pain");
        assert!(prompt.contains("Symptoms: persistent lower back pain"));
        assert!(prompt.contains("\"specialist\""));
        assert!(prompt.ends_with("Response:"));
    }

    #[test]
    fn test_prompt_carries_output_contract() {
        let prompt = build_prompt("anything");
        for field in ["specialist", "reasoning", "urgency", "alternative", "additional_notes"] {
            assert!(prompt.contains(field));
        }
    }
}
