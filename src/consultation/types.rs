//! Consultation result type definitions

/// The fixed set of specialties a recommendation may name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialty {
    Cardiologist,
    Neurologist,
    Dermatologist,
    Gastroenterologist,
    Orthopedist,
    Psychiatrist,
    Ent,
    Ophthalmologist,
    Gynecologist,
    GeneralPhysician,
    EmergencyMedicine,
    Rheumatologist,
}

impl Specialty {
    /// All specialties, in the order they appear in the prompt
    pub const ALL: [Specialty; 12] = [
        Specialty::Cardiologist,
        Specialty::Neurologist,
        Specialty::Dermatologist,
        Specialty::Gastroenterologist,
        Specialty::Orthopedist,
        Specialty::Psychiatrist,
        Specialty::Ent,
        Specialty::Ophthalmologist,
        Specialty::Gynecologist,
        Specialty::GeneralPhysician,
        Specialty::EmergencyMedicine,
        Specialty::Rheumatologist,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Neurologist => "Neurologist",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Gastroenterologist => "Gastroenterologist",
            Specialty::Orthopedist => "Orthopedist",
            Specialty::Psychiatrist => "Psychiatrist",
            Specialty::Ent => "ENT",
            Specialty::Ophthalmologist => "Ophthalmologist",
            Specialty::Gynecologist => "Gynecologist",
            Specialty::GeneralPhysician => "General Physician",
            Specialty::EmergencyMedicine => "Emergency Medicine",
            Specialty::Rheumatologist => "Rheumatologist",
        }
    }

    /// Tolerant parse of free-text model output.
    ///
    /// Tries an exact case-insensitive match first, then accepts text
    /// containing a specialty name as whole words, so strings like
    /// "Emergency Medicine (if symptoms are severe)" still resolve.
    /// Matching is word-bounded: "Urgent care" or "Dentist" must not
    /// resolve to ENT through raw substring containment.
    pub fn parse_loose(text: &str) -> Option<Specialty> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        for specialty in Specialty::ALL {
            if needle == specialty.name().to_lowercase() {
                return Some(specialty);
            }
        }

        let needle_words: Vec<&str> = needle
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        for specialty in Specialty::ALL {
            let name = specialty.name().to_lowercase();
            let name_words: Vec<&str> = name.split_whitespace().collect();
            if needle_words.len() < name_words.len() {
                continue;
            }
            if needle_words
                .windows(name_words.len())
                .any(|window| window == name_words.as_slice())
            {
                return Some(specialty);
            }
        }
        None
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Urgency of seeing the recommended specialist
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn name(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }

    /// Case-insensitive parse; anything unrecognized is None so the
    /// caller can apply the Medium default explicitly.
    pub fn parse_loose(text: &str) -> Option<Urgency> {
        match text.trim().to_lowercase().as_str() {
            "low" => Some(Urgency::Low),
            "medium" => Some(Urgency::Medium),
            "high" => Some(Urgency::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured specialist recommendation for one consultation.
///
/// Constructed once from the provider's raw text and immutable after
/// that. `fallback` marks a degraded result produced when the raw text
/// could not be parsed; it is still a valid recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationResult {
    pub specialist: Specialty,
    pub urgency: Urgency,
    pub reasoning: String,
    pub alternative: Option<Specialty>,
    pub notes: String,
    pub fallback: bool,
}

impl ConsultationResult {
    /// The safe default returned when provider output cannot be parsed
    pub fn fallback(urgency: Urgency) -> Self {
        Self {
            specialist: Specialty::GeneralPhysician,
            urgency,
            reasoning: "Automated parsing of the recommendation failed. A general \
                        physician can provide an initial evaluation and refer you to \
                        the appropriate specialist if needed."
                .to_string(),
            alternative: Some(Specialty::EmergencyMedicine),
            notes: "Seek immediate medical attention if you experience severe symptoms \
                    such as chest pain, difficulty breathing, severe bleeding, or loss \
                    of consciousness."
                .to_string(),
            fallback: true,
        }
    }
}
