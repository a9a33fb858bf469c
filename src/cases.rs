//! Bundled sample consultation cases
//!
//! A curated set of symptom scenarios with the specialist and urgency a
//! correct recommendation is expected to name. Running them end to end
//! is a quick smoke check of prompt, provider, and parser together.

use crate::consultation::{ConsultationClient, Specialty, Urgency};
use colored::Colorize;
use tracing::info;

/// One named scenario with its expected outcome
#[derive(Debug, Clone)]
pub struct SampleCase {
    pub name: &'static str,
    pub symptoms: &'static str,
    pub expected_specialist: Specialty,
    pub expected_urgency: Urgency,
}

/// The bundled scenarios, one or two per specialty group
pub fn sample_cases() -> Vec<SampleCase> {
    vec![
        SampleCase {
            name: "Acute chest pain",
            symptoms: "I have severe chest pain that started suddenly, along with shortness of breath and sweating",
            expected_specialist: Specialty::Cardiologist,
            expected_urgency: Urgency::High,
        },
        SampleCase {
            name: "Heart palpitations",
            symptoms: "I've been experiencing irregular heartbeat and palpitations for the past week",
            expected_specialist: Specialty::Cardiologist,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Severe migraine",
            symptoms: "I have intense headaches with nausea, vomiting, and sensitivity to light for 3 days",
            expected_specialist: Specialty::Neurologist,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Stroke symptoms",
            symptoms: "Sudden weakness on my left side, difficulty speaking, and facial drooping",
            expected_specialist: Specialty::Neurologist,
            expected_urgency: Urgency::High,
        },
        SampleCase {
            name: "Persistent rash",
            symptoms: "I have an itchy red rash on my arms and legs that's been there for 2 weeks",
            expected_specialist: Specialty::Dermatologist,
            expected_urgency: Urgency::Low,
        },
        SampleCase {
            name: "Stomach trouble",
            symptoms: "Recurring stomach pain, bloating, and acid reflux after meals for the past month",
            expected_specialist: Specialty::Gastroenterologist,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Knee injury",
            symptoms: "My knee is swollen and painful after a fall, I can barely put weight on it",
            expected_specialist: Specialty::Orthopedist,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Persistent low mood",
            symptoms: "I've been feeling hopeless, can't sleep, and have lost interest in everything for two months",
            expected_specialist: Specialty::Psychiatrist,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Ear infection",
            symptoms: "Sharp ear pain with muffled hearing and some discharge since yesterday",
            expected_specialist: Specialty::Ent,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Blurry vision",
            symptoms: "Gradually worsening blurry vision and occasional double vision over several weeks",
            expected_specialist: Specialty::Ophthalmologist,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Joint stiffness",
            symptoms: "Stiff, painful, swollen joints in both hands every morning lasting over an hour",
            expected_specialist: Specialty::Rheumatologist,
            expected_urgency: Urgency::Medium,
        },
        SampleCase {
            name: "Mild seasonal cold",
            symptoms: "Mild runny nose, light cough and a slight sore throat for two days",
            expected_specialist: Specialty::GeneralPhysician,
            expected_urgency: Urgency::Low,
        },
    ]
}

/// Run every sample case against a live client and print a summary.
///
/// A case counts as a hit when the recommended specialist matches; the
/// urgency is reported but scored separately, since reasonable model
/// output can disagree by one level.
pub async fn run_cases(client: &ConsultationClient) -> anyhow::Result<()> {
    let cases = sample_cases();
    let total = cases.len();
    let mut specialist_hits = 0usize;
    let mut urgency_hits = 0usize;
    let mut failures = 0usize;

    println!(
        "\nRunning {} sample cases against the live provider...\n",
        total
    );

    for (index, case) in cases.iter().enumerate() {
        println!(
            "{} {}",
            format!("[{}/{}]", index + 1, total).dimmed(),
            case.name.bold()
        );

        match client.consult(case.symptoms).await {
            Ok(result) => {
                let specialist_ok = result.specialist == case.expected_specialist;
                let urgency_ok = result.urgency == case.expected_urgency;
                if specialist_ok {
                    specialist_hits += 1;
                }
                if urgency_ok {
                    urgency_hits += 1;
                }

                let marker = if specialist_ok {
                    "✓".green()
                } else {
                    "✗".red()
                };
                println!(
                    "   {} got {} ({}), expected {} ({})",
                    marker,
                    result.specialist,
                    result.urgency,
                    case.expected_specialist,
                    case.expected_urgency
                );
                if result.fallback {
                    println!("   {}", "(fallback result)".yellow());
                }
            }
            Err(e) => {
                failures += 1;
                println!("   {} call failed: {}", "✗".red(), e);
            }
        }
        info!(case = case.name, "sample case finished");
    }

    println!("\n{}", "=".repeat(60));
    println!(
        "Specialist matches: {}/{}   Urgency matches: {}/{}   Failed calls: {}",
        specialist_hits, total, urgency_hits, total, failures
    );
    println!("{}", "=".repeat(60));

    Ok(())
}
