//! Public health and biostatistics glossary.
//!
//! Glossary entries reuse the flat clinical shape. Their teaching material
//! lives in open fields: `conceptExplanation`, `clinicalRelevance`,
//! `examples`, `calculations`, `keyPearls` and `references`.

use super::{open_fields, text, texts};
use crate::crossref::{CrossReference, Relationship};
use crate::entry::ClinicalEntry;
use crate::store::Store;
use crate::taxonomy::Taxonomy;
use crate::Result;

pub const STORE_NAME: &str = "public-health";

pub const CATEGORIES: &[&str] = &[
    "epidemiology",
    "biostatistics",
    "infectious-disease-epi",
    "chronic-disease-epi",
    "environmental-health",
    "health-policy",
    "global-health",
    "social-determinants",
    "screening",
];

fn topic(id: &str, label: &str, relationship: Relationship) -> CrossReference {
    CrossReference::new(id, "topic", relationship, label)
}

/// Build and validate the public health glossary
pub fn store() -> Result<Store<ClinicalEntry>> {
    Store::from_keyed(
        STORE_NAME,
        Taxonomy::from_static(STORE_NAME, CATEGORIES),
        table(),
    )
}

fn table() -> Vec<(&'static str, ClinicalEntry)> {
    vec![
        (
            "incidence",
            ClinicalEntry {
                id: "incidence".into(),
                name: "Incidence".into(),
                name_es: Some("Incidencia".into()),
                category: "epidemiology".into(),
                description: "The number of new cases of a condition arising in a \
                              population at risk over a defined period."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "Incidence measures the flow of new disease into a \
                             population. Cumulative incidence is a proportion; the \
                             incidence rate uses person-time in the denominator.",
                        ),
                    ),
                    (
                        "clinicalRelevance",
                        text("Incidence estimates risk and is the basis of cohort studies."),
                    ),
                    (
                        "calculations",
                        texts(&[
                            "Cumulative incidence = new cases / population at risk at start",
                            "Incidence rate = new cases / total person-time at risk",
                        ]),
                    ),
                    (
                        "keyPearls",
                        texts(&["Prevalence is roughly incidence times average duration"]),
                    ),
                ]),
                cross_references: vec![topic("prevalence", "Prevalence", Relationship::Sibling)],
                ..Default::default()
            },
        ),
        (
            "prevalence",
            ClinicalEntry {
                id: "prevalence".into(),
                name: "Prevalence".into(),
                name_es: Some("Prevalencia".into()),
                category: "epidemiology".into(),
                description: "The proportion of a population that has a condition at a \
                              point in time or over a period."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "Prevalence is a snapshot of existing cases, new and old. \
                             Longer disease duration raises prevalence even when \
                             incidence is stable.",
                        ),
                    ),
                    (
                        "clinicalRelevance",
                        text(
                            "Pre-test probability comes from prevalence; it drives \
                             positive and negative predictive values.",
                        ),
                    ),
                    (
                        "calculations",
                        texts(&["Point prevalence = existing cases / total population"]),
                    ),
                    (
                        "examples",
                        texts(&["A new therapy that prolongs survival without cure increases prevalence"]),
                    ),
                ]),
                cross_references: vec![
                    topic("incidence", "Incidence", Relationship::Sibling),
                    topic("sensitivity", "Sensitivity", Relationship::Related),
                ],
                ..Default::default()
            },
        ),
        (
            "sensitivity",
            ClinicalEntry {
                id: "sensitivity".into(),
                name: "Sensitivity".into(),
                name_es: Some("Sensibilidad".into()),
                category: "biostatistics".into(),
                description: "The proportion of people with a disease whom a test \
                              correctly identifies as positive; the true positive rate."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "Sensitivity is a property of the test and does not change \
                             with prevalence. A negative result on a highly sensitive \
                             test rules disease out.",
                        ),
                    ),
                    (
                        "clinicalRelevance",
                        text("Screening tests are chosen for high sensitivity."),
                    ),
                    ("calculations", texts(&["Sensitivity = TP / (TP + FN)"])),
                    (
                        "examples",
                        texts(&["D-dimer is about 95 percent sensitive for pulmonary embolism"]),
                    ),
                    ("keyPearls", texts(&["SnNout: a Sensitive test, when Negative, rules out"])),
                ]),
                cross_references: vec![topic("specificity", "Specificity", Relationship::Sibling)],
                ..Default::default()
            },
        ),
        (
            "specificity",
            ClinicalEntry {
                id: "specificity".into(),
                name: "Specificity".into(),
                name_es: Some("Especificidad".into()),
                category: "biostatistics".into(),
                description: "The proportion of people without a disease whom a test \
                              correctly identifies as negative; the true negative rate."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "A positive result on a highly specific test rules disease \
                             in. Confirmatory tests are chosen for specificity.",
                        ),
                    ),
                    ("calculations", texts(&["Specificity = TN / (TN + FP)"])),
                    ("keyPearls", texts(&["SpPin: a Specific test, when Positive, rules in"])),
                ]),
                cross_references: vec![topic("sensitivity", "Sensitivity", Relationship::Sibling)],
                ..Default::default()
            },
        ),
        (
            "number-needed-to-treat",
            ClinicalEntry {
                id: "number-needed-to-treat".into(),
                name: "Number Needed to Treat".into(),
                name_es: Some("Número necesario a tratar".into()),
                category: "biostatistics".into(),
                description: "How many patients must receive a treatment for one \
                              additional patient to benefit."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text("The reciprocal of the absolute risk reduction."),
                    ),
                    (
                        "calculations",
                        texts(&[
                            "ARR = control event rate - experimental event rate",
                            "NNT = 1 / ARR, rounded up",
                        ]),
                    ),
                    (
                        "examples",
                        texts(&["Event rate falls from 10 to 6 percent: ARR 0.04, NNT 25"]),
                    ),
                    (
                        "references",
                        texts(&["Laupacis A et al. N Engl J Med 1988;318:1728-33"]),
                    ),
                ]),
                ..Default::default()
            },
        ),
        (
            "lead-time-bias",
            ClinicalEntry {
                id: "lead-time-bias".into(),
                name: "Lead-Time Bias".into(),
                name_es: Some("Sesgo de anticipación".into()),
                category: "screening".into(),
                description: "Apparent survival gain from a screening program that only \
                              reflects earlier diagnosis, not a later death."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "Screening moves the date of diagnosis earlier. If death \
                             occurs at the same time, survival from diagnosis looks \
                             longer although nothing changed.",
                        ),
                    ),
                    (
                        "clinicalRelevance",
                        text("Compare mortality rates, not survival from diagnosis, when judging screening."),
                    ),
                    (
                        "keyPearls",
                        texts(&[
                            "Length-time bias is a separate effect: screening finds slow-growing disease",
                            "Randomized trials with mortality endpoints avoid both",
                        ]),
                    ),
                ]),
                cross_references: vec![topic("sensitivity", "Sensitivity", Relationship::Related)],
                ..Default::default()
            },
        ),
        (
            "herd-immunity",
            ClinicalEntry {
                id: "herd-immunity".into(),
                name: "Herd Immunity".into(),
                name_es: Some("Inmunidad colectiva".into()),
                category: "infectious-disease-epi".into(),
                description: "Indirect protection of susceptible people when enough of \
                              a population is immune to interrupt transmission."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "Each case infects fewer than one new person once the immune \
                             fraction passes the threshold set by the basic reproduction \
                             number R0.",
                        ),
                    ),
                    ("calculations", texts(&["Herd immunity threshold = 1 - 1/R0"])),
                    (
                        "examples",
                        texts(&["Measles, R0 12 to 18, needs about 92 to 95 percent immunity"]),
                    ),
                ]),
                cross_references: vec![topic("incidence", "Incidence", Relationship::Related)],
                ..Default::default()
            },
        ),
        (
            "social-determinants-of-health",
            ClinicalEntry {
                id: "social-determinants-of-health".into(),
                name: "Social Determinants of Health".into(),
                name_es: Some("Determinantes sociales de la salud".into()),
                category: "social-determinants".into(),
                description: "The conditions in which people are born, grow, live, work \
                              and age that shape health outcomes."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "Income, education, housing, food security and access to \
                             care account for a large share of differences in health \
                             between groups.",
                        ),
                    ),
                    (
                        "clinicalRelevance",
                        text("Screen for unmet social needs and link patients to community resources."),
                    ),
                    (
                        "keyPearls",
                        texts(&["Zip code predicts life expectancy more strongly than genetic code"]),
                    ),
                ]),
                cross_references: vec![topic("prevalence", "Prevalence", Relationship::Related)],
                ..Default::default()
            },
        ),
        (
            "air-quality-index",
            ClinicalEntry {
                id: "air-quality-index".into(),
                name: "Air Quality Index".into(),
                name_es: Some("Índice de calidad del aire".into()),
                category: "environmental-health".into(),
                description: "A scale that translates pollutant concentrations into a \
                              single daily health-risk category."
                    .into(),
                fields: open_fields(vec![
                    (
                        "conceptExplanation",
                        text(
                            "Fine particulate matter and ozone dominate the index. \
                             Values above 100 are unhealthy for sensitive groups.",
                        ),
                    ),
                    (
                        "clinicalRelevance",
                        text("Advise patients with asthma or COPD to limit outdoor exertion on high-index days."),
                    ),
                ]),
                ..Default::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::FieldValue;

    #[test]
    fn test_store_builds() {
        let store = store().unwrap();
        assert_eq!(store.name(), "public-health");
        assert!(store.len() >= 8);
    }

    #[test]
    fn test_glossary_fields_are_searchable() {
        let store = store().unwrap();
        let ids: Vec<_> = store
            .search("snnout")
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["sensitivity"]);

        let nnt = store.get_by_id("number-needed-to-treat").unwrap();
        assert!(matches!(nnt.fields.get("calculations"), Some(FieldValue::List(items)) if items.len() == 2));
        assert!(!store.search("1 - 1/r0").is_empty());
    }
}
