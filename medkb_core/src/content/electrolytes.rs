//! Electrolyte and fluid balance topics with tiered explanations.
//!
//! Not every topic is written at every depth; missing levels are left out
//! rather than filled in.

use super::list;
use crate::crossref::{CrossReference, Relationship};
use crate::level::{KeyTerm, Level, LevelNumber};
use crate::store::Store;
use crate::taxonomy::Taxonomy;
use crate::tiered::{
    Citation, ClinicalRelevance, ContentStatus, ContentTags, Media, TieredEntry,
};
use crate::Result;
use std::collections::BTreeMap;

pub const STORE_NAME: &str = "electrolytes";

pub const CATEGORIES: &[&str] = &[
    "nephron-segment",
    "hormone",
    "electrolyte-disorder",
    "acid-base-disorder",
    "fluid-compartment",
];

const L1: LevelNumber = LevelNumber::ALL[0];
const L2: LevelNumber = LevelNumber::ALL[1];
const L3: LevelNumber = LevelNumber::ALL[2];
const L4: LevelNumber = LevelNumber::ALL[3];
const L5: LevelNumber = LevelNumber::ALL[4];

const CREATED_AT: &str = "2025-01-30T00:00:00.000Z";
const UPDATED_AT: &str = "2026-02-05T00:00:00.000Z";

fn levels(items: Vec<Level>) -> BTreeMap<LevelNumber, Level> {
    items.into_iter().map(|level| (level.level, level)).collect()
}

/// Published entry with shared provenance; callers fill in the rest
fn topic(id: &str, entry_type: &str, name: &str, content: Vec<Level>) -> TieredEntry {
    TieredEntry {
        id: id.into(),
        entry_type: entry_type.into(),
        name: name.into(),
        name_es: None,
        alternate_names: Vec::new(),
        levels: levels(content),
        media: Vec::new(),
        citations: Vec::new(),
        cross_references: Vec::new(),
        tags: ContentTags::default(),
        created_at: CREATED_AT.into(),
        updated_at: UPDATED_AT.into(),
        version: 1,
        status: ContentStatus::Published,
        contributors: list(&["Nephrology content team"]),
    }
}

fn tags(systems: &[&str], topics: &[&str], keywords: &[&str], relevance: ClinicalRelevance) -> ContentTags {
    ContentTags {
        systems: list(systems),
        topics: list(topics),
        keywords: list(keywords),
        clinical_relevance: Some(relevance),
    }
}

/// Build and validate the electrolytes store
pub fn store() -> Result<Store<TieredEntry>> {
    Store::from_keyed(
        STORE_NAME,
        Taxonomy::from_static(STORE_NAME, CATEGORIES),
        table(),
    )
}

fn table() -> Vec<(&'static str, TieredEntry)> {
    vec![
        (
            "glomerulus",
            TieredEntry {
                name_es: Some("Glomérulo".into()),
                alternate_names: list(&["Renal corpuscle"]),
                media: vec![Media {
                    id: "glomerulus-diagram".into(),
                    kind: "diagram".into(),
                    title: Some("Glomerular filtration barrier".into()),
                    url: None,
                    caption: Some("Fenestrated endothelium, basement membrane and podocytes".into()),
                    alt_text: Some("Cross-section of a glomerular capillary loop".into()),
                    license: Some("CC BY 4.0".into()),
                }],
                cross_references: vec![CrossReference::new(
                    "proximal-convoluted-tubule",
                    "structure",
                    Relationship::Related,
                    "Proximal Convoluted Tubule",
                )],
                tags: tags(
                    &["renal"],
                    &["filtration", "GFR"],
                    &["Bowman's capsule", "ultrafiltration"],
                    ClinicalRelevance::Medium,
                ),
                ..topic(
                    "glomerulus",
                    "nephron-segment",
                    "Glomerulus",
                    vec![
                        Level {
                            analogies: list(&["A coffee filter that keeps the grounds out of the cup"]),
                            ..Level::new(
                                L1,
                                "The kidney's filter.",
                                "The glomerulus is like a coffee filter in your kidney that \
                                 separates waste from your blood.",
                            )
                        },
                        Level::new(
                            L2,
                            "Where blood is first filtered.",
                            "Blood is filtered in the glomerulus, allowing water and small \
                             molecules through while keeping blood cells and proteins.",
                        ),
                        Level {
                            key_terms: vec![KeyTerm::new(
                                "GFR",
                                "Glomerular filtration rate, normally about 125 mL/min",
                            )],
                            ..Level::new(
                                L3,
                                "Ultrafiltration by size and charge.",
                                "The glomerulus performs ultrafiltration based on size and \
                                 charge, producing 180 L/day of filtrate that is iso-osmotic \
                                 with plasma.",
                            )
                        },
                        Level::new(
                            L4,
                            "Starling forces drive filtration.",
                            "Glomerular filtration is driven by Starling forces across the \
                             fenestrated endothelium, GBM and podocyte slit diaphragms, with \
                             autoregulation maintaining constant GFR.",
                        ),
                        Level {
                            clinical_notes: Some(
                                "GFR of about 125 mL/min filters 180 L/day; only 1 to 2 L \
                                 becomes urine."
                                    .into(),
                            ),
                            ..Level::new(
                                L5,
                                "Kf and net filtration pressure.",
                                "The ultrafiltration coefficient Kf reflects hydraulic \
                                 conductivity and surface area. Net filtration pressure is \
                                 (PGC - PBS) - (πGC - πBS). Mesangial contraction and \
                                 tubuloglomerular feedback via the macula densa regulate GFR.",
                            )
                        },
                    ],
                )
            },
        ),
        (
            "proximal-convoluted-tubule",
            TieredEntry {
                alternate_names: list(&["PCT"]),
                cross_references: vec![CrossReference::new(
                    "glomerulus",
                    "nephron-segment",
                    Relationship::Related,
                    "Glomerulus",
                )],
                tags: tags(
                    &["renal"],
                    &["reabsorption"],
                    &["SGLT2", "NHE3"],
                    ClinicalRelevance::Medium,
                ),
                ..topic(
                    "proximal-convoluted-tubule",
                    "nephron-segment",
                    "Proximal Convoluted Tubule",
                    vec![
                        Level::new(
                            L2,
                            "Reclaims most filtered salt and water.",
                            "The proximal tubule reabsorbs about 65 percent of filtered \
                             sodium and water, plus all glucose and amino acids.",
                        ),
                        Level::new(
                            L3,
                            "Bulk iso-osmotic reabsorption.",
                            "Na+/K+-ATPase drives secondary active transport. SGLT2 \
                             reabsorbs glucose. Fluid remains iso-osmotic.",
                        ),
                        Level {
                            clinical_notes: Some(
                                "SGLT2 inhibitors cause glucosuria and natriuresis here.".into(),
                            ),
                            ..Level::new(
                                L4,
                                "NHE3 and bicarbonate reclamation.",
                                "NHE3 mediates apical sodium entry coupled to proton \
                                 secretion. Carbonic anhydrase enables bicarbonate \
                                 reabsorption. Angiotensin II upregulates transport.",
                            )
                        },
                    ],
                )
            },
        ),
        (
            "aldosterone",
            TieredEntry {
                alternate_names: list(&["Mineralocorticoid"]),
                cross_references: vec![CrossReference::new(
                    "hyperkalemia",
                    "electrolyte-disorder",
                    Relationship::Related,
                    "Hyperkalemia",
                )],
                tags: tags(
                    &["endocrine", "renal"],
                    &["RAAS"],
                    &["ENaC", "ROMK"],
                    ClinicalRelevance::High,
                ),
                ..topic(
                    "aldosterone",
                    "hormone",
                    "Aldosterone",
                    vec![
                        Level::new(
                            L1,
                            "A salt-keeping signal.",
                            "Aldosterone tells your kidneys to hold onto salt and let go of \
                             potassium.",
                        ),
                        Level::new(
                            L2,
                            "Adrenal hormone acting on the kidney.",
                            "Aldosterone is made by the adrenal glands and acts on the \
                             kidney to retain sodium and excrete potassium.",
                        ),
                        Level {
                            key_terms: vec![
                                KeyTerm::new("ENaC", "Epithelial sodium channel"),
                                KeyTerm::new("ROMK", "Renal outer medullary potassium channel"),
                            ],
                            ..Level::new(
                                L3,
                                "Principal cell effects.",
                                "Aldosterone binds mineralocorticoid receptors in principal \
                                 cells, increasing ENaC and ROMK expression to enhance sodium \
                                 reabsorption and potassium secretion.",
                            )
                        },
                    ],
                )
            },
        ),
        (
            "hyperkalemia",
            TieredEntry {
                name_es: Some("Hiperpotasemia".into()),
                alternate_names: list(&["High potassium", "Hyperkalaemia"]),
                citations: vec![Citation {
                    id: "kdigo-potassium-2020".into(),
                    kind: "guideline".into(),
                    title: "Potassium homeostasis and management of dyskalemia in kidney \
                            diseases"
                        .into(),
                    authors: list(&["Clase CM", "Carrero JJ", "Ellison DH"]),
                    source: Some("Kidney International".into()),
                    year: Some(2020),
                    url: None,
                    license: None,
                }],
                cross_references: vec![
                    CrossReference::new(
                        "aldosterone",
                        "hormone",
                        Relationship::Related,
                        "Aldosterone",
                    ),
                    CrossReference::new(
                        "metabolic-acidosis",
                        "acid-base-disorder",
                        Relationship::Related,
                        "Metabolic Acidosis",
                    ),
                    CrossReference::new(
                        "hemolytic-anemia-autoimmune",
                        "condition",
                        Relationship::SeeAlso,
                        "Hemolysis as a cause of pseudohyperkalemia",
                    ),
                ],
                tags: tags(
                    &["renal", "cardiovascular"],
                    &["potassium disorders"],
                    &["K+", "peaked T waves"],
                    ClinicalRelevance::Critical,
                ),
                ..topic(
                    "hyperkalemia",
                    "electrolyte-disorder",
                    "Hyperkalemia",
                    vec![
                        Level::new(
                            L1,
                            "Too much potassium can upset the heart.",
                            "High potassium is dangerous because it can make your heart beat \
                             the wrong way.",
                        ),
                        Level {
                            patient_counseling_points: list(&[
                                "Ask before using salt substitutes, which contain potassium",
                                "Bring a list of your medicines to every visit",
                            ]),
                            ..Level::new(
                                L2,
                                "High potassium in the blood.",
                                "Hyperkalemia usually happens when the kidneys cannot excrete \
                                 enough potassium. It causes typical ECG changes.",
                            )
                        },
                        Level {
                            clinical_notes: Some(
                                "Repeat the sample to exclude pseudohyperkalemia from \
                                 hemolysis before treating an isolated result."
                                    .into(),
                            ),
                            examples: list(&["ACE inhibitor, NSAID and spironolactone together"]),
                            ..Level::new(
                                L4,
                                "Depolarization and conduction block.",
                                "Hyperkalemia depolarizes the resting membrane potential and \
                                 inactivates sodium channels. ECG progression runs from \
                                 peaked T waves to PR prolongation, QRS widening, sine wave \
                                 and ventricular fibrillation.",
                            )
                        },
                    ],
                )
            },
        ),
        (
            "metabolic-acidosis",
            TieredEntry {
                cross_references: vec![CrossReference::new(
                    "hyperkalemia",
                    "electrolyte-disorder",
                    Relationship::Related,
                    "Hyperkalemia",
                )],
                tags: tags(
                    &["renal", "respiratory"],
                    &["acid-base"],
                    &["anion gap", "MUDPILES"],
                    ClinicalRelevance::High,
                ),
                ..topic(
                    "metabolic-acidosis",
                    "acid-base-disorder",
                    "Metabolic Acidosis",
                    vec![
                        Level::new(
                            L2,
                            "Acid builds up or bicarbonate is lost.",
                            "Metabolic acidosis occurs when acids build up or bicarbonate is \
                             lost. Breathing speeds up to blow off carbon dioxide.",
                        ),
                        Level::new(
                            L3,
                            "Low pH, low bicarbonate.",
                            "Low pH with low bicarbonate triggers respiratory compensation. \
                             Calculate the anion gap to narrow the differential.",
                        ),
                        Level {
                            key_terms: vec![KeyTerm::new(
                                "Anion gap",
                                "Na - (Cl + HCO3), normally 8 to 12 mEq/L",
                            )],
                            ..Level::new(
                                L4,
                                "Anion gap approach.",
                                "High anion gap causes follow MUDPILES: methanol, uremia, \
                                 DKA, propylene glycol, isoniazid, lactic acid, ethylene \
                                 glycol and salicylates.",
                            )
                        },
                        Level::new(
                            L5,
                            "Mixed disorders and RTA.",
                            "The delta-delta ratio separates pure high anion gap acidosis \
                             from mixed disorders. Type 1 RTA impairs distal proton \
                             secretion, type 2 impairs proximal bicarbonate reabsorption and \
                             type 4 reflects hypoaldosteronism.",
                        ),
                    ],
                )
            },
        ),
        (
            "intracellular-fluid",
            TieredEntry {
                alternate_names: list(&["ICF"]),
                tags: tags(
                    &["renal"],
                    &["body water"],
                    &["total body water"],
                    ClinicalRelevance::Low,
                ),
                ..topic(
                    "intracellular-fluid",
                    "fluid-compartment",
                    "Intracellular Fluid",
                    vec![
                        Level::new(
                            L1,
                            "The water inside your cells.",
                            "This is all the water inside your cells, the biggest water \
                             compartment in your body.",
                        ),
                        Level::new(
                            L2,
                            "Two thirds of body water.",
                            "Intracellular fluid makes up two thirds of total body water. \
                             It is high in potassium, unlike blood.",
                        ),
                    ],
                )
            },
        ),
    ]
}
