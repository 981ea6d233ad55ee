//! Hematology conditions.

use super::list;
use crate::crossref::{CrossReference, Relationship};
use crate::entry::ClinicalEntry;
use crate::store::Store;
use crate::taxonomy::Taxonomy;
use crate::Result;

pub const STORE_NAME: &str = "hematology";

pub const CATEGORIES: &[&str] = &[
    "anemia",
    "bleeding",
    "platelet",
    "thrombotic",
    "hemoglobinopathy",
    "malignancy",
    "bone-marrow",
    "transfusion",
];

fn condition(id: &str, label: &str, relationship: Relationship) -> CrossReference {
    CrossReference::new(id, "condition", relationship, label)
}

/// Build and validate the hematology store
pub fn store() -> Result<Store<ClinicalEntry>> {
    Store::from_keyed(
        STORE_NAME,
        Taxonomy::from_static(STORE_NAME, CATEGORIES),
        table(),
    )
}

fn table() -> Vec<(&'static str, ClinicalEntry)> {
    vec![
        // ====================================================================
        // Anemia
        // ====================================================================
        (
            "iron-deficiency-anemia",
            ClinicalEntry {
                id: "iron-deficiency-anemia".into(),
                name: "Iron Deficiency Anemia".into(),
                name_es: Some("Anemia ferropénica".into()),
                category: "anemia".into(),
                icd11: Some("3A00".into()),
                description: "The most common anemia worldwide: too little iron to make \
                              enough hemoglobin, producing small, pale red cells."
                    .into(),
                pathophysiology: Some(
                    "Chronic blood loss, poor intake or malabsorption depletes ferritin \
                     stores; heme synthesis falls and erythropoiesis becomes microcytic \
                     and hypochromic."
                        .into(),
                ),
                clinical_features: list(&[
                    "Fatigue and exertional dyspnea",
                    "Pallor of skin and conjunctivae",
                    "Koilonychia",
                    "Pica, especially for ice",
                    "Restless legs",
                ]),
                diagnostics: list(&[
                    "Low ferritin",
                    "Low MCV with raised RDW",
                    "Low transferrin saturation with raised TIBC",
                    "Endoscopy when gastrointestinal loss is suspected",
                ]),
                treatments: list(&[
                    "Oral ferrous sulfate with vitamin C",
                    "Intravenous iron when oral iron fails or is not tolerated",
                    "Treat the source of blood loss",
                ]),
                complications: list(&[
                    "High-output heart failure",
                    "Developmental delay in children",
                    "Preterm birth and low birth weight",
                ]),
                patient_explanation: Some(
                    "Your body needs iron to build the part of red blood cells that \
                     carries oxygen. Without enough iron you feel tired and short of \
                     breath."
                        .into(),
                ),
                red_flags: list(&[
                    "Chest pain or fainting",
                    "Black or bloody stools",
                ]),
                cross_references: vec![
                    condition(
                        "vitamin-b12-deficiency-anemia",
                        "Vitamin B12 Deficiency Anemia",
                        Relationship::Sibling,
                    ),
                    condition(
                        "beta-thalassemia",
                        "Beta Thalassemia",
                        Relationship::SeeAlso,
                    ),
                ],
                ..Default::default()
            },
        ),
        (
            "vitamin-b12-deficiency-anemia",
            ClinicalEntry {
                id: "vitamin-b12-deficiency-anemia".into(),
                name: "Vitamin B12 Deficiency Anemia".into(),
                name_es: Some("Anemia por deficiencia de vitamina B12".into()),
                category: "anemia".into(),
                icd11: Some("3A01".into()),
                description: "A macrocytic anemia caused by lack of cobalamin, often \
                              from pernicious anemia or a strict vegan diet."
                    .into(),
                pathophysiology: Some(
                    "Cobalamin is required for DNA synthesis; deficiency arrests nuclear \
                     maturation, giving megaloblasts, and disrupts myelin."
                        .into(),
                ),
                clinical_features: list(&[
                    "Fatigue and glossitis",
                    "Numbness and tingling in hands and feet",
                    "Loss of vibration sense",
                    "Memory problems",
                ]),
                diagnostics: list(&[
                    "Raised MCV",
                    "Hypersegmented neutrophils on smear",
                    "Low serum B12 with raised methylmalonic acid",
                    "Intrinsic factor antibodies",
                ]),
                treatments: list(&[
                    "Intramuscular hydroxocobalamin",
                    "High-dose oral B12 for dietary deficiency",
                ]),
                complications: list(&[
                    "Subacute combined degeneration of the spinal cord",
                    "Irreversible neuropathy if treatment is delayed",
                ]),
                patient_explanation: Some(
                    "Vitamin B12 helps your body make healthy blood cells and protects \
                     your nerves."
                        .into(),
                ),
                red_flags: list(&["Unsteady walking or falls"]),
                cross_references: vec![condition(
                    "iron-deficiency-anemia",
                    "Iron Deficiency Anemia",
                    Relationship::Sibling,
                )],
                ..Default::default()
            },
        ),
        (
            "hemolytic-anemia-autoimmune",
            ClinicalEntry {
                id: "hemolytic-anemia-autoimmune".into(),
                name: "Autoimmune Hemolytic Anemia".into(),
                name_es: Some("Anemia hemolítica autoinmune".into()),
                category: "anemia".into(),
                icd11: Some("3A20".into()),
                description: "Antibodies against the patient's own red cells shorten \
                              their survival, causing anemia, jaundice and a high \
                              reticulocyte count."
                    .into(),
                pathophysiology: Some(
                    "Warm IgG antibodies coat red cells that are then removed by splenic \
                     macrophages; cold IgM antibodies fix complement and cause \
                     intravascular destruction."
                        .into(),
                ),
                clinical_features: list(&[
                    "Fatigue and pallor",
                    "Jaundice",
                    "Dark urine",
                    "Splenomegaly",
                ]),
                diagnostics: list(&[
                    "Positive direct antiglobulin (Coombs) test",
                    "Raised LDH and indirect bilirubin",
                    "Low haptoglobin",
                    "Spherocytes on smear",
                ]),
                treatments: list(&[
                    "Prednisone",
                    "Rituximab for relapse",
                    "Splenectomy in refractory warm disease",
                    "Avoid cold exposure in cold agglutinin disease",
                ]),
                complications: list(&[
                    "Venous thromboembolism",
                    "Pigment gallstones",
                ]),
                patient_explanation: Some(
                    "Your immune system is attacking your own red blood cells by \
                     mistake, so they are destroyed faster than your body can replace \
                     them."
                        .into(),
                ),
                red_flags: list(&[
                    "Rapidly falling hemoglobin",
                    "Chest pain or confusion",
                ]),
                ..Default::default()
            },
        ),
        // ====================================================================
        // Bleeding
        // ====================================================================
        (
            "hemophilia-a",
            ClinicalEntry {
                id: "hemophilia-a".into(),
                name: "Hemophilia A".into(),
                name_es: Some("Hemofilia A".into()),
                category: "bleeding".into(),
                icd11: Some("3B10.0".into()),
                description: "An X-linked inherited deficiency of clotting factor VIII \
                              that causes deep joint and muscle bleeds."
                    .into(),
                pathophysiology: Some(
                    "Without factor VIII the intrinsic tenase complex cannot amplify \
                     thrombin generation, so clots form slowly and are unstable."
                        .into(),
                ),
                clinical_features: list(&[
                    "Spontaneous hemarthrosis",
                    "Muscle hematomas",
                    "Prolonged bleeding after surgery or dental work",
                ]),
                diagnostics: list(&[
                    "Prolonged aPTT with normal PT",
                    "Low factor VIII activity",
                    "Mixing study corrects",
                ]),
                treatments: list(&[
                    "Factor VIII concentrate",
                    "Emicizumab prophylaxis",
                    "Desmopressin in mild disease",
                ]),
                complications: list(&[
                    "Hemophilic arthropathy",
                    "Inhibitor antibodies against factor VIII",
                    "Intracranial bleeding",
                ]),
                patient_explanation: Some(
                    "Your blood is missing a protein it needs to clot, so bleeding lasts \
                     longer, especially inside joints."
                        .into(),
                ),
                red_flags: list(&[
                    "Head injury of any severity",
                    "Severe headache or vomiting",
                ]),
                cross_references: vec![condition(
                    "von-willebrand-disease",
                    "Von Willebrand Disease",
                    Relationship::Sibling,
                )],
                ..Default::default()
            },
        ),
        (
            "von-willebrand-disease",
            ClinicalEntry {
                id: "von-willebrand-disease".into(),
                name: "Von Willebrand Disease".into(),
                name_es: Some("Enfermedad de von Willebrand".into()),
                category: "bleeding".into(),
                icd11: Some("3B12".into()),
                description: "The most common inherited bleeding disorder, caused by low \
                              or dysfunctional von Willebrand factor."
                    .into(),
                pathophysiology: Some(
                    "Von Willebrand factor tethers platelets to injured endothelium and \
                     carries factor VIII; its loss impairs primary hemostasis."
                        .into(),
                ),
                clinical_features: list(&[
                    "Heavy menstrual bleeding",
                    "Frequent nosebleeds",
                    "Easy bruising",
                    "Bleeding after tooth extraction",
                ]),
                diagnostics: list(&[
                    "Low VWF antigen and activity",
                    "Factor VIII level",
                    "VWF multimer analysis",
                ]),
                treatments: list(&[
                    "Desmopressin",
                    "VWF-containing factor concentrate",
                    "Tranexamic acid",
                ]),
                complications: list(&["Iron deficiency from chronic blood loss"]),
                patient_explanation: Some(
                    "A sticky protein that helps platelets plug small cuts is low or \
                     does not work well."
                        .into(),
                ),
                cross_references: vec![
                    condition("hemophilia-a", "Hemophilia A", Relationship::Sibling),
                    condition(
                        "iron-deficiency-anemia",
                        "Iron Deficiency Anemia",
                        Relationship::Related,
                    ),
                ],
                ..Default::default()
            },
        ),
        // ====================================================================
        // Platelet
        // ====================================================================
        (
            "immune-thrombocytopenia",
            ClinicalEntry {
                id: "immune-thrombocytopenia".into(),
                name: "Immune Thrombocytopenia".into(),
                name_es: Some("Trombocitopenia inmune".into()),
                category: "platelet".into(),
                icd11: Some("3B64.10".into()),
                description: "Autoantibodies destroy platelets and suppress their \
                              production, leaving an isolated low platelet count."
                    .into(),
                pathophysiology: Some(
                    "Antiplatelet antibodies mark platelets for splenic clearance and \
                     impair megakaryocyte output."
                        .into(),
                ),
                clinical_features: list(&[
                    "Petechiae and purpura",
                    "Gum bleeding and nosebleeds",
                    "Often follows a viral illness in children",
                ]),
                diagnostics: list(&[
                    "Isolated thrombocytopenia on CBC",
                    "Normal smear apart from large platelets",
                    "Exclusion of secondary causes",
                ]),
                treatments: list(&[
                    "Observation in children without bleeding",
                    "Corticosteroids",
                    "Intravenous immunoglobulin",
                    "Thrombopoietin receptor agonists",
                ]),
                complications: list(&["Intracranial hemorrhage"]),
                patient_explanation: Some(
                    "Your immune system is removing platelets, the tiny cells that help \
                     stop bleeding."
                        .into(),
                ),
                red_flags: list(&["Blood in urine or stool", "Sudden severe headache"]),
                cross_references: vec![condition(
                    "thrombotic-thrombocytopenic-purpura",
                    "Thrombotic Thrombocytopenic Purpura",
                    Relationship::SeeAlso,
                )],
                ..Default::default()
            },
        ),
        (
            "heparin-induced-thrombocytopenia",
            ClinicalEntry {
                id: "heparin-induced-thrombocytopenia".into(),
                name: "Heparin-Induced Thrombocytopenia".into(),
                name_es: Some("Trombocitopenia inducida por heparina".into()),
                category: "platelet".into(),
                description: "An antibody reaction to heparin that lowers the platelet \
                              count while paradoxically causing clots."
                    .into(),
                pathophysiology: Some(
                    "IgG antibodies against platelet factor 4 and heparin complexes \
                     activate platelets through Fc receptors."
                        .into(),
                ),
                clinical_features: list(&[
                    "Platelet fall of more than half, 5 to 10 days after heparin",
                    "New venous or arterial thrombosis",
                    "Skin necrosis at injection sites",
                ]),
                diagnostics: list(&[
                    "4Ts score",
                    "PF4-heparin immunoassay",
                    "Serotonin release assay",
                ]),
                treatments: list(&[
                    "Stop all heparin",
                    "Start a non-heparin anticoagulant such as argatroban",
                ]),
                complications: list(&["Limb ischemia", "Pulmonary embolism"]),
                cross_references: vec![condition(
                    "deep-vein-thrombosis",
                    "Deep Vein Thrombosis",
                    Relationship::Related,
                )],
                ..Default::default()
            },
        ),
        // ====================================================================
        // Thrombotic
        // ====================================================================
        (
            "thrombotic-thrombocytopenic-purpura",
            ClinicalEntry {
                id: "thrombotic-thrombocytopenic-purpura".into(),
                name: "Thrombotic Thrombocytopenic Purpura".into(),
                name_es: Some("Púrpura trombocitopénica trombótica".into()),
                category: "thrombotic".into(),
                icd11: Some("3B64.14".into()),
                description: "A thrombotic microangiopathy with microangiopathic \
                              hemolytic anemia and severe thrombocytopenia from ADAMTS13 \
                              deficiency."
                    .into(),
                pathophysiology: Some(
                    "Without ADAMTS13, ultra-large von Willebrand multimers string \
                     platelets into microthrombi that shear passing red cells."
                        .into(),
                ),
                clinical_features: list(&[
                    "Purpura and petechiae",
                    "Fluctuating neurological signs",
                    "Fever",
                    "Renal impairment",
                ]),
                diagnostics: list(&[
                    "Schistocytes on blood smear",
                    "ADAMTS13 activity below 10 percent",
                    "PLASMIC score",
                ]),
                treatments: list(&[
                    "Urgent plasma exchange",
                    "Corticosteroids",
                    "Caplacizumab",
                    "Rituximab",
                ]),
                complications: list(&["Stroke", "Myocardial infarction", "Death if untreated"]),
                red_flags: list(&["Confusion with low platelets", "Dark urine with bruising"]),
                cross_references: vec![
                    condition(
                        "hemolytic-anemia-autoimmune",
                        "Autoimmune Hemolytic Anemia",
                        Relationship::Related,
                    ),
                    condition(
                        "immune-thrombocytopenia",
                        "Immune Thrombocytopenia",
                        Relationship::SeeAlso,
                    ),
                ],
                ..Default::default()
            },
        ),
        (
            "deep-vein-thrombosis",
            ClinicalEntry {
                id: "deep-vein-thrombosis".into(),
                name: "Deep Vein Thrombosis".into(),
                name_es: Some("Trombosis venosa profunda".into()),
                category: "thrombotic".into(),
                icd11: Some("BD71".into()),
                description: "A clot in a deep vein, usually of the leg, that can travel \
                              to the lungs."
                    .into(),
                pathophysiology: Some(
                    "Virchow's triad: venous stasis, endothelial injury and \
                     hypercoagulability."
                        .into(),
                ),
                clinical_features: list(&[
                    "Unilateral leg swelling",
                    "Calf pain and tenderness",
                    "Warmth and redness",
                ]),
                diagnostics: list(&["Wells score", "D-dimer", "Compression ultrasound"]),
                treatments: list(&[
                    "Direct oral anticoagulant",
                    "Low molecular weight heparin",
                    "Early mobilization",
                ]),
                complications: list(&["Pulmonary embolism", "Post-thrombotic syndrome"]),
                patient_explanation: Some(
                    "A blood clot has formed in a vein deep in your leg. Blood thinners \
                     stop it growing and lower the chance it moves to your lungs."
                        .into(),
                ),
                red_flags: list(&["Sudden shortness of breath", "Coughing blood"]),
                cross_references: vec![condition(
                    "pulmonary-embolism",
                    "Pulmonary Embolism",
                    Relationship::Related,
                )],
                ..Default::default()
            },
        ),
        (
            "pulmonary-embolism",
            ClinicalEntry {
                id: "pulmonary-embolism".into(),
                name: "Pulmonary Embolism".into(),
                name_es: Some("Embolia pulmonar".into()),
                category: "thrombotic".into(),
                icd11: Some("BB00".into()),
                description: "Obstruction of the pulmonary arteries, usually by a clot \
                              from the deep veins of the legs."
                    .into(),
                pathophysiology: Some(
                    "Embolic obstruction raises pulmonary vascular resistance, strains \
                     the right ventricle and creates ventilation-perfusion mismatch."
                        .into(),
                ),
                clinical_features: list(&[
                    "Sudden pleuritic chest pain",
                    "Dyspnea and tachycardia",
                    "Hemoptysis",
                    "Syncope in massive embolism",
                ]),
                diagnostics: list(&[
                    "Wells score and PERC rule",
                    "D-dimer",
                    "CT pulmonary angiography",
                    "Echocardiography for right heart strain",
                ]),
                treatments: list(&[
                    "Anticoagulation",
                    "Systemic thrombolysis for massive embolism",
                    "Catheter-directed therapy",
                ]),
                complications: list(&[
                    "Obstructive shock",
                    "Chronic thromboembolic pulmonary hypertension",
                ]),
                red_flags: list(&["Low blood pressure", "Fainting with breathlessness"]),
                cross_references: vec![condition(
                    "deep-vein-thrombosis",
                    "Deep Vein Thrombosis",
                    Relationship::Related,
                )],
                ..Default::default()
            },
        ),
        (
            "antiphospholipid-syndrome",
            ClinicalEntry {
                id: "antiphospholipid-syndrome".into(),
                name: "Antiphospholipid Syndrome".into(),
                name_es: Some("Síndrome antifosfolípido".into()),
                category: "thrombotic".into(),
                icd11: Some("4A45".into()),
                description: "An autoimmune condition in which antiphospholipid \
                              antibodies cause venous, arterial or pregnancy-related \
                              clotting."
                    .into(),
                clinical_features: list(&[
                    "Recurrent venous or arterial thrombosis",
                    "Recurrent pregnancy loss",
                    "Livedo reticularis",
                ]),
                diagnostics: list(&[
                    "Lupus anticoagulant",
                    "Anticardiolipin antibodies",
                    "Anti-beta-2 glycoprotein I antibodies, confirmed after 12 weeks",
                ]),
                treatments: list(&[
                    "Warfarin for thrombotic disease",
                    "Heparin with aspirin in pregnancy",
                ]),
                complications: list(&["Catastrophic antiphospholipid syndrome", "Stroke"]),
                cross_references: vec![condition(
                    "deep-vein-thrombosis",
                    "Deep Vein Thrombosis",
                    Relationship::Related,
                )],
                ..Default::default()
            },
        ),
        // ====================================================================
        // Hemoglobinopathy
        // ====================================================================
        (
            "sickle-cell-disease",
            ClinicalEntry {
                id: "sickle-cell-disease".into(),
                name: "Sickle Cell Disease".into(),
                name_es: Some("Anemia drepanocítica".into()),
                category: "hemoglobinopathy".into(),
                icd11: Some("3A51".into()),
                description: "An inherited hemoglobinopathy in which hemoglobin S \
                              polymerizes when deoxygenated, deforming red cells into a \
                              sickle shape."
                    .into(),
                pathophysiology: Some(
                    "A glutamate-to-valine substitution in the beta-globin chain lets \
                     deoxygenated HbS polymerize; rigid cells occlude small vessels and \
                     hemolyze."
                        .into(),
                ),
                clinical_features: list(&[
                    "Painful vaso-occlusive crises",
                    "Dactylitis in infants",
                    "Chronic anemia and jaundice",
                    "Functional asplenia",
                ]),
                diagnostics: list(&[
                    "Newborn screening",
                    "Hemoglobin electrophoresis or HPLC",
                    "Transcranial Doppler screening in children",
                ]),
                treatments: list(&[
                    "Hydroxyurea",
                    "Analgesia and hydration for crises",
                    "Penicillin prophylaxis and vaccination",
                    "Chronic transfusion for stroke prevention",
                    "Stem cell transplant or gene therapy",
                ]),
                complications: list(&[
                    "Acute chest syndrome",
                    "Stroke",
                    "Splenic sequestration",
                    "Avascular necrosis",
                ]),
                patient_explanation: Some(
                    "Red blood cells change into a curved shape that can get stuck in \
                     small blood vessels and cause pain."
                        .into(),
                ),
                red_flags: list(&[
                    "Fever of 38.5 C or higher",
                    "Chest pain or trouble breathing",
                    "Weakness on one side of the body",
                ]),
                cross_references: vec![
                    condition("beta-thalassemia", "Beta Thalassemia", Relationship::Sibling),
                    condition(
                        "acute-hemolytic-transfusion-reaction",
                        "Acute Hemolytic Transfusion Reaction",
                        Relationship::SeeAlso,
                    ),
                ],
                ..Default::default()
            },
        ),
        (
            "beta-thalassemia",
            ClinicalEntry {
                id: "beta-thalassemia".into(),
                name: "Beta Thalassemia".into(),
                name_es: Some("Beta talasemia".into()),
                category: "hemoglobinopathy".into(),
                icd11: Some("3A50.2".into()),
                description: "Reduced or absent β-globin synthesis causing ineffective \
                              erythropoiesis and a microcytic anemia."
                    .into(),
                pathophysiology: Some(
                    "Excess unpaired alpha chains precipitate in red cell precursors, \
                     which die in the marrow; the marrow expands to compensate."
                        .into(),
                ),
                clinical_features: list(&[
                    "Severe anemia from infancy in the major form",
                    "Frontal bossing and maxillary overgrowth",
                    "Hepatosplenomegaly",
                ]),
                diagnostics: list(&[
                    "Microcytosis with normal ferritin",
                    "Raised HbA2 on electrophoresis",
                    "Target cells on smear",
                ]),
                treatments: list(&[
                    "Regular transfusion in the major form",
                    "Iron chelation",
                    "Luspatercept",
                ]),
                complications: list(&["Iron overload cardiomyopathy", "Endocrine failure"]),
                cross_references: vec![condition(
                    "sickle-cell-disease",
                    "Sickle Cell Disease",
                    Relationship::Sibling,
                )],
                ..Default::default()
            },
        ),
        // ====================================================================
        // Malignancy and marrow failure
        // ====================================================================
        (
            "acute-myeloid-leukemia",
            ClinicalEntry {
                id: "acute-myeloid-leukemia".into(),
                name: "Acute Myeloid Leukemia".into(),
                name_es: Some("Leucemia mieloide aguda".into()),
                category: "malignancy".into(),
                icd11: Some("2A60".into()),
                description: "A clonal expansion of myeloid blasts that replaces normal \
                              marrow and causes cytopenias."
                    .into(),
                clinical_features: list(&[
                    "Fatigue and pallor",
                    "Infections",
                    "Bleeding and bruising",
                    "Gum hypertrophy in monocytic subtypes",
                ]),
                diagnostics: list(&[
                    "Blasts of 20 percent or more in marrow or blood",
                    "Auer rods",
                    "Cytogenetics and molecular panel",
                ]),
                treatments: list(&[
                    "Induction chemotherapy",
                    "Targeted agents for FLT3 or IDH mutations",
                    "Allogeneic stem cell transplant",
                ]),
                complications: list(&[
                    "Tumor lysis syndrome",
                    "Disseminated intravascular coagulation",
                    "Neutropenic sepsis",
                ]),
                red_flags: list(&["Fever during chemotherapy"]),
                cross_references: vec![condition(
                    "aplastic-anemia",
                    "Aplastic Anemia",
                    Relationship::SeeAlso,
                )],
                ..Default::default()
            },
        ),
        (
            "aplastic-anemia",
            ClinicalEntry {
                id: "aplastic-anemia".into(),
                name: "Aplastic Anemia".into(),
                name_es: Some("Anemia aplásica".into()),
                category: "bone-marrow".into(),
                icd11: Some("3A70".into()),
                description: "Failure of the bone marrow to produce all three blood cell \
                              lines, with an empty, fatty marrow."
                    .into(),
                pathophysiology: Some(
                    "T-cell mediated destruction of hematopoietic stem cells, sometimes \
                     triggered by drugs, toxins or viral hepatitis."
                        .into(),
                ),
                clinical_features: list(&[
                    "Fatigue",
                    "Recurrent infections",
                    "Petechiae and mucosal bleeding",
                ]),
                diagnostics: list(&[
                    "Pancytopenia with low reticulocytes",
                    "Hypocellular bone marrow biopsy",
                    "PNH clone screening",
                ]),
                treatments: list(&[
                    "Allogeneic stem cell transplant",
                    "Antithymocyte globulin with ciclosporin",
                    "Eltrombopag",
                ]),
                complications: list(&[
                    "Invasive fungal infection",
                    "Evolution to myelodysplasia",
                ]),
                cross_references: vec![condition(
                    "acute-myeloid-leukemia",
                    "Acute Myeloid Leukemia",
                    Relationship::Related,
                )],
                ..Default::default()
            },
        ),
        // ====================================================================
        // Transfusion
        // ====================================================================
        (
            "acute-hemolytic-transfusion-reaction",
            ClinicalEntry {
                id: "acute-hemolytic-transfusion-reaction".into(),
                name: "Acute Hemolytic Transfusion Reaction".into(),
                name_es: Some("Reacción transfusional hemolítica aguda".into()),
                category: "transfusion".into(),
                description: "Rapid intravascular destruction of transfused red cells, \
                              most often from ABO-incompatible blood."
                    .into(),
                pathophysiology: Some(
                    "Preformed recipient antibodies bind donor red cells, fix complement \
                     and release free hemoglobin and cytokines."
                        .into(),
                ),
                clinical_features: list(&[
                    "Fever and rigors within minutes",
                    "Flank or back pain",
                    "Hypotension",
                    "Red or dark urine",
                ]),
                diagnostics: list(&[
                    "Clerical check of patient and unit",
                    "Repeat ABO typing and direct antiglobulin test",
                    "Hemolysis markers",
                ]),
                treatments: list(&[
                    "Stop the transfusion immediately",
                    "Fluid resuscitation to protect the kidneys",
                    "Report to the blood bank",
                ]),
                complications: list(&[
                    "Acute kidney injury",
                    "Disseminated intravascular coagulation",
                ]),
                red_flags: list(&["Any fever or pain during a transfusion"]),
                cross_references: vec![condition(
                    "hemolytic-anemia-autoimmune",
                    "Autoimmune Hemolytic Anemia",
                    Relationship::Related,
                )],
                ..Default::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_builds() {
        let store = store().unwrap();
        assert_eq!(store.name(), STORE_NAME);
        assert_eq!(store.taxonomy().len(), CATEGORIES.len());
        assert!(store.len() >= 15);
    }

    #[test]
    fn test_every_category_is_populated() {
        let store = store().unwrap();
        for category in CATEGORIES {
            assert!(store.count(Some(*category)) > 0, "{} is empty", category);
        }
    }

    #[test]
    fn test_entries_carry_localized_names() {
        let store = store().unwrap();
        assert!(store.iter().all(|e| e.name_es.is_some()));
    }
}
