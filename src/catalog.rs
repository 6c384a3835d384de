// Copyright 2026 Docmaster Interactive. All rights reserved.
// CSI Document Master ("Site Office") - Document & Scenario Catalog

use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, DocumentType, Scenario};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// An invalid catalog is a configuration-time defect: it is rejected when a
/// session is constructed, never at runtime.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("document catalog is empty")]
    NoDocuments,

    #[error("scenario list is empty")]
    NoScenarios,

    #[error("duplicate document id: {0}")]
    DuplicateDocument(String),

    #[error("duplicate scenario id: {0}")]
    DuplicateScenario(u32),

    #[error("scenario {id} has no correct documents")]
    NoCorrectDocuments { id: u32 },

    #[error("scenario {id} references unknown document: {document}")]
    UnknownDocument { id: u32, document: String },
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The static content pack a session plays against: the selectable document
/// types and the scenario case studies. Read-only once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub documents: Vec<DocumentType>,
    pub scenarios: Vec<Scenario>,
}

impl Catalog {
    /// The built-in CSI MasterFormat content: 20 document types and 12
    /// construction-project scenarios.
    pub fn standard() -> Self {
        Self {
            documents: standard_documents(),
            scenarios: standard_scenarios(),
        }
    }

    /// Check every precondition the session relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.documents.is_empty() {
            return Err(CatalogError::NoDocuments);
        }
        if self.scenarios.is_empty() {
            return Err(CatalogError::NoScenarios);
        }
        for (i, doc) in self.documents.iter().enumerate() {
            if self.documents[..i].iter().any(|d| d.id == doc.id) {
                return Err(CatalogError::DuplicateDocument(doc.id.clone()));
            }
        }
        for (i, scenario) in self.scenarios.iter().enumerate() {
            if self.scenarios[..i].iter().any(|s| s.id == scenario.id) {
                return Err(CatalogError::DuplicateScenario(scenario.id));
            }
            if scenario.correct_documents.is_empty() {
                return Err(CatalogError::NoCorrectDocuments { id: scenario.id });
            }
            for doc_id in &scenario.correct_documents {
                if self.document_name(doc_id).is_none() {
                    return Err(CatalogError::UnknownDocument {
                        id: scenario.id,
                        document: doc_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Display name for a document id, if the id is in the catalog.
    pub fn document_name(&self, id: &str) -> Option<&str> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }

    /// Display names of a scenario's correct documents, in catalog order of
    /// the scenario's own list. Unresolvable ids fall back to the raw id so
    /// the result always lines up with `correct_documents`.
    pub fn correct_document_names(&self, scenario: &Scenario) -> Vec<String> {
        scenario
            .correct_documents
            .iter()
            .map(|id| {
                self.document_name(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| id.clone())
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Built-in content
// ---------------------------------------------------------------------------

const DOCUMENT_TABLE: &[(&str, &str, &str)] = &[
    ("g702", "AIA G702", "Application and Certificate for Payment"),
    ("g703", "AIA G703", "Continuation Sheet for G702"),
    ("g701", "AIA G701", "Change Order Form"),
    ("g704", "AIA G704", "Certificate of Substantial Completion"),
    ("g706", "AIA G706", "Contractor's Affidavit of Payment of Debts and Claims"),
    ("g706a", "AIA G706A", "Contractor's Affidavit of Release of Liens"),
    ("g707", "AIA G707", "Consent of Surety to Final Payment"),
    ("g709", "AIA G709", "Proposal Request Form"),
    ("g710", "AIA G710", "Architect's Supplemental Instructions"),
    ("g714", "AIA G714", "Construction Change Directive"),
    ("g715", "AIA G715", "Supplemental Attachment for ACORD Certificate of Insurance"),
    ("rfp", "RFP", "Request for Proposal"),
    ("rfq", "RFQ", "Request for Qualification"),
    ("rfi", "RFI", "Request for Information"),
    ("sob", "SOB", "Schedule of Benefits"),
    ("sov", "SOV", "Schedule of Values"),
    ("ntp", "NTP", "Notice to Proceed"),
    ("co", "CO", "Certificate of Occupancy"),
    ("warranty", "Warranty", "Construction Warranty Document"),
    ("submittal", "Submittal", "Material or Equipment Submittal"),
];

fn standard_documents() -> Vec<DocumentType> {
    DOCUMENT_TABLE
        .iter()
        .map(|&(id, name, description)| DocumentType {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Helper: build one scenario entry.
fn scenario(
    id: u32,
    title: &str,
    description: &str,
    correct: &[&str],
    explanation: &str,
    difficulty: Difficulty,
) -> Scenario {
    Scenario {
        id,
        title: title.to_string(),
        description: description.to_string(),
        correct_documents: correct.iter().map(|s| s.to_string()).collect(),
        explanation: explanation.to_string(),
        difficulty,
    }
}

fn standard_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            1,
            "Contractor Payment Request",
            "Apex Construction has completed 35% of the project scope for Phase 1 and is requesting a payment for work completed to date.",
            &["g702", "g703", "sov"],
            "The contractor needs to submit a formal payment application with a detailed breakdown of work completed.",
            Difficulty::Easy,
        ),
        scenario(
            2,
            "Project Scope Addition",
            "The client wants to add three more offices to the second floor, which wasn't in the original scope. This will increase project costs by $45,000.",
            &["g701", "rfi"],
            "The contractor should submit a change order for the additional work scope with the client's approval.",
            Difficulty::Easy,
        ),
        scenario(
            3,
            "Construction Nearly Complete",
            "The building is 95% complete and ready for initial occupancy while minor finishes are being completed.",
            &["g704"],
            "A Certificate of Substantial Completion should be issued to mark that the project is ready for its intended use.",
            Difficulty::Medium,
        ),
        scenario(
            4,
            "Final Payment Release",
            "The project is 100% complete. The contractor is requesting final payment and release of retainage.",
            &["g706", "g706a", "g707"],
            "Final payment requires verification that all debts and claims have been satisfied, and the surety approves final payment.",
            Difficulty::Hard,
        ),
        scenario(
            5,
            "Material Specification Clarification",
            "The contractor is unsure about the specified type of insulation material for the exterior walls.",
            &["rfi"],
            "The contractor should submit a Request for Information to get clarification from the architect.",
            Difficulty::Easy,
        ),
        scenario(
            6,
            "Project Initiation",
            "The contract has been signed, and the project team is ready to begin construction.",
            &["ntp"],
            "A Notice to Proceed formally authorizes the contractor to begin work on the project.",
            Difficulty::Easy,
        ),
        scenario(
            7,
            "Design Clarification",
            "The architect needs to provide additional details for the lobby ceiling design that weren't clear in the original drawings.",
            &["g710"],
            "The architect should issue supplemental instructions to clarify design details.",
            Difficulty::Medium,
        ),
        scenario(
            8,
            "Urgent Design Change",
            "Unforeseen structural issues require immediate changes to the foundation design to maintain the project schedule.",
            &["g714"],
            "A Construction Change Directive allows work to proceed before a price is finalized when changes are urgent.",
            Difficulty::Medium,
        ),
        scenario(
            9,
            "Insurance Documentation",
            "The owner has requested additional documentation about the contractor's insurance coverage for the project.",
            &["g715"],
            "The supplemental attachment provides additional insurance information beyond the standard ACORD certificate.",
            Difficulty::Hard,
        ),
        scenario(
            10,
            "Building Ready for Occupancy",
            "Construction is complete, all inspections have passed, and the building is ready for legal occupancy.",
            &["co"],
            "A Certificate of Occupancy from the local building authority is required before the building can be legally occupied.",
            Difficulty::Medium,
        ),
        scenario(
            11,
            "Pre-Construction Planning",
            "The project team needs to establish the detailed cost breakdown for all elements of the project.",
            &["sov"],
            "A Schedule of Values details the cost allocation for each element of the project and serves as the basis for payment applications.",
            Difficulty::Medium,
        ),
        scenario(
            12,
            "HVAC System Approval",
            "The contractor needs to confirm the specific HVAC units before ordering equipment.",
            &["submittal"],
            "Submittals allow the architect and engineer to verify that the proposed materials and equipment meet the design requirements.",
            Difficulty::Medium,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
