//! # Document Catalog
//!
//! Static read-only registry of every document type a user can submit.
//! The catalog is closed and fixed at build time: entries are never
//! added, mutated, or removed at runtime, and enumeration order is
//! registration order.
//!
//! ## Invariants
//! - CAT-1: Entry ids are unique
//! - CAT-2: Enumeration order is stable across calls

use serde::Serialize;

/// A selectable document type.
///
/// `icon` is a symbolic icon name; the frontend resolves it to an
/// actual glyph. The catalog never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentType {
    /// Unique key, referenced by tracked documents
    pub id: &'static str,

    /// Human-readable name
    pub title: &'static str,

    /// One-line description shown on the selection card
    pub description: &'static str,

    /// Symbolic icon reference
    pub icon: &'static str,
}

/// The reference catalog: 12 Indian identity and civil documents.
const ENTRIES: &[DocumentType] = &[
    DocumentType {
        id: "aadhar",
        title: "Aadhar Card",
        description: "Identity proof document issued by UIDAI",
        icon: "credit-card",
    },
    DocumentType {
        id: "pan",
        title: "PAN Card",
        description: "Permanent Account Number card",
        icon: "file-text",
    },
    DocumentType {
        id: "voter",
        title: "Voter ID",
        description: "Election Commission identity card",
        icon: "vote",
    },
    DocumentType {
        id: "samagra",
        title: "Samagra ID",
        description: "Madhya Pradesh family identification card",
        icon: "user-check",
    },
    DocumentType {
        id: "driving_license",
        title: "Driving License",
        description: "Motor vehicle driving authorization",
        icon: "car",
    },
    DocumentType {
        id: "passport",
        title: "Passport",
        description: "International travel document",
        icon: "plane",
    },
    DocumentType {
        id: "ration_card",
        title: "Ration Card",
        description: "Food security and identification document",
        icon: "home",
    },
    DocumentType {
        id: "bank_passbook",
        title: "Bank Passbook",
        description: "Bank account verification document",
        icon: "banknote",
    },
    DocumentType {
        id: "property_documents",
        title: "Property Documents",
        description: "Land/property ownership papers",
        icon: "building",
    },
    DocumentType {
        id: "income_certificate",
        title: "Income Certificate",
        description: "Government issued income verification",
        icon: "award",
    },
    DocumentType {
        id: "caste_certificate",
        title: "Caste Certificate",
        description: "Community/caste verification document",
        icon: "scroll-text",
    },
    DocumentType {
        id: "domicile_certificate",
        title: "Domicile Certificate",
        description: "Residence/domicile verification",
        icon: "map-pin",
    },
];

/// Read-only lookup over the static entry table.
///
/// Cheap to construct; callers that need shared access can freely
/// create their own instance instead of threading a reference around.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    /// Look up a document type by id.
    ///
    /// An unknown id returns `None`; the catalog is closed, so callers
    /// must treat that as a caller-side error rather than a gap to fill.
    pub fn get(&self, id: &str) -> Option<&'static DocumentType> {
        ENTRIES.iter().find(|entry| entry.id == id)
    }

    /// Whether `id` names a known document type.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All entries in registration order.
    pub fn all(&self) -> &'static [DocumentType] {
        ENTRIES
    }

    /// Number of registered document types.
    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    pub fn is_empty(&self) -> bool {
        ENTRIES.is_empty()
    }
}
