// 📖 Financial Glossary - bilingual reference terms
// Every term carries its Hindi name, a plain definition, and a worked example.

use serde::{Deserialize, Serialize};

// ============================================================================
// GLOSSARY TERM
// ============================================================================

/// A single glossary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryTerm {
    /// Stable identifier from the source data
    pub id: String,

    /// English name, e.g. "PPF (Public Provident Fund)"
    pub term: String,

    /// Hindi rendering of the term
    pub hindi: String,

    /// Plain-English definition
    pub definition: String,

    /// Worked example in an Indian context
    pub example: String,
}

// ============================================================================
// GLOSSARY CATALOG
// ============================================================================

/// All glossary terms, in display order
pub struct GlossaryCatalog {
    terms: Vec<GlossaryTerm>,
}

impl GlossaryCatalog {
    /// Create a catalog seeded with the default terms
    pub fn new() -> Self {
        let mut catalog = GlossaryCatalog { terms: Vec::new() };
        catalog.register_default_terms();
        catalog
    }

    fn register_default_terms(&mut self) {
        self.register(GlossaryTerm {
            id: "1".to_string(),
            term: "PPF (Public Provident Fund)".to_string(),
            hindi: "सार्वजनिक भविष्य निधि".to_string(),
            definition: "A long-term savings scheme with tax benefits and guaranteed \
                         returns, locked for 15 years."
                .to_string(),
            example: "Invest ₹1.5 lakh annually in PPF to get tax deduction under \
                      Section 80C and earn tax-free returns."
                .to_string(),
        });

        self.register(GlossaryTerm {
            id: "2".to_string(),
            term: "SIP (Systematic Investment Plan)".to_string(),
            hindi: "व्यवस्थित निवेश योजना".to_string(),
            definition: "A method of investing in mutual funds where you invest a \
                         fixed amount regularly."
                .to_string(),
            example: "Start a SIP of ₹5,000 monthly in an equity mutual fund to build \
                      wealth over time."
                .to_string(),
        });

        self.register(GlossaryTerm {
            id: "3".to_string(),
            term: "Fixed Deposit (FD)".to_string(),
            hindi: "सावधि जमा".to_string(),
            definition: "A safe investment where you deposit money for a fixed period \
                         at guaranteed interest rates."
                .to_string(),
            example: "Bank FDs currently offer 6-7% annual interest with capital \
                      protection."
                .to_string(),
        });

        self.register(GlossaryTerm {
            id: "4".to_string(),
            term: "UPI (Unified Payments Interface)".to_string(),
            hindi: "एकीकृत भुगतान इंटरफ़ेस".to_string(),
            definition: "Real-time payment system that allows instant money transfer \
                         between bank accounts."
                .to_string(),
            example: "Use PhonePe, Google Pay, or Paytm to send money instantly using \
                      UPI ID."
                .to_string(),
        });
    }

    /// Add a term to the catalog
    pub fn register(&mut self, term: GlossaryTerm) {
        self.terms.push(term);
    }

    /// All terms in display order
    pub fn terms(&self) -> &[GlossaryTerm] {
        &self.terms
    }

    /// Look up a term by its id
    pub fn get(&self, id: &str) -> Option<&GlossaryTerm> {
        self.terms.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for GlossaryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_four_terms() {
        let catalog = GlossaryCatalog::new();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = GlossaryCatalog::new();

        let ppf = catalog.get("1").unwrap();
        assert!(ppf.term.starts_with("PPF"));
        assert!(ppf.definition.contains("15 years"));

        let upi = catalog.get("4").unwrap();
        assert!(upi.term.contains("UPI"));
    }

    #[test]
    fn test_unknown_id_returns_none() {
        let catalog = GlossaryCatalog::new();
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = GlossaryCatalog::new();
        for (i, a) in catalog.terms().iter().enumerate() {
            for b in catalog.terms().iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate glossary id {}", a.id);
            }
        }
    }

    #[test]
    fn test_every_term_has_hindi_and_example() {
        let catalog = GlossaryCatalog::new();
        for term in catalog.terms() {
            assert!(!term.hindi.is_empty(), "missing hindi for {}", term.term);
            assert!(!term.example.is_empty(), "missing example for {}", term.term);
        }
    }
}
