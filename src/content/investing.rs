// 📈 Investment Guide - beginner-friendly instrument overviews

use serde::{Deserialize, Serialize};

// ============================================================================
// INVESTMENT OPTION
// ============================================================================

/// One investment instrument card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentOption {
    pub name: String,

    /// Hindi rendering of the instrument name
    pub hindi: String,

    /// Risk label as displayed ("Very Low", "Medium to High", ...)
    pub risk: String,

    /// Expected-returns label as displayed ("7-8% annually", ...)
    pub returns: String,

    pub description: String,

    /// Key benefits, in display order
    pub benefits: Vec<String>,
}

// ============================================================================
// INVESTMENT GUIDE
// ============================================================================

/// All investment options, in display order
pub struct InvestmentGuide {
    options: Vec<InvestmentOption>,
}

impl InvestmentGuide {
    /// Create a guide seeded with the default instruments
    pub fn new() -> Self {
        let mut guide = InvestmentGuide {
            options: Vec::new(),
        };
        guide.register_default_options();
        guide
    }

    fn register_default_options(&mut self) {
        self.register(InvestmentOption {
            name: "Mutual Funds".to_string(),
            hindi: "म्यूचुअल फंड".to_string(),
            risk: "Medium to High".to_string(),
            returns: "10-15% annually".to_string(),
            description: "Professional fund managers invest your money in diversified \
                          portfolios."
                .to_string(),
            benefits: vec![
                "Professional management".to_string(),
                "Diversification".to_string(),
                "SIP options".to_string(),
                "Tax benefits (ELSS)".to_string(),
            ],
        });

        self.register(InvestmentOption {
            name: "Public Provident Fund (PPF)".to_string(),
            hindi: "सार्वजनिक भविष्य निधि".to_string(),
            risk: "Very Low".to_string(),
            returns: "7-8% annually".to_string(),
            description: "15-year lock-in investment with tax benefits and guaranteed \
                          returns."
                .to_string(),
            benefits: vec![
                "Tax deduction".to_string(),
                "Tax-free returns".to_string(),
                "Government backing".to_string(),
                "Compounding benefits".to_string(),
            ],
        });

        self.register(InvestmentOption {
            name: "Fixed Deposits (FD)".to_string(),
            hindi: "सावधि जमा".to_string(),
            risk: "Very Low".to_string(),
            returns: "5-7% annually".to_string(),
            description: "Safe investment option offered by banks with guaranteed \
                          returns."
                .to_string(),
            benefits: vec![
                "Capital protection".to_string(),
                "Predictable returns".to_string(),
                "Easy to understand".to_string(),
                "Loan against FD".to_string(),
            ],
        });

        self.register(InvestmentOption {
            name: "National Pension System (NPS)".to_string(),
            hindi: "राष्ट्रीय पेंशन प्रणाली".to_string(),
            risk: "Low to Medium".to_string(),
            returns: "8-12% annually".to_string(),
            description: "Retirement-focused investment with tax benefits and \
                          long-term wealth creation."
                .to_string(),
            benefits: vec![
                "Tax benefits".to_string(),
                "Low cost".to_string(),
                "Retirement corpus".to_string(),
                "Partial withdrawal".to_string(),
            ],
        });
    }

    /// Add an option to the guide
    pub fn register(&mut self, option: InvestmentOption) {
        self.options.push(option);
    }

    /// All options in display order
    pub fn options(&self) -> &[InvestmentOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for InvestmentGuide {
    fn default() -> Self {
        Self::new()
    }
}

/// Short pointers shown under the instrument cards
pub fn beginner_pointers() -> &'static [&'static str] {
    &[
        "Start with small amounts (₹500-1000 monthly)",
        "Diversify across different asset classes",
        "Invest regularly through SIPs for rupee cost averaging",
        "Stay invested for long term (5+ years)",
        "Review and rebalance annually",
        "Don't panic during market volatility",
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_guide_has_four_options() {
        let guide = InvestmentGuide::new();
        assert_eq!(guide.len(), 4);
    }

    #[test]
    fn test_every_option_has_benefits() {
        let guide = InvestmentGuide::new();
        for option in guide.options() {
            assert!(
                !option.benefits.is_empty(),
                "no benefits listed for {}",
                option.name
            );
            assert!(!option.hindi.is_empty());
            assert!(!option.risk.is_empty());
        }
    }

    #[test]
    fn test_beginner_pointers_present() {
        assert_eq!(beginner_pointers().len(), 6);
    }
}
