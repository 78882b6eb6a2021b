// 🧮 EMI Calculator - equal-installment loan amortization
// Pure computation: no I/O, recomputed from scratch on every input change.

use serde::{Deserialize, Serialize};

// ============================================================================
// LOAN INPUT
// ============================================================================

/// User-editable loan parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanInput {
    /// Borrowed amount in rupees
    pub principal: f64,

    /// Annual interest rate in percent (8.5 means 8.5% p.a.)
    pub annual_rate: f64,

    /// Repayment duration in whole years
    pub tenure_years: u32,
}

impl Default for LoanInput {
    fn default() -> Self {
        // Home-loan starting point shown on first open
        LoanInput {
            principal: 500_000.0,
            annual_rate: 8.5,
            tenure_years: 20,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type EmiResult = Result<LoanResult, Vec<ValidationError>>;

impl LoanInput {
    /// Reject inputs that would produce NaN or nonsense derived values
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !self.principal.is_finite() || self.principal <= 0.0 {
            errors.push(ValidationError {
                field: "principal".to_string(),
                message: "must be a positive amount".to_string(),
            });
        }

        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            errors.push(ValidationError {
                field: "annual_rate".to_string(),
                message: "must be zero or a positive percentage".to_string(),
            });
        }

        if self.tenure_years == 0 {
            errors.push(ValidationError {
                field: "tenure_years".to_string(),
                message: "must be at least 1 year".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// LOAN RESULT
// ============================================================================

/// Derived repayment figures, a pure function of LoanInput
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanResult {
    /// Fixed monthly installment (EMI)
    pub monthly_installment: f64,

    /// Installment times the number of months
    pub total_payable: f64,

    /// Total payable minus the principal
    pub total_interest: f64,
}

/// Compute the equated monthly installment for a loan.
///
/// Standard amortization formula with a monthly periodic rate:
/// `r = annual_rate / 1200`, `n = tenure_years * 12`,
/// `emi = P * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// A zero rate is a real case, not a skip: it degrades to straight-line
/// repayment, `emi = P / n` with zero interest.
pub fn compute(input: &LoanInput) -> EmiResult {
    input.validate()?;

    let monthly_rate = input.annual_rate / 1200.0;
    let months = f64::from(input.tenure_years * 12);

    let monthly_installment = if monthly_rate > 0.0 {
        let growth = (1.0 + monthly_rate).powf(months);
        input.principal * monthly_rate * growth / (growth - 1.0)
    } else {
        input.principal / months
    };

    let total_payable = monthly_installment * months;

    Ok(LoanResult {
        monthly_installment,
        total_payable,
        total_interest: total_payable - input.principal,
    })
}

// ============================================================================
// CURRENCY FORMATTING
// ============================================================================

/// Format a rupee amount with Indian digit grouping and no paise.
///
/// Indian grouping places the first separator after three digits and every two
/// digits after that: 500000 -> "₹5,00,000", 12345678 -> "₹1,23,45,678".
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative() && rounded != 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<String> = Vec::new();
        let head_bytes = head.as_bytes();
        let mut end = head_bytes.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            parts.push(head[start..end].to_string());
            end = start;
        }
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_reference_home_loan() {
        // 5 lakh at 8.5% over 20 years, the amortization-table reference case
        let result = compute(&LoanInput::default()).unwrap();

        assert!(
            (result.monthly_installment - 4339.0).abs() < 2.0,
            "expected ~4339/month, got {}",
            result.monthly_installment
        );
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn test_totals_are_consistent() {
        let input = LoanInput {
            principal: 1_200_000.0,
            annual_rate: 9.25,
            tenure_years: 15,
        };
        let result = compute(&input).unwrap();
        let months = f64::from(input.tenure_years * 12);

        assert!((result.monthly_installment * months - result.total_payable).abs() < TOLERANCE);
        assert!((result.total_payable - input.principal - result.total_interest).abs() < TOLERANCE);
    }

    #[test]
    fn test_longer_tenure_lowers_installment() {
        let base = LoanInput {
            principal: 800_000.0,
            annual_rate: 10.0,
            tenure_years: 10,
        };
        let longer = LoanInput {
            tenure_years: 20,
            ..base
        };

        let short = compute(&base).unwrap();
        let long = compute(&longer).unwrap();

        assert!(long.monthly_installment < short.monthly_installment);
        // Stretching the loan costs more interest overall
        assert!(long.total_interest > short.total_interest);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let input = LoanInput {
            principal: 120_000.0,
            annual_rate: 0.0,
            tenure_years: 1,
        };
        let result = compute(&input).unwrap();

        assert!((result.monthly_installment - 10_000.0).abs() < TOLERANCE);
        assert!(result.total_interest.abs() < TOLERANCE);
        assert!((result.total_payable - 120_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_rejects_bad_principal() {
        let input = LoanInput {
            principal: -5000.0,
            ..LoanInput::default()
        };

        let errors = compute(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "principal");
    }

    #[test]
    fn test_rejects_nan_and_zero_tenure_together() {
        let input = LoanInput {
            principal: f64::NAN,
            annual_rate: -1.0,
            tenure_years: 0,
        };

        let errors = input.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["principal", "annual_rate", "tenure_years"]);
    }

    #[test]
    fn test_inr_formatting() {
        assert_eq!(format_inr(100.0), "₹100");
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(4_339.4), "₹4,339");
        assert_eq!(format_inr(500_000.0), "₹5,00,000");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_inr(-2_500.0), "-₹2,500");
    }
}
