use chrono::NaiveDate;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Source of income, selecting the taxable-income rule to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum EmploymentType {
    Salaried,
    Freelancer,
    Business,
    Rental,
    Investor,
    Mixed,
}

impl EmploymentType {
    pub fn display(&self) -> &'static str {
        match self {
            EmploymentType::Salaried => "Salaried",
            EmploymentType::Freelancer => "Freelancer",
            EmploymentType::Business => "Business",
            EmploymentType::Rental => "Rental",
            EmploymentType::Investor => "Investor",
            EmploymentType::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Age group of the taxpayer. The New Tax Regime applies the same slabs
/// to every group, so this is profile metadata only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AgeGroup {
    #[default]
    #[serde(rename = "Below 60")]
    Below60,
    #[serde(rename = "60 and above")]
    Senior,
    #[serde(rename = "80 and above")]
    SuperSenior,
}

impl AgeGroup {
    pub fn display(&self) -> &'static str {
        match self {
            AgeGroup::Below60 => "Below 60",
            AgeGroup::Senior => "60 and above",
            AgeGroup::SuperSenior => "80 and above",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ResidentialStatus {
    #[default]
    Resident,
    #[serde(rename = "Non-Resident")]
    NonResident,
}

impl ResidentialStatus {
    pub fn display(&self) -> &'static str {
        match self {
            ResidentialStatus::Resident => "Resident",
            ResidentialStatus::NonResident => "Non-Resident",
        }
    }
}

/// Income figures for one fiscal year. Absent fields default to zero.
///
/// Several fields are collected but intentionally not used in the
/// computation (pf, rent_paid, employer_nps, expenses, tds_paid,
/// advance_tax_paid): the New Regime calculation here models neither
/// HRA exemption nor PF/NPS deductions, and business expenses are
/// assumed to already be reflected in net_profit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IncomeProfile {
    /// Basic salary component (Salaried)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub basic_salary: Decimal,
    /// House rent allowance received (Salaried)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub hra: Decimal,
    /// Provident fund contribution (Salaried)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub pf: Decimal,
    /// Bonus received (Salaried)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub bonus: Decimal,
    /// Rent paid by the taxpayer (Salaried)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub rent_paid: Decimal,
    /// Employer NPS contribution (Salaried)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub employer_nps: Decimal,
    /// Rent received from let-out property (Rental)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub rent_received: Decimal,
    /// Municipal tax paid on the property (Rental)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub municipal_tax: Decimal,
    /// Home loan interest paid (Rental)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub interest_paid: Decimal,
    /// Net profit from freelancing or business (Freelancer/Business)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub net_profit: Decimal,
    /// Business expenses (Freelancer/Business)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub expenses: Decimal,
    /// Short-term capital gains
    #[serde(default)]
    #[schemars(with = "f64")]
    pub stcg: Decimal,
    /// Long-term capital gains
    #[serde(default)]
    #[schemars(with = "f64")]
    pub ltcg: Decimal,
    /// Dividend income (Investor)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub dividends: Decimal,
    /// Interest income (Investor)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub interest_income: Decimal,
    /// Tax already deducted at source
    #[serde(default)]
    #[schemars(with = "f64")]
    pub tds_paid: Decimal,
    /// Advance tax already paid
    #[serde(default)]
    #[schemars(with = "f64")]
    pub advance_tax_paid: Decimal,
}

impl IncomeProfile {
    /// Names of fields holding a negative amount. The engine contract
    /// requires non-negative inputs, so callers reject these up front.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("basic_salary", self.basic_salary),
            ("hra", self.hra),
            ("pf", self.pf),
            ("bonus", self.bonus),
            ("rent_paid", self.rent_paid),
            ("employer_nps", self.employer_nps),
            ("rent_received", self.rent_received),
            ("municipal_tax", self.municipal_tax),
            ("interest_paid", self.interest_paid),
            ("net_profit", self.net_profit),
            ("expenses", self.expenses),
            ("stcg", self.stcg),
            ("ltcg", self.ltcg),
            ("dividends", self.dividends),
            ("interest_income", self.interest_income),
            ("tds_paid", self.tds_paid),
            ("advance_tax_paid", self.advance_tax_paid),
        ];
        fields
            .into_iter()
            .filter(|(_, amount)| amount.is_sign_negative() && !amount.is_zero())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Unified JSON input format
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileInput {
    /// Fiscal year key, e.g. "FY 2025-26 / AY 2026-27".
    /// When absent, the year is resolved from `as_of`.
    #[serde(default)]
    pub fiscal_year: Option<String>,
    /// Date the profile applies to (YYYY-MM-DD), used to resolve the
    /// fiscal year when no explicit key is given
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub age_group: AgeGroup,
    #[serde(default)]
    pub residential_status: ResidentialStatus,
    #[serde(default)]
    pub income: IncomeProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_minimal_profile() {
        let json = r#"{
            "fiscal_year": "FY 2025-26 / AY 2026-27",
            "employment_type": "Salaried"
        }"#;

        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            input.fiscal_year.as_deref(),
            Some("FY 2025-26 / AY 2026-27")
        );
        assert_eq!(input.as_of, None);
        assert_eq!(input.employment_type, EmploymentType::Salaried);
        assert_eq!(input.age_group, AgeGroup::Below60);
        assert_eq!(input.residential_status, ResidentialStatus::Resident);
        assert_eq!(input.income, IncomeProfile::default());
    }

    #[test]
    fn parse_profile_with_as_of_date() {
        let json = r#"{
            "as_of": "2026-01-15",
            "employment_type": "Rental"
        }"#;

        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.fiscal_year, None);
        assert_eq!(
            input.as_of,
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
    }

    #[test]
    fn parse_full_profile() {
        let json = r#"{
            "fiscal_year": "FY 2025-26 / AY 2026-27",
            "employment_type": "Investor",
            "age_group": "60 and above",
            "residential_status": "Non-Resident",
            "income": {
                "dividends": 2000000,
                "interest_income": 50000,
                "stcg": 100000,
                "ltcg": 200000
            }
        }"#;

        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.employment_type, EmploymentType::Investor);
        assert_eq!(input.age_group, AgeGroup::Senior);
        assert_eq!(input.residential_status, ResidentialStatus::NonResident);
        assert_eq!(input.income.dividends, dec!(2_000_000));
        assert_eq!(input.income.ltcg, dec!(200_000));
        // Absent fields default to zero
        assert_eq!(input.income.basic_salary, Decimal::ZERO);
    }

    #[test]
    fn negative_fields_detected() {
        let income = IncomeProfile {
            basic_salary: dec!(500_000),
            bonus: dec!(-1),
            ltcg: dec!(-20_000),
            ..Default::default()
        };
        assert_eq!(income.negative_fields(), vec!["bonus", "ltcg"]);
    }

    #[test]
    fn zero_profile_has_no_negative_fields() {
        assert!(IncomeProfile::default().negative_fields().is_empty());
    }

    #[test]
    fn unknown_employment_type_rejected() {
        let json = r#"{
            "fiscal_year": "FY 2025-26 / AY 2026-27",
            "employment_type": "Consultant"
        }"#;
        assert!(serde_json::from_str::<ProfileInput>(json).is_err());
    }
}
