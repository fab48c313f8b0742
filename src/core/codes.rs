//! UNTDID / ZUGFeRD 1.x code families.
//!
//! Each family resolves a raw short-code string with `resolve`, which never
//! fails: unknown, empty or unrecognized input yields the family's explicit
//! `Unspecified` sentinel. The reverse `code` accessors return the canonical
//! short code (`Unspecified` maps to an empty or zero value).

use serde::{Deserialize, Serialize};

/// ZUGFeRD 1.x conformance profile, declared in the guideline parameter of
/// the exchanged document context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    /// Guideline URN missing or not a known ZUGFeRD 1.x profile.
    Unspecified,
    /// Basic profile.
    Basic,
    /// Comfort profile.
    Comfort,
    /// Extended profile.
    Extended,
}

impl Profile {
    /// Resolve a guideline URN. Both the `invoice:1.0` / `invoice:rc` and
    /// the `CrossIndustryDocument:invoice:1p0` spellings occur in the wild.
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "urn:ferd:invoice:1.0:basic"
            | "urn:ferd:invoice:rc:basic"
            | "urn:ferd:CrossIndustryDocument:invoice:1p0:basic" => Self::Basic,
            "urn:ferd:invoice:1.0:comfort"
            | "urn:ferd:invoice:rc:comfort"
            | "urn:ferd:CrossIndustryDocument:invoice:1p0:comfort" => Self::Comfort,
            "urn:ferd:invoice:1.0:extended"
            | "urn:ferd:invoice:rc:extended"
            | "urn:ferd:CrossIndustryDocument:invoice:1p0:extended" => Self::Extended,
            _ => Self::Unspecified,
        }
    }

    /// Canonical guideline URN.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Basic => "urn:ferd:CrossIndustryDocument:invoice:1p0:basic",
            Self::Comfort => "urn:ferd:CrossIndustryDocument:invoice:1p0:comfort",
            Self::Extended => "urn:ferd:CrossIndustryDocument:invoice:1p0:extended",
        }
    }
}

/// UNTDID 1001 — document type codes (subset used by ZUGFeRD 1.x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceType {
    /// Type code missing or unknown.
    Unspecified,
    /// 326 — Partial invoice.
    PartialInvoice,
    /// 380 — Commercial invoice.
    Invoice,
    /// 381 — Credit note.
    CreditNote,
    /// 383 — Debit note.
    DebitNote,
    /// 384 — Corrected invoice.
    Correction,
    /// 386 — Prepayment invoice.
    PrepaymentInvoice,
    /// 389 — Self-billed invoice.
    SelfBilledInvoice,
}

impl InvoiceType {
    /// Resolve a UNTDID 1001 numeric code string.
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "326" => Self::PartialInvoice,
            "380" => Self::Invoice,
            "381" => Self::CreditNote,
            "383" => Self::DebitNote,
            "384" => Self::Correction,
            "386" => Self::PrepaymentInvoice,
            "389" => Self::SelfBilledInvoice,
            _ => Self::Unspecified,
        }
    }

    /// UNTDID 1001 numeric code (`0` for `Unspecified`).
    pub fn code(&self) -> u16 {
        match self {
            Self::Unspecified => 0,
            Self::PartialInvoice => 326,
            Self::Invoice => 380,
            Self::CreditNote => 381,
            Self::DebitNote => 383,
            Self::Correction => 384,
            Self::PrepaymentInvoice => 386,
            Self::SelfBilledInvoice => 389,
        }
    }
}

/// ISO 4217 currency codes (subset relevant to European invoicing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyCode {
    /// Currency code missing or unknown.
    Unspecified,
    Eur,
    Usd,
    Gbp,
    Chf,
    Sek,
    Nok,
    Dkk,
    Pln,
    Czk,
    Huf,
    Jpy,
}

impl CurrencyCode {
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "EUR" => Self::Eur,
            "USD" => Self::Usd,
            "GBP" => Self::Gbp,
            "CHF" => Self::Chf,
            "SEK" => Self::Sek,
            "NOK" => Self::Nok,
            "DKK" => Self::Dkk,
            "PLN" => Self::Pln,
            "CZK" => Self::Czk,
            "HUF" => Self::Huf,
            "JPY" => Self::Jpy,
            _ => Self::Unspecified,
        }
    }

    /// ISO 4217 alpha code (empty for `Unspecified`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
            Self::Sek => "SEK",
            Self::Nok => "NOK",
            Self::Dkk => "DKK",
            Self::Pln => "PLN",
            Self::Czk => "CZK",
            Self::Huf => "HUF",
            Self::Jpy => "JPY",
        }
    }
}

/// UNTDID 5153 — tax type codes (subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxType {
    /// Type code missing or unknown.
    Unspecified,
    /// VAT — Value added tax.
    Vat,
    /// EXC — Excise duty.
    ExciseDuty,
    /// ENV — Environmental tax.
    EnvironmentalTax,
    /// GST — Goods and services tax.
    Gst,
    /// INS — Insurance tax.
    InsuranceTax,
    /// OTH — Other taxes.
    Other,
}

impl TaxType {
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "VAT" => Self::Vat,
            "EXC" => Self::ExciseDuty,
            "ENV" => Self::EnvironmentalTax,
            "GST" => Self::Gst,
            "INS" => Self::InsuranceTax,
            "OTH" => Self::Other,
            _ => Self::Unspecified,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Vat => "VAT",
            Self::ExciseDuty => "EXC",
            Self::EnvironmentalTax => "ENV",
            Self::Gst => "GST",
            Self::InsuranceTax => "INS",
            Self::Other => "OTH",
        }
    }
}

/// UNTDID 5305 — tax category codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxCategoryCode {
    /// Category code missing or unknown.
    Unspecified,
    /// S — Standard rate.
    StandardRate,
    /// Z — Zero rated.
    ZeroRated,
    /// E — Exempt from tax.
    Exempt,
    /// AE — Reverse charge.
    ReverseCharge,
    /// K — Intra-community supply.
    IntraCommunitySupply,
    /// G — Export outside the EU.
    Export,
    /// O — Not subject to VAT.
    NotSubjectToVat,
}

impl TaxCategoryCode {
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "S" => Self::StandardRate,
            "Z" => Self::ZeroRated,
            "E" => Self::Exempt,
            "AE" => Self::ReverseCharge,
            "K" => Self::IntraCommunitySupply,
            "G" => Self::Export,
            "O" => Self::NotSubjectToVat,
            _ => Self::Unspecified,
        }
    }

    /// UNTDID 5305 code letter (empty for `Unspecified`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::StandardRate => "S",
            Self::ZeroRated => "Z",
            Self::Exempt => "E",
            Self::ReverseCharge => "AE",
            Self::IntraCommunitySupply => "K",
            Self::Export => "G",
            Self::NotSubjectToVat => "O",
        }
    }
}

/// UN/CEFACT Recommendation 20 unit codes (subset common in 1.x invoices,
/// plus the legacy `PCE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityCode {
    /// Unit code missing or unknown.
    Unspecified,
    /// C62 — One (piece/unit).
    Piece,
    /// PCE — Piece (pre-Rec-20 legacy code, still emitted by 1.x writers).
    PieceLegacy,
    /// DAY — Day.
    Day,
    /// HUR — Hour.
    Hour,
    /// MIN — Minute.
    Minute,
    /// KGM — Kilogram.
    Kilogram,
    /// TNE — Tonne.
    Tonne,
    /// LTR — Litre.
    Litre,
    /// MTR — Metre.
    Metre,
    /// MTK — Square metre.
    SquareMetre,
    /// MTQ — Cubic metre.
    CubicMetre,
    /// NAR — Number of articles.
    NumberOfArticles,
    /// SET — Set.
    Set,
    /// WEE — Week.
    Week,
    /// MON — Month.
    Month,
    /// ANN — Year.
    Year,
}

impl QuantityCode {
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "C62" => Self::Piece,
            "PCE" => Self::PieceLegacy,
            "DAY" => Self::Day,
            "HUR" => Self::Hour,
            "MIN" => Self::Minute,
            "KGM" => Self::Kilogram,
            "TNE" => Self::Tonne,
            "LTR" => Self::Litre,
            "MTR" => Self::Metre,
            "MTK" => Self::SquareMetre,
            "MTQ" => Self::CubicMetre,
            "NAR" => Self::NumberOfArticles,
            "SET" => Self::Set,
            "WEE" => Self::Week,
            "MON" => Self::Month,
            "ANN" => Self::Year,
            _ => Self::Unspecified,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Piece => "C62",
            Self::PieceLegacy => "PCE",
            Self::Day => "DAY",
            Self::Hour => "HUR",
            Self::Minute => "MIN",
            Self::Kilogram => "KGM",
            Self::Tonne => "TNE",
            Self::Litre => "LTR",
            Self::Metre => "MTR",
            Self::SquareMetre => "MTK",
            Self::CubicMetre => "MTQ",
            Self::NumberOfArticles => "NAR",
            Self::Set => "SET",
            Self::Week => "WEE",
            Self::Month => "MON",
            Self::Year => "ANN",
        }
    }
}

/// UNTDID 4451 — text subject qualifiers for document notes (subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectCode {
    /// Subject code missing or unknown.
    Unspecified,
    /// AAI — General information.
    GeneralInformation,
    /// AAJ — Additional conditions of sale.
    AdditionalSaleConditions,
    /// AAK — Price conditions.
    PriceConditions,
    /// ACB — Additional information.
    AdditionalInformation,
    /// PMT — Payment information.
    PaymentInformation,
    /// PRF — Pricing information.
    PricingInformation,
    /// REG — Regulatory information.
    RegulatoryInformation,
    /// SUR — Supplier remarks.
    SupplierRemarks,
    /// TXD — Tax declaration.
    TaxDeclaration,
}

impl SubjectCode {
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "AAI" => Self::GeneralInformation,
            "AAJ" => Self::AdditionalSaleConditions,
            "AAK" => Self::PriceConditions,
            "ACB" => Self::AdditionalInformation,
            "PMT" => Self::PaymentInformation,
            "PRF" => Self::PricingInformation,
            "REG" => Self::RegulatoryInformation,
            "SUR" => Self::SupplierRemarks,
            "TXD" => Self::TaxDeclaration,
            _ => Self::Unspecified,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::GeneralInformation => "AAI",
            Self::AdditionalSaleConditions => "AAJ",
            Self::PriceConditions => "AAK",
            Self::AdditionalInformation => "ACB",
            Self::PaymentInformation => "PMT",
            Self::PricingInformation => "PRF",
            Self::RegulatoryInformation => "REG",
            Self::SupplierRemarks => "SUR",
            Self::TaxDeclaration => "TXD",
        }
    }
}

/// Tax registration scheme identifiers used in CII `SpecifiedTaxRegistration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegistrationSchemeId {
    /// Scheme missing or unknown.
    Unspecified,
    /// VA — VAT registration number (USt-IdNr.).
    Va,
    /// FC — Tax registration number (Steuernummer).
    Fc,
}

impl TaxRegistrationSchemeId {
    pub fn resolve(raw: &str) -> Self {
        match raw.trim() {
            "VA" => Self::Va,
            "FC" => Self::Fc,
            _ => Self::Unspecified,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Va => "VA",
            Self::Fc => "FC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_urns() {
        assert_eq!(Profile::resolve("urn:ferd:invoice:1.0:basic"), Profile::Basic);
        assert_eq!(
            Profile::resolve("urn:ferd:CrossIndustryDocument:invoice:1p0:comfort"),
            Profile::Comfort
        );
        assert_eq!(Profile::resolve("urn:ferd:invoice:rc:extended"), Profile::Extended);
        assert_eq!(Profile::resolve("urn:something:else"), Profile::Unspecified);
        assert_eq!(Profile::resolve(""), Profile::Unspecified);
    }

    #[test]
    fn invoice_type_codes() {
        assert_eq!(InvoiceType::resolve("380"), InvoiceType::Invoice);
        assert_eq!(InvoiceType::resolve(" 381 "), InvoiceType::CreditNote);
        assert_eq!(InvoiceType::resolve("999"), InvoiceType::Unspecified);
        assert_eq!(InvoiceType::resolve("abc"), InvoiceType::Unspecified);
        assert_eq!(InvoiceType::Invoice.code(), 380);
        assert_eq!(InvoiceType::Unspecified.code(), 0);
    }

    #[test]
    fn unknown_input_never_fails() {
        assert_eq!(CurrencyCode::resolve("XXX"), CurrencyCode::Unspecified);
        assert_eq!(TaxType::resolve(""), TaxType::Unspecified);
        assert_eq!(TaxCategoryCode::resolve("Q"), TaxCategoryCode::Unspecified);
        assert_eq!(QuantityCode::resolve("BANANA"), QuantityCode::Unspecified);
        assert_eq!(SubjectCode::resolve("ZZZ"), SubjectCode::Unspecified);
        assert_eq!(TaxRegistrationSchemeId::resolve("XY"), TaxRegistrationSchemeId::Unspecified);
    }

    #[test]
    fn resolve_trims_input() {
        assert_eq!(CurrencyCode::resolve(" EUR "), CurrencyCode::Eur);
        assert_eq!(TaxCategoryCode::resolve("S\n"), TaxCategoryCode::StandardRate);
        assert_eq!(SubjectCode::resolve(" AAI"), SubjectCode::GeneralInformation);
    }

    #[test]
    fn code_round_trips() {
        for c in [TaxCategoryCode::StandardRate, TaxCategoryCode::ReverseCharge] {
            assert_eq!(TaxCategoryCode::resolve(c.code()), c);
        }
        assert_eq!(QuantityCode::resolve(QuantityCode::Hour.code()), QuantityCode::Hour);
        assert_eq!(TaxType::resolve(TaxType::Vat.code()), TaxType::Vat);
    }
}
