use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codes::*;

/// A fully mapped ZUGFeRD 1.x invoice document.
///
/// Collections preserve the order of the source document. Every string
/// field defaults to the empty string and every amount to zero when the
/// source element is absent or unparsable; the date fields carry no
/// default — a document without them does not load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// ZUGFeRD conformance profile from the guideline parameter.
    pub profile: Profile,
    /// UNTDID 1001 document type.
    pub invoice_type: InvoiceType,
    /// Invoice number.
    pub invoice_no: String,
    /// Issue date of the invoice.
    pub invoice_date: NaiveDate,
    /// Header notes with their subject qualifiers, in document order.
    pub notes: Vec<Note>,
    /// Buyer reference from the trade agreement.
    pub buyer_reference: String,
    /// Seller-role party (see the role-wiring note on [`crate::reader::load_str`]).
    pub seller: Party,
    /// Tax registrations read from the `SellerTradeParty` element.
    pub seller_tax_registrations: Vec<TaxRegistration>,
    /// Buyer-role party.
    pub buyer: Party,
    /// Tax registrations read from the `BuyerTradeParty` element.
    pub buyer_tax_registrations: Vec<TaxRegistration>,
    /// Actual delivery date.
    pub actual_delivery_date: NaiveDate,
    /// Delivery note number.
    pub delivery_note_no: String,
    /// Delivery note issue date.
    pub delivery_note_date: NaiveDate,
    /// Payment reference (Verwendungszweck).
    pub payment_reference: String,
    /// Invoice currency; also inherited by every [`AllowanceCharge`].
    pub currency: CurrencyCode,
    /// Tax breakdown lines, collected across the whole document tree.
    pub tax_lines: Vec<TaxLine>,
    /// Document allowances and charges.
    pub allowance_charges: Vec<AllowanceCharge>,
    /// Logistics service charges.
    pub service_charges: Vec<LogisticsServiceCharge>,
    /// Payment terms (at most one).
    pub payment_terms: PaymentTerms,
    /// The eight monetary totals of the settlement summation.
    pub totals: MonetarySummary,
    /// Purchase order number.
    pub order_no: String,
    /// Purchase order date.
    pub order_date: NaiveDate,
    /// Trade line items in document order.
    pub line_items: Vec<TradeLineItem>,
}

/// A header note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Free-text content.
    pub content: String,
    /// UNTDID 4451 subject qualifier.
    pub subject_code: SubjectCode,
}

/// A trade party (seller or buyer role; role assignment happens in the
/// document assembler, not here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Party identifier assigned by the counterparty.
    pub id: String,
    /// Global identifier (e.g. GLN) with its scheme.
    pub global_id: GlobalId,
    /// Party name.
    pub name: String,
    /// Street and house number.
    pub street: String,
    /// Postal code.
    pub postcode: String,
    /// City.
    pub city: String,
    /// ISO 3166-1 country code.
    pub country: String,
}

/// A scheme-qualified global identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalId {
    /// Scheme identifier (e.g. "0088" for GLN).
    pub scheme_id: String,
    /// Identifier value.
    pub id: String,
}

/// A party tax registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRegistration {
    /// Registration identifier.
    pub id: String,
    /// Registration scheme ("VA" or "FC").
    pub scheme: TaxRegistrationSchemeId,
}

/// One applicable-trade-tax breakdown line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Tax amount.
    pub tax_amount: Decimal,
    /// Basis amount the tax applies to.
    pub basis_amount: Decimal,
    /// Applicable percentage.
    pub percent: Decimal,
    /// UNTDID 5153 tax type.
    pub tax_type: TaxType,
    /// UNTDID 5305 tax category.
    pub category: TaxCategoryCode,
}

/// Embedded tax sub-record of allowances, charges and service charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeTax {
    /// UNTDID 5153 tax type.
    pub tax_type: TaxType,
    /// UNTDID 5305 tax category.
    pub category: TaxCategoryCode,
    /// Applicable percentage.
    pub percent: Decimal,
}

/// A document-level allowance (deduction) or charge (addition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceCharge {
    /// True for a charge, false for an allowance.
    pub is_charge: bool,
    /// Basis amount.
    pub basis_amount: Decimal,
    /// Actual amount.
    pub actual_amount: Decimal,
    /// Currency, inherited from the invoice header.
    pub currency: CurrencyCode,
    /// Reason text.
    pub reason: String,
    /// Embedded tax sub-record.
    pub tax: TradeTax,
}

/// A logistics service charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsServiceCharge {
    /// Applied amount.
    pub applied_amount: Decimal,
    /// Service description.
    pub description: String,
    /// Embedded tax sub-record.
    pub tax: TradeTax,
}

/// Payment terms (description plus mandatory due date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTerms {
    /// Free-text description.
    pub description: String,
    /// Payment due date.
    pub due_date: NaiveDate,
}

/// The eight totals of the settlement monetary summation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetarySummary {
    /// Sum of line amounts.
    pub line_total: Decimal,
    /// Sum of charges.
    pub charge_total: Decimal,
    /// Sum of allowances.
    pub allowance_total: Decimal,
    /// Tax basis total.
    pub tax_basis: Decimal,
    /// Tax total.
    pub tax_total: Decimal,
    /// Grand total.
    pub grand_total: Decimal,
    /// Total prepaid amount.
    pub prepaid: Decimal,
    /// Amount due for payment.
    pub due_payable: Decimal,
}

/// One billed line of the invoice.
///
/// A line whose associated line document carries a note is a pure comment
/// line; the variant makes "a comment subsumes every other field" a
/// structural guarantee instead of a convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TradeLineItem {
    /// Comment-only line.
    Comment(String),
    /// Fully populated product/service line.
    Item(LineItem),
}

/// The full field set of a non-comment trade line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Global product identifier with scheme.
    pub global_id: GlobalId,
    /// Seller-assigned article identifier.
    pub seller_assigned_id: String,
    /// Buyer-assigned article identifier.
    pub buyer_assigned_id: String,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Basis quantity; defaults to 1 when missing or unparsable.
    pub unit_quantity: i32,
    /// Billed quantity; defaults to 1 when missing or unparsable.
    pub billed_quantity: i32,
    /// UNTDID 5153 tax type of the line.
    pub tax_type: TaxType,
    /// UNTDID 5305 tax category of the line.
    pub tax_category: TaxCategoryCode,
    /// Applicable tax percentage.
    pub tax_percent: Decimal,
    /// Net unit price (read from the gross-price element — legacy wiring,
    /// see the reader notes).
    pub net_unit_price: Decimal,
    /// Gross unit price (read from the net-price element — legacy wiring).
    pub gross_unit_price: Decimal,
    /// UNECE Rec 20 unit of the basis quantity.
    pub unit_code: QuantityCode,
}
