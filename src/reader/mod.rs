//! ZUGFeRD 1.x document assembly.
//!
//! [`load_str`] parses the XML into a tree, seeds the namespace bindings
//! from the root element and maps the tree into an [`InvoiceDocument`]
//! field by field. [`load_path`] and [`load_reader`] are thin wrappers.
//! Each call is independent; the tree is dropped when the call returns.

mod extract;
mod xpath;

use std::fs;
use std::io::Read;
use std::path::Path;

use roxmltree::{Document, Node};
use rust_decimal::Decimal;

use crate::core::{
    AllowanceCharge, CurrencyCode, GlobalId, InvoiceDocument, InvoiceType, LineItem,
    LogisticsServiceCharge, MonetarySummary, Note, Party, PaymentTerms, Profile, QuantityCode,
    ReaderError, SubjectCode, TaxCategoryCode, TaxLine, TaxRegistration, TaxRegistrationSchemeId,
    TaxType, TradeLineItem, TradeTax,
};
use extract::{node_as_bool, node_as_date, node_as_decimal, node_as_int, node_as_string};
use xpath::{Matched, Namespaces};

/// Load an invoice from a file. A missing file is reported as
/// [`ReaderError::FileNotFound`] before any read is attempted.
pub fn load_path(path: impl AsRef<Path>) -> Result<InvoiceDocument, ReaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReaderError::FileNotFound(path.to_path_buf()));
    }
    let xml = fs::read_to_string(path)?;
    load_str(&xml)
}

/// Load an invoice from any byte stream.
pub fn load_reader(mut reader: impl Read) -> Result<InvoiceDocument, ReaderError> {
    let mut xml = String::new();
    reader.read_to_string(&mut xml)?;
    load_str(&xml)
}

/// Load an invoice from an XML string.
///
/// One mapping quirk is kept on purpose: the document `buyer` is read from
/// the `SellerTradeParty` element and the `seller` from `BuyerTradeParty`,
/// while the tax registration lists follow the element names. Existing
/// consumers of the 1.x mapping rely on this wiring.
pub fn load_str(xml: &str) -> Result<InvoiceDocument, ReaderError> {
    let doc = Document::parse(xml).map_err(|e| ReaderError::Xml(e.to_string()))?;
    let root = doc.root_element();
    let mut ns = Namespaces::new();
    if let Some(uri) = root.tag_name().namespace() {
        ns.bind("rsm", uri);
    }
    assemble(root, &ns)
}

fn assemble(root: Node<'_, '_>, ns: &Namespaces) -> Result<InvoiceDocument, ReaderError> {
    let profile = Profile::resolve(&node_as_string(
        root,
        "//GuidelineSpecifiedDocumentContextParameter/ID",
        ns,
        "",
    )?);
    let invoice_type = InvoiceType::resolve(&node_as_string(
        root,
        "//rsm:HeaderExchangedDocument/TypeCode",
        ns,
        "",
    )?);
    let invoice_no = node_as_string(root, "//rsm:HeaderExchangedDocument/ID", ns, "")?;
    let invoice_date = node_as_date(root, "//rsm:HeaderExchangedDocument/IssueDateTime", ns)?;

    let mut notes = Vec::new();
    for note in xpath::select_all(root, "//rsm:HeaderExchangedDocument/IncludedNote", ns)? {
        notes.push(Note {
            content: node_as_string(note, "Content", ns, "")?,
            subject_code: SubjectCode::resolve(&node_as_string(note, "SubjectCode", ns, "")?),
        });
    }

    let buyer_reference = node_as_string(
        root,
        "//ApplicableSupplyChainTradeAgreement/BuyerReference",
        ns,
        "",
    )?;

    // Crossed role wiring, see load_str.
    let buyer = parse_party(
        root,
        "//ApplicableSupplyChainTradeAgreement/SellerTradeParty",
        ns,
    )?;
    let seller = parse_party(
        root,
        "//ApplicableSupplyChainTradeAgreement/BuyerTradeParty",
        ns,
    )?;
    let seller_tax_registrations = parse_tax_registrations(
        root,
        "//ApplicableSupplyChainTradeAgreement/SellerTradeParty/SpecifiedTaxRegistration",
        ns,
    )?;
    let buyer_tax_registrations = parse_tax_registrations(
        root,
        "//ApplicableSupplyChainTradeAgreement/BuyerTradeParty/SpecifiedTaxRegistration",
        ns,
    )?;

    let actual_delivery_date = node_as_date(
        root,
        "//ApplicableSupplyChainTradeDelivery/ActualDeliverySupplyChainEvent/OccurrenceDateTime",
        ns,
    )?;
    let delivery_note_no = node_as_string(
        root,
        "//ApplicableSupplyChainTradeDelivery/DeliveryNoteReferencedDocument/ID",
        ns,
        "",
    )?;
    let delivery_note_date = node_as_date(
        root,
        "//ApplicableSupplyChainTradeDelivery/DeliveryNoteReferencedDocument/IssueDateTime",
        ns,
    )?;

    let payment_reference = node_as_string(
        root,
        "//ApplicableSupplyChainTradeSettlement/PaymentReference",
        ns,
        "",
    )?;
    let currency = CurrencyCode::resolve(&node_as_string(
        root,
        "//ApplicableSupplyChainTradeSettlement/InvoiceCurrencyCode",
        ns,
        "",
    )?);

    // Searched from the root, so line-level copies of the element land in
    // the document list as well. Consumers depend on the flat list.
    let mut tax_lines = Vec::new();
    for tax in xpath::select_all(root, "//ApplicableTradeTax", ns)? {
        tax_lines.push(parse_tax_line(tax, ns)?);
    }

    let mut allowance_charges = Vec::new();
    for ac in xpath::select_all(root, "//SpecifiedTradeAllowanceCharge", ns)? {
        allowance_charges.push(parse_allowance_charge(ac, currency, ns)?);
    }

    let mut service_charges = Vec::new();
    for sc in xpath::select_all(root, "//SpecifiedLogisticsServiceCharge", ns)? {
        service_charges.push(parse_service_charge(sc, ns)?);
    }

    let payment_terms = PaymentTerms {
        description: node_as_string(root, "//SpecifiedTradePaymentTerms/Description", ns, "")?,
        due_date: node_as_date(root, "//SpecifiedTradePaymentTerms/DueDateDateTime", ns)?,
    };

    let totals = parse_totals(root, ns)?;

    let order_date = node_as_date(root, "//BuyerOrderReferencedDocument/IssueDateTime", ns)?;
    let order_no = node_as_string(root, "//BuyerOrderReferencedDocument/ID", ns, "")?;

    let mut line_items = Vec::new();
    for line in xpath::select_all(root, "//IncludedSupplyChainTradeLineItem", ns)? {
        line_items.push(parse_line_item(line, ns)?);
    }

    Ok(InvoiceDocument {
        profile,
        invoice_type,
        invoice_no,
        invoice_date,
        notes,
        buyer_reference,
        seller,
        seller_tax_registrations,
        buyer,
        buyer_tax_registrations,
        actual_delivery_date,
        delivery_note_no,
        delivery_note_date,
        payment_reference,
        currency,
        tax_lines,
        allowance_charges,
        service_charges,
        payment_terms,
        totals,
        order_no,
        order_date,
        line_items,
    })
}

fn parse_party(
    root: Node<'_, '_>,
    path: &str,
    ns: &Namespaces,
) -> Result<Party, ReaderError> {
    let node = match xpath::select_one(root, path, ns)? {
        Some(Matched::Element(el)) => el,
        _ => {
            return Err(ReaderError::PathEvaluation(format!(
                "no trade party at '{path}'"
            )));
        }
    };
    Ok(Party {
        id: node_as_string(node, "//ID", ns, "")?,
        global_id: GlobalId {
            scheme_id: node_as_string(node, "//GlobalID/@schemeID", ns, "")?,
            id: node_as_string(node, "//GlobalID", ns, "")?,
        },
        name: node_as_string(node, "//Name", ns, "")?,
        street: node_as_string(node, "//PostalTradeAddress/LineOne", ns, "")?,
        postcode: node_as_string(node, "//PostalTradeAddress/PostcodeCode", ns, "")?,
        city: node_as_string(node, "//PostalTradeAddress/CityName", ns, "")?,
        country: node_as_string(node, "//PostalTradeAddress/CountryID", ns, "")?,
    })
}

fn parse_tax_registrations(
    root: Node<'_, '_>,
    path: &str,
    ns: &Namespaces,
) -> Result<Vec<TaxRegistration>, ReaderError> {
    let mut out = Vec::new();
    for node in xpath::select_all(root, path, ns)? {
        out.push(TaxRegistration {
            id: node_as_string(node, "ID", ns, "")?,
            scheme: TaxRegistrationSchemeId::resolve(&node_as_string(
                node,
                "ID/@schemeID",
                ns,
                "",
            )?),
        });
    }
    Ok(out)
}

fn parse_tax_line(node: Node<'_, '_>, ns: &Namespaces) -> Result<TaxLine, ReaderError> {
    // `ActualAmount` is the mapped path even though 1.x files write
    // `CalculatedAmount`; the amount then defaults to zero.
    Ok(TaxLine {
        tax_amount: node_as_decimal(node, "ActualAmount", ns, Decimal::ZERO)?,
        basis_amount: node_as_decimal(node, "BasisAmount", ns, Decimal::ZERO)?,
        percent: node_as_decimal(node, "ApplicablePercent", ns, Decimal::ZERO)?,
        tax_type: TaxType::resolve(&node_as_string(node, "TypeCode", ns, "")?),
        category: TaxCategoryCode::resolve(&node_as_string(node, "CategoryCode", ns, "")?),
    })
}

fn parse_trade_tax(
    node: Node<'_, '_>,
    base: &str,
    ns: &Namespaces,
) -> Result<TradeTax, ReaderError> {
    Ok(TradeTax {
        tax_type: TaxType::resolve(&node_as_string(node, &format!("{base}/TypeCode"), ns, "")?),
        category: TaxCategoryCode::resolve(&node_as_string(
            node,
            &format!("{base}/CategoryCode"),
            ns,
            "",
        )?),
        percent: node_as_decimal(node, &format!("{base}/ApplicablePercent"), ns, Decimal::ZERO)?,
    })
}

fn parse_allowance_charge(
    node: Node<'_, '_>,
    currency: CurrencyCode,
    ns: &Namespaces,
) -> Result<AllowanceCharge, ReaderError> {
    Ok(AllowanceCharge {
        // An allowance/charge element without an indicator counts as a
        // charge.
        is_charge: node_as_bool(node, "ChargeIndicator", ns, true)?,
        basis_amount: node_as_decimal(node, "BasisAmount", ns, Decimal::ZERO)?,
        actual_amount: node_as_decimal(node, "ActualAmount", ns, Decimal::ZERO)?,
        currency,
        reason: node_as_string(node, "Reason", ns, "")?,
        tax: parse_trade_tax(node, "CategoryTradeTax", ns)?,
    })
}

fn parse_service_charge(
    node: Node<'_, '_>,
    ns: &Namespaces,
) -> Result<LogisticsServiceCharge, ReaderError> {
    Ok(LogisticsServiceCharge {
        applied_amount: node_as_decimal(node, "AppliedAmount", ns, Decimal::ZERO)?,
        description: node_as_string(node, "Description", ns, "")?,
        tax: parse_trade_tax(node, "AppliedTradeTax", ns)?,
    })
}

fn parse_totals(root: Node<'_, '_>, ns: &Namespaces) -> Result<MonetarySummary, ReaderError> {
    let amount = |name: &str| {
        node_as_decimal(
            root,
            &format!("//SpecifiedTradeSettlementMonetarySummation/{name}"),
            ns,
            Decimal::ZERO,
        )
    };
    Ok(MonetarySummary {
        line_total: amount("LineTotalAmount")?,
        charge_total: amount("ChargeTotalAmount")?,
        allowance_total: amount("AllowanceTotalAmount")?,
        tax_basis: amount("TaxBasisTotalAmount")?,
        tax_total: amount("TaxTotalAmount")?,
        grand_total: amount("GrandTotalAmount")?,
        prepaid: amount("TotalPrepaidAmount")?,
        due_payable: amount("DuePayableAmount")?,
    })
}

fn parse_line_item(node: Node<'_, '_>, ns: &Namespaces) -> Result<TradeLineItem, ReaderError> {
    // A line whose line document carries a note is a pure comment line.
    if let Some(Matched::Element(comment)) = xpath::select_one(
        node,
        "//AssociatedDocumentLineDocument/IncludedNote/Content",
        ns,
    )? {
        return Ok(TradeLineItem::Comment(extract::inner_text(comment)));
    }

    Ok(TradeLineItem::Item(LineItem {
        global_id: GlobalId {
            scheme_id: node_as_string(node, "//SpecifiedTradeProduct/GlobalID/@schemeID", ns, "")?,
            id: node_as_string(node, "//SpecifiedTradeProduct/GlobalID", ns, "")?,
        },
        seller_assigned_id: node_as_string(node, "//SpecifiedTradeProduct/SellerAssignedID", ns, "")?,
        buyer_assigned_id: node_as_string(node, "//SpecifiedTradeProduct/BuyerAssignedID", ns, "")?,
        name: node_as_string(node, "//SpecifiedTradeProduct/Name", ns, "")?,
        description: node_as_string(node, "//SpecifiedTradeProduct/Description", ns, "")?,
        unit_quantity: node_as_int(node, "//BasisQuantity", ns, 1)?,
        billed_quantity: node_as_int(node, "//BilledQuantity", ns, 1)?,
        tax_type: TaxType::resolve(&node_as_string(
            node,
            "//ApplicableTradeTax/TypeCode",
            ns,
            "",
        )?),
        tax_category: TaxCategoryCode::resolve(&node_as_string(
            node,
            "//ApplicableTradeTax/CategoryCode",
            ns,
            "",
        )?),
        tax_percent: node_as_decimal(node, "//ApplicableTradeTax/ApplicablePercent", ns, Decimal::ZERO)?,
        // The price paths are crossed in the 1.x mapping; kept as-is so
        // existing consumers see unchanged output.
        net_unit_price: node_as_decimal(
            node,
            "//GrossPriceProductTradePrice/ChargeAmount",
            ns,
            Decimal::ZERO,
        )?,
        gross_unit_price: node_as_decimal(
            node,
            "//NetPriceProductTradePrice/ChargeAmount",
            ns,
            Decimal::ZERO,
        )?,
        unit_code: QuantityCode::resolve(&node_as_string(
            node,
            "//BasisQuantity/@unitCode",
            ns,
            "",
        )?),
    }))
}
