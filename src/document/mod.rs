//! # Fiscal Document Model
//!
//! The normalized, read-only view of one NFC-e that the section renderers
//! consume. A [`FiscalDocument`] is projected once from the XML tree and
//! never mutated afterwards.
//!
//! ## Loading
//!
//! ```
//! use danfce::document::FiscalDocument;
//!
//! let xml = r#"<NFe><infNFe Id="NFe35240111222333000181650010000001231000001234">
//!     <emit><xNome>PADARIA MODELO LTDA</xNome></emit>
//! </infNFe></NFe>"#;
//!
//! let doc = FiscalDocument::from_xml(xml)?;
//! assert_eq!(doc.emitter.legal_name, "PADARIA MODELO LTDA");
//! assert!(doc.protocol.is_none());
//! # Ok::<(), danfce::DanfceError>(())
//! ```
//!
//! Missing fields never fail: text degrades to empty and numbers to zero.
//! Only an unreadable/empty source ([`DanfceError::DocumentLoad`]) or
//! malformed XML ([`DanfceError::DocumentParse`]) is an error.

mod extract;
pub mod xml;

use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{DanfceError, Result};
use xml::XmlNode;

/// Street address, used for both the emitter and the consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

/// The issuing business (`emit`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Emitter {
    pub legal_name: String,
    pub trade_name: String,
    pub tax_id: String,
    pub state_registration: String,
    pub address: Address,
}

/// Document number, series and issue timestamp (`ide`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identification {
    pub number: String,
    pub series: String,
    pub issued_at: String,
}

/// One sold item (`det`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    /// 1-based position in the document.
    pub seq: usize,
    pub code: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub freight: Decimal,
    pub discount: Decimal,
    pub note: String,
}

impl Item {
    /// Net value: total price plus freight minus discount.
    pub fn net_value(&self) -> Decimal {
        self.total_price + self.freight - self.discount
    }

    /// Whether freight or discount lines are printed for this item.
    pub fn has_adjustments(&self) -> bool {
        self.freight > Decimal::ZERO || self.discount > Decimal::ZERO
    }
}

/// Document-level totals (`total/ICMSTot`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub product_total: Decimal,
    pub freight: Decimal,
    pub discount: Decimal,
    pub grand_total: Decimal,
    /// Approximate tax burden (`vTotTrib`), printed in the IBPT disclosure.
    pub estimated_tax: Decimal,
}

/// One payment (`detPag`). Change is not a payment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payment {
    pub method_code: String,
    pub amount: Decimal,
    pub card_brand: Option<String>,
}

/// Consumer tax id, CNPJ taking precedence over CPF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxId {
    Cnpj(String),
    Cpf(String),
}

/// Identified consumer (`dest`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Consumer {
    pub tax_id: Option<TaxId>,
    pub foreign_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<Address>,
}

/// Authorization protocol (`protNFe/infProt`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Protocol {
    pub number: String,
    pub received_at: String,
    /// Free-form message from the tax authority (`xMsg`).
    pub message: String,
}

/// Query URL, QR payload and access key (`infNFeSupl` + `infNFe@Id`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Supplement {
    pub query_url: String,
    pub qr_payload: String,
    pub access_key: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    pub is_homologation: bool,
    pub is_contingency: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionalInfo {
    pub free_text: String,
}

/// A complete NFC-e, ready to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FiscalDocument {
    pub emitter: Emitter,
    pub identification: Identification,
    pub environment: Environment,
    pub items: Vec<Item>,
    pub totals: Totals,
    pub payments: Vec<Payment>,
    /// Troco handed back to the consumer.
    pub change: Decimal,
    pub consumer: Option<Consumer>,
    pub protocol: Option<Protocol>,
    pub supplement: Supplement,
    pub additional_info: AdditionalInfo,
}

impl FiscalDocument {
    /// Read and parse an NFC-e XML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            DanfceError::DocumentLoad(format!("cannot read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded NFC-e source");
        Self::from_bytes(&bytes)
    }

    /// Parse raw XML bytes (UTF-8, optional BOM).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let xml = std::str::from_utf8(bytes)
            .map_err(|e| DanfceError::DocumentParse(format!("document is not UTF-8: {}", e)))?;
        Self::from_xml(xml)
    }

    /// Parse an XML string, with or without the `nfeProc` envelope.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let xml = xml.trim_start_matches('\u{feff}');
        if xml.trim().is_empty() {
            return Err(DanfceError::DocumentLoad("document is empty".to_string()));
        }
        let root = XmlNode::parse(xml)?;
        Ok(Self::from_tree(&root))
    }

    /// Project an already-parsed tree.
    pub fn from_tree(root: &XmlNode) -> Self {
        extract::project(root)
    }

    /// Number of items; always equals `items.len()`.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
